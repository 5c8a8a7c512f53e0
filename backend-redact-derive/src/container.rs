//! Container-level attribute parsing for `#[derive(RedactedConfig)]`.
//!
//! This module handles attributes on the struct itself, not on fields.

use syn::{Attribute, LitStr, Member, Meta, Result};

/// Options parsed from container-level `#[redact(...)]` attributes.
#[derive(Clone, Debug, Default)]
pub(crate) struct ContainerOptions {
    /// If true, skip generating the `Display` impl.
    pub(crate) skip_display: bool,
    /// If true, skip generating the `Debug` impl.
    pub(crate) skip_debug: bool,
    /// Member path from `self` to the record's flag set.
    pub(crate) flags: Option<Vec<Member>>,
    /// Type label override for the detail form.
    pub(crate) name: Option<LitStr>,
}

/// Parses container-level `#[redact(...)]` attributes.
pub(crate) fn parse_container_options(attrs: &[Attribute]) -> Result<ContainerOptions> {
    let mut options = ContainerOptions::default();

    for attr in attrs {
        if !attr.path().is_ident("redact") {
            continue;
        }

        match &attr.meta {
            Meta::Path(path) => {
                return Err(syn::Error::new_spanned(
                    path,
                    "bare #[redact] has no meaning on a struct; classify its fields instead",
                ));
            }
            Meta::List(list) => {
                list.parse_nested_meta(|meta| {
                    if meta.path.is_ident("skip_display") {
                        options.skip_display = true;
                        Ok(())
                    } else if meta.path.is_ident("skip_debug") {
                        options.skip_debug = true;
                        Ok(())
                    } else if meta.path.is_ident("flags") {
                        if options.flags.is_some() {
                            return Err(meta.error("duplicate `flags` option"));
                        }
                        let lit: LitStr = meta.value()?.parse()?;
                        options.flags = Some(parse_member_path(&lit)?);
                        Ok(())
                    } else if meta.path.is_ident("name") {
                        if options.name.is_some() {
                            return Err(meta.error("duplicate `name` option"));
                        }
                        let lit: LitStr = meta.value()?.parse()?;
                        if lit.value().is_empty() {
                            return Err(syn::Error::new(lit.span(), "`name` must not be empty"));
                        }
                        options.name = Some(lit);
                        Ok(())
                    } else {
                        Err(meta.error(format!(
                            "unknown container option `{}`; expected `flags`, `name`, \
                             `skip_display` or `skip_debug`",
                            meta.path
                                .get_ident()
                                .map_or_else(|| "?".to_string(), ToString::to_string)
                        )))
                    }
                })?;
            }
            Meta::NameValue(nv) => {
                return Err(syn::Error::new_spanned(
                    nv,
                    "name-value syntax is not supported for container-level #[redact]",
                ));
            }
        }
    }

    Ok(options)
}

/// Splits `"a.b.c"` into members, each spanned at the literal.
fn parse_member_path(lit: &LitStr) -> Result<Vec<Member>> {
    let value = lit.value();
    value
        .split('.')
        .map(|segment| {
            let mut member: Member = syn::parse_str(segment).map_err(|_| {
                syn::Error::new(
                    lit.span(),
                    format!("`flags` must be a dotted field path, found segment `{segment}`"),
                )
            })?;
            if let Member::Named(ident) = &mut member {
                ident.set_span(lit.span());
            }
            Ok(member)
        })
        .collect()
}
