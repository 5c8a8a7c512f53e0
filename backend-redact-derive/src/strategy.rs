//! Parsing of `#[redact(...)]` field attributes.
//!
//! This module maps attribute syntax to a field class and rendering options,
//! and produces structured errors for invalid forms.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{meta::ParseNestedMeta, spanned::Spanned, Attribute, LitStr, Meta, Result, Token};

/// Field class selected by `#[redact(...)]`.
///
/// ## Class Mapping
///
/// | Attribute | Class | Behavior |
/// |-----------|-------|----------|
/// | None | unclassified | Marker; reported by `unclassified_fields` |
/// | `#[redact(public)]` | `Public` | Value always rendered |
/// | `#[redact(sensitive)]` | `SensitiveRedactable` | Value only with the `sensitive` flag |
/// | `#[redact(always)]` | `AlwaysRedacted` | Marker, whatever the flags |
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Class {
    Public,
    Sensitive,
    Always,
}

impl Class {
    fn from_keyword(meta: &ParseNestedMeta<'_>) -> Option<Self> {
        if meta.path.is_ident("public") {
            Some(Self::Public)
        } else if meta.path.is_ident("sensitive") {
            Some(Self::Sensitive)
        } else if meta.path.is_ident("always") {
            Some(Self::Always)
        } else {
            None
        }
    }

    fn keyword(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Sensitive => "sensitive",
            Self::Always => "always",
        }
    }

    /// The `FieldClass` variant this class maps to.
    pub(crate) fn variant(self, field_class: &TokenStream) -> TokenStream {
        match self {
            Self::Public => quote! { #field_class::Public },
            Self::Sensitive => quote! { #field_class::SensitiveRedactable },
            Self::Always => quote! { #field_class::AlwaysRedacted },
        }
    }

    /// Whether the renderer may ever need the field's value.
    pub(crate) fn may_show(self) -> bool {
        !matches!(self, Self::Always)
    }
}

/// Options parsed from a field's `#[redact(...)]` attributes.
#[derive(Clone, Debug, Default)]
pub(crate) struct FieldOptions {
    pub(crate) class: Option<Class>,
    pub(crate) nested: bool,
    pub(crate) label: Option<LitStr>,
}

fn set_class(target: &mut Option<Class>, next: Class, span: Span) -> Result<()> {
    if let Some(previous) = target {
        return Err(syn::Error::new(
            span,
            format!(
                "multiple classes specified on the same field (`{}` and `{}`)",
                previous.keyword(),
                next.keyword()
            ),
        ));
    }
    *target = Some(next);
    Ok(())
}

fn reject_value(meta: &ParseNestedMeta<'_>, keyword: &str) -> Result<()> {
    if meta.input.peek(Token![=]) || meta.input.peek(syn::token::Paren) {
        return Err(meta.error(format!(
            "`{keyword}` takes no value; write #[redact({keyword})]"
        )));
    }
    Ok(())
}

pub(crate) fn parse_field_options(attrs: &[Attribute]) -> Result<FieldOptions> {
    let mut options = FieldOptions::default();
    for attr in attrs {
        if !attr.path().is_ident("redact") {
            continue;
        }

        match &attr.meta {
            Meta::Path(path) => {
                return Err(syn::Error::new_spanned(
                    path,
                    "expected a class: #[redact(public)], #[redact(sensitive)] or \
                     #[redact(always)]",
                ));
            }
            Meta::List(list) => {
                list.parse_nested_meta(|meta| {
                    if let Some(class) = Class::from_keyword(&meta) {
                        reject_value(&meta, class.keyword())?;
                        set_class(&mut options.class, class, meta.path.span())
                    } else if meta.path.is_ident("nested") {
                        reject_value(&meta, "nested")?;
                        if options.nested {
                            return Err(meta.error("duplicate `nested` option"));
                        }
                        options.nested = true;
                        Ok(())
                    } else if meta.path.is_ident("label") {
                        if options.label.is_some() {
                            return Err(meta.error("duplicate `label` option"));
                        }
                        let lit: LitStr = meta.value()?.parse()?;
                        if lit.value().is_empty() {
                            return Err(syn::Error::new(lit.span(), "`label` must not be empty"));
                        }
                        options.label = Some(lit);
                        Ok(())
                    } else {
                        Err(meta.error(format!(
                            "unknown field option `{}`; expected `public`, `sensitive`, \
                             `always`, `nested` or `label`",
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
                    "name-value syntax is not supported for #[redact]",
                ));
            }
        }
    }

    Ok(options)
}
