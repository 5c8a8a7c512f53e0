//! Per-field code generation: the table entry and the matching write call.

use proc_macro2::{Ident, Literal, Span, TokenStream};
use quote::{quote, quote_spanned};
use syn::{ext::IdentExt, LitStr};

use crate::{generics::collect_generics_from_type, strategy::FieldOptions, types::default_label};

/// Accumulated state during field processing.
pub(crate) struct DeriveContext<'a> {
    pub(crate) generics: &'a syn::Generics,
    pub(crate) crate_root: &'a TokenStream,
    pub(crate) leaf_generics: &'a mut Vec<Ident>,
    pub(crate) nested_generics: &'a mut Vec<Ident>,
}

pub(crate) struct FieldTokens {
    /// `FieldSpec { .. }` expression for the `FIELDS` table.
    pub(crate) spec: TokenStream,
    /// Statement in `write_fields` handing the field to the writer.
    pub(crate) write: TokenStream,
}

/// Generates the table entry and write call for the field at `index`.
///
/// ## Write Rules
///
/// | Class | `nested` | Call |
/// |-------|----------|------|
/// | `public` / `sensitive` | no | `out.leaf(..)`, value must be `FieldValue` |
/// | `public` / `sensitive` | yes | `out.nested(..)`, value must be `RedactedConfig` |
/// | `always` / none | either | `out.withheld(..)`, value is never touched |
pub(crate) fn generate_field(
    ctx: &mut DeriveContext<'_>,
    index: usize,
    ident: &Ident,
    ty: &syn::Type,
    span: Span,
    options: &FieldOptions,
) -> FieldTokens {
    let crate_root = ctx.crate_root;

    let name = LitStr::new(&ident.unraw().to_string(), ident.span());
    let label = options
        .label
        .clone()
        .unwrap_or_else(|| LitStr::new(&default_label(ident), ident.span()));
    let class = match options.class {
        Some(class) => {
            let variant = class.variant(&quote! { #crate_root::FieldClass });
            quote! { ::core::option::Option::Some(#variant) }
        }
        None => quote! { ::core::option::Option::None },
    };
    let nested = if options.nested {
        collect_generics_from_type(ty, ctx.generics, ctx.nested_generics);
        quote_spanned! { span =>
            ::core::option::Option::Some(<#ty as #crate_root::RedactedConfig>::FIELDS)
        }
    } else {
        quote! { ::core::option::Option::None }
    };

    let spec = quote! {
        #crate_root::FieldSpec {
            name: #name,
            label: #label,
            class: #class,
            nested: #nested,
        }
    };

    let index = Literal::usize_unsuffixed(index);
    let entry = quote! { &<Self as #crate_root::RedactedConfig>::FIELDS[#index] };
    let write = match options.class {
        Some(class) if class.may_show() => {
            if options.nested {
                quote_spanned! { span =>
                    out.nested(#entry, &self.#ident)?;
                }
            } else {
                collect_generics_from_type(ty, ctx.generics, ctx.leaf_generics);
                quote_spanned! { span =>
                    out.leaf(#entry, &self.#ident)?;
                }
            }
        }
        _ => quote! {
            out.withheld(#entry)?;
        },
    };

    FieldTokens { spec, write }
}
