//! Generic type parameter handling and trait bound management.
//!
//! This module adds bounds only for generics that are rendered: leaf fields
//! need `FieldValue`, nested fields need `RedactedConfig`. Parameters that only
//! appear in withheld fields or in `PhantomData<T>` stay unbounded:
//!
//! ```ignore
//! struct Keyed<K> {
//!     #[redact(always)]
//!     key: K,                  // K is never formatted
//!     _marker: PhantomData<K>,
//! }
//! ```

use syn::{parse_quote, Ident};

use crate::crate_path;

/// Trait required of a generic parameter by the generated impls.
#[derive(Clone, Copy, Debug)]
pub(crate) enum TraitBound {
    FieldValue,
    RedactedConfig,
}

impl TraitBound {
    fn name(self) -> &'static str {
        match self {
            Self::FieldValue => "FieldValue",
            Self::RedactedConfig => "RedactedConfig",
        }
    }
}

pub(crate) fn collect_generics_from_type(
    ty: &syn::Type,
    generics: &syn::Generics,
    result: &mut Vec<Ident>,
) {
    match ty {
        syn::Type::Path(path) => {
            for segment in &path.path.segments {
                if segment.ident == "PhantomData" {
                    return;
                }

                if let syn::PathArguments::AngleBracketed(args) = &segment.arguments {
                    for arg in &args.args {
                        if let syn::GenericArgument::Type(inner_ty) = arg {
                            collect_generics_from_type(inner_ty, generics, result);
                        }
                    }
                }

                for param in generics.type_params() {
                    if segment.ident == param.ident && !result.iter().any(|g| g == &param.ident) {
                        result.push(param.ident.clone());
                    }
                }
            }
        }
        syn::Type::Reference(reference) => {
            collect_generics_from_type(&reference.elem, generics, result);
        }
        syn::Type::Slice(slice) => collect_generics_from_type(&slice.elem, generics, result),
        syn::Type::Array(array) => collect_generics_from_type(&array.elem, generics, result),
        syn::Type::Paren(paren) => collect_generics_from_type(&paren.elem, generics, result),
        syn::Type::Group(group) => collect_generics_from_type(&group.elem, generics, result),
        _ => {}
    }
}

/// Adds `bound` to each generic parameter in `used_generics`.
pub(crate) fn add_bounds(
    mut generics: syn::Generics,
    used_generics: &[Ident],
    bound: TraitBound,
) -> syn::Generics {
    for param in generics.type_params_mut() {
        if used_generics.iter().any(|g| g == &param.ident) {
            let bound_path = crate_path(bound.name());
            param.bounds.push(parse_quote!(#bound_path));
        }
    }
    generics
}
