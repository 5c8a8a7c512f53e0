//! Struct-specific `RedactedConfig` derivation.
//!
//! This module builds the classification table and the field walk for a
//! struct with named fields, and collects generic parameters that require
//! trait bounds.

use proc_macro2::{Ident, TokenStream};
use syn::{spanned::Spanned, FieldsNamed, Result};

use crate::{
    crate_root,
    strategy::parse_field_options,
    transform::{generate_field, DeriveContext, FieldTokens},
    types::is_phantom_data,
};

pub(crate) struct StructDeriveOutput {
    pub(crate) specs: Vec<TokenStream>,
    pub(crate) writes: Vec<TokenStream>,
    pub(crate) leaf_generics: Vec<Ident>,
    pub(crate) nested_generics: Vec<Ident>,
}

/// Derives table and walk for `fields`; `None` is a unit struct.
///
/// `PhantomData` fields carry no value and get no table entry.
pub(crate) fn derive_struct(
    fields: Option<FieldsNamed>,
    generics: &syn::Generics,
) -> Result<StructDeriveOutput> {
    let crate_root = crate_root();
    let mut specs = Vec::new();
    let mut writes = Vec::new();
    let mut leaf_generics = Vec::new();
    let mut nested_generics = Vec::new();

    let mut ctx = DeriveContext {
        generics,
        crate_root: &crate_root,
        leaf_generics: &mut leaf_generics,
        nested_generics: &mut nested_generics,
    };

    let named = fields.map(|fields| fields.named).unwrap_or_default();
    for field in named {
        let span = field.span();
        let options = parse_field_options(&field.attrs)?;
        let Some(ident) = field.ident.as_ref() else {
            return Err(syn::Error::new(span, "expected a named field"));
        };
        if is_phantom_data(&field.ty) {
            if options.class.is_some() || options.nested || options.label.is_some() {
                return Err(syn::Error::new(
                    span,
                    "`PhantomData` fields carry no value and take no #[redact] options",
                ));
            }
            continue;
        }

        let FieldTokens { spec, write } =
            generate_field(&mut ctx, specs.len(), ident, &field.ty, span, &options);
        specs.push(spec);
        writes.push(write);
    }

    Ok(StructDeriveOutput {
        specs,
        writes,
        leaf_generics,
        nested_generics,
    })
}
