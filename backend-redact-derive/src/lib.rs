//! Derive macro for `backend-redact`.
//!
//! This crate generates the classification table and the field walk behind
//! `#[derive(RedactedConfig)]`. It:
//! - reads `#[redact(...)]` container and field attributes
//! - emits a `RedactedConfig` implementation with a static `FIELDS` table
//! - emits `Display` and `Debug` impls that render through the default policy
//!
//! It does **not** decide what is shown. The policy lives in the main
//! `backend-redact` crate and is applied at render time.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::needless_ifs,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::struct_excessive_bools,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::future_not_send,
    clippy::option_if_let_else,
    clippy::from_over_into,
    clippy::manual_inspect
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro2::{Span, TokenStream};
use proc_macro_crate::{crate_name, FoundCrate};
use quote::{format_ident, quote};
use syn::{parse_macro_input, spanned::Spanned, Data, DeriveInput, Fields, Ident, Result};

mod container;
mod derive_struct;
mod fmt_impls;
mod generics;
mod strategy;
mod transform;
mod types;
use container::{parse_container_options, ContainerOptions};
use derive_struct::derive_struct;
use fmt_impls::{debug_impl, display_impl};
use generics::{add_bounds, TraitBound};

/// Derives `backend_redact::RedactedConfig`, `Display` and `Debug` for a
/// struct with named fields.
///
/// # Container Attributes
///
/// - `#[redact(flags = "path.to.flags")]` - Member path, relative to `self`, of the `FlagSet`
///   (or `Option<FlagSet>`) that governs rendering. Without it the record has no flags of its
///   own and renders as if every flag were unset.
/// - `#[redact(name = "TypeName")]` - Type label used by the detail form. Defaults to the
///   struct name.
/// - `#[redact(skip_display)]`, `#[redact(skip_debug)]` - Opt out of the generated `Display`
///   (compact form) or `Debug` (detail form) impl.
///
/// # Field Attributes
///
/// - `#[redact(public)]` - Always rendered with its value.
/// - `#[redact(sensitive)]` - Rendered only when the `sensitive` flag is set.
/// - `#[redact(always)]` - Never rendered. The field type needs no formatting impl.
/// - `nested` - Descend into a field whose type also derives `RedactedConfig`.
/// - `label = "..."` - Rendered name. Defaults to the PascalCase field name.
///
/// A field without `#[redact(..)]` is emitted as unclassified. It renders as the
/// marker and is listed by `backend_redact::unclassified_fields`.
///
/// Enums, unions and tuple structs are rejected at compile time.
#[proc_macro_derive(RedactedConfig, attributes(redact))]
pub fn derive_redacted_config(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Returns the token stream to reference the `backend-redact` crate root.
///
/// Handles crate renaming (e.g., `redact = { package = "backend-redact", ... }`).
/// Inside `backend-redact` itself the path goes through its
/// `extern crate self as backend_redact` alias, which also covers its
/// integration tests and doctests.
fn crate_root() -> TokenStream {
    match crate_name("backend-redact") {
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Ok(FoundCrate::Itself) | Err(_) => quote! { ::backend_redact },
    }
}

fn crate_path(item: &str) -> TokenStream {
    let root = crate_root();
    let item_ident = Ident::new(item, Span::call_site());
    quote! { #root::#item_ident }
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    } = input;

    let ContainerOptions {
        skip_display,
        skip_debug,
        flags,
        name,
    } = parse_container_options(&attrs)?;

    let fields = match data {
        Data::Struct(data) => match data.fields {
            Fields::Named(fields) => Some(fields),
            Fields::Unit => None,
            Fields::Unnamed(fields) => {
                return Err(syn::Error::new(
                    fields.span(),
                    "`RedactedConfig` requires named fields; tuple structs have no labels",
                ));
            }
        },
        Data::Enum(data) => {
            return Err(syn::Error::new(
                data.enum_token.span(),
                "`RedactedConfig` cannot be derived for enums; implement `FieldValue` to \
                 render an enum as a single value",
            ));
        }
        Data::Union(data) => {
            return Err(syn::Error::new(
                data.union_token.span(),
                "`RedactedConfig` cannot be derived for unions",
            ));
        }
    };

    let output = derive_struct(fields, &generics)?;

    let bounded = add_bounds(generics.clone(), &output.leaf_generics, TraitBound::FieldValue);
    let bounded = add_bounds(bounded, &output.nested_generics, TraitBound::RedactedConfig);
    let (impl_generics, ty_generics, where_clause) = bounded.split_for_impl();

    let crate_root = crate_root();
    let type_name = name.map_or_else(|| ident.to_string(), |lit| lit.value());
    let specs = &output.specs;
    let writes = &output.writes;
    let flags_body = match flags {
        Some(path) => quote! {
            #crate_root::FlagSource::flag_set(&self.#(#path).*)
        },
        None => quote! { ::core::option::Option::None },
    };

    let display = if skip_display {
        quote! {}
    } else {
        display_impl(&ident, &bounded)
    };
    let debug = if skip_debug {
        quote! {}
    } else {
        debug_impl(&ident, &bounded)
    };

    Ok(quote! {
        impl #impl_generics #crate_root::RedactedConfig for #ident #ty_generics #where_clause {
            const TYPE_NAME: &'static str = #type_name;
            const FIELDS: &'static [#crate_root::FieldSpec] = &[#(#specs),*];

            fn flags(&self) -> ::core::option::Option<&#crate_root::FlagSet> {
                #flags_body
            }

            #[allow(unused_variables)]
            fn write_fields(
                &self,
                out: &mut #crate_root::FieldWriter<'_, '_>,
            ) -> ::core::fmt::Result {
                #(#writes)*
                ::core::result::Result::Ok(())
            }
        }

        #display

        #debug
    })
}
