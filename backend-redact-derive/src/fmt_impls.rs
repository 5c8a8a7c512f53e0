//! Generated `Display` and `Debug` impls.
//!
//! `Display` is the compact form and `Debug` the detail form. Both render
//! through `DEFAULT_POLICY` under the record's own flags, so `{}` and `{:?}`
//! in a log statement never bypass redaction.

use proc_macro2::{Ident, TokenStream};
use quote::quote;

use crate::crate_root;

pub(crate) fn display_impl(ident: &Ident, generics: &syn::Generics) -> TokenStream {
    fmt_impl(ident, generics, &quote! { Display }, &quote! { Display })
}

pub(crate) fn debug_impl(ident: &Ident, generics: &syn::Generics) -> TokenStream {
    fmt_impl(ident, generics, &quote! { Debug }, &quote! { Detail })
}

fn fmt_impl(
    ident: &Ident,
    generics: &syn::Generics,
    fmt_trait: &TokenStream,
    mode: &TokenStream,
) -> TokenStream {
    let crate_root = crate_root();
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    quote! {
        impl #impl_generics ::core::fmt::#fmt_trait for #ident #ty_generics #where_clause {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(
                    &#crate_root::Rendered::new(
                        self,
                        #crate_root::RenderMode::#mode,
                        &#crate_root::DEFAULT_POLICY,
                    ),
                    f,
                )
            }
        }
    }
}
