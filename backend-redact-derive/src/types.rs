//! Name and type utilities for the derive macro.

use syn::{ext::IdentExt, Ident};

/// Default label of a field: its name in PascalCase, raw prefix stripped.
///
/// `management_lif` becomes `ManagementLif`; acronyms need an explicit
/// `label = "..."`.
pub(crate) fn default_label(ident: &Ident) -> String {
    ident
        .unraw()
        .to_string()
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect()
}

/// Checks if a type is `PhantomData<..>`, which carries no renderable value.
pub(crate) fn is_phantom_data(ty: &syn::Type) -> bool {
    let syn::Type::Path(path) = ty else {
        return false;
    };
    path.path
        .segments
        .last()
        .is_some_and(|segment| segment.ident == "PhantomData")
}
