//! Records that can be rendered through the classification table.

use std::fmt;

use super::render::FieldWriter;
use crate::{classification::FieldSpec, flags::FlagSet};

/// A configuration record with a static classification table.
///
/// This trait is implemented by `#[derive(RedactedConfig)]`. The derive keeps
/// [`RedactedConfig::FIELDS`] and [`RedactedConfig::write_fields`] in step:
/// `write_fields` hands every field to the writer together with its own
/// table entry, in declaration order.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `RedactedConfig`",
    label = "this type has no classification table",
    note = "use `#[derive(RedactedConfig)]` on the type definition",
    note = "or drop `nested` and implement `FieldValue` to render it as a single value"
)]
pub trait RedactedConfig {
    /// Type label used by the detail form.
    const TYPE_NAME: &'static str;
    /// Classification table, one entry per field.
    const FIELDS: &'static [FieldSpec];

    /// Flags carried by the record, if it carries any.
    fn flags(&self) -> Option<&FlagSet>;

    /// Writes every field through `out`, which applies the policy.
    fn write_fields(&self, out: &mut FieldWriter<'_, '_>) -> fmt::Result;
}

impl<T> RedactedConfig for Box<T>
where
    T: RedactedConfig + ?Sized,
{
    const TYPE_NAME: &'static str = T::TYPE_NAME;
    const FIELDS: &'static [FieldSpec] = T::FIELDS;

    fn flags(&self) -> Option<&FlagSet> {
        (**self).flags()
    }

    fn write_fields(&self, out: &mut FieldWriter<'_, '_>) -> fmt::Result {
        (**self).write_fields(out)
    }
}
