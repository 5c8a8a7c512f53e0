//! Display and Detail renderers.
//!
//! Both forms are produced by the same walk: [`RedactedConfig::write_fields`]
//! hands each field to a [`FieldWriter`], and the writer asks the policy for a
//! [`Visibility`] before writing anything. The modes differ only in layout and
//! in how leaf values are formatted, so they cannot disagree on what is
//! withheld.

use std::fmt::{self, Display, Formatter};

use super::{
    policy::{RedactionPolicy, Visibility},
    record::RedactedConfig,
    value::FieldValue,
};
use crate::{
    classification::FieldSpec,
    flags::{FlagSet, EMPTY_FLAGS},
};

/// Which of the two output forms to produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderMode {
    /// `{Label:value Label:{...}}`
    Display,
    /// `TypeName { Label:value, Label:TypeName { ... } }`
    Detail,
}

/// Writes labelled fields of one record, applying the policy to each.
pub struct FieldWriter<'a, 'f> {
    f: &'a mut Formatter<'f>,
    mode: RenderMode,
    flags: &'a FlagSet,
    policy: &'a RedactionPolicy,
    written: usize,
}

impl<'a, 'f> FieldWriter<'a, 'f> {
    fn new(
        f: &'a mut Formatter<'f>,
        mode: RenderMode,
        flags: &'a FlagSet,
        policy: &'a RedactionPolicy,
    ) -> Self {
        Self {
            f,
            mode,
            flags,
            policy,
            written: 0,
        }
    }

    #[must_use]
    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    /// Flags in effect for the whole render, including nested records.
    #[must_use]
    pub fn flags(&self) -> &FlagSet {
        self.flags
    }

    /// Writes a single-valued field, or the marker if the policy withholds it.
    pub fn leaf<V>(&mut self, spec: &FieldSpec, value: &V) -> fmt::Result
    where
        V: FieldValue + ?Sized,
    {
        if self.begin_field(spec)? == Visibility::Redacted {
            return Ok(());
        }
        match self.mode {
            RenderMode::Display => value.fmt_display(self.f),
            RenderMode::Detail => value.fmt_detail(self.f),
        }
    }

    /// Writes a sub-record, or the marker if the policy withholds the whole
    /// record. A shown sub-record is walked with its own table and the same
    /// flags.
    pub fn nested<T>(&mut self, spec: &FieldSpec, value: &T) -> fmt::Result
    where
        T: RedactedConfig + ?Sized,
    {
        if self.begin_field(spec)? == Visibility::Redacted {
            return Ok(());
        }
        write_record(&mut *self.f, value, self.mode, self.flags, self.policy)
    }

    /// Writes a field whose value is never formatted: always-redacted and
    /// unclassified fields. Only the label and the marker are written.
    pub fn withheld(&mut self, spec: &FieldSpec) -> fmt::Result {
        if self.begin_field(spec)? == Visibility::Shown {
            // the value is not available here, so nothing can be shown
            self.f.write_str(self.policy.marker())?;
        }
        Ok(())
    }

    /// Writes the separator and label, and the marker when redacted.
    fn begin_field(&mut self, spec: &FieldSpec) -> Result<Visibility, fmt::Error> {
        match (self.mode, self.written) {
            (RenderMode::Display, 0) => {}
            (RenderMode::Display, _) => self.f.write_str(" ")?,
            (RenderMode::Detail, 0) => self.f.write_str(" ")?,
            (RenderMode::Detail, _) => self.f.write_str(", ")?,
        }
        self.written += 1;

        self.f.write_str(spec.label)?;
        self.f.write_str(":")?;

        let visibility = self.policy.visibility(spec.class, self.flags);
        if visibility == Visibility::Redacted {
            self.f.write_str(self.policy.marker())?;
        }
        Ok(visibility)
    }
}

fn write_record<T>(
    f: &mut Formatter<'_>,
    value: &T,
    mode: RenderMode,
    flags: &FlagSet,
    policy: &RedactionPolicy,
) -> fmt::Result
where
    T: RedactedConfig + ?Sized,
{
    match mode {
        RenderMode::Display => {
            f.write_str("{")?;
            value.write_fields(&mut FieldWriter::new(f, mode, flags, policy))?;
            f.write_str("}")
        }
        RenderMode::Detail => {
            f.write_str(T::TYPE_NAME)?;
            f.write_str(" {")?;
            value.write_fields(&mut FieldWriter::new(f, mode, flags, policy))?;
            f.write_str(" }")
        }
    }
}

/// A lazily rendered record, usable anywhere a `Display` value is accepted.
///
/// Rendering happens on every `fmt` call; nothing is cached, so the output
/// always reflects the record and flags as they are at that moment.
pub struct Rendered<'a, T: ?Sized> {
    value: &'a T,
    mode: RenderMode,
    flags: &'a FlagSet,
    policy: &'a RedactionPolicy,
}

impl<'a, T> Rendered<'a, T>
where
    T: RedactedConfig + ?Sized,
{
    /// Renders `value` under its own flags. A record without flags renders
    /// as if every flag were unset.
    pub fn new(value: &'a T, mode: RenderMode, policy: &'a RedactionPolicy) -> Self {
        let flags = value.flags().unwrap_or(&EMPTY_FLAGS);
        Self::with_flags(value, mode, flags, policy)
    }

    /// Renders `value` under an explicit flag set, ignoring the record's own.
    pub fn with_flags(
        value: &'a T,
        mode: RenderMode,
        flags: &'a FlagSet,
        policy: &'a RedactionPolicy,
    ) -> Self {
        Self {
            value,
            mode,
            flags,
            policy,
        }
    }
}

impl<T: ?Sized> Clone for Rendered<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Rendered<'_, T> {}

impl<T> Display for Rendered<'_, T>
where
    T: RedactedConfig + ?Sized,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_record(f, self.value, self.mode, self.flags, self.policy)
    }
}

/// Compact rendering of `config` under its own flags.
#[must_use]
pub fn render<T>(config: &T, policy: &RedactionPolicy) -> String
where
    T: RedactedConfig + ?Sized,
{
    Rendered::new(config, RenderMode::Display, policy).to_string()
}

/// Labelled, type-qualified rendering of `config` under its own flags.
#[must_use]
pub fn render_detailed<T>(config: &T, policy: &RedactionPolicy) -> String
where
    T: RedactedConfig + ?Sized,
{
    Rendered::new(config, RenderMode::Detail, policy).to_string()
}

/// Renders `config` in `mode` under `flags` instead of the record's own.
#[must_use]
pub fn render_with_flags<T>(
    config: &T,
    mode: RenderMode,
    flags: &FlagSet,
    policy: &RedactionPolicy,
) -> String
where
    T: RedactedConfig + ?Sized,
{
    Rendered::with_flags(config, mode, flags, policy).to_string()
}
