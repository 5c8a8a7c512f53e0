//! Adapters for emitting redacted configuration through `slog`.
//!
//! This module connects [`RedactedConfig`] with `slog` by providing a
//! `slog::Value` that serializes the rendered form of a record.
//!
//! It is responsible for:
//! - Ensuring the logged text comes from the renderers, so it follows the same
//!   policy as `Display` and `Debug`. The raw record is never serialized.
//! - Rendering lazily: nothing is formatted unless a drain asks for the value.
//!
//! It does not configure `slog` or decide which fields are secret.

use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::redaction::{RedactedConfig, RenderMode, Rendered, DEFAULT_POLICY};

/// A `slog::Value` that emits the redacted rendering of a record.
///
/// The value borrows the record and renders it under the record's own flags
/// with [`DEFAULT_POLICY`] when serialized.
pub struct RedactedValue<'a, T: ?Sized> {
    rendered: Rendered<'a, T>,
}

impl<'a, T> RedactedValue<'a, T>
where
    T: RedactedConfig + ?Sized,
{
    fn new(value: &'a T, mode: RenderMode) -> Self {
        Self {
            rendered: Rendered::new(value, mode, &DEFAULT_POLICY),
        }
    }
}

impl<T> SlogValue for RedactedValue<'_, T>
where
    T: RedactedConfig + ?Sized,
{
    fn serialize(
        &self,
        _record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        serializer.emit_arguments(key, &format_args!("{}", self.rendered))
    }
}

/// Wraps records for logging in either render form.
///
/// ## Example
/// ```ignore
/// use backend_redact::slog::SlogRedactedExt;
///
/// info!(logger, "backend initialized"; "config" => driver.slog_redacted());
/// debug!(logger, "backend state"; "driver" => driver.slog_redacted_detail());
/// ```
pub trait SlogRedactedExt: RedactedConfig {
    /// Compact form, as produced by [`crate::render`].
    fn slog_redacted(&self) -> RedactedValue<'_, Self> {
        RedactedValue::new(self, RenderMode::Display)
    }

    /// Labelled detail form, as produced by [`crate::render_detailed`].
    fn slog_redacted_detail(&self) -> RedactedValue<'_, Self> {
        RedactedValue::new(self, RenderMode::Detail)
    }
}

impl<T> SlogRedactedExt for T where T: RedactedConfig + ?Sized {}
