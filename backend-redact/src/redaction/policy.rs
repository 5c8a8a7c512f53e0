//! The redaction decision shared by both renderers.
//!
//! The policy is a pure function of a field's class and the flag set. It does
//! not traverse records or format values; the renderers call
//! [`RedactionPolicy::visibility`] once per field and write either the value
//! or [`RedactionPolicy::marker`].

use std::borrow::Cow;

use crate::{classification::FieldClass, flags::FlagSet};

/// Placeholder written instead of a withheld value.
pub const REDACTED_MARKER: &str = "<REDACTED>";

/// Process-wide policy used by the generated `Display` and `Debug` impls.
pub static DEFAULT_POLICY: RedactionPolicy = RedactionPolicy::new();

/// Outcome of the policy for one field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Shown,
    Redacted,
}

/// Decides which fields are withheld and what replaces them.
///
/// The policy holds no per-render state and can be shared freely across
/// threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RedactionPolicy {
    marker: Cow<'static, str>,
}

impl RedactionPolicy {
    /// Policy using [`REDACTED_MARKER`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            marker: Cow::Borrowed(REDACTED_MARKER),
        }
    }

    /// Policy using a custom marker.
    #[must_use]
    pub fn with_marker<M>(marker: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        Self {
            marker: marker.into(),
        }
    }

    #[must_use]
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Decides whether a field of `class` is shown under `flags`.
    ///
    /// `None` is an unclassified field and is treated as
    /// [`FieldClass::AlwaysRedacted`].
    #[must_use]
    pub fn visibility(&self, class: Option<FieldClass>, flags: &FlagSet) -> Visibility {
        match FieldClass::or_fail_closed(class) {
            FieldClass::Public => Visibility::Shown,
            FieldClass::SensitiveRedactable if flags.show_sensitive() => Visibility::Shown,
            FieldClass::SensitiveRedactable | FieldClass::AlwaysRedacted => Visibility::Redacted,
        }
    }
}

impl Default for RedactionPolicy {
    fn default() -> Self {
        Self::new()
    }
}
