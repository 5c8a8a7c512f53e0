//! Redacting renderers for storage-backend driver configuration.
//!
//! A driver configuration mixes connection details that belong in logs with
//! credentials that must not end up there. This crate renders such records in
//! two forms, a compact [`Display`](std::fmt::Display) form and a labelled
//! detail form, and withholds secrets in both according to one policy.
//!
//! Each field carries a [`FieldClass`]:
//! - `Public` fields always show their value.
//! - `SensitiveRedactable` fields show their value only when the record's
//!   [`FlagSet`] has `sensitive` set; otherwise the marker `<REDACTED>`.
//! - `AlwaysRedacted` fields always show the marker.
//!
//! Classes are declared with `#[derive(RedactedConfig)]` and
//! `#[redact(public | sensitive | always)]` on each field. A field without a
//! classification is treated as `AlwaysRedacted` and reported by
//! [`unclassified_fields`], so a forgotten attribute hides data instead of
//! leaking it.
//!
//! What this crate does:
//! - defines field classes, flag sets and the redaction policy
//! - renders any `RedactedConfig` record in both forms
//! - ships the ONTAP NAS driver schema in [`drivers`]
//! - provides a `slog` integration behind the `slog` feature
//!
//! What it does not do:
//! - perform I/O or logging on its own
//! - talk to a storage backend

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

pub use backend_redact_derive::RedactedConfig;

#[allow(unused_extern_crates)]
extern crate self as backend_redact;

// Module declarations
mod classification;
pub mod drivers;
mod error;
mod flags;
mod redaction;
#[cfg(feature = "slog")]
pub mod slog;

// Re-exports
pub use classification::{
    classified_paths, classify, classify_in, unclassified_fields, ClassifiedPath, FieldClass,
    FieldSpec,
};
pub use error::ConfigError;
pub use flags::{FlagSet, FlagSource, METHOD_FLAG, SENSITIVE_FLAG};
pub use redaction::{
    render, render_detailed, render_with_flags, FieldValue, FieldWriter, RedactedConfig,
    RedactionPolicy, RenderMode, Rendered, Visibility, DEFAULT_POLICY, NIL, REDACTED_MARKER,
};
