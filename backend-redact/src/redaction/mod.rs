//! Redaction policy, record walking, and the two renderers.
//!
//! This module ties the pieces together:
//!
//! - **`policy`**: the single show-or-withhold decision (`RedactionPolicy`)
//! - **`record`**: what a renderable record exposes (`RedactedConfig`)
//! - **`value`**: how leaf values format in each mode (`FieldValue`)
//! - **`render`**: the Display and Detail renderers (`FieldWriter`, `Rendered`)
//!
//! Field classes and tables live in `crate::classification`.

mod policy;
mod record;
mod render;
mod value;

pub use policy::{RedactionPolicy, Visibility, DEFAULT_POLICY, REDACTED_MARKER};
pub use record::RedactedConfig;
pub use render::{render, render_detailed, render_with_flags, FieldWriter, RenderMode, Rendered};
pub use value::{FieldValue, NIL};
