//! Storage-backend driver schemas.
//!
//! Each record derives `RedactedConfig`, so its classification is declared
//! next to the field it governs. A new backend variant adds its own record
//! here and marks its secrets; the renderers need no changes.

pub mod common;
pub mod ontap;

pub use common::{CommonStorageDriverConfig, DriverContext, DEFAULT_CONFIG_VERSION};
