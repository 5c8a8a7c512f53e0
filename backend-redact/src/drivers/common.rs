//! Configuration shared by every storage-backend variant.

use std::{
    collections::BTreeMap,
    fmt::{self, Formatter},
};

use serde::Deserialize;

use crate::{flags::FlagSet, FieldValue, RedactedConfig};

/// Schema version written by current backend definitions.
pub const DEFAULT_CONFIG_VERSION: u32 = 1;

/// The orchestrator a driver runs under. Set by the host, never by the
/// backend document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DriverContext {
    #[default]
    Csi,
    Docker,
}

impl DriverContext {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Csi => "csi",
            Self::Docker => "docker",
        }
    }
}

impl fmt::Display for DriverContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FieldValue for DriverContext {
    fn fmt_display(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }

    fn fmt_detail(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Fields common to all backend variants.
///
/// `credentials` names the secret a backend pulls its login from; it is
/// withheld unless sensitive output is requested.
#[derive(Clone, Default, PartialEq, Eq, Deserialize, RedactedConfig)]
#[serde(rename_all = "camelCase", default)]
#[redact(flags = "debug_trace_flags")]
pub struct CommonStorageDriverConfig {
    #[redact(public)]
    pub version: u32,
    #[redact(public)]
    pub storage_driver_name: String,
    #[redact(public)]
    pub backend_name: String,
    #[redact(public)]
    pub debug: bool,
    #[redact(public)]
    pub debug_trace_flags: FlagSet,
    #[redact(public)]
    pub disable_delete: bool,
    #[redact(public)]
    pub storage_prefix: Option<String>,
    #[redact(public)]
    pub serial_numbers: Vec<String>,
    #[serde(skip)]
    #[redact(public)]
    pub driver_context: DriverContext,
    #[redact(public)]
    pub limit_volume_size: String,
    #[redact(sensitive)]
    pub credentials: BTreeMap<String, String>,
}
