//! ONTAP backend configuration document.

use serde::Deserialize;

use super::{api::ClientConfig, ONTAP_NAS_DRIVER_NAME};
use crate::{
    drivers::common::{CommonStorageDriverConfig, DEFAULT_CONFIG_VERSION},
    error::ConfigError,
    RedactedConfig,
};

/// Prefix applied to volume names when the document leaves it unset.
pub const DEFAULT_STORAGE_PREFIX: &str = "trident_";

/// Configuration of an ONTAP backend.
///
/// The common fields are flattened into the same JSON object, matching the
/// backend document layout. CHAP values are only used by block drivers but
/// live in the shared ONTAP record, so they are classified here.
#[derive(Clone, Default, PartialEq, Eq, Deserialize, RedactedConfig)]
#[serde(rename_all = "camelCase", default)]
#[redact(flags = "common.debug_trace_flags")]
pub struct OntapStorageDriverConfig {
    #[serde(flatten)]
    #[redact(public, nested, label = "CommonStorageDriverConfig")]
    pub common: CommonStorageDriverConfig,
    #[serde(rename = "managementLIF")]
    #[redact(public, label = "ManagementLIF")]
    pub management_lif: String,
    #[serde(rename = "dataLIF")]
    #[redact(public, label = "DataLIF")]
    pub data_lif: String,
    #[redact(public)]
    pub igroup_name: String,
    #[redact(public, label = "SVM")]
    pub svm: String,
    #[redact(sensitive)]
    pub username: String,
    #[redact(sensitive)]
    pub password: String,
    #[redact(public)]
    pub aggregate: String,
    #[serde(rename = "useCHAP")]
    #[redact(public, label = "UseCHAP")]
    pub use_chap: bool,
    #[redact(sensitive)]
    pub chap_username: String,
    #[redact(sensitive)]
    pub chap_initiator_secret: String,
    #[redact(sensitive)]
    pub chap_target_username: String,
    #[redact(sensitive)]
    pub chap_target_initiator_secret: String,
    #[redact(public)]
    pub client_certificate: String,
    #[redact(sensitive)]
    pub client_private_key: String,
    #[serde(rename = "trustedCACertificate")]
    #[redact(public, label = "TrustedCACertificate")]
    pub trusted_ca_certificate: String,
    #[redact(public)]
    pub nfs_mount_options: String,
    #[redact(public)]
    pub auto_export_policy: bool,
    #[serde(rename = "autoExportCIDRs")]
    #[redact(public, label = "AutoExportCIDRs")]
    pub auto_export_cidrs: Vec<String>,
    #[redact(public)]
    pub limit_aggregate_usage: String,
}

impl OntapStorageDriverConfig {
    /// Parses a backend document, fills defaults and validates it.
    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_json::from_str(document)?;
        config.populate_defaults();
        config.validate()?;
        Ok(config)
    }

    /// Fills values the document may leave out.
    pub fn populate_defaults(&mut self) {
        if self.common.version == 0 {
            self.common.version = DEFAULT_CONFIG_VERSION;
        }
        if self.common.storage_prefix.is_none() {
            self.common.storage_prefix = Some(DEFAULT_STORAGE_PREFIX.to_string());
        }
    }

    /// Checks the structural requirements of an ONTAP NAS backend.
    ///
    /// Credentials are not checked here; that happens against the backend.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.common.storage_driver_name != ONTAP_NAS_DRIVER_NAME {
            return Err(ConfigError::UnsupportedDriver(
                self.common.storage_driver_name.clone(),
            ));
        }
        if self.management_lif.is_empty() {
            return Err(ConfigError::MissingField("managementLIF"));
        }
        Ok(())
    }

    /// Configuration for the management-API client of this backend.
    ///
    /// The client shares the backend's flags, so a driver render and a client
    /// render agree on whether credentials are shown.
    #[must_use]
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            management_lif: self.management_lif.clone(),
            svm: self.svm.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            driver_context: self.common.driver_context,
            debug_trace_flags: Some(self.common.debug_trace_flags.clone()),
            ..ClientConfig::default()
        }
    }
}
