//! ONTAP NAS driver state.

use super::{api::Client, config::OntapStorageDriverConfig, ONTAP_NAS_DRIVER_NAME};
use crate::{error::ConfigError, RedactedConfig};

/// Identification reported alongside driver operations.
#[derive(Clone, Debug, Default, PartialEq, Eq, RedactedConfig)]
#[redact(skip_debug)]
pub struct Telemetry {
    #[redact(public)]
    pub plugin: String,
    #[redact(public, label = "SVM")]
    pub svm: String,
    #[redact(public)]
    pub storage_prefix: String,
    #[redact(public)]
    pub stopped: bool,
}

/// An ONTAP NAS driver: its configuration, its API client and telemetry.
///
/// The whole client is sensitive-redactable. It repeats the credentials from
/// the configuration, and without the `sensitive` flag it is written as a
/// single marker.
#[derive(Clone, RedactedConfig)]
#[redact(flags = "config.common.debug_trace_flags", name = "NASStorageDriver")]
pub struct NasStorageDriver {
    #[redact(public)]
    initialized: bool,
    #[redact(public, nested)]
    config: OntapStorageDriverConfig,
    #[redact(sensitive, nested, label = "API")]
    api: Client,
    #[redact(public, nested)]
    telemetry: Telemetry,
}

impl NasStorageDriver {
    /// Builds an uninitialized driver from its parts.
    #[must_use]
    pub fn new(config: OntapStorageDriverConfig, api: Client) -> Self {
        let telemetry = Telemetry {
            plugin: ONTAP_NAS_DRIVER_NAME.to_string(),
            svm: config.svm.clone(),
            storage_prefix: config.common.storage_prefix.clone().unwrap_or_default(),
            stopped: false,
        };
        Self {
            initialized: false,
            config,
            api,
            telemetry,
        }
    }

    /// Builds a driver whose client is derived from `config`.
    #[must_use]
    pub fn from_config(config: OntapStorageDriverConfig) -> Self {
        let api = Client::new(config.client_config());
        Self::new(config, api)
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        ONTAP_NAS_DRIVER_NAME
    }

    #[must_use]
    pub fn config(&self) -> &OntapStorageDriverConfig {
        &self.config
    }

    /// Mutable access to the configuration, e.g. to change trace flags.
    ///
    /// The client keeps the flags it was built with.
    pub fn config_mut(&mut self) -> &mut OntapStorageDriverConfig {
        &mut self.config
    }

    #[must_use]
    pub fn api(&self) -> &Client {
        &self.api
    }

    #[must_use]
    pub fn telemetry(&self) -> &Telemetry {
        &self.telemetry
    }

    /// Validates the configuration and marks the driver ready.
    pub fn initialize(&mut self) -> Result<(), ConfigError> {
        self.config.validate()?;
        self.initialized = true;
        Ok(())
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}
