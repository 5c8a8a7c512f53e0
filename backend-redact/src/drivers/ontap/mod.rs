//! ONTAP backend: configuration, management-API client and the NAS driver.

mod api;
mod config;
mod nas;

pub use api::{Client, ClientConfig, DEFAULT_ZAPI_RECORDS};
pub use config::{OntapStorageDriverConfig, DEFAULT_STORAGE_PREFIX};
pub use nas::{NasStorageDriver, Telemetry};

/// Storage driver name of the ONTAP NAS driver.
pub const ONTAP_NAS_DRIVER_NAME: &str = "ontap-nas";
