//! Management-API client held by ONTAP drivers.
//!
//! Only the configuration side of the client is modelled: what it connects
//! to and with which credentials. That is the part that ends up in logs.

use crate::{drivers::common::DriverContext, flags::FlagSet, RedactedConfig};

/// Number of records requested per ZAPI page unless configured otherwise.
pub const DEFAULT_ZAPI_RECORDS: u32 = 100;

/// Connection settings of the management-API client.
#[derive(Clone, PartialEq, Eq, RedactedConfig)]
#[redact(flags = "debug_trace_flags")]
pub struct ClientConfig {
    #[redact(public, label = "ManagementLIF")]
    pub management_lif: String,
    #[redact(public, label = "SVM")]
    pub svm: String,
    #[redact(sensitive)]
    pub username: String,
    #[redact(sensitive)]
    pub password: String,
    #[redact(public)]
    pub driver_context: DriverContext,
    #[redact(public)]
    pub context_based_zapi_records: u32,
    #[redact(public)]
    pub debug_trace_flags: Option<FlagSet>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            management_lif: String::new(),
            svm: String::new(),
            username: String::new(),
            password: String::new(),
            driver_context: DriverContext::default(),
            context_based_zapi_records: DEFAULT_ZAPI_RECORDS,
            debug_trace_flags: None,
        }
    }
}

/// Management-API client.
#[derive(Clone, RedactedConfig)]
#[redact(flags = "config.debug_trace_flags")]
pub struct Client {
    #[redact(public, nested)]
    config: ClientConfig,
}

impl Client {
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}
