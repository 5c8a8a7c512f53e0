use backend_redact::{FlagSet, RedactedConfig, SENSITIVE_FLAG};
use serde::Deserialize;

#[derive(Deserialize, RedactedConfig)]
#[serde(rename_all = "camelCase")]
#[redact(flags = "debug_trace_flags")]
struct SolidfireConfig {
    #[redact(public, label = "TenantName")]
    tenant_name: String,
    #[redact(sensitive, label = "EndPoint")]
    end_point: String,
    #[redact(public)]
    debug_trace_flags: FlagSet,
}

fn main() {
    let mut config: SolidfireConfig = serde_json::from_str(
        r#"{"tenantName": "trident", "endPoint": "https://admin:pw@10.0.0.1/json-rpc/8.0", "debugTraceFlags": {}}"#,
    )
    .unwrap();
    assert_eq!(
        config.to_string(),
        "{TenantName:trident EndPoint:<REDACTED> DebugTraceFlags:map[]}"
    );

    config.debug_trace_flags.set(SENSITIVE_FLAG, true);
    assert!(format!("{config:?}").contains("EndPoint:\"https://admin:pw@10.0.0.1/json-rpc/8.0\""));
}
