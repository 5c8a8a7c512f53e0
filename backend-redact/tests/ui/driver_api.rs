use backend_redact::{
    drivers::ontap::{NasStorageDriver, OntapStorageDriverConfig},
    render_detailed, RedactionPolicy,
};

fn main() {
    let config = OntapStorageDriverConfig::from_json(
        r#"{"storageDriverName": "ontap-nas", "managementLIF": "10.0.0.1", "password": "pw"}"#,
    )
    .unwrap();
    let mut driver = NasStorageDriver::from_config(config);
    driver.initialize().unwrap();

    let policy = RedactionPolicy::with_marker("***");
    let detail = render_detailed(&driver, &policy);
    assert!(detail.contains("Password:***"));
    assert!(detail.contains("API:***"));
    assert!(!detail.contains("\"pw\""));
    assert_eq!(driver.name(), "ontap-nas");
}
