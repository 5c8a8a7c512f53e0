use std::marker::PhantomData;

use backend_redact::{unclassified_fields, RedactedConfig};

#[derive(RedactedConfig)]
struct Versioned<C, M> {
    #[redact(public)]
    version: u32,
    #[redact(public, nested)]
    config: C,
    _marker: PhantomData<M>,
}

#[derive(RedactedConfig)]
struct Inner {
    #[redact(always)]
    key: Vec<u8>,
    forgotten: bool,
}

/// `M` carries no bounds, so any type works.
struct NotFormattable;

fn main() {
    let value: Versioned<Inner, NotFormattable> = Versioned {
        version: 2,
        config: Inner {
            key: vec![1, 2, 3],
            forgotten: true,
        },
        _marker: PhantomData,
    };
    assert_eq!(
        value.to_string(),
        "{Version:2 Config:{Key:<REDACTED> Forgotten:<REDACTED>}}"
    );
    assert_eq!(
        unclassified_fields::<Versioned<Inner, NotFormattable>>(),
        ["config.forgotten"]
    );
    assert!(value.config.forgotten && value.config.key.len() == 3);
}
