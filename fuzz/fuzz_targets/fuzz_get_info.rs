#![no_main]

use imginfo::{ImageFormat, Probe, Registry};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let registry = Registry::global();
    let info = registry.get_info(data);

    // At most one parser may claim a buffer.
    let claimed = registry
        .iter()
        .filter(|(_, parser)| parser.detect(data) == imginfo::Verdict::Valid)
        .count();
    assert!(claimed <= 1);

    if let Probe::Valid(info) = info {
        assert_ne!(info.format, ImageFormat::Unknown);
        let parser = registry.get(info.format).unwrap();
        assert_eq!(parser.measure(data), Probe::Valid(info.dimensions));
    }
});
