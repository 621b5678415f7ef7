#![no_main]

use libfuzzer_sys::fuzz_target;
use std::path::Path;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Manifest decoding (scalar, then list) should never panic
        if let Ok(Some(field)) = license_lint::parse_license_field(content, Path::new("package.yml")) {
            assert_eq!(field.ids().count(), field.len());
        }
    }
});
