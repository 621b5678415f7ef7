#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // SPDX list decoding and filtering should never panic
    if let Ok(list) = serde_json::from_slice::<license_lint::LicenseList>(data) {
        let set = list.reference_set();
        assert!(set.len() <= list.licenses.len());
    }
});
