//! Property tests for building the reference set.

use proptest::prelude::*;

use license_lint::{LicenseList, LicenseRecord};

fn license_id() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z][A-Za-z0-9.+-]{0,15}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every non-deprecated id is in the set, and an id is in the set
    /// only if some non-deprecated record carries it.
    #[test]
    fn property_reference_set_matches_deprecation_flags(
        records in proptest::collection::vec((license_id(), any::<bool>()), 0..40),
    ) {
        let list = LicenseList::new(
            records
                .iter()
                .map(|(id, deprecated)| LicenseRecord::new(id.clone(), *deprecated))
                .collect(),
        );
        let set = list.reference_set();

        for (id, deprecated) in &records {
            let has_current = records.iter().any(|(other, dep)| other == id && !dep);
            if !deprecated {
                prop_assert!(set.contains(id));
            }
            prop_assert_eq!(set.contains(id), has_current);
        }
        for id in set.iter() {
            prop_assert!(records.iter().any(|(other, dep)| other == id && !dep));
        }
    }
}
