//! Property tests for manifest license decoding.

use std::path::Path;

use proptest::prelude::*;

use license_lint::{parse_license_field, LicenseField};

fn license_id() -> impl Strategy<Value = String> {
    // Plain YAML scalars that always decode as strings.
    proptest::string::string_regex("[A-Z][A-Za-z0-9.-]{0,15}")
        .unwrap()
        .prop_filter("not a YAML null/bool", |s| {
            !matches!(s.to_lowercase().as_str(), "null" | "true" | "false")
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a scalar `license:` decodes to exactly that one identifier.
    #[test]
    fn property_scalar_decodes_to_single_id(id in license_id()) {
        let content = format!("name: pkg\nlicense: {}\n", id);
        let field = parse_license_field(&content, Path::new("package.yml")).unwrap();
        prop_assert_eq!(field, Some(LicenseField::Scalar(id)));
    }

    /// PROPERTY: a block list decodes to the same identifiers in the same order.
    #[test]
    fn property_list_preserves_order(ids in proptest::collection::vec(license_id(), 1..8)) {
        let mut content = String::from("name: pkg\nlicense:\n");
        for id in &ids {
            content.push_str(&format!("  - {}\n", id));
        }
        let field = parse_license_field(&content, Path::new("package.yml")).unwrap();
        prop_assert_eq!(field, Some(LicenseField::List(ids)));
    }

    /// PROPERTY: decoding arbitrary text never panics.
    #[test]
    fn property_parse_never_panics(content in "\\PC{0,200}") {
        let _ = parse_license_field(&content, Path::new("package.yml"));
    }
}
