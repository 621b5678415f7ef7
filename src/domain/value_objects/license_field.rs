//! The `license` field of a package manifest.

/// Declared license(s) of a manifest.
///
/// A manifest writes either `license: MIT` or `license: [MIT, Apache-2.0]`.
/// A missing field is represented by `Option::None` at the call site, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LicenseField {
    Scalar(String),
    List(Vec<String>),
}

impl LicenseField {
    /// Identifiers in declaration order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        let slice: &[String] = match self {
            LicenseField::Scalar(id) => std::slice::from_ref(id),
            LicenseField::List(ids) => ids,
        };
        slice.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        match self {
            LicenseField::Scalar(_) => 1,
            LicenseField::List(ids) => ids.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_list(&self) -> bool {
        matches!(self, LicenseField::List(_))
    }
}
