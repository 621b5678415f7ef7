//! Shared test content

/// Trimmed-down SPDX license list: three current ids, one deprecated
pub const LICENSE_LIST: &str = r#"{
  "licenseListVersion": "3.24",
  "licenses": [
    {
      "reference": "https://spdx.org/licenses/MIT.html",
      "isDeprecatedLicenseId": false,
      "detailsUrl": "https://spdx.org/licenses/MIT.json",
      "referenceNumber": 1,
      "name": "MIT License",
      "licenseId": "MIT",
      "seeAlso": ["https://opensource.org/license/mit/"],
      "isOsiApproved": true,
      "isFsfLibre": true
    },
    {
      "reference": "https://spdx.org/licenses/Apache-2.0.html",
      "isDeprecatedLicenseId": false,
      "detailsUrl": "https://spdx.org/licenses/Apache-2.0.json",
      "referenceNumber": 2,
      "name": "Apache License 2.0",
      "licenseId": "Apache-2.0",
      "seeAlso": ["https://www.apache.org/licenses/LICENSE-2.0"],
      "isOsiApproved": true,
      "isFsfLibre": true
    },
    {
      "reference": "https://spdx.org/licenses/GPL-2.0-or-later.html",
      "isDeprecatedLicenseId": false,
      "detailsUrl": "https://spdx.org/licenses/GPL-2.0-or-later.json",
      "referenceNumber": 3,
      "name": "GNU General Public License v2.0 or later",
      "licenseId": "GPL-2.0-or-later",
      "seeAlso": [],
      "isOsiApproved": true
    },
    {
      "reference": "https://spdx.org/licenses/GPL-2.0+.html",
      "isDeprecatedLicenseId": true,
      "detailsUrl": "https://spdx.org/licenses/GPL-2.0+.json",
      "referenceNumber": 4,
      "name": "GNU General Public License v2.0 or later",
      "licenseId": "GPL-2.0+",
      "seeAlso": [],
      "isOsiApproved": true
    }
  ],
  "releaseDate": "2024-05-22"
}"#;

/// Nothing listens on the discard port; any fetch attempt fails fast
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:9/licenses.json";
