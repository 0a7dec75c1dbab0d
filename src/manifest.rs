//! the `fonts.json` summary of a run

use std::path::Path;

use crate::{download::DownloadResult, error::ManifestError};

/// Every font with at least one downloaded variant, in catalog order.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct Manifest {
    pub fonts: Vec<DownloadResult>,
}

impl Manifest {
    /// Add a font's result, ignoring fonts where nothing was downloaded.
    pub fn push(&mut self, result: DownloadResult) {
        if !result.is_empty() {
            self.fonts.push(result);
        }
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Write the manifest as a JSON array, replacing any existing file.
    pub fn write(&self, path: &Path) -> Result<(), ManifestError> {
        let mut json = serde_json::to_vec_pretty(self).map_err(ManifestError::Encode)?;
        json.push(b'\n');
        crate::write_file(path, &json).map_err(|source| ManifestError::FileWrite {
            path: path.to_owned(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(json: &str) -> DownloadResult {
        serde_json::from_str(json).unwrap()
    }

    static ROBOTO: &str = r#"{"id":"roboto","family":"Roboto","subsets":["latin"],"weights":[400],
        "styles":["normal"],"defSubset":"latin","variable":false,"lastModified":"2024-02-29",
        "category":"sans-serif","license":"OFL-1.1","type":"google"}"#;

    #[test]
    fn empty_results_are_dropped() {
        let mut manifest = Manifest::default();
        manifest.push(result(
            r#"{"id":"x","family":"X","subsets":[],"weights":[],"styles":[],"defSubset":"",
            "variable":false,"lastModified":"","category":"","license":"","type":""}"#,
        ));
        assert!(manifest.is_empty());
        manifest.push(result(ROBOTO));
        assert_eq!(manifest.len(), 1);
    }

    #[test]
    fn writes_json_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fonts.json");
        std::fs::write(&path, "stale").unwrap();

        let mut manifest = Manifest::default();
        manifest.push(result(ROBOTO));
        manifest.write(&path).unwrap();

        let written: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        let entries = written.as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["id"], "roboto");
        assert_eq!(entries[0]["subsets"], serde_json::json!(["latin"]));
    }

    #[test]
    fn unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("fonts.json");
        let err = Manifest::default().write(&path).unwrap_err();
        assert!(matches!(err, ManifestError::FileWrite { .. }));
    }
}
