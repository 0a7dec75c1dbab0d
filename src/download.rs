//! downloading the selected variants of a font

use std::{io::Read, path::Path};

use crate::{
    cancel::CancelToken,
    catalog::FontDescriptor,
    config::Config,
    error::VariantError,
    http::HttpClient,
    report::{Event, Reporter},
    selection::Variant,
};

/// The variants of a font that were downloaded, as recorded in the manifest.
///
/// `subsets`, `weights` and `styles` are parallel: entry `i` of each
/// describes the `i`th file downloaded, in the order they were attempted.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
#[serde(rename_all = "camelCase")]
pub struct DownloadResult {
    pub id: String,
    pub family: String,
    subsets: Vec<String>,
    weights: Vec<u16>,
    styles: Vec<String>,
    pub def_subset: String,
    pub variable: bool,
    pub last_modified: String,
    pub category: String,
    pub license: String,
    #[serde(rename = "type")]
    pub font_type: String,
}

impl DownloadResult {
    fn new(font: &FontDescriptor) -> Self {
        Self {
            id: font.id.clone(),
            family: font.family.clone(),
            subsets: Vec::new(),
            weights: Vec::new(),
            styles: Vec::new(),
            def_subset: font.def_subset.clone(),
            variable: font.variable,
            last_modified: font.last_modified.clone(),
            category: font.category.clone(),
            license: font.license.clone(),
            font_type: font.font_type.clone(),
        }
    }

    // the only way to grow the lists, so they stay the same length
    fn push(&mut self, variant: &Variant) {
        self.subsets.push(variant.subset.to_owned());
        self.weights.push(variant.weight);
        self.styles.push(variant.style.to_owned());
    }

    pub fn subsets(&self) -> &[String] {
        &self.subsets
    }

    pub fn weights(&self) -> &[u16] {
        &self.weights
    }

    pub fn styles(&self) -> &[String] {
        &self.styles
    }

    /// The number of files downloaded for this font.
    pub fn len(&self) -> usize {
        self.subsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subsets.is_empty()
    }
}

/// The outcome of attempting every selected variant of one font
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FontDownload {
    /// `None` if nothing could be downloaded
    pub result: Option<DownloadResult>,
    pub failed: usize,
}

/// Attempt every variant in `config.selection` for `font`.
///
/// Failures are reported and skipped; the remaining variants are still
/// attempted. Files are written to `config.out_dir`.
pub fn download_font(
    client: &impl HttpClient,
    config: &Config,
    font: &FontDescriptor,
    cancel: &CancelToken,
    reporter: &mut dyn Reporter,
) -> FontDownload {
    reporter.report(Event::FontStarted { id: &font.id });

    let mut outcome = FontDownload::default();
    for variant in config.selection.variants() {
        let url = variant.url(&config.cdn_url, &font.id);
        let file_name = variant.file_name(&font.id);
        reporter.report(Event::VariantRequested { url: &url });

        let path = config.out_dir.join(&file_name);
        match download_variant(client, &url, &path, cancel) {
            Ok(()) => {
                reporter.report(Event::VariantDownloaded {
                    file_name: &file_name,
                });
                outcome
                    .result
                    .get_or_insert_with(|| DownloadResult::new(font))
                    .push(&variant);
            }
            Err(error) => {
                reporter.report(Event::VariantFailed {
                    url: &url,
                    error: &error,
                });
                outcome.failed += 1;
            }
        }
    }

    reporter.report(Event::FontFinished {
        id: &font.id,
        downloaded: outcome.result.as_ref().map(DownloadResult::len).unwrap_or(0),
    });
    outcome
}

fn download_variant(
    client: &impl HttpClient,
    url: &str,
    path: &Path,
    cancel: &CancelToken,
) -> Result<(), VariantError> {
    let resp = client.get(url, None, cancel)?;
    if resp.status != 200 {
        return Err(VariantError::UnexpectedStatus(resp.status));
    }
    let mut body = Vec::new();
    resp.into_reader()
        .read_to_end(&mut body)
        .map_err(VariantError::ReadBody)?;
    crate::write_file(path, &body).map_err(|source| VariantError::WriteFile {
        path: path.to_owned(),
        source,
    })
}
