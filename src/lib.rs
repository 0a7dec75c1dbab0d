//! Downloading font files from the Fontsource catalog

use std::{
    io::Write,
    path::{Path, PathBuf},
};

mod args;
mod cancel;
mod catalog;
mod config;
mod download;
mod error;
mod http;
mod manifest;
mod report;
mod selection;

pub use args::Args;
pub use cancel::CancelToken;
pub use catalog::{fetch_catalog, FontDescriptor};
pub use config::{Config, DEFAULT_API_URL, DEFAULT_CDN_URL, FILE_MODE, MANIFEST_FILE};
pub use download::{download_font, DownloadResult, FontDownload};
pub use error::{CatalogError, Error, ManifestError, RequestError, UnwrapOrDie, VariantError};
pub use http::{HttpClient, Response, UreqClient, REQUEST_TIMEOUT, USER_AGENT};
pub use manifest::Manifest;
pub use report::{Event, LogReporter, ProgressReporter, Reporter};
pub use selection::{InvalidWeight, Selection, Variant};

/// Totals for a finished run
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub fonts_in_catalog: usize,
    /// Fonts with at least one downloaded variant
    pub fonts_downloaded: usize,
    pub variants_downloaded: usize,
    pub variants_failed: usize,
    /// Where the manifest was written, if anything was downloaded
    pub manifest: Option<PathBuf>,
}

/// entry point for the cli tool
pub fn run(config: &Config, cancel: &CancelToken) -> Result<Summary, Error> {
    let client = UreqClient::new();
    if config.progress {
        download_fonts(&client, config, cancel, &mut ProgressReporter::new())
    } else {
        download_fonts(&client, config, cancel, &mut LogReporter)
    }
}

/// Fetch the catalog, then try to download the selected variants of every
/// font in it, one at a time.
///
/// Individual variants that fail are reported and skipped. If anything was
/// downloaded, a manifest is written to `{out_dir}/fonts.json`.
///
/// Returns an error if the catalog can't be fetched, the output directory
/// can't be created, the manifest can't be written, or `cancel` is tripped.
/// A cancelled run still writes the manifest for fonts finished so far.
pub fn download_fonts(
    client: &impl HttpClient,
    config: &Config,
    cancel: &CancelToken,
    reporter: &mut dyn Reporter,
) -> Result<Summary, Error> {
    for bad in &config.invalid_weights {
        reporter.report(Event::InvalidWeight(bad));
    }

    reporter.report(Event::FetchingCatalog {
        url: &config.api_url,
    });
    let fonts = fetch_catalog(client, &config.api_url, cancel).map_err(|e| match e {
        CatalogError::Cancelled => Error::Cancelled,
        e => e.into(),
    })?;
    reporter.report(Event::CatalogFetched { fonts: fonts.len() });

    std::fs::create_dir_all(&config.out_dir).map_err(|source| Error::OutputDir {
        path: config.out_dir.clone(),
        source,
    })?;

    let mut summary = Summary {
        fonts_in_catalog: fonts.len(),
        ..Default::default()
    };
    let mut manifest = Manifest::default();
    for font in &fonts {
        if cancel.is_cancelled() {
            break;
        }
        let outcome = download_font(client, config, font, cancel, reporter);
        summary.variants_failed += outcome.failed;
        if let Some(result) = outcome.result {
            summary.variants_downloaded += result.len();
            manifest.push(result);
        }
    }
    summary.fonts_downloaded = manifest.len();
    // whatever was downloaded before a cancel still goes in the manifest
    let cancelled = cancel.is_cancelled();

    if manifest.is_empty() {
        reporter.report(Event::NothingDownloaded);
    } else {
        let path = config.manifest_path();
        manifest.write(&path)?;
        reporter.report(Event::ManifestWritten {
            path: &path,
            fonts: manifest.len(),
        });
        summary.manifest = Some(path);
    }

    reporter.report(Event::Finished(&summary));
    if cancelled {
        return Err(Error::Cancelled);
    }
    Ok(summary)
}

/// Create or truncate `path` and write `contents` to it.
///
/// On unix the file is created with [`FILE_MODE`]. If the write fails
/// partway the file is removed.
pub(crate) fn write_file(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut options = std::fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(FILE_MODE);
    }
    let mut file = options.open(path)?;
    if let Err(e) = file.write_all(contents).and_then(|_| file.flush()) {
        drop(file);
        if let Err(remove_err) = std::fs::remove_file(path) {
            log::debug!("could not remove {}: '{remove_err}'", path.display());
        }
        return Err(e);
    }
    Ok(())
}
