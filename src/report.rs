//! what happened during a run, for whoever is watching

use std::{fmt::Display, path::Path};

use kdam::BarExt;
use log::Level;

use crate::{error::VariantError, selection::InvalidWeight, Summary};

/// Something noteworthy that happened during a run.
///
/// The downloader emits these instead of logging directly; a [`Reporter`]
/// decides what to do with them.
#[derive(Debug)]
pub enum Event<'a> {
    InvalidWeight(&'a InvalidWeight),
    FetchingCatalog { url: &'a str },
    CatalogFetched { fonts: usize },
    FontStarted { id: &'a str },
    VariantRequested { url: &'a str },
    VariantDownloaded { file_name: &'a str },
    VariantFailed { url: &'a str, error: &'a VariantError },
    FontFinished { id: &'a str, downloaded: usize },
    ManifestWritten { path: &'a Path, fonts: usize },
    NothingDownloaded,
    Finished(&'a Summary),
}

impl Event<'_> {
    /// How loudly this event should be reported.
    pub fn level(&self) -> Level {
        match self {
            Event::InvalidWeight(_) | Event::VariantFailed { .. } => Level::Warn,
            Event::VariantRequested { .. } | Event::FontFinished { .. } => Level::Debug,
            _ => Level::Info,
        }
    }
}

impl Display for Event<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Event::InvalidWeight(bad) => {
                write!(f, "skipping invalid weight '{}': {}", bad.value, bad.error)
            }
            Event::FetchingCatalog { url } => write!(f, "fetching fonts from {url}"),
            Event::CatalogFetched { fonts } => write!(f, "catalog lists {fonts} fonts"),
            Event::FontStarted { id } => write!(f, "downloading font '{id}'"),
            Event::VariantRequested { url } => write!(f, "GET {url}"),
            Event::VariantDownloaded { file_name } => write!(f, "downloaded {file_name}"),
            Event::VariantFailed { url, error } => write!(f, "{url}: {error}"),
            Event::FontFinished { id, downloaded } => {
                write!(f, "finished '{id}', {downloaded} variants")
            }
            Event::ManifestWritten { path, fonts } => {
                write!(f, "wrote {fonts} fonts to {}", path.display())
            }
            Event::NothingDownloaded => f.write_str("nothing downloaded, skipping manifest"),
            Event::Finished(summary) => write!(
                f,
                "done: {} of {} fonts, {} files downloaded, {} attempts failed",
                summary.fonts_downloaded,
                summary.fonts_in_catalog,
                summary.variants_downloaded,
                summary.variants_failed
            ),
        }
    }
}

/// Receives the events of a run.
pub trait Reporter {
    fn report(&mut self, event: Event<'_>);
}

/// Forwards every event to the `log` facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&mut self, event: Event<'_>) {
        log::log!(event.level(), "{event}");
    }
}

/// Draws a progress bar over the fonts in the catalog.
///
/// Warnings are written above the bar; routine events only move it.
#[derive(Default)]
pub struct ProgressReporter {
    bar: Option<kdam::Bar>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Reporter for ProgressReporter {
    fn report(&mut self, event: Event<'_>) {
        match &event {
            Event::CatalogFetched { fonts } => {
                self.bar = Some(kdam::tqdm!(
                    total = *fonts,
                    desc = "fonts",
                    bar_format = "{desc}|{animation}| {count}/{total}"
                ));
            }
            Event::FontFinished { .. } => {
                if let Some(bar) = self.bar.as_mut() {
                    if let Err(e) = bar.update(1) {
                        log::debug!("could not update progress bar: '{e}'");
                    }
                }
            }
            Event::Finished(_) => {
                if self.bar.take().is_some() {
                    eprintln!();
                }
                log::info!("{event}");
            }
            _ if event.level() <= Level::Warn => match self.bar.as_mut() {
                Some(bar) => {
                    if let Err(e) = bar.write(event.to_string()) {
                        log::debug!("could not write above progress bar: '{e}'");
                    }
                }
                None => log::log!(event.level(), "{event}"),
            },
            _ => (),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failures_are_warnings() {
        let error = VariantError::UnexpectedStatus(404);
        let event = Event::VariantFailed {
            url: "https://example.com/a.woff2",
            error: &error,
        };
        assert_eq!(event.level(), Level::Warn);
        assert_eq!(
            event.to_string(),
            "https://example.com/a.woff2: unexpected status code: 404"
        );
        assert_eq!(Event::VariantRequested { url: "x" }.level(), Level::Debug);
        assert_eq!(Event::CatalogFetched { fonts: 3 }.level(), Level::Info);
    }

    #[test]
    fn progress_bar_lives_for_one_run() {
        let mut reporter = ProgressReporter::new();
        let error = VariantError::UnexpectedStatus(404);
        reporter.report(Event::CatalogFetched { fonts: 2 });
        assert!(reporter.bar.is_some());

        reporter.report(Event::VariantFailed {
            url: "https://example.com/a.woff2",
            error: &error,
        });
        reporter.report(Event::FontFinished {
            id: "roboto",
            downloaded: 0,
        });
        reporter.report(Event::Finished(&Summary::default()));
        assert!(reporter.bar.is_none());
    }
}
