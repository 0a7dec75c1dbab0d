//! settings for a single run

use std::{path::PathBuf, time::Duration};

use crate::{
    selection::{InvalidWeight, Selection},
    Args, CancelToken,
};

pub const DEFAULT_API_URL: &str = "https://api.fontsource.org/v1/fonts";
pub const DEFAULT_CDN_URL: &str = "https://cdn.jsdelivr.net";
/// Name of the manifest written into the output directory
pub const MANIFEST_FILE: &str = "fonts.json";
/// Permissions for every file we create (unix only)
pub const FILE_MODE: u32 = 0o644;

/// Everything a run needs, resolved from the command line
#[derive(Clone, Debug)]
pub struct Config {
    pub out_dir: PathBuf,
    pub api_url: String,
    pub cdn_url: String,
    pub selection: Selection,
    /// Weights dropped from the selection because they didn't parse
    pub invalid_weights: Vec<InvalidWeight>,
    pub deadline: Option<Duration>,
    pub progress: bool,
}

impl Config {
    pub fn from_args(args: &Args) -> Self {
        let (selection, invalid_weights) =
            Selection::parse(&args.formats, &args.weights, &args.styles, &args.subsets);
        Config {
            out_dir: args.out_dir(),
            api_url: args.api_url.clone(),
            cdn_url: args.cdn_url.clone(),
            selection,
            invalid_weights,
            deadline: args.deadline.map(Duration::from_secs),
            progress: args.progress,
        }
    }

    /// A config with the default endpoints and no deadline.
    pub fn new(out_dir: impl Into<PathBuf>, selection: Selection) -> Self {
        Config {
            out_dir: out_dir.into(),
            api_url: DEFAULT_API_URL.to_owned(),
            cdn_url: DEFAULT_CDN_URL.to_owned(),
            selection,
            invalid_weights: Vec::new(),
            deadline: None,
            progress: false,
        }
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.out_dir.join(MANIFEST_FILE)
    }

    /// A fresh token, expiring at the deadline if there is one.
    pub fn cancel_token(&self) -> CancelToken {
        match self.deadline {
            Some(limit) => CancelToken::with_deadline(limit),
            None => CancelToken::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn from_args() {
        let args = Args::try_parse_from([
            "fontsource-downloader",
            "--out",
            "out",
            "--weights",
            "400,abc,700",
            "--deadline",
            "30",
        ])
        .unwrap();
        let config = Config::from_args(&args);
        assert_eq!(config.selection.weights, vec![400, 700]);
        assert_eq!(config.selection.formats, vec!["woff2", "woff"]);
        assert_eq!(config.invalid_weights.len(), 1);
        assert_eq!(config.deadline, Some(Duration::from_secs(30)));
        assert_eq!(config.manifest_path(), PathBuf::from("out").join("fonts.json"));
    }

    #[test]
    fn huge_deadline() {
        let args = Args::try_parse_from([
            "fontsource-downloader",
            "--out",
            "out",
            "--deadline",
            "18446744073709551615",
        ])
        .unwrap();
        let cancel = Config::from_args(&args).cancel_token();
        assert!(!cancel.is_cancelled());
    }
}
