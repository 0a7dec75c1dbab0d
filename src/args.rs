//! CLI args

use std::path::PathBuf;

use clap::builder::NonEmptyStringValueParser;

use crate::config::{DEFAULT_API_URL, DEFAULT_CDN_URL};

#[derive(Clone, Debug, clap::Parser)]
#[command(version, about)]
pub struct Args {
    /// Directory downloaded font files and the manifest are written to
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub out: String,
    /// Font formats, comma separated
    #[arg(long, default_value = "woff2,woff", value_parser = NonEmptyStringValueParser::new())]
    pub formats: String,
    /// Font weights, comma separated
    #[arg(long, default_value = "400", value_parser = NonEmptyStringValueParser::new())]
    pub weights: String,
    /// Font styles, comma separated
    #[arg(long, default_value = "normal", value_parser = NonEmptyStringValueParser::new())]
    pub styles: String,
    /// Font subsets, comma separated
    #[arg(long, default_value = "latin", value_parser = NonEmptyStringValueParser::new())]
    pub subsets: String,
    /// Catalog endpoint listing every available font
    #[arg(long, default_value = DEFAULT_API_URL, value_parser = NonEmptyStringValueParser::new())]
    pub api_url: String,
    /// Base url of the CDN serving font files
    #[arg(long, default_value = DEFAULT_CDN_URL, value_parser = NonEmptyStringValueParser::new())]
    pub cdn_url: String,
    /// Give up on the whole run after this many seconds
    #[arg(long, value_name = "SECS")]
    pub deadline: Option<u64>,
    /// Show a progress bar instead of per-font log lines
    #[arg(long)]
    pub progress: bool,
}

impl Args {
    /// The output directory as a path.
    pub fn out_dir(&self) -> PathBuf {
        PathBuf::from(&self.out)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["fontsource-downloader", "--out", "fonts"]).unwrap();
        assert_eq!(args.out_dir(), PathBuf::from("fonts"));
        assert_eq!(args.formats, "woff2,woff");
        assert_eq!(args.weights, "400");
        assert_eq!(args.styles, "normal");
        assert_eq!(args.subsets, "latin");
        assert_eq!(args.api_url, DEFAULT_API_URL);
        assert_eq!(args.cdn_url, DEFAULT_CDN_URL);
        assert_eq!(args.deadline, None);
        assert!(!args.progress);
    }

    #[test]
    fn out_is_required() {
        assert!(Args::try_parse_from(["fontsource-downloader"]).is_err());
        assert!(Args::try_parse_from(["fontsource-downloader", "--out", ""]).is_err());
    }

    #[test]
    fn blank_selection_is_rejected() {
        for flag in ["--formats", "--weights", "--styles", "--subsets"] {
            let result = Args::try_parse_from(["fontsource-downloader", "--out", "x", flag, ""]);
            assert!(result.is_err(), "{flag} accepted an empty value");
        }
    }
}
