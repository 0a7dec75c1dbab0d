//! which variants of each font to request

use std::num::ParseIntError;

/// The formats, weights, styles and subsets requested for every font.
///
/// Every combination is attempted, regardless of what the catalog says a
/// font supports; the CDN decides what exists.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub formats: Vec<String>,
    pub weights: Vec<u16>,
    pub styles: Vec<String>,
    pub subsets: Vec<String>,
}

/// A weight that could not be parsed, and was left out of the selection
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidWeight {
    pub value: String,
    pub error: ParseIntError,
}

/// One concrete file of a font
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Variant<'a> {
    pub format: &'a str,
    pub weight: u16,
    pub style: &'a str,
    pub subset: &'a str,
}

impl Selection {
    /// Parse the four comma separated lists.
    ///
    /// Weights that aren't integers are dropped and returned alongside the
    /// selection so the caller can report them.
    pub fn parse(
        formats: &str,
        weights: &str,
        styles: &str,
        subsets: &str,
    ) -> (Self, Vec<InvalidWeight>) {
        let mut invalid = Vec::new();
        let weights = weights
            .split(',')
            .filter_map(|value| match value.parse() {
                Ok(weight) => Some(weight),
                Err(error) => {
                    invalid.push(InvalidWeight {
                        value: value.to_owned(),
                        error,
                    });
                    None
                }
            })
            .collect();
        let selection = Selection {
            formats: split(formats),
            weights,
            styles: split(styles),
            subsets: split(subsets),
        };
        (selection, invalid)
    }

    /// The number of variants attempted per font.
    pub fn len(&self) -> usize {
        self.formats.len() * self.weights.len() * self.styles.len() * self.subsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every combination, format outermost and subset innermost.
    pub fn variants(&self) -> impl Iterator<Item = Variant<'_>> {
        self.formats.iter().flat_map(move |format| {
            self.weights.iter().flat_map(move |&weight| {
                self.styles.iter().flat_map(move |style| {
                    self.subsets.iter().map(move |subset| Variant {
                        format,
                        weight,
                        style,
                        subset,
                    })
                })
            })
        })
    }
}

impl Variant<'_> {
    /// `{cdn_base}/fontsource/fonts/{font_id}@latest/{subset}-{weight}-{style}.{format}`
    pub fn url(&self, cdn_base: &str, font_id: &str) -> String {
        let cdn_base = cdn_base.trim_end_matches('/');
        format!(
            "{cdn_base}/fontsource/fonts/{font_id}@latest/{}-{}-{}.{}",
            self.subset, self.weight, self.style, self.format
        )
    }

    /// `{font_id}-{subset}-{weight}-{style}.{format}`
    pub fn file_name(&self, font_id: &str) -> String {
        format!(
            "{font_id}-{}-{}-{}.{}",
            self.subset, self.weight, self.style, self.format
        )
    }
}

fn split(list: &str) -> Vec<String> {
    list.split(',').map(str::to_owned).collect()
}
