//! the list of fonts published by the Fontsource API

use crate::{cancel::CancelToken, error::CatalogError, http::HttpClient};

/// One entry in the catalog.
///
/// This describes what a font *supports*; it is not consulted when deciding
/// which variants to request.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontDescriptor {
    pub id: String,
    pub family: String,
    #[serde(default)]
    pub subsets: Vec<String>,
    #[serde(default)]
    pub weights: Vec<u16>,
    #[serde(default)]
    pub styles: Vec<String>,
    #[serde(default)]
    pub def_subset: String,
    #[serde(default)]
    pub variable: bool,
    #[serde(default)]
    pub last_modified: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub license: String,
    #[serde(rename = "type", default)]
    pub font_type: String,
}

/// Fetch every font in the catalog at `url`, in the order the API lists them.
///
/// This makes a single request and does not retry.
pub fn fetch_catalog(
    client: &impl HttpClient,
    url: &str,
    cancel: &CancelToken,
) -> Result<Vec<FontDescriptor>, CatalogError> {
    let resp = client.get(url, Some("application/json"), cancel)?;
    if resp.status != 200 {
        return Err(CatalogError::UnexpectedStatus(resp.status));
    }
    let reader = std::io::BufReader::new(resp.into_reader());
    // an unreadable body surfaces as an io error inside serde_json
    serde_json::from_reader(reader).map_err(|e| {
        if e.is_io() {
            CatalogError::Transport(e.to_string())
        } else {
            CatalogError::Decode(e)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::FakeClient;

    static URL: &str = "https://api.fontsource.org/v1/fonts";

    static CATALOG: &str = r#"[
        {
            "id": "roboto",
            "family": "Roboto",
            "subsets": ["cyrillic", "latin"],
            "weights": [100, 400, 700],
            "styles": ["italic", "normal"],
            "defSubset": "latin",
            "variable": true,
            "lastModified": "2024-02-29",
            "category": "sans-serif",
            "license": "OFL-1.1",
            "type": "google"
        },
        {
            "id": "abeezee",
            "family": "ABeeZee",
            "subsets": ["latin"],
            "weights": [400],
            "styles": ["normal"],
            "defSubset": "latin",
            "variable": false,
            "lastModified": "2022-09-22",
            "category": "sans-serif",
            "license": "OFL-1.1",
            "type": "google",
            "version": "v22"
        }
    ]"#;

    #[test]
    fn parse_catalog() {
        let client = FakeClient::default().with(URL, 200, CATALOG);
        let fonts = fetch_catalog(&client, URL, &CancelToken::new()).unwrap();
        assert_eq!(fonts.len(), 2);
        assert_eq!(fonts[0].id, "roboto");
        assert_eq!(fonts[0].weights, vec![100, 400, 700]);
        assert_eq!(fonts[0].def_subset, "latin");
        assert!(fonts[0].variable);
        assert_eq!(fonts[0].font_type, "google");
        assert_eq!(fonts[1].family, "ABeeZee");
    }

    #[test]
    fn unexpected_status() {
        let client = FakeClient::default().with(URL, 503, "");
        assert!(matches!(
            fetch_catalog(&client, URL, &CancelToken::new()),
            Err(CatalogError::UnexpectedStatus(503))
        ));
    }

    #[test]
    fn bad_json() {
        let client = FakeClient::default().with(URL, 200, r#"{"fonts": []}"#);
        assert!(matches!(
            fetch_catalog(&client, URL, &CancelToken::new()),
            Err(CatalogError::Decode(_))
        ));
    }

    #[test]
    fn cancelled_before_request() {
        let client = FakeClient::default().with(URL, 200, CATALOG);
        let cancel = CancelToken::new();
        cancel.cancel();
        assert!(matches!(fetch_catalog(&client, URL, &cancel), Err(CatalogError::Cancelled)));
        assert!(client.requested().is_empty());
    }
}
