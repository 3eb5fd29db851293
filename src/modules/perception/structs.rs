use serde::{Deserialize, Serialize};

/// Normalized article record. This is what handlers return to clients
/// and what the prompt builder reads. Every field is optional: the
/// provider omits fields freely depending on plan and source.
#[derive(Debug, Clone, Serialize)]
pub struct NewsArticle {
    #[serde(rename = "judul")]
    pub title: Option<String>,
    #[serde(rename = "sumber")]
    pub source: Option<String>,
    pub url: Option<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<String>,
    #[serde(rename = "ringkas")]
    pub summary: Option<String>,
}

/// Wire shape of the everything endpoint. Only `status` is required.
#[derive(Debug, Deserialize)]
pub struct EverythingResponse {
    pub status: String,
    #[serde(default, rename = "totalResults")]
    pub total_results: u64,
    #[serde(default)]
    pub articles: Vec<WireArticle>,
}

#[derive(Debug, Deserialize)]
pub struct WireArticle {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub source: Option<WireSource>,
    #[serde(default, rename = "publishedAt")]
    pub published_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct WireSource {
    #[serde(default)]
    pub name: Option<String>,
}

impl From<WireArticle> for NewsArticle {
    fn from(a: WireArticle) -> Self {
        Self {
            title: a.title,
            source: a.source.and_then(|s| s.name),
            url: a.url,
            published_at: a.published_at,
            summary: a.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_with_missing_fields_normalizes_to_absent() {
        let wire: WireArticle = serde_json::from_str(r#"{"title": "Judul saja"}"#).unwrap();
        let a = NewsArticle::from(wire);
        assert_eq!(a.title.as_deref(), Some("Judul saja"));
        assert!(a.source.is_none());
        assert!(a.url.is_none());
        assert!(a.published_at.is_none());
        assert!(a.summary.is_none());
    }

    #[test]
    fn source_name_is_flattened() {
        let wire: WireArticle =
            serde_json::from_str(r#"{"title": "t", "source": {"id": "kontan", "name": "Kontan"}}"#)
                .unwrap();
        let a = NewsArticle::from(wire);
        assert_eq!(a.source.as_deref(), Some("Kontan"));
    }

    #[test]
    fn serialized_article_keeps_wire_field_names() {
        let a = NewsArticle {
            title: Some("t".into()),
            source: None,
            url: Some("https://example.com".into()),
            published_at: Some("2025-08-01T00:00:00Z".into()),
            summary: None,
        };
        let v = serde_json::to_value(&a).unwrap();
        assert_eq!(v["judul"], "t");
        assert_eq!(v["publishedAt"], "2025-08-01T00:00:00Z");
        assert!(v["ringkas"].is_null());
    }
}
