use serde::{Deserialize, Serialize};

use crate::modules::brain::prompt::InvestorProfile;
use crate::modules::perception::NewsArticle;

/// General-market query used when a request names no keyword and no
/// tickers.
pub const FALLBACK_NEWS_QUERY: &str = "ekonomi OR pasar saham OR IHSG";

fn default_bahasa() -> String {
    "id".to_string()
}

fn default_hari_kebelakang() -> i64 {
    7
}

fn default_halaman() -> u32 {
    1
}

/// Body of POST /analyze. Field names are the wire contract.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub pertanyaan: String,
    #[serde(default)]
    pub tickers: Option<Vec<String>>,
    #[serde(default)]
    pub kata_kunci: Option<String>,
    #[serde(default = "default_hari_kebelakang")]
    pub hari_kebelakang: i64,
    #[serde(default = "default_bahasa")]
    pub bahasa: String,
    #[serde(default)]
    pub profil: Option<InvestorProfile>,
}

impl AnalyzeRequest {
    /// Range checks. Runs before any provider call; every violated
    /// constraint is reported.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut issues = Vec::new();

        if self.pertanyaan.trim().is_empty() {
            issues.push("pertanyaan tidak boleh kosong".to_string());
        }
        if !(1..=30).contains(&self.hari_kebelakang) {
            issues.push("hari_kebelakang harus di antara 1 dan 30".to_string());
        }
        if let Some(profil) = &self.profil {
            if profil.horizon_bulan == Some(0) {
                issues.push("profil.horizon_bulan harus minimal 1".to_string());
            }
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(issues)
        }
    }

    /// News search string: keyword first, then tickers, OR-joined.
    /// Falls back to the fixed general-market query when both are
    /// absent or empty.
    pub fn news_query(&self) -> String {
        let mut terms: Vec<String> = Vec::new();

        if let Some(kata_kunci) = &self.kata_kunci {
            if !kata_kunci.is_empty() {
                terms.push(kata_kunci.clone());
            }
        }
        if let Some(tickers) = &self.tickers {
            terms.extend(tickers.iter().filter(|t| !t.is_empty()).cloned());
        }

        if terms.is_empty() {
            FALLBACK_NEWS_QUERY.to_string()
        } else {
            terms.join(" OR ")
        }
    }
}

/// Body of POST /news.
#[derive(Debug, Deserialize)]
pub struct NewsQuery {
    pub q: String,
    /// YYYY-MM-DD, passed through to the provider unvalidated
    #[serde(default)]
    pub dari: Option<String>,
    #[serde(default)]
    pub sampai: Option<String>,
    #[serde(default = "default_bahasa")]
    pub bahasa: String,
    #[serde(default = "default_halaman")]
    pub halaman: u32,
}

impl NewsQuery {
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut issues = Vec::new();

        if self.q.trim().is_empty() {
            issues.push("q tidak boleh kosong".to_string());
        }
        if !(1..=5).contains(&self.halaman) {
            issues.push("halaman harus di antara 1 dan 5".to_string());
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(issues)
        }
    }
}

/// Query string of GET /suggest-questions.
#[derive(Debug, Deserialize)]
pub struct SuggestParams {
    #[serde(default)]
    pub topik: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub model: String,
    pub endpoints: Vec<&'static str>,
    pub disclaimer: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub query: String,
    pub news_query: String,
    pub articles_count: usize,
    pub answer: String,
    pub disclaimer: &'static str,
}

#[derive(Debug, Serialize)]
pub struct NewsResponse {
    pub total: u64,
    pub articles: Vec<NewsArticle>,
}

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn analyze(body: serde_json::Value) -> AnalyzeRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn news_query_falls_back_to_general_market() {
        let req = analyze(json!({ "pertanyaan": "Bagaimana kondisi pasar?" }));
        assert_eq!(req.news_query(), FALLBACK_NEWS_QUERY);

        let kosong = analyze(json!({ "pertanyaan": "x", "tickers": [], "kata_kunci": "" }));
        assert_eq!(kosong.news_query(), FALLBACK_NEWS_QUERY);
    }

    #[test]
    fn news_query_joins_keyword_then_tickers() {
        let req = analyze(json!({
            "pertanyaan": "x",
            "tickers": ["BBCA", "TLKM"],
            "kata_kunci": "inflasi"
        }));
        assert_eq!(req.news_query(), "inflasi OR BBCA OR TLKM");
    }

    #[test]
    fn analyze_defaults_are_applied() {
        let req = analyze(json!({ "pertanyaan": "x" }));
        assert_eq!(req.hari_kebelakang, 7);
        assert_eq!(req.bahasa, "id");
        assert!(req.tickers.is_none());
        assert!(req.profil.is_none());
    }

    #[test]
    fn lookback_outside_range_is_rejected() {
        for hari in [0, 31, -3] {
            let req = analyze(json!({ "pertanyaan": "x", "hari_kebelakang": hari }));
            assert!(req.validate().is_err(), "hari_kebelakang={} lolos", hari);
        }
        for hari in [1, 7, 30] {
            let req = analyze(json!({ "pertanyaan": "x", "hari_kebelakang": hari }));
            assert!(req.validate().is_ok(), "hari_kebelakang={} ditolak", hari);
        }
    }

    #[test]
    fn empty_question_is_rejected() {
        let req = analyze(json!({ "pertanyaan": "   " }));
        let issues = req.validate().unwrap_err();
        assert!(issues.iter().any(|i| i.contains("pertanyaan")));
    }

    #[test]
    fn halaman_outside_range_is_rejected() {
        let q: NewsQuery = serde_json::from_value(json!({ "q": "IHSG", "halaman": 6 })).unwrap();
        assert!(q.validate().is_err());

        let q: NewsQuery = serde_json::from_value(json!({ "q": "IHSG" })).unwrap();
        assert_eq!(q.halaman, 1);
        assert_eq!(q.bahasa, "id");
        assert!(q.validate().is_ok());
    }
}
