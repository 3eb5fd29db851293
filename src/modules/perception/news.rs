use chrono::{Duration, Local};
use reqwest::Client;
use serde_json::Value;
use tracing::info;

use super::structs::{EverythingResponse, NewsArticle};
use crate::error::{Result, ServiceError};

/// Filters for one everything-endpoint call.
#[derive(Debug, Clone, Default)]
pub struct EverythingParams {
    pub q: String,
    pub language: String,
    pub from: Option<String>,
    pub to: Option<String>,
    pub page: u32,
    pub page_size: u32,
}

pub struct NewsSentinel {
    client: Client,
    api_key: String,
    base_url: String,
}

impl NewsSentinel {
    pub fn new(client: Client, api_key: String, base_url: String) -> Self {
        Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Articles from the last `lookback_days` days, newest first.
    /// Always page 1; the analyze flow never paginates.
    pub async fn fetch_recent(
        &self,
        q: &str,
        language: &str,
        lookback_days: i64,
        page_size: u32,
    ) -> Result<Vec<NewsArticle>> {
        let today = Local::now().date_naive();
        let from = today - Duration::days(lookback_days);

        let res = self
            .everything(&EverythingParams {
                q: q.to_string(),
                language: language.to_string(),
                from: Some(from.format("%Y-%m-%d").to_string()),
                to: Some(today.format("%Y-%m-%d").to_string()),
                page: 1,
                page_size,
            })
            .await?;

        Ok(res.articles.into_iter().map(NewsArticle::from).collect())
    }

    /// One provider call, no retry. A non-success payload surfaces as
    /// `UpstreamNews` with the raw provider body attached so the caller
    /// can forward it as detail.
    pub async fn everything(&self, params: &EverythingParams) -> Result<EverythingResponse> {
        let url = format!("{}/v2/everything", self.base_url);

        let mut query: Vec<(&str, String)> = vec![
            ("q", params.q.clone()),
            ("language", params.language.clone()),
            ("sortBy", "publishedAt".to_string()),
            ("page", params.page.to_string()),
            ("pageSize", params.page_size.to_string()),
        ];
        if let Some(from) = &params.from {
            query.push(("from", from.clone()));
        }
        if let Some(to) = &params.to {
            query.push(("to", to.clone()));
        }

        info!(
            "📰 [NewsSentinel] everything q={:?} page={} size={}",
            params.q, params.page, params.page_size
        );

        let resp = self
            .client
            .get(&url)
            .header("X-Api-Key", &self.api_key)
            .query(&query)
            .send()
            .await?;

        if !resp.status().is_success() {
            let raw = resp.text().await.unwrap_or_default();
            return Err(ServiceError::UpstreamNews(raw));
        }

        let body: Value = resp.json().await?;
        if body["status"].as_str() != Some("ok") {
            return Err(ServiceError::UpstreamNews(body.to_string()));
        }

        serde_json::from_value(body).map_err(|e| ServiceError::UpstreamNews(e.to_string()))
    }
}
