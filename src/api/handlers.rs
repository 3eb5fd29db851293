use axum::extract::{Query, State};
use axum::Json;
use tracing::info;

use super::error::ApiError;
use super::schemas::{
    AnalyzeRequest, AnalyzeResponse, HealthResponse, NewsQuery, NewsResponse, ServiceInfo,
    SuggestParams, SuggestionsResponse,
};
use super::state::SharedState;
use crate::modules::brain::prompt;
use crate::modules::perception::EverythingParams;

pub const SERVICE_NAME: &str = "AI Pakar Keuangan & Investasi";
pub const ROOT_DISCLAIMER: &str = "Informasi bersifat edukatif, bukan nasihat keuangan personal.";
pub const ANALYZE_DISCLAIMER: &str =
    "Konten untuk tujuan edukasi. Lakukan riset mandiri & konsultasi penasihat berizin.";

const ANALYZE_PAGE_SIZE: u32 = 8;
const NEWS_PAGE_SIZE: u32 = 20;

/// GET / - static service metadata
pub async fn root(State(state): State<SharedState>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        name: SERVICE_NAME,
        model: state.advisor.model_name().to_string(),
        endpoints: vec!["/analyze", "/news", "/suggest-questions"],
        disclaimer: ROOT_DISCLAIMER,
    })
}

/// GET /health - liveness probe
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// POST /analyze - news retrieval, prompt assembly, one generation call
pub async fn analyze(
    State(state): State<SharedState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    req.validate()
        .map_err(|issues| ApiError::BadRequest(issues.join(", ")))?;

    let news_query = req.news_query();
    let articles = state
        .news
        .fetch_recent(&news_query, &req.bahasa, req.hari_kebelakang, ANALYZE_PAGE_SIZE)
        .await?;
    let news_ctx = prompt::build_news_context(&articles);

    let parts = prompt::build_prompt(&req.pertanyaan, req.profil.as_ref(), &news_ctx);
    let answer = state.advisor.generate(&parts).await?;

    info!(
        "✅ analyze: {} artikel, jawaban {} karakter",
        articles.len(),
        answer.len()
    );

    Ok(Json(AnalyzeResponse {
        query: req.pertanyaan,
        news_query,
        articles_count: articles.len(),
        answer,
        disclaimer: ANALYZE_DISCLAIMER,
    }))
}

/// POST /news - raw provider search with pass-through filters
pub async fn news(
    State(state): State<SharedState>,
    Json(query): Json<NewsQuery>,
) -> Result<Json<NewsResponse>, ApiError> {
    query
        .validate()
        .map_err(|issues| ApiError::BadRequest(issues.join(", ")))?;

    let res = state
        .news
        .everything(&EverythingParams {
            q: query.q,
            language: query.bahasa,
            from: query.dari,
            to: query.sampai,
            page: query.halaman,
            page_size: NEWS_PAGE_SIZE,
        })
        .await?;

    Ok(Json(NewsResponse {
        total: res.total_results,
        articles: res.articles.into_iter().map(Into::into).collect(),
    }))
}

/// GET /suggest-questions - model-generated question list
pub async fn suggest_questions(
    State(state): State<SharedState>,
    Query(params): Query<SuggestParams>,
) -> Result<Json<SuggestionsResponse>, ApiError> {
    let prompt_text = prompt::build_suggestion_prompt(params.topik.as_deref());
    let text = state.advisor.generate(&[prompt_text]).await?;

    Ok(Json(SuggestionsResponse {
        suggestions: prompt::parse_suggestions(&text),
    }))
}
