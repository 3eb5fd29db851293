use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use tracing::info;

use pakar_keuangan::api::{self, AppState};
use pakar_keuangan::config::{Secrets, ServiceProfile};
use pakar_keuangan::modules::brain::Advisor;
use pakar_keuangan::modules::perception::NewsSentinel;
use pakar_keuangan::utils::http_client::HttpClientFactory;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();
    info!("Starting AI Pakar Keuangan & Investasi...");

    // Missing keys abort here, before the listener opens.
    let profile = ServiceProfile::load().context("Failed to load service config")?;
    let secrets = Secrets::from_env()?;

    let news_client = HttpClientFactory::create()?;
    let llm_client = HttpClientFactory::create_llm()?;

    let news = NewsSentinel::new(news_client, secrets.newsapi_key, secrets.newsapi_base_url);
    let advisor = Advisor::new(
        llm_client,
        secrets.gemini_key,
        secrets.gemini_base_url,
        profile.model_name.clone(),
    );

    let state = Arc::new(AppState { news, advisor });
    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(&profile.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", profile.bind_addr))?;
    info!("✅ Model {} ready. Listening on http://{}", profile.model_name, profile.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
