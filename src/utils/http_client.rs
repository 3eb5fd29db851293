use anyhow::Result;
use reqwest::Client;
use std::time::Duration;

pub struct HttpClientFactory;

impl HttpClientFactory {
    /// Client for the news provider. Search calls return fast, so keep
    /// timeouts tight and reuse pooled connections.
    pub fn create() -> Result<Client> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Some(Duration::from_secs(30)))
            .build()?;
        Ok(client)
    }

    /// Client for the generation provider. A model response can take
    /// minutes on long prompts, so the total timeout is much wider.
    pub fn create_llm() -> Result<Client> {
        let client = Client::builder()
            .timeout(Duration::from_secs(300))
            .connect_timeout(Duration::from_secs(30))
            .build()?;
        Ok(client)
    }
}
