use thiserror::Error;

/// Failures surfaced by the provider clients. The API layer decides the
/// HTTP status for each variant.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The news provider answered, but with a non-success payload.
    /// Carries the raw provider body.
    #[error("Gagal memuat berita: {0}")]
    UpstreamNews(String),

    /// The generation call failed: transport, quota, or a response with
    /// no usable text.
    #[error("Gagal memanggil Gemini: {0}")]
    Generation(String),

    /// Transport-level failure on the news path.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, ServiceError>;
