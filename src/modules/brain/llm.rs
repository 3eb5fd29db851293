use reqwest::Client;
use serde_json::{json, Value};
use tracing::info;

use crate::error::{Result, ServiceError};

/// Fixed policy instruction sent with every generation call. The model
/// answers as a cautious, educational Indonesian finance assistant.
const SYSTEM_INSTRUCTION: &str = "\
Anda adalah asisten analitik keuangan & investasi yang berhati-hati dan edukatif.
Batasan penting:
- Ini bukan nasihat keuangan personal. Tekankan edukasi & alternatif skenario.
- Sertakan penjelasan risiko, asumsi, dan horizon waktu saat memberi rekomendasi umum.
- Jika pengguna menyebut tujuan, profil risiko, atau batasan, gunakan untuk mengkontekstualkan jawaban.
- Jika ada berita yang diikutkan, rangkum inti, dampak ke pasar/emetent/sektor, dan sebutkan tanggal sumber.
- Hindari kepastian berlebihan; gunakan probabilitas kualitatif (mis. rendah/sedang/tinggi) bila relevan.
- Gunakan bahasa Indonesia yang jelas dan ringkas.";

pub struct Advisor {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl Advisor {
    pub fn new(client: Client, api_key: String, base_url: String, model: String) -> Self {
        Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
        }
    }

    pub fn model_name(&self) -> &str {
        &self.model
    }

    /// One generateContent call, no retry. `segments` become the ordered
    /// parts of a single user turn; a lone string is just the one-part
    /// case. The response text is returned unmodified.
    pub async fn generate(&self, segments: &[String]) -> Result<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let parts: Vec<Value> = segments.iter().map(|s| json!({ "text": s })).collect();
        let body = json!({
            "system_instruction": { "parts": [{ "text": SYSTEM_INSTRUCTION }] },
            "contents": [{ "role": "user", "parts": parts }],
        });

        info!(
            "🧠 [Advisor] generate: {} segmen, model {}",
            segments.len(),
            self.model
        );

        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ServiceError::Generation(e.to_string()))?;

        if !resp.status().is_success() {
            let detail = resp.text().await.unwrap_or_default();
            return Err(ServiceError::Generation(detail));
        }

        let content: Value = resp
            .json()
            .await
            .map_err(|e| ServiceError::Generation(e.to_string()))?;

        Self::extract_text(&content).ok_or_else(|| {
            ServiceError::Generation(format!("respons model tidak berisi teks: {}", content))
        })
    }

    /// Candidate text may arrive split over several parts; concatenate
    /// them in order.
    fn extract_text(content: &Value) -> Option<String> {
        let parts = content["candidates"][0]["content"]["parts"].as_array()?;
        let text: String = parts.iter().filter_map(|p| p["text"].as_str()).collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_text_joins_multiple_parts() {
        let content = json!({
            "candidates": [{ "content": { "parts": [
                { "text": "Bagian satu. " },
                { "text": "Bagian dua." }
            ] } }]
        });
        assert_eq!(
            Advisor::extract_text(&content).as_deref(),
            Some("Bagian satu. Bagian dua.")
        );
    }

    #[test]
    fn extract_text_rejects_empty_candidates() {
        assert!(Advisor::extract_text(&json!({ "candidates": [] })).is_none());
        assert!(Advisor::extract_text(&json!({})).is_none());
        let blocked = json!({
            "candidates": [{ "content": { "parts": [] }, "finishReason": "SAFETY" }]
        });
        assert!(Advisor::extract_text(&blocked).is_none());
    }
}
