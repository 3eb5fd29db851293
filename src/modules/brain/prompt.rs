use serde::Deserialize;

use crate::modules::perception::NewsArticle;

/// Optional investor context attached to an analyze request. Only ever
/// used to shape prompt text.
#[derive(Debug, Clone, Deserialize)]
pub struct InvestorProfile {
    /// Toleransi risiko: rendah/sedang/tinggi
    pub risiko: Option<String>,
    /// Horizon investasi dalam bulan
    pub horizon_bulan: Option<u32>,
    /// Fokus: mis. saham, obligasi, ETF, kripto, properti
    pub fokus: Option<String>,
}

/// Digest of retrieved articles for the model to read. One enumerated
/// line per article, input order, 1-indexed.
pub fn build_news_context(articles: &[NewsArticle]) -> String {
    if articles.is_empty() {
        return "Tidak ada artikel relevan yang ditemukan dalam jangka waktu yang ditentukan."
            .to_string();
    }

    let mut lines = vec!["Artikel Berita Terkait (ringkasan singkat):".to_string()];
    for (i, a) in articles.iter().enumerate() {
        lines.push(format!(
            "{}. [{}]({}) — {} — {}\n   Ringkas: {}",
            i + 1,
            a.title.as_deref().unwrap_or("-"),
            a.url.as_deref().unwrap_or("-"),
            a.source.as_deref().unwrap_or("-"),
            a.published_at.as_deref().unwrap_or(""),
            a.summary.as_deref().unwrap_or("-"),
        ));
    }
    lines.join("\n")
}

/// Ordered prompt segments: profile (when given), news context, task
/// instructions, then the user question. The question segment is always
/// present and always last.
pub fn build_prompt(
    question: &str,
    profile: Option<&InvestorProfile>,
    news_ctx: &str,
) -> Vec<String> {
    let mut parts = Vec::new();

    if let Some(p) = profile {
        parts.push(format!(
            "Profil Investor:\n- Risiko: {}\n- Horizon (bulan): {}\n- Fokus: {}\n",
            p.risiko.as_deref().unwrap_or("-"),
            p.horizon_bulan
                .map(|h| h.to_string())
                .unwrap_or_else(|| "-".to_string()),
            p.fokus.as_deref().unwrap_or("-"),
        ));
    }

    parts.push(news_ctx.to_string());
    parts.push(
        "Tugas:\n\
         - Jawab pertanyaan pengguna di bawah ini.\n\
         - Gunakan konteks berita di atas jika relevan.\n\
         - Sertakan langkah analisis ringkas, poin risiko, dan opsi alternatif.\n\
         - Akhiri dengan ringkasan eksekutif (3–5 poin bullet).\n\
         - Tambahkan penafian singkat bahwa ini bukan nasihat keuangan personal.\n"
            .to_string(),
    );
    parts.push(format!("Pertanyaan Pengguna: {}", question));

    parts
}

/// Instruction for the question-suggestion endpoint, with an optional
/// focus clause.
pub fn build_suggestion_prompt(topik: Option<&str>) -> String {
    let mut prompt = String::from(
        "Buat 8 pertanyaan tajam seputar keuangan/investasi untuk membantu analisis. \
         Variasikan dari makro, sektor, emiten, manajemen risiko, dan perencanaan keuangan. ",
    );
    if let Some(t) = topik {
        prompt.push_str(&format!("Fokus utama: {}. ", t));
    }
    prompt
}

/// Model output arrives as a loose bullet list. Keep the non-empty
/// lines with bullet, dash, and space characters trimmed off the edges.
pub fn parse_suggestions(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| {
            line.trim_matches(|c: char| c == '-' || c == '•' || c.is_whitespace())
                .to_string()
        })
        .filter(|line| !line.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artikel(judul: &str, ringkas: Option<&str>) -> NewsArticle {
        NewsArticle {
            title: Some(judul.to_string()),
            source: Some("Kontan".to_string()),
            url: Some("https://example.com/a".to_string()),
            published_at: Some("2025-08-01T07:00:00Z".to_string()),
            summary: ringkas.map(|s| s.to_string()),
        }
    }

    #[test]
    fn empty_article_list_uses_fixed_sentence() {
        assert_eq!(
            build_news_context(&[]),
            "Tidak ada artikel relevan yang ditemukan dalam jangka waktu yang ditentukan."
        );
    }

    #[test]
    fn articles_are_enumerated_in_input_order() {
        let ctx = build_news_context(&[
            artikel("IHSG menguat", Some("Indeks naik tipis")),
            artikel("Rupiah stabil", None),
        ]);
        let lines: Vec<&str> = ctx.lines().collect();
        assert_eq!(lines[0], "Artikel Berita Terkait (ringkasan singkat):");
        assert_eq!(
            lines[1],
            "1. [IHSG menguat](https://example.com/a) — Kontan — 2025-08-01T07:00:00Z"
        );
        assert_eq!(lines[2], "   Ringkas: Indeks naik tipis");
        assert!(lines[3].starts_with("2. [Rupiah stabil]"));
        assert_eq!(lines[4], "   Ringkas: -");
    }

    #[test]
    fn missing_article_fields_fall_back_to_placeholders() {
        let kosong = NewsArticle {
            title: None,
            source: None,
            url: None,
            published_at: None,
            summary: None,
        };
        let ctx = build_news_context(&[kosong]);
        assert!(ctx.contains("1. [-](-) — - — "));
        assert!(ctx.contains("   Ringkas: -"));
    }

    #[test]
    fn prompt_always_ends_with_question_segment() {
        let question = "Apakah saham perbankan menarik?";
        let expected = format!("Pertanyaan Pengguna: {}", question);

        let without_profile = build_prompt(question, None, "ctx");
        assert_eq!(without_profile.len(), 3);
        assert_eq!(without_profile.last().unwrap(), &expected);

        let profil = InvestorProfile {
            risiko: Some("rendah".to_string()),
            horizon_bulan: Some(24),
            fokus: Some("obligasi".to_string()),
        };
        let with_profile = build_prompt(question, Some(&profil), "ctx");
        assert_eq!(with_profile.len(), 4);
        assert_eq!(with_profile.last().unwrap(), &expected);
    }

    #[test]
    fn profile_segment_substitutes_placeholders() {
        let profil = InvestorProfile {
            risiko: None,
            horizon_bulan: Some(12),
            fokus: None,
        };
        let parts = build_prompt("q", Some(&profil), "ctx");
        assert_eq!(
            parts[0],
            "Profil Investor:\n- Risiko: -\n- Horizon (bulan): 12\n- Fokus: -\n"
        );
        assert_eq!(parts[1], "ctx");
    }

    #[test]
    fn suggestion_prompt_appends_focus_clause_when_given() {
        assert!(build_suggestion_prompt(None).ends_with("perencanaan keuangan. "));
        assert!(build_suggestion_prompt(Some("obligasi")).ends_with("Fokus utama: obligasi. "));
    }

    #[test]
    fn suggestions_strip_bullets_and_drop_empty_lines() {
        let raw = "- Apa dampak inflasi terhadap obligasi?\n\n• Bagaimana prospek IHSG kuartal ini?\n   - Kapan sebaiknya rebalancing?  \n\n";
        assert_eq!(
            parse_suggestions(raw),
            vec![
                "Apa dampak inflasi terhadap obligasi?",
                "Bagaimana prospek IHSG kuartal ini?",
                "Kapan sebaiknya rebalancing?"
            ]
        );
    }
}
