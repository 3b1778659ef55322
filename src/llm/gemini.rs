//! Gemini CLASSIFY gateway — one non-streaming round trip per item.
//!
//! Google AI `generateContent` endpoint, API key in URL query param.
//! Any failure is terminal for the request: nothing is retried, nothing is
//! cached, and each invocation is fully independent.

use super::parse::parse_classification;
use super::prompts::{self, CLASSIFY_MAX_TOKENS, CLASSIFY_SYSTEM_PROMPT};
use super::provider;
use super::types::{ClassifyError, Outcome};

/// Classify a waste-item description through the model.
///
/// Returns `Ok(Outcome::Structured)` when the response followed the
/// pipe-delimited format, `Ok(Outcome::Raw)` when it didn't, and
/// `Err(ClassifyError)` when the call itself failed. Emptiness of
/// `item_text` is the caller's concern — the gateway sends whatever it gets.
pub async fn classify(item_text: &str) -> Result<Outcome, ClassifyError> {
    let api_key = provider::api_key().ok_or(ClassifyError::MissingApiKey)?;
    let model = provider::model();
    let user_message = prompts::build_classify_message(item_text);

    log::info!("[LLM] Model: {}", model);

    let start = std::time::Instant::now();

    let url = format!(
        "{}/v1beta/models/{}:generateContent?key={}",
        provider::api_base(),
        model,
        api_key
    );

    let response = reqwest::Client::new()
        .post(&url)
        .header("content-type", "application/json")
        .json(&serde_json::json!({
            "contents": [
                {
                    "role": "user",
                    "parts": [
                        {
                            "text": user_message
                        }
                    ]
                }
            ],
            "systemInstruction": {
                "parts": [
                    {
                        "text": CLASSIFY_SYSTEM_PROMPT
                    }
                ]
            },
            "generationConfig": {
                "maxOutputTokens": CLASSIFY_MAX_TOKENS,
                "temperature": 0.1
            }
        }))
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        log::error!("[LLM] Gemini API returned {}: {}", status, message);
        return Err(ClassifyError::Api {
            status: status.as_u16(),
            message,
        });
    }

    let body: serde_json::Value = response.json().await?;

    log::info!("[LLM] API latency: {}ms", start.elapsed().as_millis());
    if let Some(usage) = body.get("usageMetadata") {
        log::info!(
            "[LLM] Tokens: {} in / {} out",
            usage["promptTokenCount"].as_u64().unwrap_or(0),
            usage["candidatesTokenCount"].as_u64().unwrap_or(0)
        );
    }

    let text = extract_gemini_text(&body).ok_or(ClassifyError::EmptyResponse)?;

    let outcome = parse_classification(&text);
    match &outcome {
        Outcome::Structured(c) => {
            log::info!("[LLM] Parse result: success");
            log::info!("[LLM] Category: {} → {} bin", c.category, c.color_name);
        }
        Outcome::Raw(raw) => {
            log::warn!("[LLM] Parse result: raw fallback ({} chars)", raw.len());
        }
    }

    Ok(outcome)
}

/// Extract text content from a Gemini response body.
///
/// Gemini format: candidates[0].content.parts[0].text
fn extract_gemini_text(body: &serde_json::Value) -> Option<String> {
    body.get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .get(0)?
        .get("text")?
        .as_str()
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_text_from_candidate_body() {
        let body = serde_json::json!({
            "candidates": [
                {
                    "content": {
                        "parts": [{ "text": "Organic|Green|Food scraps|🍏" }]
                    }
                }
            ]
        });
        assert_eq!(
            extract_gemini_text(&body).as_deref(),
            Some("Organic|Green|Food scraps|🍏")
        );
    }

    #[test]
    fn missing_candidates_yields_none() {
        let body = serde_json::json!({ "usageMetadata": { "promptTokenCount": 12 } });
        assert_eq!(extract_gemini_text(&body), None);
    }
}
