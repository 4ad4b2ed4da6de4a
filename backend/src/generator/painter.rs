use serde_json::json;

use crate::config::PainterConfig;
use crate::error::PainterError;

use super::prompts::painting_prompt;

/// Ask the configured image model to paint the splice. Returns a PNG
/// data URI on success; the caller decides what a failure falls back to.
pub async fn paint(
    http: &reqwest::Client,
    painter: &PainterConfig,
    animal_a: &str,
    animal_b: &str,
    species_name: &str,
) -> Result<String, PainterError> {
    let api_key = painter.api_key().ok_or(PainterError::MissingKey)?;
    let prompt = painting_prompt(animal_a, animal_b, species_name);

    let response = http
        .post(painter.endpoint())
        .header("Authorization", format!("Bearer {}", api_key))
        .json(&json!({
            "model": painter.model,
            "prompt": prompt,
            "size": "1024x1024",
            "quality": "standard",
            "response_format": "b64_json",
            "n": 1,
        }))
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(PainterError::Status(response.status()));
    }

    let body: serde_json::Value = response.json().await?;
    let image_b64 = body["data"][0]["b64_json"]
        .as_str()
        .filter(|b64| !b64.is_empty())
        .ok_or(PainterError::BadPayload("no b64_json in image response"))?;

    Ok(format!("data:image/png;base64,{}", image_b64))
}
