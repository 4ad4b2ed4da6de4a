use serde::{Deserialize, Serialize};

/// Outcome of one splice, as sent over the wire by `POST /api/spin`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpinResponse {
    /// The two donor animals, in reel order.
    pub animals: [String; 2],
    pub species_name: String,
    /// Data URI of the poster (PNG for AI output, SVG for the fallback
    /// illustrator). May be empty.
    pub image_data: String,
    pub image_source: ImageSource,
}

/// Provenance tag on the poster image. Anything the client does not
/// recognize is treated as a fallback illustration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSource {
    Ai,
    #[serde(other)]
    Fallback,
}

/// Readiness report from `GET /api/config`. `model` is only meaningful
/// when the painter is configured; `reason` explains unavailability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PainterStatus {
    pub openai_configured: bool,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
}
