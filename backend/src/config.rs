/// Default image model, overridable through `OPENAI_IMAGE_MODEL`.
pub const DEFAULT_IMAGE_MODEL: &str = "gpt-image-1";

const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
const DEFAULT_PORT: u16 = 8000;

/// Painter settings, captured once at startup. Handlers never read the
/// process environment directly.
#[derive(Debug, Clone)]
pub struct PainterConfig {
    api_key: Option<String>,
    pub model: String,
    base_url: Option<String>,
}

impl PainterConfig {
    pub fn new(
        api_key: Option<String>,
        model: impl Into<String>,
        base_url: Option<String>,
    ) -> Self {
        Self {
            api_key: api_key.and_then(non_empty),
            model: model.into(),
            base_url: base_url.and_then(non_empty),
        }
    }

    pub fn from_env() -> Self {
        Self::new(
            std::env::var("OPENAI_API_KEY").ok(),
            std::env::var("OPENAI_IMAGE_MODEL")
                .ok()
                .and_then(non_empty)
                .unwrap_or_else(|| DEFAULT_IMAGE_MODEL.to_string()),
            std::env::var("OPENAI_BASE_URL").ok(),
        )
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn status_reason(&self) -> &'static str {
        if self.is_configured() {
            "Configured"
        } else {
            "OPENAI_API_KEY not set (export it or place it in .env)"
        }
    }

    /// Image generation endpoint, honoring a custom `OPENAI_BASE_URL`.
    pub fn endpoint(&self) -> String {
        let base = self.base_url.as_deref().unwrap_or(DEFAULT_API_BASE);
        format!("{}/images/generations", base.trim_end_matches('/'))
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub painter: PainterConfig,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        Self {
            port,
            painter: PainterConfig::from_env(),
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_api_key_counts_as_unconfigured() {
        let config = PainterConfig::new(Some("   ".into()), DEFAULT_IMAGE_MODEL, None);
        assert!(!config.is_configured());
        assert!(config.status_reason().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn configured_painter_reports_ready() {
        let config = PainterConfig::new(Some("sk-test".into()), "gpt-image-1", None);
        assert!(config.is_configured());
        assert_eq!(config.status_reason(), "Configured");
        assert_eq!(
            config.endpoint(),
            "https://api.openai.com/v1/images/generations"
        );
    }

    #[test]
    fn base_url_override_drops_trailing_slash() {
        let config = PainterConfig::new(
            Some("sk-test".into()),
            "gpt-image-1",
            Some("http://127.0.0.1:9999/v1/".into()),
        );
        assert_eq!(config.endpoint(), "http://127.0.0.1:9999/v1/images/generations");
    }
}
