use axum::extract::State;
use axum::response::Json;
use tracing::debug;

use shared::splice::{PainterStatus, SpinResponse};

use crate::generator;
use crate::AppState;

/// `POST /api/spin` — one full splice. Never fails: a painter problem
/// resolves to a fallback-illustrated response instead.
pub async fn spin_handler(State(state): State<AppState>) -> Json<SpinResponse> {
    debug!("spin requested");
    let outcome = generator::generate_splice(&state).await;
    debug!("spin resolved into {}", outcome.species_name);
    Json(outcome)
}

/// `GET /api/config` — painter readiness for the frontend badge.
pub async fn config_handler(State(state): State<AppState>) -> Json<PainterStatus> {
    let configured = state.painter.is_configured();
    Json(PainterStatus {
        openai_configured: configured,
        model: configured.then(|| state.painter.model.clone()),
        reason: Some(state.painter.status_reason().to_string()),
    })
}

pub async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use shared::animals::Animal;
    use shared::splice::{ImageSource, PainterStatus, SpinResponse};

    use crate::config::PainterConfig;
    use crate::{router, AppState};

    fn test_state() -> AppState {
        AppState {
            http: reqwest::Client::new(),
            painter: PainterConfig::new(None, "gpt-image-1", None),
        }
    }

    async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn spin_returns_two_distinct_roster_animals() {
        let app = router(test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/spin")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let payload: SpinResponse = body_json(response).await;
        assert_ne!(payload.animals[0], payload.animals[1]);
        for name in &payload.animals {
            assert!(Animal::ALL.iter().any(|animal| animal.name() == name));
        }
        assert!(!payload.species_name.is_empty());
        assert_eq!(payload.image_source, ImageSource::Fallback);
        assert!(payload.image_data.starts_with("data:image/svg+xml;base64,"));
    }

    #[tokio::test]
    async fn config_reports_unconfigured_painter() {
        let app = router(test_state());
        let response = app
            .oneshot(Request::builder().uri("/api/config").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let payload: PainterStatus = body_json(response).await;
        assert!(!payload.openai_configured);
        assert_eq!(payload.model, None);
        assert!(payload.reason.unwrap_or_default().contains("OPENAI_API_KEY"));
    }

    #[tokio::test]
    async fn config_reports_configured_painter_with_model() {
        let state = AppState {
            http: reqwest::Client::new(),
            painter: PainterConfig::new(Some("sk-test".into()), "gpt-image-1", None),
        };
        let response = router(state)
            .oneshot(Request::builder().uri("/api/config").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let payload: PainterStatus = body_json(response).await;
        assert!(payload.openai_configured);
        assert_eq!(payload.model.as_deref(), Some("gpt-image-1"));
        assert_eq!(payload.reason.as_deref(), Some("Configured"));
    }

    #[tokio::test]
    async fn health_check_answers_ok() {
        let response = router(test_state())
            .oneshot(Request::builder().uri("/api/health_check").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
