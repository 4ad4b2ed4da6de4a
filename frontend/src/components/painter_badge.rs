use yew::prelude::*;

use shared::splice::PainterStatus;

use crate::hooks::use_painter_status;
use crate::styles;

/// Indicator text plus whether to render it in the "ready" state.
pub fn badge_text(status: Option<&PainterStatus>) -> (String, bool) {
    match status {
        Some(report) if report.openai_configured => {
            let model = report.model.as_deref().unwrap_or("unknown model");
            (format!("AI painter ready — {}", model), true)
        }
        Some(report) => {
            let reason = report.reason.as_deref().unwrap_or("").trim();
            if reason.is_empty() {
                ("AI painter unavailable — using illustrated posters".to_string(), false)
            } else {
                (
                    format!("AI painter unavailable — using illustrated posters ({})", reason),
                    false,
                )
            }
        }
        None => ("Unable to reach painter status".to_string(), false),
    }
}

#[function_component(PainterBadge)]
pub fn painter_badge() -> Html {
    let (loading, status) = use_painter_status();

    if loading {
        return html! {};
    }

    let (text, ready) = badge_text(status.as_ref());
    let class = if ready {
        styles::BADGE_READY
    } else {
        styles::BADGE_UNAVAILABLE
    };

    html! {
        <div class={class}>{ text }</div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_badge_appends_the_reason() {
        let status = PainterStatus {
            openai_configured: false,
            model: Some(String::new()),
            reason: Some("no key".into()),
        };
        let (text, ready) = badge_text(Some(&status));
        assert_eq!(text, "AI painter unavailable — using illustrated posters (no key)");
        assert!(!ready);
    }

    #[test]
    fn unavailable_badge_without_reason_stays_bare() {
        let status = PainterStatus {
            openai_configured: false,
            model: None,
            reason: Some("   ".into()),
        };
        let (text, _) = badge_text(Some(&status));
        assert_eq!(text, "AI painter unavailable — using illustrated posters");
    }

    #[test]
    fn ready_badge_names_the_model() {
        let status = PainterStatus {
            openai_configured: true,
            model: Some("gpt-image-1".into()),
            reason: Some("Configured".into()),
        };
        let (text, ready) = badge_text(Some(&status));
        assert_eq!(text, "AI painter ready — gpt-image-1");
        assert!(ready);
    }

    #[test]
    fn missing_report_reads_as_unreachable_and_is_stable() {
        let first = badge_text(None);
        let second = badge_text(None);
        assert_eq!(first.0, "Unable to reach painter status");
        assert_eq!(first, second);
    }
}
