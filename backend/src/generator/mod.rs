pub mod naming;
pub mod painter;
pub mod poster;
pub mod prompts;

use rand::seq::SliceRandom;
use tracing::{info, warn};

use shared::animals::Animal;
use shared::splice::{ImageSource, SpinResponse};

use crate::AppState;

/// Run one full splice: draw two distinct donors, fuse their names, and
/// paint the result. A painter failure engages the fallback illustrator
/// rather than failing the spin.
pub async fn generate_splice(state: &AppState) -> SpinResponse {
    let (primary, secondary, species_name) = {
        let mut rng = rand::thread_rng();
        let mut donors = Animal::ALL.choose_multiple(&mut rng, 2).copied();
        let primary = donors.next().unwrap_or(Animal::Lion);
        let secondary = donors.next().unwrap_or(Animal::Otter);
        let species_name = naming::splice_name(&mut rng, primary.name(), secondary.name());
        (primary, secondary, species_name)
    };
    info!("spliced {} with {} into {}", primary, secondary, species_name);

    let painted = painter::paint(
        &state.http,
        &state.painter,
        primary.name(),
        secondary.name(),
        &species_name,
    )
    .await;

    let (image_data, image_source) = match painted {
        Ok(image) => {
            info!("AI poster painted for {}", species_name);
            (image, ImageSource::Ai)
        }
        Err(err) => {
            if state.painter.is_configured() {
                warn!("painter failed, fallback illustrator engaged: {}", err);
            } else {
                info!("painter unavailable, fallback illustrator engaged: {}", err);
            }
            let mut rng = rand::thread_rng();
            let poster =
                poster::fallback_poster(&mut rng, primary.name(), secondary.name(), &species_name);
            (poster, ImageSource::Fallback)
        }
    };

    SpinResponse {
        animals: [primary.name().to_string(), secondary.name().to_string()],
        species_name,
        image_data,
        image_source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PainterConfig;

    fn unconfigured_state() -> AppState {
        AppState {
            http: reqwest::Client::new(),
            painter: PainterConfig::new(None, "gpt-image-1", None),
        }
    }

    #[tokio::test]
    async fn unconfigured_painter_yields_fallback_posters() {
        let outcome = generate_splice(&unconfigured_state()).await;
        assert_eq!(outcome.image_source, ImageSource::Fallback);
        assert!(outcome.image_data.starts_with("data:image/svg+xml;base64,"));
        assert_ne!(outcome.animals[0], outcome.animals[1]);
        for name in &outcome.animals {
            assert!(Animal::ALL.iter().any(|animal| animal.name() == name));
        }
    }

    #[tokio::test]
    async fn species_name_is_adjective_plus_fused_donors() {
        let outcome = generate_splice(&unconfigured_state()).await;
        let mut words = outcome.species_name.splitn(2, ' ');
        let adjective = words.next().unwrap_or_default();
        let fused = words.next().unwrap_or_default();
        assert!(prompts::Adjective::ALL.iter().any(|a| a.description() == adjective));
        assert!(fused.len() >= 4, "fused name too short: {}", fused);
    }
}
