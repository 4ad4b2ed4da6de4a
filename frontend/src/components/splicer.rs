use gloo_net::http::Request;
use gloo_timers::callback::Interval;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use wasm_bindgen_futures::spawn_local;
use web_sys::window;
use yew::prelude::*;

use shared::animals::Animal;
use shared::splice::{ImageSource, SpinResponse};

use crate::components::painter_badge::PainterBadge;
use crate::components::reel::Reel;
use crate::components::result_panel::{ResultPanel, SpliceView};
use crate::config::{get_api_base_url, get_asset_url};
use crate::styles;

/// Base reel tick period plus a per-reel stagger, so the two reels drift
/// out of phase while a spin is pending.
const REEL_TICK_MS: u32 = 90;
const REEL_TICK_STAGGER_MS: u32 = 10;

/// Forced into the reels when the splice request fails.
const ERROR_REELS: [&str; 2] = ["Network gremlin", "Found"];

const IDLE_STATUS: &str = "Pull the lever to splice your first species.";
const SPINNING_STATUS: &str = "Spinning both wheels and painting with AI...";
const SPIN_FAILED_STATUS: &str = "Failed to reach the animal lab";
const PLACEHOLDER_POSTER: &str = "/static/placeholder.svg";

// Keyframes for the `spin` reel state; injected on mount
const CUSTOM_CSS: &str = r#"
@keyframes reel-jitter {
    0% { transform: translateY(0); filter: blur(0); }
    50% { transform: translateY(-3px); filter: blur(1.5px); }
    100% { transform: translateY(2px); filter: blur(0.5px); }
}

.reel.spin .reel-value {
    animation: reel-jitter 0.18s infinite;
}
"#;

/// Owns the two repeating reel timers. Both are always started together
/// and dropped together; dropping an `Interval` cancels it, so a stale
/// tick can never land after `stop`.
#[derive(Default)]
struct ReelTicker {
    handles: [Option<Interval>; 2],
}

impl ReelTicker {
    fn start(&mut self, reels: [UseStateHandle<String>; 2]) {
        self.stop();
        let [first, second] = reels;
        self.handles = [Some(Self::ticker(0, first)), Some(Self::ticker(1, second))];
    }

    fn stop(&mut self) {
        for handle in &mut self.handles {
            handle.take();
        }
    }

    fn ticker(index: u32, reel: UseStateHandle<String>) -> Interval {
        let mut rng = SmallRng::from_entropy();
        Interval::new(reel_tick_period(index), move || {
            let filler: Animal = rng.gen();
            reel.set(filler.name().to_string());
        })
    }
}

/// Each reel ticks on its own period so the pair drifts out of phase.
pub fn reel_tick_period(index: u32) -> u32 {
    REEL_TICK_MS + index * REEL_TICK_STAGGER_MS
}

pub fn pairing_sentence(animal_a: &str, animal_b: &str) -> String {
    format!("{} + {} = instant chaos.", animal_a, animal_b)
}

/// Completion line under the reels. Only a non-empty image actually
/// painted by the AI counts as generated.
pub fn outcome_status(source: ImageSource, image_data: &str) -> String {
    let label = if source == ImageSource::Ai && !image_data.is_empty() {
        "AI image generated"
    } else {
        "Fallback illustration (API unavailable)"
    };
    format!("Generation complete — {}.", label)
}

async fn request_splice() -> Result<SpinResponse, String> {
    let response = Request::post(&format!("{}/api/spin", get_api_base_url()))
        .send()
        .await
        .map_err(|err| err.to_string())?;

    if !response.ok() {
        return Err(SPIN_FAILED_STATUS.to_string());
    }

    response
        .json::<SpinResponse>()
        .await
        .map_err(|err| err.to_string())
}

#[function_component(Splicer)]
pub fn splicer() -> Html {
    // Inject the reel keyframes next to the document styles
    {
        use_effect_with((), move |_| {
            let style_element = window()
                .and_then(|w| w.document())
                .and_then(|document| {
                    let head = document.head()?;
                    let style = document.create_element("style").ok()?;
                    style.set_text_content(Some(CUSTOM_CSS));
                    head.append_child(&style).ok()?;
                    Some(style)
                });

            move || {
                if let Some(style) = style_element {
                    if let Some(parent) = style.parent_node() {
                        let _ = parent.remove_child(&style);
                    }
                }
            }
        });
    }

    let reel_a = use_state(|| "?".to_string());
    let reel_b = use_state(|| "?".to_string());
    let spinning = use_state(|| false);
    let status = use_state(|| IDLE_STATUS.to_string());
    let result = use_state(|| None::<SpliceView>);

    let ticker = use_mut_ref(ReelTicker::default);
    // In-flight lock; the disabled button is only a UI affordance
    let busy = use_mut_ref(|| false);

    let start_spin = {
        let reel_a = reel_a.clone();
        let reel_b = reel_b.clone();
        let spinning = spinning.clone();
        let status = status.clone();
        let result = result.clone();
        let ticker = ticker.clone();
        let busy = busy.clone();

        Callback::from(move |_: MouseEvent| {
            if *busy.borrow() {
                return;
            }
            *busy.borrow_mut() = true;

            log::debug!("spin started");
            spinning.set(true);
            status.set(SPINNING_STATUS.to_string());
            result.set(None);
            ticker.borrow_mut().start([reel_a.clone(), reel_b.clone()]);

            let reel_a = reel_a.clone();
            let reel_b = reel_b.clone();
            let spinning = spinning.clone();
            let status = status.clone();
            let result = result.clone();
            let ticker = ticker.clone();
            let busy = busy.clone();

            spawn_local(async move {
                log::debug!("splice request sent");
                let spun = request_splice().await;
                log::debug!("splice response received");

                ticker.borrow_mut().stop();
                spinning.set(false);

                match spun {
                    Ok(payload) => {
                        reel_a.set(payload.animals[0].clone());
                        reel_b.set(payload.animals[1].clone());

                        let poster_src = if payload.image_data.is_empty() {
                            get_asset_url(PLACEHOLDER_POSTER)
                        } else {
                            payload.image_data.clone()
                        };
                        status.set(outcome_status(payload.image_source, &payload.image_data));
                        result.set(Some(SpliceView {
                            species_name: payload.species_name,
                            pairing: pairing_sentence(&payload.animals[0], &payload.animals[1]),
                            poster_src,
                        }));
                    }
                    Err(message) => {
                        reel_a.set(ERROR_REELS[0].to_string());
                        reel_b.set(ERROR_REELS[1].to_string());
                        status.set(message);
                    }
                }

                // Always the final step, whatever happened above
                *busy.borrow_mut() = false;
                log::debug!("spin resolved");
            });
        })
    };

    html! {
        <div class={styles::CARD}>
            <h1 class={styles::TITLE}>{ "Splice Safari" }</h1>
            <p class="mt-2 mb-6 text-center text-slate-400">
                { "Two wheels. One questionable new species." }
            </p>

            <PainterBadge />

            <div class="flex items-center justify-center gap-4 sm:gap-8">
                <Reel
                    label="Donor one"
                    value={(*reel_a).clone()}
                    spinning={*spinning}
                    on_handle={start_spin.clone()}
                />
                <span class="text-3xl font-bold text-slate-500">{ "+" }</span>
                <Reel
                    label="Donor two"
                    value={(*reel_b).clone()}
                    spinning={*spinning}
                    on_handle={start_spin.clone()}
                />
            </div>

            <div class="mt-8 flex justify-center">
                <button
                    type="button"
                    class={styles::SPIN_BUTTON}
                    disabled={*spinning}
                    onclick={start_spin}
                >
                    { if *spinning { "Splicing..." } else { "Spin the wheels" } }
                </button>
            </div>

            <p class={styles::STATUS_TEXT}>{ &*status }</p>

            <ResultPanel view={(*result).clone()} />
        </div>
    }
}
