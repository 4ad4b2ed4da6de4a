use gloo_net::http::Request;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use shared::splice::PainterStatus;

use crate::config::get_api_base_url;

/// Fetches painter readiness once, on mount. `None` after loading means
/// the config endpoint could not be reached or parsed.
#[hook]
pub fn use_painter_status() -> (bool, Option<PainterStatus>) {
    let status = use_state(|| None::<PainterStatus>);
    let loading = use_state(|| true);

    {
        let status = status.clone();
        let loading = loading.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                match Request::get(&format!("{}/api/config", get_api_base_url()))
                    .send()
                    .await
                {
                    Ok(response) if response.ok() => {
                        if let Ok(data) = response.json::<PainterStatus>().await {
                            status.set(Some(data));
                        }
                        loading.set(false);
                    }
                    _ => {
                        loading.set(false);
                    }
                }
            });

            || ()
        });
    }

    (*loading, (*status).clone())
}
