pub mod components;
pub mod config;
pub mod hooks;
pub mod styles;

use yew::prelude::*;

use crate::components::Splicer;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div class="min-h-screen w-full bg-gradient-to-b from-indigo-950 via-slate-900 to-slate-950 text-slate-100">
            <div class="mx-auto max-w-3xl px-4 py-10">
                <Splicer />
            </div>
        </div>
    }
}
