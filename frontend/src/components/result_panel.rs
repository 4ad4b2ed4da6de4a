use yew::prelude::*;

use crate::styles;

/// What a finished splice looks like on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct SpliceView {
    pub species_name: String,
    pub pairing: String,
    pub poster_src: String,
}

#[derive(Properties, PartialEq)]
pub struct ResultPanelProps {
    pub view: Option<SpliceView>,
}

#[function_component(ResultPanel)]
pub fn result_panel(props: &ResultPanelProps) -> Html {
    let Some(view) = &props.view else {
        return html! {};
    };

    html! {
        <div class="mt-8 text-center">
            <h2 class="text-3xl font-bold text-emerald-300">{ &view.species_name }</h2>
            <p class="mt-2 text-slate-300">{ &view.pairing }</p>
            <img class={styles::POSTER} src={view.poster_src.clone()} alt={view.species_name.clone()} />
        </div>
    }
}
