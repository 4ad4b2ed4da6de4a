use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ReelProps {
    pub label: AttrValue,
    pub value: AttrValue,
    pub spinning: bool,
    /// Pulling the handle is an alternate spin trigger.
    pub on_handle: Callback<MouseEvent>,
}

#[function_component(Reel)]
pub fn reel(props: &ReelProps) -> Html {
    html! {
        <div class={classes!(styles::REEL, props.spinning.then_some("spin"))}>
            <span class={styles::REEL_LABEL}>{ &props.label }</span>
            <div class={styles::REEL_VALUE}>{ &props.value }</div>
            <button
                type="button"
                class={styles::REEL_HANDLE}
                title="Pull the handle"
                onclick={props.on_handle.clone()}
            >
                { "◉" }
            </button>
        </div>
    }
}
