use crate::state::{SortKey, SortSpec};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SortControlsProps {
    pub sort: SortSpec,
    pub on_key: Callback<Option<SortKey>>,
    pub on_toggle_direction: Callback<()>,
}

#[function_component(SortControls)]
pub fn sort_controls(props: &SortControlsProps) -> Html {
    let key_cb = {
        let cb = props.on_key.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            cb.emit(SortKey::from_option_value(&select.value()));
        })
    };
    let direction_cb = {
        let cb = props.on_toggle_direction.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let current = props.sort.key;
    html! {
        <div style="display:flex; align-items:center; gap:12px;">
            <label style="display:flex; align-items:center; gap:6px;">
                <span>{"Sort by:"}</span>
                <select onchange={key_cb}>
                    <option value="" selected={current.is_none()}>{"Select..."}</option>
                    { for SortKey::ALL.iter().map(|key| html! {
                        <option value={key.option_value()} selected={current == Some(*key)}>{ key.label() }</option>
                    }) }
                </select>
            </label>
            <button onclick={direction_cb}>{ format!("Direction: {}", props.sort.direction.label()) }</button>
        </div>
    }
}
