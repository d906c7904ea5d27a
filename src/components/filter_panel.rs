use crate::state::{FilterEdit, FilterSettings, parse_max_bound, parse_min_bound};
use crate::util::format_bound;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct FilterPanelProps {
    pub filters: FilterSettings,
    pub on_edit: Callback<FilterEdit>,
    pub on_clear: Callback<()>,
}

fn bound_field(
    label: &'static str,
    value: f64,
    on_edit: &Callback<FilterEdit>,
    to_edit: fn(&str) -> FilterEdit,
) -> Html {
    let input_cb = {
        let cb = on_edit.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit(to_edit(&input.value()));
        })
    };
    html! {
        <label style="display:flex; align-items:center; gap:6px;">
            <span>{ label }</span>
            <input type="number" min="0" style="width:90px;" value={format_bound(value)} oninput={input_cb} />
        </label>
    }
}

#[function_component(FilterPanel)]
pub fn filter_panel(props: &FilterPanelProps) -> Html {
    let toggle_available_cb = {
        let cb = props.on_edit.clone();
        Callback::from(move |_| cb.emit(FilterEdit::ToggleAvailable))
    };
    let clear_cb = {
        let cb = props.on_clear.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let f = &props.filters;
    html! {
        <div style="display:flex; flex-wrap:wrap; align-items:center; gap:12px;">
            <label style="display:flex; align-items:center; gap:6px; cursor:pointer;">
                <input type="checkbox" checked={f.available} onclick={toggle_available_cb} />
                <span>{"Only available"}</span>
            </label>
            { bound_field("Min price:", f.min_price, &props.on_edit, |t| FilterEdit::MinPrice(parse_min_bound(t))) }
            { bound_field("Max price:", f.max_price, &props.on_edit, |t| FilterEdit::MaxPrice(parse_max_bound(t))) }
            { bound_field("Min quantity:", f.min_quantity, &props.on_edit, |t| FilterEdit::MinQuantity(parse_min_bound(t))) }
            { bound_field("Max quantity:", f.max_quantity, &props.on_edit, |t| FilterEdit::MaxQuantity(parse_max_bound(t))) }
            <button onclick={clear_cb}>{"Clear filters"}</button>
        </div>
    }
}
