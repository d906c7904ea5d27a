use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SearchBarProps {
    pub value: AttrValue,
    pub on_change: Callback<String>,
}

#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let input_cb = {
        let cb = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit(input.value());
        })
    };
    html! {
        <label style="display:flex; align-items:center; gap:8px;">
            <span>{"Search:"}</span>
            <input type="text" value={props.value.clone()} oninput={input_cb} placeholder="Search by name..." />
        </label>
    }
}
