use crate::state::FilterSettings;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AppliedFiltersProps {
    pub filters: FilterSettings,
}

#[function_component(AppliedFilters)]
pub fn applied_filters(props: &AppliedFiltersProps) -> Html {
    let applied = props.filters.applied();
    html! {
        <div>
            <h3 style="margin:8px 0 4px 0; font-size:14px;">{"Applied filters:"}</h3>
            { if applied.is_empty() {
                html! { <div style="font-size:12px; opacity:0.7;">{"None"}</div> }
            } else {
                html! {
                    <ul style="margin:0; padding-left:18px; font-size:12px;">
                        { for applied.iter().map(|a| html! { <li>{ a.label() }</li> }) }
                    </ul>
                }
            } }
        </div>
    }
}
