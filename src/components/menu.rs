use crate::model::Category;
use crate::state::{toggle_label, toggle_node};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MenuProps {
    pub categories: Rc<[Category]>,
    /// `None` clears the current selection.
    pub on_category_click: Callback<Option<Category>>,
}

#[function_component(Menu)]
pub fn menu(props: &MenuProps) -> Html {
    html! {
        <ol style="list-style:none; margin:0; padding-left:14px;">
            { for props.categories.iter().map(|category| html! {
                <MenuItem
                    key={category.id}
                    category={category.clone()}
                    on_click={props.on_category_click.clone()}
                />
            }) }
        </ol>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct MenuItemProps {
    pub category: Category,
    pub on_click: Callback<Option<Category>>,
}

#[function_component(MenuItem)]
pub fn menu_item(props: &MenuItemProps) -> Html {
    let expanded = use_state(|| false);

    let select_cb = {
        let cb = props.on_click.clone();
        let category = props.category.clone();
        Callback::from(move |_: MouseEvent| cb.emit(Some(category.clone())))
    };
    let toggle_cb = {
        let cb = props.on_click.clone();
        let expanded = expanded.clone();
        Callback::from(move |e: MouseEvent| {
            // the row itself selects; the toggle must not
            e.stop_propagation();
            let outcome = toggle_node(*expanded);
            if outcome.clear_selection {
                cb.emit(None);
            }
            expanded.set(outcome.expanded);
        })
    };

    let children = match (&props.category.sublevels, *expanded) {
        (Some(sublevels), true) => html! {
            <Menu categories={sublevels.clone()} on_category_click={props.on_click.clone()} />
        },
        _ => html! {},
    };

    html! {
        <li style="margin:2px 0;">
            <div onclick={select_cb} style="display:flex; align-items:center; gap:6px; cursor:pointer; padding:2px 4px; border-radius:4px;">
                <span>{ props.category.name.clone() }</span>
                { if props.category.has_sublevels() {
                    html! { <button onclick={toggle_cb} style="padding:0 6px; font-size:11px;">{ toggle_label(*expanded) }</button> }
                } else { html! {} } }
            </div>
            { children }
        </li>
    }
}
