use super::{
    applied_filters::AppliedFilters, cart_panel::CartPanel, filter_panel::FilterPanel, menu::Menu,
    product_grid::ProductGrid, search_bar::SearchBar, sort_controls::SortControls,
};
use crate::catalog::Catalog;
use crate::model::{Category, Product};
use crate::state::{
    Cart, CartAction, FilterEdit, FilterSettings, ProductQuery, SortKey, SortSpec,
    filter_products, sort_products,
};
use crate::util::clog;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CatalogViewProps {
    pub catalog: Catalog,
}

#[function_component(CatalogView)]
pub fn catalog_view(props: &CatalogViewProps) -> Html {
    let selection = use_state(|| None::<Category>);
    let cart = use_reducer(Cart::default);
    let filters = use_state(FilterSettings::default);
    let search = use_state(String::new);
    let sort = use_state(SortSpec::default);

    let query = ProductQuery {
        selected: (*selection).as_ref().map(|c| c.id),
        filters: *filters,
        search: (*search).clone(),
    };
    let matches = {
        let products = props.catalog.products.clone();
        use_memo(query, move |query| filter_products(&products, query))
    };
    let sorted = use_memo((matches, *sort), |(matches, spec)| {
        sort_products(matches, *spec)
    });

    let on_category_click = {
        let selection = selection.clone();
        Callback::from(move |category: Option<Category>| {
            match &category {
                Some(c) => clog(&format!("selected category {} ({})", c.id, c.name)),
                None => clog("selection cleared"),
            }
            selection.set(category);
        })
    };
    let on_search = {
        let search = search.clone();
        Callback::from(move |text: String| search.set(text))
    };
    let on_filter_edit = {
        let filters = filters.clone();
        Callback::from(move |edit: FilterEdit| filters.set((*filters).with(edit)))
    };
    let on_filter_clear = {
        let filters = filters.clone();
        Callback::from(move |_| filters.set(FilterSettings::cleared()))
    };
    let on_sort_key = {
        let sort = sort.clone();
        Callback::from(move |key: Option<SortKey>| sort.set(SortSpec { key, ..*sort }))
    };
    let on_sort_direction = {
        let sort = sort.clone();
        Callback::from(move |_| {
            sort.set(SortSpec {
                direction: sort.direction.toggled(),
                ..*sort
            })
        })
    };
    let on_increment = {
        let cart = cart.clone();
        Callback::from(move |product: Rc<Product>| cart.dispatch(CartAction::Increment(product)))
    };
    let on_decrement = {
        let cart = cart.clone();
        Callback::from(move |id: u32| cart.dispatch(CartAction::Decrement(id)))
    };

    html! {
        <div style="display:flex; gap:16px; padding:16px; align-items:flex-start;">
            <nav style="min-width:200px; background:#161b22; border:1px solid #30363d; border-radius:8px; padding:8px 8px 8px 0;">
                <div style="font-weight:600; padding-left:14px; margin-bottom:4px;">{"Categories"}</div>
                <Menu categories={props.catalog.categories.clone()} on_category_click={on_category_click} />
            </nav>
            <main style="flex:1; display:flex; flex-direction:column; gap:12px;">
                <SearchBar value={AttrValue::from((*search).clone())} on_change={on_search} />
                <FilterPanel filters={*filters} on_edit={on_filter_edit} on_clear={on_filter_clear} />
                <AppliedFilters filters={*filters} />
                <SortControls sort={*sort} on_key={on_sort_key} on_toggle_direction={on_sort_direction} />
                { if let Some(c) = &*selection {
                    html! { <p style="margin:0;">{ format!("Selected category: {}", c.name) }</p> }
                } else { html! {} } }
                <ProductGrid
                    products={sorted}
                    cart={(*cart).clone()}
                    on_increment={on_increment}
                    on_decrement={on_decrement}
                />
            </main>
            <aside>
                <CartPanel cart={(*cart).clone()} />
            </aside>
        </div>
    }
}
