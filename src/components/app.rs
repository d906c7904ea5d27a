use super::catalog_view::CatalogView;
use crate::catalog;
use crate::util::clog;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    // Datasets are embedded, so they are decoded once per mount.
    let loaded = use_memo((), |_| {
        let loaded = catalog::load();
        if let Err(err) = &loaded {
            clog(&format!("catalog load failed: {}", err));
        }
        loaded
    });

    match &*loaded {
        Ok(catalog) => html! { <CatalogView catalog={catalog.clone()} /> },
        Err(err) => html! {
            <div style="margin:24px; padding:12px 16px; background:#161b22; border:1px solid #f85149; border-radius:8px; max-width:520px;">
                <h3 style="margin:0 0 6px 0; color:#f85149;">{"Catalog unavailable"}</h3>
                <div style="font-size:13px;">{ err.to_string() }</div>
            </div>
        },
    }
}
