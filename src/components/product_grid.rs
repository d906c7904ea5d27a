use crate::model::Product;
use crate::state::Cart;
use crate::util::format_price;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ProductGridProps {
    pub products: Rc<Vec<Rc<Product>>>,
    pub cart: Cart,
    pub on_increment: Callback<Rc<Product>>,
    pub on_decrement: Callback<u32>,
}

#[function_component(ProductGrid)]
pub fn product_grid(props: &ProductGridProps) -> Html {
    if props.products.is_empty() {
        return html! { <div style="opacity:0.7; padding:12px 0;">{"No products match the current filters."}</div> };
    }
    html! {
        <div style="display:grid; grid-template-columns:repeat(auto-fill, minmax(200px, 1fr)); gap:12px;">
            { for props.products.iter().map(|product| html! {
                <ProductCard
                    key={product.id}
                    product={Rc::clone(product)}
                    in_cart={props.cart.quantity_of(product.id)}
                    on_increment={props.on_increment.clone()}
                    on_decrement={props.on_decrement.clone()}
                />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ProductCardProps {
    pub product: Rc<Product>,
    /// Quantity currently in the cart, 0 when absent.
    pub in_cart: u32,
    pub on_increment: Callback<Rc<Product>>,
    pub on_decrement: Callback<u32>,
}

#[function_component(ProductCard)]
pub fn product_card(props: &ProductCardProps) -> Html {
    let dec_cb = {
        let cb = props.on_decrement.clone();
        let id = props.product.id;
        Callback::from(move |_| cb.emit(id))
    };
    let inc_cb = {
        let cb = props.on_increment.clone();
        let product = Rc::clone(&props.product);
        Callback::from(move |_| cb.emit(Rc::clone(&product)))
    };
    let p = &props.product;
    let stock_style = if p.available { "color:#2ea043;" } else { "color:#8b949e;" };
    html! {
        <div style="border:1px solid #30363d; border-radius:8px; padding:10px; background:#161b22; display:flex; flex-direction:column; gap:6px;">
            <div style="font-weight:600;">{ format!("{} ({})", p.name, format_price(p.price)) }</div>
            <div style={format!("font-size:11px; {}", stock_style)}>
                { if p.available { format!("In stock: {}", p.quantity) } else { "Unavailable".to_string() } }
            </div>
            <div style="display:flex; align-items:center; gap:8px;">
                <button disabled={props.in_cart == 0} onclick={dec_cb}>{"-"}</button>
                <span style="min-width:20px; text-align:center; font-variant-numeric:tabular-nums;">{ props.in_cart }</span>
                <button onclick={inc_cb}>{"+"}</button>
            </div>
        </div>
    }
}
