use crate::state::Cart;
use crate::util::format_price;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CartPanelProps {
    pub cart: Cart,
}

#[function_component(CartPanel)]
pub fn cart_panel(props: &CartPanelProps) -> Html {
    let cart = &props.cart;
    html! {
        <div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px 12px; min-width:200px;">
            <div style="font-weight:600; margin-bottom:4px;">{ format!("Cart ({})", cart.len()) }</div>
            { if cart.is_empty() {
                html! { <div style="font-size:12px; opacity:0.7;">{"Empty"}</div> }
            } else {
                html! {
                    <>
                        { for cart.items().map(|item| html! {
                            <div key={item.product.id} style="display:flex; justify-content:space-between; gap:8px; font-size:12px;">
                                <span>{ format!("{} x{}", item.product.name, item.quantity) }</span>
                                <span>{ format_price(item.subtotal()) }</span>
                            </div>
                        }) }
                        <div style="display:flex; justify-content:space-between; border-top:1px solid #30363d; margin-top:4px; padding-top:4px; font-weight:600; font-size:12px;">
                            <span>{ format!("{} units", cart.total_units()) }</span>
                            <span>{ format_price(cart.total_price()) }</span>
                        </div>
                    </>
                }
            } }
        </div>
    }
}
