//! Core data models for the catalog browser.
//! Categories and products are loaded once from the embedded datasets and
//! never mutated afterwards; everything else is session state.

use serde::{Deserialize, Serialize};
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
    /// Child categories. `Some(empty)` still counts as expandable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sublevels: Option<Rc<[Category]>>,
}

impl Category {
    pub fn has_sublevels(&self) -> bool {
        self.sublevels.is_some()
    }

    /// Depth-first walk over this node and all of its descendants.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Category)) {
        visit(self);
        if let Some(children) = &self.sublevels {
            for child in children.iter() {
                child.walk(visit);
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    /// Units in stock.
    pub quantity: u32,
    pub price: f64,
    pub available: bool,
    /// Id of the category this product is grouped under.
    pub sublevel_id: u32,
}

/// A cart line. `quantity` is at least 1 while the item is in a cart.
#[derive(Clone, Debug, PartialEq)]
pub struct CartItem {
    pub quantity: u32,
    pub product: Rc<Product>,
}

impl CartItem {
    pub fn subtotal(&self) -> f64 {
        self.product.price * self.quantity as f64
    }
}
