//! Derives the visible product list from the catalog and the current
//! selection, filter, search and sort inputs.
//!
//! Both stages are pure. The app memoizes the filter stage on
//! `(selection, filters, search)` and the sort stage on its output plus the
//! [`SortSpec`], so unrelated re-renders never recompute them.

use super::filters::FilterSettings;
use super::sort::{SortDirection, SortKey, SortSpec};
use crate::model::Product;
use std::cmp::Ordering;
use std::rc::Rc;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductQuery {
    /// Id of the selected category; `None` shows every category.
    pub selected: Option<u32>,
    pub filters: FilterSettings,
    pub search: String,
}

impl ProductQuery {
    /// Exact id match only; products of descendant categories do not match
    /// their ancestors.
    pub fn matches_category(&self, p: &Product) -> bool {
        self.selected.is_none_or(|id| p.sublevel_id == id)
    }

    pub fn matches_availability(&self, p: &Product) -> bool {
        !self.filters.available || p.available
    }

    pub fn matches_price(&self, p: &Product) -> bool {
        p.price >= self.filters.min_price && p.price <= self.filters.max_price
    }

    pub fn matches_quantity(&self, p: &Product) -> bool {
        let q = p.quantity as f64;
        q >= self.filters.min_quantity && q <= self.filters.max_quantity
    }

    pub fn matches_search(&self, p: &Product) -> bool {
        p.name
            .to_lowercase()
            .contains(&self.search.to_lowercase())
    }

    pub fn matches(&self, p: &Product) -> bool {
        self.matches_category(p)
            && self.matches_availability(p)
            && self.matches_price(p)
            && self.matches_quantity(p)
            && self.matches_search(p)
    }
}

/// Filter stage. Keeps catalog order.
pub fn filter_products(products: &[Rc<Product>], query: &ProductQuery) -> Vec<Rc<Product>> {
    products
        .iter()
        .filter(|p| query.matches(p))
        .cloned()
        .collect()
}

fn compare(key: SortKey, a: &Product, b: &Product) -> Ordering {
    match key {
        // -0.0 and 0.0 tie
        SortKey::Price => a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal),
        SortKey::Quantity => a.quantity.cmp(&b.quantity),
        // available first when ascending
        SortKey::Available => b.available.cmp(&a.available),
    }
}

/// Sort stage. Returns a new, stably sorted list; the input is left as is.
pub fn sort_products(products: &[Rc<Product>], spec: SortSpec) -> Vec<Rc<Product>> {
    let mut sorted = products.to_vec();
    if let Some(key) = spec.key {
        sorted.sort_by(|a, b| {
            let ord = compare(key, a, b);
            match spec.direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        });
    }
    sorted
}
