pub mod cart;
pub mod engine;
pub mod filters;
pub mod menu;
pub mod sort;

pub use cart::{Cart, CartAction};
pub use engine::{ProductQuery, filter_products, sort_products};
pub use filters::{FilterEdit, FilterSettings, parse_max_bound, parse_min_bound};
pub use menu::{toggle_label, toggle_node};
pub use sort::{SortKey, SortSpec};
