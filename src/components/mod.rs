pub mod app;
pub mod applied_filters;
pub mod cart_panel;
pub mod catalog_view;
pub mod filter_panel;
pub mod menu;
pub mod product_grid;
pub mod search_bar;
pub mod sort_controls;
