//! Static category tree and product list, embedded at compile time.

use crate::model::{Category, Product};
use crate::util::clog;
use serde::Deserialize;
use std::collections::HashSet;
use std::rc::Rc;
use thiserror::Error;

const CATEGORIES_JSON: &str = include_str!("../data/categories.json");
const PRODUCTS_JSON: &str = include_str!("../data/products.json");

#[derive(Debug, Error)]
pub enum DataError {
    #[error("malformed {dataset} dataset: {source}")]
    Parse {
        dataset: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("category id {0} appears more than once in the tree")]
    DuplicateCategory(u32),
    #[error("product id {0} appears more than once")]
    DuplicateProduct(u32),
    #[error("product {id} has an invalid price ({price})")]
    InvalidPrice { id: u32, price: f64 },
}

pub type Result<T> = std::result::Result<T, DataError>;

#[derive(Deserialize)]
struct CategoriesFile {
    categories: Vec<Category>,
}

#[derive(Deserialize)]
struct ProductsFile {
    products: Vec<Product>,
}

/// Read-only datasets shared by every view.
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    pub categories: Rc<[Category]>,
    pub products: Rc<[Rc<Product>]>,
}

impl Catalog {
    pub fn find_category(&self, id: u32) -> Option<&Category> {
        let mut found = None;
        for root in self.categories.iter() {
            root.walk(&mut |c| {
                if found.is_none() && c.id == id {
                    found = Some(c);
                }
            });
        }
        found
    }
}

/// Load the embedded datasets.
pub fn load() -> Result<Catalog> {
    let catalog = Catalog {
        categories: parse_categories(CATEGORIES_JSON)?.into(),
        products: parse_products(PRODUCTS_JSON)?.into(),
    };
    for product in catalog.products.iter() {
        if catalog.find_category(product.sublevel_id).is_none() {
            clog(&format!(
                "product {} references unknown category {}",
                product.id, product.sublevel_id
            ));
        }
    }
    clog(&format!(
        "catalog loaded: {} root categories, {} products",
        catalog.categories.len(),
        catalog.products.len()
    ));
    Ok(catalog)
}

pub fn parse_categories(raw: &str) -> Result<Vec<Category>> {
    let file: CategoriesFile = serde_json::from_str(raw).map_err(|source| DataError::Parse {
        dataset: "categories",
        source,
    })?;
    let mut seen = HashSet::new();
    let mut duplicate = None;
    for root in &file.categories {
        root.walk(&mut |c| {
            if !seen.insert(c.id) && duplicate.is_none() {
                duplicate = Some(c.id);
            }
        });
    }
    match duplicate {
        Some(id) => Err(DataError::DuplicateCategory(id)),
        None => Ok(file.categories),
    }
}

pub fn parse_products(raw: &str) -> Result<Vec<Rc<Product>>> {
    let file: ProductsFile = serde_json::from_str(raw).map_err(|source| DataError::Parse {
        dataset: "products",
        source,
    })?;
    let mut seen = HashSet::new();
    for p in &file.products {
        if !seen.insert(p.id) {
            return Err(DataError::DuplicateProduct(p.id));
        }
        if !p.price.is_finite() || p.price < 0.0 {
            return Err(DataError::InvalidPrice {
                id: p.id,
                price: p.price,
            });
        }
    }
    Ok(file.products.into_iter().map(Rc::new).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_datasets_load() {
        let catalog = load().expect("embedded datasets are valid");
        assert!(!catalog.categories.is_empty());
        assert!(!catalog.products.is_empty());
        for p in catalog.products.iter() {
            assert!(
                catalog.find_category(p.sublevel_id).is_some(),
                "product {} has no category",
                p.id
            );
        }
    }

    #[test]
    fn nested_sublevels_are_optional() {
        let cats = parse_categories(
            r#"{"categories":[{"id":1,"name":"A","sublevels":[{"id":2,"name":"B","sublevels":[{"id":3,"name":"C"}]}]},{"id":4,"name":"D"}]}"#,
        )
        .expect("parse");
        assert_eq!(cats.len(), 2);
        assert!(cats[0].has_sublevels());
        assert!(!cats[1].has_sublevels());
        let b = &cats[0].sublevels.as_ref().expect("sublevels")[0];
        assert_eq!(b.sublevels.as_ref().expect("sublevels")[0].name, "C");
    }

    #[test]
    fn find_category_reaches_deep_nodes() {
        let categories = parse_categories(
            r#"{"categories":[{"id":1,"name":"A","sublevels":[{"id":2,"name":"B","sublevels":[{"id":3,"name":"C"}]}]}]}"#,
        )
        .expect("parse");
        let catalog = Catalog {
            categories: categories.into(),
            products: Vec::<Rc<Product>>::new().into(),
        };
        assert_eq!(catalog.find_category(3).map(|c| c.name.as_str()), Some("C"));
        assert!(catalog.find_category(99).is_none());
    }

    #[test]
    fn duplicate_category_ids_are_rejected() {
        let err = parse_categories(
            r#"{"categories":[{"id":1,"name":"A","sublevels":[{"id":1,"name":"B"}]}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, DataError::DuplicateCategory(1)));
    }

    #[test]
    fn duplicate_product_ids_are_rejected() {
        let err = parse_products(
            r#"{"products":[
                {"id":1,"name":"A","quantity":1,"price":1.0,"available":true,"sublevel_id":1},
                {"id":1,"name":"B","quantity":1,"price":2.0,"available":true,"sublevel_id":1}
            ]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, DataError::DuplicateProduct(1)));
    }

    #[test]
    fn negative_price_is_rejected() {
        let err = parse_products(
            r#"{"products":[{"id":7,"name":"A","quantity":1,"price":-3.0,"available":true,"sublevel_id":1}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, DataError::InvalidPrice { id: 7, .. }));
    }

    #[test]
    fn malformed_json_names_the_dataset() {
        let err = parse_products(r#"{"products": [ {"id": "x"} ]}"#).unwrap_err();
        assert!(err.to_string().starts_with("malformed products dataset"));
    }
}
