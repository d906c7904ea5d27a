//! Session shopping cart.
//!
//! A `Cart` value is never mutated once built: `increment`/`decrement`
//! return a new cart whose map shares every untouched entry with the old
//! one, so views still holding the previous cart keep a consistent
//! snapshot.

use crate::model::{CartItem, Product};
use crate::util::clog;
use std::collections::BTreeMap;
use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cart {
    items: Rc<BTreeMap<u32, Rc<CartItem>>>,
}

pub enum CartAction {
    Increment(Rc<Product>),
    Decrement(u32),
}

impl Cart {
    pub fn get(&self, product_id: u32) -> Option<&CartItem> {
        self.items.get(&product_id).map(|item| item.as_ref())
    }

    /// Quantity in the cart, 0 when absent.
    pub fn quantity_of(&self, product_id: u32) -> u32 {
        self.get(product_id).map_or(0, |item| item.quantity)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items ordered by product id.
    pub fn items(&self) -> impl Iterator<Item = &CartItem> {
        self.items.values().map(|item| item.as_ref())
    }

    pub fn total_units(&self) -> u32 {
        self.items().map(|item| item.quantity).sum()
    }

    pub fn total_price(&self) -> f64 {
        self.items().map(CartItem::subtotal).sum()
    }

    pub fn increment(&self, product: &Rc<Product>) -> Cart {
        let mut items = (*self.items).clone();
        let quantity = self.quantity_of(product.id) + 1;
        items.insert(
            product.id,
            Rc::new(CartItem {
                quantity,
                product: Rc::clone(product),
            }),
        );
        Cart {
            items: Rc::new(items),
        }
    }

    /// Removes the entry when its quantity is 1. Absent ids return an
    /// unchanged cart.
    pub fn decrement(&self, product_id: u32) -> Cart {
        let Some(current) = self.items.get(&product_id) else {
            return self.clone();
        };
        let mut items = (*self.items).clone();
        if current.quantity > 1 {
            items.insert(
                product_id,
                Rc::new(CartItem {
                    quantity: current.quantity - 1,
                    product: Rc::clone(&current.product),
                }),
            );
        } else {
            items.remove(&product_id);
        }
        Cart {
            items: Rc::new(items),
        }
    }
}

impl Reducible for Cart {
    type Action = CartAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            CartAction::Increment(product) => {
                let next = self.increment(&product);
                clog(&format!(
                    "cart: product {} -> {}",
                    product.id,
                    next.quantity_of(product.id)
                ));
                Rc::new(next)
            }
            CartAction::Decrement(id) => {
                if self.get(id).is_none() {
                    return self;
                }
                let next = self.decrement(id);
                clog(&format!("cart: product {} -> {}", id, next.quantity_of(id)));
                Rc::new(next)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u32, price: f64) -> Rc<Product> {
        Rc::new(Product {
            id,
            name: format!("p{id}"),
            quantity: 10,
            price,
            available: true,
            sublevel_id: 1,
        })
    }

    #[test]
    fn first_increment_creates_single_entry() {
        let chair = product(1, 30.0);
        let cart = Cart::default().increment(&chair);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of(1), 1);
        let cart = cart.increment(&chair);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of(1), 2);
    }

    #[test]
    fn decrement_from_one_removes_entry() {
        let chair = product(1, 30.0);
        let cart = Cart::default().increment(&chair).increment(&chair);
        let cart = cart.decrement(1);
        assert_eq!(cart.quantity_of(1), 1);
        let cart = cart.decrement(1);
        assert!(cart.get(1).is_none());
        assert!(cart.is_empty());
    }

    #[test]
    fn decrement_absent_is_noop() {
        let cart = Cart::default().increment(&product(1, 5.0));
        let same = cart.decrement(42).decrement(42);
        assert_eq!(same, cart);
        assert_eq!(Cart::default().decrement(1).quantity_of(1), 0);
    }

    #[test]
    fn previous_cart_is_not_modified() {
        let chair = product(1, 30.0);
        let before = Cart::default().increment(&chair);
        let after = before.increment(&chair);
        assert_eq!(before.quantity_of(1), 1);
        assert_eq!(after.quantity_of(1), 2);
        let removed = after.decrement(1).decrement(1);
        assert_eq!(after.quantity_of(1), 2);
        assert!(removed.is_empty());
    }

    #[test]
    fn untouched_entries_are_shared() {
        let a = product(1, 1.0);
        let b = product(2, 2.0);
        let cart = Cart::default().increment(&a).increment(&b);
        let next = cart.increment(&b);
        assert!(Rc::ptr_eq(&cart.items[&1], &next.items[&1]));
        assert!(!Rc::ptr_eq(&cart.items[&2], &next.items[&2]));
    }

    #[test]
    fn totals_and_order() {
        let cart = Cart::default()
            .increment(&product(5, 2.5))
            .increment(&product(2, 10.0))
            .increment(&product(5, 2.5));
        let order: Vec<u32> = cart.items().map(|i| i.product.id).collect();
        assert_eq!(order, vec![2, 5]);
        assert_eq!(cart.total_units(), 3);
        assert_eq!(cart.total_price(), 15.0);
    }

    #[test]
    fn reducer_skips_noop_decrement() {
        let cart = Rc::new(Cart::default());
        let same = Rc::clone(&cart).reduce(CartAction::Decrement(9));
        assert!(Rc::ptr_eq(&cart, &same));
        let next = cart.reduce(CartAction::Increment(product(9, 1.0)));
        assert_eq!(next.quantity_of(9), 1);
    }
}
