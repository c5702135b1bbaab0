use std::fmt;

use chrono::NaiveDate;

use crate::product::Product;

/// Hard cap on simultaneous reservations per visitor.
pub const MAX_RESERVATIONS: usize = 3;

/// Why a product could not be added to the cart. `Display` carries the
/// notice text shown to the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartError {
    AlreadyReserved,
    Full,
    NotReservable,
}

impl fmt::Display for CartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartError::AlreadyReserved => write!(f, "Este producto ya está en tu carrito."),
            CartError::Full => write!(
                f,
                "Solo puedes apartar un máximo de {MAX_RESERVATIONS} productos."
            ),
            CartError::NotReservable => write!(f, "Este producto no está disponible."),
        }
    }
}

/// Client-side reservation cart. Holds full product snapshots in insertion
/// order; lives only as long as the page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReservationCart {
    items: Vec<Product>,
}

impl ReservationCart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= MAX_RESERVATIONS
    }

    pub fn contains(&self, product_id: &str) -> bool {
        self.items.iter().any(|p| p.id == product_id)
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Try to reserve a product. Checks run in a fixed order so the visitor
    /// always hears the most specific objection: already in the cart, then
    /// cart full, then product not reservable today.
    pub fn add(&mut self, product: Product, today: NaiveDate) -> Result<(), CartError> {
        if self.contains(&product.id) {
            return Err(CartError::AlreadyReserved);
        }
        if self.is_full() {
            return Err(CartError::Full);
        }
        if !product.is_reservable(today) {
            return Err(CartError::NotReservable);
        }
        self.items.push(product);
        Ok(())
    }

    /// Take every reserved product out, in insertion order. The cart is empty
    /// afterwards no matter what the caller does with the items.
    pub fn drain(&mut self) -> Vec<Product> {
        std::mem::take(&mut self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::{Category, ProductStatus};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2025, 6, 15)
    }

    fn dummy_product(id: &str, quantity: u32, expiration: &str) -> Product {
        Product {
            id: id.to_string(),
            food_name: format!("Producto {id}"),
            image: String::new(),
            category: Category::Fruits,
            expiration_date: expiration.to_string(),
            quantity,
            status: ProductStatus::Available,
        }
    }

    fn fresh(id: &str) -> Product {
        dummy_product(id, 4, "20/06/2025")
    }

    #[test]
    fn add_keeps_insertion_order() {
        let mut cart = ReservationCart::new();
        cart.add(fresh("a"), today()).unwrap();
        cart.add(fresh("b"), today()).unwrap();
        cart.add(fresh("c"), today()).unwrap();
        let ids: Vec<&str> = cart.items().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn fourth_add_is_rejected() {
        let mut cart = ReservationCart::new();
        for id in ["a", "b", "c"] {
            cart.add(fresh(id), today()).unwrap();
        }
        assert!(cart.is_full());
        assert_eq!(cart.add(fresh("d"), today()), Err(CartError::Full));
        assert_eq!(cart.len(), MAX_RESERVATIONS);
    }

    #[test]
    fn duplicate_id_is_rejected_without_growth() {
        let mut cart = ReservationCart::new();
        cart.add(fresh("a"), today()).unwrap();
        assert_eq!(cart.add(fresh("a"), today()), Err(CartError::AlreadyReserved));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn duplicate_wins_over_full() {
        // A member of a full cart re-added must read as duplicate, not full.
        let mut cart = ReservationCart::new();
        for id in ["a", "b", "c"] {
            cart.add(fresh(id), today()).unwrap();
        }
        assert_eq!(cart.add(fresh("b"), today()), Err(CartError::AlreadyReserved));
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let mut cart = ReservationCart::new();
        assert_eq!(
            cart.add(dummy_product("a", 0, "20/06/2025"), today()),
            Err(CartError::NotReservable)
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn expired_product_is_rejected_even_with_stock() {
        let mut cart = ReservationCart::new();
        assert_eq!(
            cart.add(dummy_product("a", 10, "14/06/2025"), today()),
            Err(CartError::NotReservable)
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn drain_empties_and_preserves_order() {
        let mut cart = ReservationCart::new();
        cart.add(fresh("a"), today()).unwrap();
        cart.add(fresh("b"), today()).unwrap();
        let drained = cart.drain();
        let ids: Vec<&str> = drained.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
        assert!(cart.is_empty());
        // A drained product can be reserved again.
        cart.add(fresh("a"), today()).unwrap();
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CartError::Full.to_string(),
            "Solo puedes apartar un máximo de 3 productos."
        );
        assert_eq!(
            CartError::AlreadyReserved.to_string(),
            "Este producto ya está en tu carrito."
        );
    }
}
