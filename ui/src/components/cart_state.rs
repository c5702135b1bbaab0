//! Shared reservation cart state.
//!
//! Provided as a context signal at the app root so the header badge, the
//! catalog grid and the cart modal all observe the same cart. `open`
//! controls the modal; the header button flips it from outside the
//! catalog page.

use dioxus::prelude::*;
use mqa_common::cart::ReservationCart;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CartState {
    pub cart: ReservationCart,
    pub open: bool,
}

impl CartState {
    pub fn new() -> Self {
        Self::default()
    }
}

pub fn use_cart_state() -> Signal<CartState> {
    use_context::<Signal<CartState>>()
}
