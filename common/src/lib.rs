pub mod cart;
pub mod freshness;
pub mod product;
pub mod token;
pub mod user;
pub mod validation;
