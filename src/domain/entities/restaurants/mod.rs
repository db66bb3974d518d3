//! 레스토랑 엔티티 모듈

pub mod restaurant;

pub use restaurant::{MenuItem, Restaurant, SpecialDeal};
