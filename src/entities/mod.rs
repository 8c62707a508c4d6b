//! Declarative schemas and row mappings for the six business entities
//!
//! Each module exposes `schema()` (validation order, bounds, defaults),
//! `mapping()` (storage column remap) and a marker type for the
//! `Validated<T>` extractor.

pub mod company;
pub mod offer;
pub mod subscription;
pub mod token;
pub mod unit;
pub mod user;

pub use company::Company;
pub use offer::Offer;
pub use subscription::Subscription;
pub use token::Token;
pub use unit::Unit;
pub use user::User;
