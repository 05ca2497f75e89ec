//! SeaORM entities and conversions to/from the domain types.

pub mod post;
pub mod user;
