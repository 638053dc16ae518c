//! Roaster Domain Concerns

pub mod products;
