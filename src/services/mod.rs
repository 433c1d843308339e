//! Typed calls per backend resource.

pub mod auth;
pub mod budget;
pub mod categories;
pub mod dashboard;
pub mod items;
pub mod reports;
