//! Request handlers

pub mod audit;
pub mod claims;
pub mod health;
pub mod users;
