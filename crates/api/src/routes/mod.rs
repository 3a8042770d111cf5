//! Route Handlers

pub mod history;
pub mod score;
