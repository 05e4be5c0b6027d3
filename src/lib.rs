//! Computes total sales revenue by costing a sales record against a price
//! catalogue, and reports the total together with every sale that could not
//! be costed.

pub mod args;
pub mod engine;
pub mod errors;
pub mod loader;
pub mod report;
