//! Command handlers.

pub mod caption;
pub mod config;
pub mod scan;
pub mod serve;
