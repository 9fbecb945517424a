// src/data_analysis/mod.rs

pub mod direction;
pub mod histogram;
pub mod summary;

// src/data_analysis/mod.rs
