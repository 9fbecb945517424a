// src/data_input/mod.rs

pub mod report_data;
pub mod report_parser;

// src/data_input/mod.rs
