// src/utils/mod.rs

pub mod constants;
pub mod fuzzy;
