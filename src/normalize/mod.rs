// src/normalize/mod.rs

pub mod address;
pub mod name;
pub mod phone;

pub use address::{is_likely_address, normalize_address};
pub use name::{is_likely_name, normalize_name};
pub use phone::{extract_phones_from_text, normalize_phone};
