//! # Reading and writing numbers
pub mod decimal;
