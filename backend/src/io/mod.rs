//! Interface adapters: CSV row input and domain-to-DTO mapping.

pub mod csv;
pub mod mappers;
