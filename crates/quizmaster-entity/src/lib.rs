pub mod document;
pub mod quiz;
