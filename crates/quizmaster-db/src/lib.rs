pub mod document;
pub mod quiz;
pub mod schema;

pub use sea_orm;
