pub mod quiz;
pub mod status;
