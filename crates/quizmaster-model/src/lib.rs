pub mod quiz;
pub mod response;
pub mod status;
