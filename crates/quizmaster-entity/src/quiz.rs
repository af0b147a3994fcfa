pub mod question;
#[allow(clippy::module_inception)]
pub mod quiz;
