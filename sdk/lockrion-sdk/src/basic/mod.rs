pub mod actions;
pub mod issuance;
pub mod submit;
