//! Domain services

mod validator;

pub use validator::Validator;
