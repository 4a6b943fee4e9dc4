pub mod error;
pub mod form_model;
pub mod session;
pub mod validation;
