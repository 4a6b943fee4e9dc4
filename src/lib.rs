//! Schema-driven form rendering.
//!
//! A static [`schema`] describes form types and their fields. A
//! [`form::session::FormSession`] owns the state of one form (selected type,
//! values, validation errors, progress) and changes it only in response to UI
//! events. [`render`] turns a state snapshot into console text, HTML or JSON,
//! and accepted submissions are handed to a [`sink`].

pub mod cli;
pub mod form;
pub mod render;
pub mod schema;
pub mod script;
pub mod sink;
pub mod trace;
