pub mod console;
pub mod html;
pub mod view_model;
