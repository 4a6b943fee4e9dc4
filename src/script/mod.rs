pub mod report;
pub mod runner;
pub mod script_model;
