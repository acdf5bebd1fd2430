pub mod dashboard;
pub mod members;
pub mod settings;
