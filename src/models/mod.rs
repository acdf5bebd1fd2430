pub mod dashboard;
pub mod member;
pub mod project;
pub mod score;
