pub mod dashboard;
pub mod render;
