pub mod error;
pub mod formatter;
pub mod logger;
pub mod validation;
