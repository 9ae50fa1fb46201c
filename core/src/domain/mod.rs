pub mod common;
pub mod health;
pub mod skin_analysis;
