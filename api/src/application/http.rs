pub mod health;
pub mod server;
pub mod skin_analysis;
