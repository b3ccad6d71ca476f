pub mod health;
pub mod songs;
