pub mod domain;
pub mod dto;
pub mod errors;
pub mod ports;
pub mod services;

pub use dto::SongDto;
pub use errors::CoreError;
