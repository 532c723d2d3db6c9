pub mod config;
pub mod game;
pub mod logger;
mod session_rng;

pub use session_rng::SessionRng;
