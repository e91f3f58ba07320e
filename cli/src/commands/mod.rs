pub mod config;
pub mod debug;
pub mod level;
pub mod pipe;
pub mod status;
