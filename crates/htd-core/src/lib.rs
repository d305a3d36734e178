pub mod config;
pub mod logging;

pub mod fetch;
pub mod filename;
pub mod identifier;
pub mod portal;
pub mod sequence;
