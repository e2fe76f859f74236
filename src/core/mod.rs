pub mod alphabet;
pub mod codec;
pub mod config;
pub mod options;
pub mod profile;
