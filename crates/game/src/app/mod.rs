pub mod bootstrap;
pub mod config;
pub mod session;
pub mod worldgen;
