#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod edge;
pub mod error;
pub mod geometry;
pub mod interaction;
pub mod route;
pub mod route_dump;

#[cfg(feature = "cli")]
pub use cli::run;
