// Export our modules for use in binaries and tests
pub mod bootstrap;
pub mod config;
pub mod detail;
pub mod domain;
pub mod fetch;
pub mod ids;
pub mod logging;
pub mod render;
pub mod resolve;
pub mod tabs;
pub mod views;

#[cfg(test)]
pub(crate) mod testing;

pub use domain::Category;
