pub mod artifacts;
pub mod classifiers;
pub mod config;
pub mod core;
pub mod encoding;
pub mod inference;
pub mod logging;
pub mod scalers;
pub mod ui;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
