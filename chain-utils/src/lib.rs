// Export modules for testing and the binary entry points
pub mod error;
pub mod logging;
pub mod networks;
pub mod price;
