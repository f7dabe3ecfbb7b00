mod artifacts;
mod customers;

pub use artifacts::*;
pub use customers::*;
