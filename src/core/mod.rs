pub mod customer;
pub mod features;
pub mod schema;
