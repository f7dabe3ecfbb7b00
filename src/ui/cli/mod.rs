pub mod drivers;
pub mod form;
pub mod session;

pub use form::prompt_customer;
pub use session::{render_prediction, run_session};
