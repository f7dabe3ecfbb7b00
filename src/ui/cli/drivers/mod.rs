mod inquire_driver;
mod prompt_driver;

pub use inquire_driver::InquireDriver;
pub use prompt_driver::PromptDriver;
