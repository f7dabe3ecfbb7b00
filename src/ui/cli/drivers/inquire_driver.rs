use crate::ui::cli::drivers::PromptDriver;
use anyhow::Result;
use inquire::{Confirm, CustomType, CustomUserError, Select, validator::Validation};
use std::fmt::Display;

pub struct InquireDriver;

fn bounds_check<T: PartialOrd + Display>(x: &T, min: Option<&T>, max: Option<&T>) -> Validation {
    match (min, max) {
        (Some(lo), Some(hi)) if *x < *lo || *x > *hi => {
            Validation::Invalid(format!("Must be between {lo} and {hi}").into())
        }
        (Some(lo), None) if *x < *lo => Validation::Invalid(format!("Must be ≥ {lo}").into()),
        (None, Some(hi)) if *x > *hi => Validation::Invalid(format!("Must be ≤ {hi}").into()),
        _ => Validation::Valid,
    }
}

/// Inquire draws an empty help line for `Some("")`.
fn help_message(help: &str) -> Option<&str> {
    (!help.is_empty()).then_some(help)
}

fn confirm_prompt<'a>(title: &'a str, help: &'a str, default: bool) -> Confirm<'a> {
    let mut confirm = Confirm::new(title).with_default(default);
    confirm.help_message = help_message(help);
    confirm
}

impl PromptDriver for InquireDriver {
    fn ask_bool(&self, title: &str, help: &str, default: bool) -> Result<bool> {
        Ok(confirm_prompt(title, help, default).prompt()?)
    }

    fn ask_u64(
        &self,
        title: &str,
        help: &str,
        default: u64,
        min: Option<u64>,
        max: Option<u64>,
    ) -> Result<u64> {
        let mut prompt = CustomType::<u64>::new(title)
            .with_default(default)
            .with_validator(move |x: &u64| -> Result<Validation, CustomUserError> {
                Ok(bounds_check(x, min.as_ref(), max.as_ref()))
            });
        prompt.help_message = help_message(help);
        Ok(prompt.prompt()?)
    }

    fn ask_f64(
        &self,
        title: &str,
        help: &str,
        default: f64,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<f64> {
        let mut prompt = CustomType::<f64>::new(title)
            .with_default(default)
            .with_validator(move |x: &f64| -> Result<Validation, CustomUserError> {
                if !x.is_finite() {
                    return Ok(Validation::Invalid("Must be a finite number".into()));
                }
                Ok(bounds_check(x, min.as_ref(), max.as_ref()))
            });
        prompt.help_message = help_message(help);
        Ok(prompt.prompt()?)
    }

    fn ask_select(
        &self,
        title: &str,
        help: &str,
        options: &[String],
        default: usize,
    ) -> Result<usize> {
        let mut select = Select::new(title, options.to_vec()).with_starting_cursor(default);
        select.help_message = help_message(help);
        Ok(select.raw_prompt()?.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_messages() {
        assert_eq!(bounds_check(&5u64, Some(&0), Some(&72)), Validation::Valid);
        assert_eq!(
            bounds_check(&73u64, Some(&0), Some(&72)),
            Validation::Invalid("Must be between 0 and 72".into())
        );
        assert_eq!(
            bounds_check(&17.5f64, Some(&18.0), None),
            Validation::Invalid("Must be ≥ 18".into())
        );
        assert_eq!(bounds_check(&1e9f64, Some(&18.0), None), Validation::Valid);
        assert_eq!(
            bounds_check(&2u64, None, Some(&1)),
            Validation::Invalid("Must be ≤ 1".into())
        );
    }

    #[test]
    fn empty_help_is_not_rendered() {
        assert_eq!(confirm_prompt("Predict another customer?", "", false).help_message, None);
        assert_eq!(confirm_prompt("Continue?", "y/n", true).help_message, Some("y/n"));
        assert_eq!(help_message(""), None);
    }
}
