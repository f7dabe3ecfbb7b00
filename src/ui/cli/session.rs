use anyhow::{Context, Result};
use std::io::Write;
use tracing::info;

use crate::inference::{InferenceService, PredictionResult};
use crate::ui::cli::drivers::PromptDriver;
use crate::ui::cli::form::prompt_customer;
use crate::ui::types::customer_field_specs;

const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const DIM_ITALIC: &str = "\x1b[2m\x1b[3m";
const RESET: &str = "\x1b[0m";

pub fn render_prediction(result: &PredictionResult) -> String {
    if result.will_churn() {
        format!("{RED}🚨 {result}{RESET}")
    } else {
        format!("{GREEN}✅ {result}{RESET}")
    }
}

/// Interactive loop: collect a customer, predict, show the verdict, repeat
/// until the user declines. Returns the number of predictions shown.
pub fn run_session<D: PromptDriver, W: Write>(
    service: &InferenceService,
    driver: &D,
    out: &mut W,
) -> Result<usize> {
    let specs = customer_field_specs()?;

    writeln!(out, "{BOLD}Customer Churn Prediction 🔮{RESET}")?;
    writeln!(
        out,
        "{DIM_ITALIC}Enter the customer's details to predict if they will churn.{RESET}"
    )?;

    let mut shown = 0;
    loop {
        let record = prompt_customer(driver, &specs)?;
        let result = service
            .predict(&record)
            .context("prediction failed for the entered customer")?;
        shown += 1;

        writeln!(out, "{}", render_prediction(&result))?;
        out.flush()?;

        if !driver.ask_bool("Predict another customer?", "", false)? {
            break;
        }
    }

    info!(predictions = shown, "session finished");
    Ok(shown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::ChurnLabel;
    use crate::testing::dummies::dummy_service;
    use crate::testing::stubs::{Answer, ScriptedDriver};

    fn defaults() -> Vec<Answer> {
        vec![Answer::Default; 12]
    }

    #[test]
    fn renders_verdict_lines() {
        let churn = PredictionResult::new(ChurnLabel::Churn, [0.1, 0.9]);
        let line = render_prediction(&churn);
        assert!(line.contains("Customer WILL CHURN with a 90.00% probability."));
        assert!(line.starts_with(RED));

        let stay = PredictionResult::new(ChurnLabel::NoChurn, [0.75, 0.25]);
        assert!(render_prediction(&stay).contains("WILL NOT CHURN with a 75.00%"));
    }

    #[test]
    fn single_round() {
        let service = dummy_service();
        let mut script = defaults();
        script.push(Answer::Bool(false));
        let driver = ScriptedDriver::new(script);
        let mut out = Vec::new();

        let shown = run_session(&service, &driver, &mut out).unwrap();
        assert_eq!(shown, 1);
        assert!(driver.is_exhausted());

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Customer Churn Prediction"));
        assert_eq!(text.matches("Prediction: Customer").count(), 1);
    }

    #[test]
    fn repeats_until_declined() {
        let service = dummy_service();
        let mut script = defaults();
        script.push(Answer::Bool(true));
        script.extend(defaults());
        script.push(Answer::Bool(false));
        let driver = ScriptedDriver::new(script);
        let mut out = Vec::new();

        assert_eq!(run_session(&service, &driver, &mut out).unwrap(), 2);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Prediction: Customer").count(), 2);
    }

    #[test]
    fn driver_failure_ends_the_session_with_error() {
        let service = dummy_service();
        let driver = ScriptedDriver::new(vec![Answer::Default; 3]);
        let mut out = Vec::new();
        assert!(run_session(&service, &driver, &mut out).is_err());
    }
}
