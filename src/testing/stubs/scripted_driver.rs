use crate::ui::cli::drivers::PromptDriver;
use anyhow::{Result, anyhow, bail};
use std::cell::RefCell;
use std::collections::VecDeque;

/// One scripted reply. `Default` accepts whatever default the prompt offers.
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    Bool(bool),
    U64(u64),
    F64(f64),
    Select(usize),
    Default,
}

/// What the code under test asked for.
#[derive(Debug, Clone, PartialEq)]
pub struct AskedPrompt {
    pub title: String,
    pub bounds: (Option<f64>, Option<f64>),
    pub options: Vec<String>,
}

/// [`PromptDriver`] that replays a fixed script and records every prompt.
pub struct ScriptedDriver {
    answers: RefCell<VecDeque<Answer>>,
    asked: RefCell<Vec<AskedPrompt>>,
}

impl ScriptedDriver {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: RefCell::new(answers.into()),
            asked: RefCell::new(Vec::new()),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.answers.borrow().is_empty()
    }

    pub fn asked(&self) -> Vec<AskedPrompt> {
        self.asked.borrow().clone()
    }

    fn next(
        &self,
        title: &str,
        bounds: (Option<f64>, Option<f64>),
        options: &[String],
    ) -> Result<Answer> {
        self.asked.borrow_mut().push(AskedPrompt {
            title: title.to_string(),
            bounds,
            options: options.to_vec(),
        });
        self.answers
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| anyhow!("script exhausted at '{title}'"))
    }
}

impl PromptDriver for ScriptedDriver {
    fn ask_bool(&self, title: &str, _help: &str, default: bool) -> Result<bool> {
        match self.next(title, (None, None), &[])? {
            Answer::Bool(b) => Ok(b),
            Answer::Default => Ok(default),
            other => bail!("expected a bool answer for '{title}', got {other:?}"),
        }
    }

    fn ask_u64(
        &self,
        title: &str,
        _help: &str,
        default: u64,
        min: Option<u64>,
        max: Option<u64>,
    ) -> Result<u64> {
        let bounds = (min.map(|x| x as f64), max.map(|x| x as f64));
        match self.next(title, bounds, &[])? {
            Answer::U64(n) => Ok(n),
            Answer::Default => Ok(default),
            other => bail!("expected an integer answer for '{title}', got {other:?}"),
        }
    }

    fn ask_f64(
        &self,
        title: &str,
        _help: &str,
        default: f64,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<f64> {
        match self.next(title, (min, max), &[])? {
            Answer::F64(x) => Ok(x),
            Answer::Default => Ok(default),
            other => bail!("expected a number answer for '{title}', got {other:?}"),
        }
    }

    fn ask_select(
        &self,
        title: &str,
        _help: &str,
        options: &[String],
        default: usize,
    ) -> Result<usize> {
        match self.next(title, (None, None), options)? {
            Answer::Select(i) if i < options.len() => Ok(i),
            Answer::Select(i) => bail!("option {i} out of range for '{title}'"),
            Answer::Default => Ok(default),
            other => bail!("expected a selection for '{title}', got {other:?}"),
        }
    }
}
