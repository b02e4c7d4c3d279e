//! User-facing interaction: the confirmation prompt and the progress
//! spinner. Both are behind traits so commands can be tested with mocks.

use anyhow::Result;
use typed_builder::TypedBuilder;

mod input;
mod spinner;

/// The real interaction implementation, backed by stdin/stdout and an
/// indicatif spinner.
#[derive(Debug, Default, Clone)]
pub struct Interaction;

impl Interaction {
    pub fn new() -> Self {
        Default::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
pub struct ConfirmationPromptOptions {
    #[builder(setter(into))]
    message: String,
    /// Answer assumed when the user just presses enter. Also selects the
    /// `[y/N]` / `[Y/n]` hint appended to the prompt.
    #[builder(default, setter(strip_option))]
    default: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationPromptResult {
    Yes,
    No,
}

pub trait ConfirmationPrompt {
    fn confirm(&self, options: ConfirmationPromptOptions) -> Result<ConfirmationPromptResult>;
}

pub struct SpinnerHandle {
    stop_spinner: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl SpinnerHandle {
    pub fn new(stop_spinner: Box<dyn FnOnce() + Send + Sync>) -> Self {
        Self {
            stop_spinner: Some(stop_spinner),
        }
    }
}

impl Drop for SpinnerHandle {
    fn drop(&mut self) {
        if let Some(stop_spinner) = self.stop_spinner.take() {
            stop_spinner();
        }
    }
}

pub trait SpinnerInteraction {
    fn start_spinner(&self, message: String) -> Result<SpinnerHandle>;
}

#[cfg(test)]
pub mod mocks {
    use super::*;
    use mockall::mock;

    mock! {
        pub Interaction {}

        impl ConfirmationPrompt for Interaction {
            fn confirm(&self, options: ConfirmationPromptOptions) -> Result<ConfirmationPromptResult>;
        }

        impl SpinnerInteraction for Interaction {
            fn start_spinner(&self, message: String) -> Result<SpinnerHandle>;
        }
    }
}
