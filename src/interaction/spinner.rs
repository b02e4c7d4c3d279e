use std::time::Duration;

use anyhow::Result;
use indicatif::ProgressBar;

use super::{Interaction, SpinnerHandle, SpinnerInteraction};

impl SpinnerInteraction for Interaction {
    fn start_spinner(&self, message: String) -> Result<SpinnerHandle> {
        let spinner = ProgressBar::new_spinner().with_message(message);
        spinner.enable_steady_tick(Duration::from_millis(100));

        Ok(SpinnerHandle::new(Box::new(move || {
            spinner.finish_and_clear();
        })))
    }
}
