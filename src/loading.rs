//! Cosmetic progress indicator shown while a record is being added.
//!
//! The indicator blocks the calling thread for `steps × step` and prints one
//! dot per step after the word "Loading". It has no effect on the stored
//! data.
//!
//! Drawing goes through `indicatif`, which draws nothing when stdout is not a
//! terminal: piped sessions still wait out the delay but show no dots.

use std::{thread, time::Duration};

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::Config;

/// A blocking "Loading....." indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loader {
    steps: u64,
    step: Duration,
    visible: bool,
}

impl Loader {
    /// Creates a loader that prints `steps` dots, pausing `step` before each.
    #[must_use]
    pub const fn new(steps: u64, step: Duration) -> Self {
        Self {
            steps,
            step,
            visible: true,
        }
    }

    /// Builds the loader described by `config`, or `None` when loading is
    /// switched off.
    #[must_use]
    pub fn from_config(config: &Config) -> Option<Self> {
        config
            .loading
            .then(|| Self::new(config.loading_steps(), config.loading_step()))
    }

    /// Suppresses drawing while keeping the delay.
    #[must_use]
    pub const fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// The total time [`run`](Self::run) blocks for.
    #[must_use]
    pub fn total(&self) -> Duration {
        u32::try_from(self.steps)
            .ok()
            .and_then(|steps| self.step.checked_mul(steps))
            .unwrap_or(Duration::MAX)
    }

    /// Runs the indicator to completion.
    ///
    /// The delay always elapses; the dots only appear when stdout is a
    /// terminal.
    pub fn run(&self) {
        let target = if self.visible {
            ProgressDrawTarget::stdout()
        } else {
            ProgressDrawTarget::hidden()
        };
        let bar = ProgressBar::with_draw_target(Some(self.steps), target);
        if let Ok(style) = ProgressStyle::with_template("{msg}") {
            bar.set_style(style);
        }
        bar.set_message("Loading");

        for _ in 0..self.steps {
            thread::sleep(self.step);
            bar.inc(1);
            bar.set_message(format!("Loading{}", ".".repeat(dots(bar.position()))));
        }
        bar.finish();
        tracing::trace!(steps = self.steps, "loading finished");
    }
}

fn dots(position: u64) -> usize {
    usize::try_from(position).unwrap_or(usize::MAX)
}
