//! Advisory progress reporting with indicatif
//!
//! Operations report through a [`ProgressSink`] so the same code path runs
//! with visible bars in a terminal and silently in tests or pipes. A sink
//! never influences results.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

/// Style for passes with a known number of elements
static BAR_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{spinner:.green} {msg} [{elapsed_precise}] {wide_bar:.cyan/blue} {pos}/{len} ({per_sec})")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏  ")
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
});

/// Style for open-ended work such as directory walks
static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.green} {msg} [{elapsed_precise}] {pos} entries ({per_sec})")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
});

/// Sink that accepts ticks and an optional total.
pub trait ProgressSink {
    /// Announce how many ticks to expect.
    fn set_total(&self, total: u64);

    /// Record one processed element.
    fn tick(&self);

    /// Mark the tracked work as done.
    fn finish(&self);
}

/// Disabled sink
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentProgress;

impl ProgressSink for SilentProgress {
    fn set_total(&self, _total: u64) {}

    fn tick(&self) {}

    fn finish(&self) {}
}

/// Terminal progress bar backed by indicatif.
///
/// Starts as a spinner and switches to a bar once a total is announced.
/// Draws to stderr and hides itself when stderr is not a terminal.
pub struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    pub fn new(message: impl Into<String>) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(SPINNER_STYLE.clone());
        bar.set_message(message.into());
        if !console::Term::stderr().is_term() {
            bar.set_draw_target(ProgressDrawTarget::hidden());
        } else {
            bar.enable_steady_tick(Duration::from_millis(100));
        }
        Self { bar }
    }

    /// Current tick count, mostly useful in tests.
    pub fn position(&self) -> u64 {
        self.bar.position()
    }
}

impl ProgressSink for BarProgress {
    fn set_total(&self, total: u64) {
        self.bar.set_style(BAR_STYLE.clone());
        self.bar.set_length(total);
        self.bar.set_position(0);
    }

    fn tick(&self) {
        self.bar.inc(1);
    }

    fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

/// Pick a sink based on whether progress display is enabled.
pub fn sink(enabled: bool, message: &str) -> Box<dyn ProgressSink> {
    if enabled {
        Box::new(BarProgress::new(message))
    } else {
        Box::new(SilentProgress)
    }
}
