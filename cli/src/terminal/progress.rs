use std::io::Write;
use std::sync::OnceLock;
use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

static BAR: OnceLock<ProgressBar> = OnceLock::new();

fn bar() -> &'static ProgressBar {
    BAR.get_or_init(ProgressBar::hidden)
}

/// Shows the sweep progress bar. Log output is routed around it by
/// [`ProgressWriter`] until [`finish`] is called.
pub fn start(total: usize) {
    let style: ProgressStyle =
        ProgressStyle::with_template("  {spinner:.blue} [{bar:40.green/white}] {pos}/{len} {msg}")
            .map(|s| s.progress_chars("█▓░"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());

    let pb: &ProgressBar = bar();
    pb.reset();
    pb.set_style(style);
    pb.set_length(total as u64);
    pb.set_message(format!("{}", "probing".dimmed()));
    pb.set_draw_target(ProgressDrawTarget::stderr());
    pb.enable_steady_tick(Duration::from_millis(100));
}

pub fn update(completed: usize, total: usize) {
    let pb: &ProgressBar = bar();
    pb.set_length(total as u64);
    pb.set_position(completed as u64);
}

pub fn finish() {
    let pb: &ProgressBar = bar();
    pb.finish_and_clear();
    pb.set_draw_target(ProgressDrawTarget::hidden());
}

/// Writes log lines above the progress bar instead of through it.
pub struct ProgressWriter;

impl Write for ProgressWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        bar().suspend(|| std::io::stdout().write_all(buf))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        std::io::stdout().flush()
    }
}
