use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Walks shorter than this finish too fast for a bar to help.
const PROGRESS_THRESHOLD: u64 = 10;

const TEMPLATE: &str = "{spinner:.green} resolving [{bar:40.cyan/blue}] {pos}/{len} {msg}";

/// Counts resolved files on stderr so stdout stays clean.
///
/// Small or non-interactive runs get a hidden bar, which accepts updates and
/// draws nothing.
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    pub fn new(total: u64, enabled: bool) -> Self {
        let bar = if enabled && total >= PROGRESS_THRESHOLD {
            let style = ProgressStyle::with_template(TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=>-");
            ProgressBar::with_draw_target(Some(total), ProgressDrawTarget::stderr())
                .with_style(style)
        } else {
            ProgressBar::hidden()
        };
        Self { bar }
    }

    pub fn is_visible(&self) -> bool {
        !self.bar.is_hidden()
    }

    /// Show the file currently being resolved.
    pub fn resolving(&self, file_name: &str) {
        self.bar.set_message(file_name.to_string());
    }

    pub fn inc(&self) {
        self.bar.inc(1);
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
