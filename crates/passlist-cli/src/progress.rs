use indicatif::{ProgressBar, ProgressStyle};

use passlist_generate::ProgressObserver;

/// Terminal progress bar fed by the collector's notifications.
pub struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    pub fn new(estimated_total: usize) -> Self {
        let bar = ProgressBar::new(estimated_total as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/~{len} candidates {msg}")
        {
            bar.set_style(style.progress_chars("##-"));
        }
        Self { bar }
    }

    pub fn finish(&self, unique: usize) {
        self.bar
            .finish_with_message(format!("done, {unique} unique"));
    }
}

impl ProgressObserver for BarProgress {
    fn on_progress(&self, current: usize, estimated_total: usize) {
        self.bar.set_length(estimated_total as u64);
        self.bar.set_position(current as u64);
    }
}
