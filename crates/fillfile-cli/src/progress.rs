//! Progress bar for the fill loop

use indicatif::{ProgressBar, ProgressStyle};

/// Create a progress bar sized to the fill target.
///
/// Hidden for zero-size requests; indicatif also suppresses drawing when
/// stderr is not a terminal.
pub fn create_fill_progress_bar(total: u64) -> ProgressBar {
    if total == 0 {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  {spinner:.green} Filling [{bar:40.cyan/blue}] {bytes}/{total_bytes} {msg}")
            .unwrap()
            .progress_chars("█▓░"),
    );

    pb
}
