use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Per-worker progress bars plus an overall bar, sized from the partition.
///
/// When disabled everything draws to a hidden target, so workers can report
/// unconditionally without checking a flag.
pub struct WorkerProgress {
    multi_progress: MultiProgress,
    overall_bar: ProgressBar,
    worker_bars: Vec<ProgressBar>,
}

impl WorkerProgress {
    /// Create bars for slices of the given sizes (one entry per worker)
    pub fn new(slice_sizes: &[usize], enabled: bool) -> Self {
        let multi_progress = if enabled {
            MultiProgress::new()
        } else {
            MultiProgress::with_draw_target(ProgressDrawTarget::hidden())
        };

        // Colors for different workers
        let worker_colors = ["cyan/blue", "green/yellow", "magenta/red", "yellow/blue"];

        let worker_bars = slice_sizes
            .iter()
            .enumerate()
            .map(|(worker_id, &size)| {
                let color = worker_colors[worker_id % worker_colors.len()];
                let template = format!(
                    "[Worker {:>2}] [{{elapsed_precise}}] {{bar:30.{color}}} {{pos:>3}}/{{len:3}} {{msg}}",
                    worker_id + 1
                );
                let bar = multi_progress.add(ProgressBar::new(size as u64));
                bar.set_style(Self::style(&template));
                bar
            })
            .collect();

        let total: usize = slice_sizes.iter().sum();
        let overall_bar = multi_progress.add(ProgressBar::new(total as u64));
        overall_bar.set_style(Self::style(
            "Overall:    [{elapsed_precise}] {bar:30.bright_white/dim} {pos:>3}/{len:3} files ({percent}%)",
        ));

        Self {
            multi_progress,
            overall_bar,
            worker_bars,
        }
    }

    fn style(template: &str) -> ProgressStyle {
        ProgressStyle::with_template(template)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▉▊▋▌▍▎▏  ")
    }

    /// Show the file a worker is about to read
    pub fn start_file(&self, worker_id: usize, file_name: &str) {
        if let Some(bar) = self.worker_bars.get(worker_id) {
            bar.set_message(file_name.to_string());
        }
    }

    /// Count one finished file (read or failed) for a worker
    pub fn finish_file(&self, worker_id: usize) {
        if let Some(bar) = self.worker_bars.get(worker_id) {
            bar.inc(1);
        }
        self.overall_bar.inc(1);
    }

    pub fn files_done(&self) -> u64 {
        self.overall_bar.position()
    }

    /// Finish all bars and clear the display
    pub fn finish(&self) {
        for bar in &self.worker_bars {
            bar.finish_and_clear();
        }
        self.overall_bar.finish_and_clear();
        let _ = self.multi_progress.clear();
    }
}
