//! Multi-file progress tracking with automatic batching for large sets

use crate::compiler::compile::CompileStage;
use crate::io::configuration::{MAX_INDIVIDUAL_PROGRESS_BARS, PROGRESS_BAR_WIDTH};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

/// Per-file display state
#[derive(Clone, Debug, Default)]
struct FileState {
    name: String,
    stage: Option<CompileStage>,
    completed: bool,
}

/// Coordinates progress display for batch compilation
///
/// Shows one bar per recent file advancing through the compile stages, and
/// adds a batch bar once the file count exceeds the individual bar limit.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_bars: Vec<ProgressBar>,
    file_count: usize,
    file_states: Vec<FileState>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Catalogs: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            file_bars: Vec::new(),
            file_count: 0,
            file_states: Vec::new(),
        }
    }

    /// Initialize progress bars based on file count
    pub fn initialize(&mut self, file_count: usize) {
        self.file_count = file_count;

        // Batch mode keeps large runs from flooding the terminal
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        let bars_to_create = file_count.min(MAX_INDIVIDUAL_PROGRESS_BARS);
        for _ in 0..bars_to_create {
            let pb = ProgressBar::new(CompileStage::ALL.len() as u64);
            pb.set_style(STAGE_STYLE.clone());
            self.file_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Number of files announced to [`ProgressManager::initialize`]
    pub const fn file_count(&self) -> usize {
        self.file_count
    }

    /// Register a file about to be compiled
    pub fn start_file(&mut self, index: usize, path: &Path) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        if index >= self.file_states.len() {
            self.file_states.resize(index + 1, FileState::default());
        }
        if let Some(state) = self.file_states.get_mut(index) {
            *state = FileState {
                name: display_name,
                stage: None,
                completed: false,
            };
        }
        self.update_bars();
    }

    /// Report the stage a file's compilation just entered
    pub fn update_stage(&mut self, index: usize, stage: CompileStage) {
        if let Some(state) = self.file_states.get_mut(index) {
            state.stage = Some(stage);
        }
        self.update_bars();
    }

    /// Mark file as completed and update batch progress
    pub fn complete_file(&mut self, index: usize, elapsed: Duration) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(state) = self.file_states.get_mut(index) {
            state.name = format!("✓ {} ({:.2?})", state.name, elapsed);
            state.completed = true;
        }
        self.update_bars();
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All catalogs compiled");
        }
        let _ = self.multi_progress.clear();
    }

    /// Show the last N registered files on the individual bars
    fn update_bars(&self) {
        let active: Vec<&FileState> = self
            .file_states
            .iter()
            .filter(|state| !state.name.is_empty())
            .collect();

        let start = active.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = active.get(start..).unwrap_or(&[]);
        let total = CompileStage::ALL.len();

        for (bar_idx, state) in visible.iter().enumerate() {
            if let Some(bar) = self.file_bars.get(bar_idx) {
                let (position, message) = if state.completed {
                    (total, "done".to_string())
                } else {
                    state.stage.map_or((0, "queued".to_string()), |stage| {
                        (stage.index(), stage.label().to_string())
                    })
                };
                bar.set_length(total as u64);
                bar.set_position(position as u64);
                bar.set_message(message);
                bar.set_prefix(state.name.clone());
            }
        }

        for bar_idx in visible.len()..self.file_bars.len() {
            if let Some(bar) = self.file_bars.get(bar_idx) {
                bar.set_length(0);
                bar.set_position(0);
                bar.set_message(String::new());
                bar.set_prefix(String::new());
            }
        }
    }
}
