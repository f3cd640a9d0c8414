// 進捗監視の具象実装

use crate::core::{ProgressReporter, PROGRESS_STATUS_PREFIX};
use async_trait::async_trait;
use std::path::Path;

/// 進捗を表示する完了件数の間隔
pub const DEFAULT_PROGRESS_INTERVAL: usize = 100;

/// コンソール出力による進捗報告実装
///
/// 進捗は `report_progress` 側で間引いて表示し、
/// 完了ごとの `Processed c/t files` ステータスは表示しない
#[derive(Debug, Clone)]
pub struct ConsoleProgressReporter {
    quiet: bool,
    progress_interval: usize,
}

impl Default for ConsoleProgressReporter {
    fn default() -> Self {
        Self {
            quiet: false,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

impl ConsoleProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Self {
            quiet: true,
            ..Self::default()
        }
    }

    /// 進捗表示の間隔を変更（0は1として扱う）
    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval.max(1);
        self
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// 進捗行を表示するかどうか
    pub fn should_print_progress(&self, completed: usize, total: usize) -> bool {
        !self.quiet && (completed % self.progress_interval == 0 || completed == total)
    }

    /// ステータス行を表示するかどうか
    pub fn should_print_status(&self, message: &str) -> bool {
        !self.quiet && !message.starts_with(PROGRESS_STATUS_PREFIX)
    }
}

#[async_trait]
impl ProgressReporter for ConsoleProgressReporter {
    async fn report_started(&self, total_files: usize) {
        if !self.quiet {
            println!("🚀 Starting conversion of {total_files} files...");
        }
    }

    async fn report_progress(&self, completed: usize, total: usize) {
        if self.should_print_progress(completed, total) {
            let percentage = (completed as f64 / total as f64) * 100.0;
            println!("📊 Processed {completed}/{total} files ({percentage:.1}%)");
        }
    }

    async fn report_status(&self, message: &str) {
        if self.should_print_status(message) {
            println!("ℹ️  {message}");
        }
    }

    async fn report_error(&self, file_path: &Path, error: &str) {
        // エラーはquietでも標準エラー出力に出す
        eprintln!("❌ Error converting {}: {error}", file_path.display());
    }

    async fn report_completed(&self, total_completed: usize, total_failed: usize) {
        if !self.quiet {
            println!("✅ Completed! Converted: {total_completed}, Failed: {total_failed}");
        }
    }
}

/// 何もしない進捗報告実装（テスト・ベンチマーク用）
#[derive(Debug, Default, Clone)]
pub struct NoOpProgressReporter;

impl NoOpProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProgressReporter for NoOpProgressReporter {
    async fn report_started(&self, _total_files: usize) {
        // 何もしない
    }

    async fn report_progress(&self, _completed: usize, _total: usize) {
        // 何もしない
    }

    async fn report_status(&self, _message: &str) {
        // 何もしない
    }

    async fn report_error(&self, _file_path: &Path, _error: &str) {
        // 何もしない
    }

    async fn report_completed(&self, _total_completed: usize, _total_failed: usize) {
        // 何もしない
    }
}
