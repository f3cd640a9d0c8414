// 変換処理に関連するデータ型定義

use super::error::{ConversionError, ConversionResult};
use image::ImageFormat;
use std::path::{Path, PathBuf};

/// 変換対象としてサポートする拡張子（小文字）
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "gif"];

/// 出力ファイルの拡張子
pub const OUTPUT_EXTENSION: &str = "webp";

/// 既定のWebP品質
pub const DEFAULT_QUALITY: u8 = 80;

/// 並列数の上限（tokioのセマフォが保持できる許可数の上限）
pub const MAX_CONCURRENCY: usize = tokio::sync::Semaphore::MAX_PERMITS;

/// 完了ごとに通知する進捗ステータスの接頭辞
pub const PROGRESS_STATUS_PREFIX: &str = "Processed ";

/// 進捗ステータス文字列を作成する (`Processed c/t files`)
pub fn progress_status(completed: usize, total: usize) -> String {
    format!("{PROGRESS_STATUS_PREFIX}{completed}/{total} files")
}

/// 入力画像の形式（拡張子から判定するデコーダーのヒント）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    Jpeg,
    Png,
    Gif,
}

impl SourceFormat {
    /// 拡張子から形式を判定（大文字小文字は区別しない）
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            "gif" => Some(Self::Gif),
            _ => None,
        }
    }

    /// ファイルパスから形式を判定
    pub fn from_path(path: &Path) -> ConversionResult<Self> {
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_string())
            .unwrap_or_default();

        Self::from_extension(&extension)
            .ok_or_else(|| ConversionError::unsupported_format(path, extension))
    }

    /// imageクレートのフォーマットに変換
    pub fn image_format(&self) -> ImageFormat {
        match self {
            Self::Jpeg => ImageFormat::Jpeg,
            Self::Png => ImageFormat::Png,
            Self::Gif => ImageFormat::Gif,
        }
    }
}

/// 単一ファイルの変換ジョブ
///
/// PathMapperが作成し、スケジューラーがちょうど一度だけ消費する
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    input_path: PathBuf,
    output_path: PathBuf,
}

impl ConversionJob {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
        }
    }

    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}

/// 1回のバッチ実行における変換設定
///
/// バッチ実行中は不変。呼び出し側が所有し、スケジューラーは読み取りのみ行う
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSettings {
    quality: u8,
    lossless: bool,
    max_concurrency: usize,
}

impl ConversionSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = quality;
        self
    }

    pub fn with_lossless(mut self, lossless: bool) -> Self {
        self.lossless = lossless;
        self
    }

    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency;
        self
    }

    /// WebP品質 (0-100)
    pub fn quality(&self) -> u8 {
        self.quality
    }

    /// 可逆圧縮を使うかどうか
    pub fn lossless(&self) -> bool {
        self.lossless
    }

    /// 同時に実行する変換の最大数
    pub fn max_concurrency(&self) -> usize {
        self.max_concurrency
    }

    /// 設定値の妥当性をチェック
    pub fn validate(&self) -> ConversionResult<()> {
        if self.quality > 100 {
            return Err(ConversionError::invalid_settings(
                "quality",
                format!("0から100の範囲で指定してください (指定値: {})", self.quality),
            ));
        }

        if self.max_concurrency == 0 {
            return Err(ConversionError::invalid_settings(
                "max_concurrency",
                "並列数は1以上である必要があります",
            ));
        }

        if self.max_concurrency > MAX_CONCURRENCY {
            return Err(ConversionError::invalid_settings(
                "max_concurrency",
                format!(
                    "並列数は{MAX_CONCURRENCY}以下である必要があります (指定値: {})",
                    self.max_concurrency
                ),
            ));
        }

        Ok(())
    }
}

impl Default for ConversionSettings {
    fn default() -> Self {
        Self {
            quality: DEFAULT_QUALITY,
            lossless: false,
            max_concurrency: default_max_concurrency(),
        }
    }
}

/// 既定の並列数（論理CPU数の2倍）
pub fn default_max_concurrency() -> usize {
    num_cpus::get().max(1) * 2
}

/// バッチ実行中の集計状態
///
/// スケジューラーがロック越しにのみ更新する
#[derive(Debug)]
pub struct BatchResult {
    pub total_files: usize,
    pub completed_count: usize,
    pub failed_count: usize,
    pub first_error: Option<ConversionError>,
}

impl BatchResult {
    pub fn new(total_files: usize) -> Self {
        Self {
            total_files,
            completed_count: 0,
            failed_count: 0,
            first_error: None,
        }
    }

    /// 成功を1件記録し、更新後の完了数を返す
    pub fn record_success(&mut self) -> usize {
        debug_assert!(self.completed_count < self.total_files);
        self.completed_count += 1;
        self.completed_count
    }

    /// 失敗を1件記録する。最初のエラーのみ保持し、以降は破棄する
    pub fn record_failure(&mut self, error: ConversionError) -> bool {
        self.failed_count += 1;
        if self.first_error.is_none() {
            self.first_error = Some(error);
            true
        } else {
            false
        }
    }

    /// 全ジョブが終了したかどうか
    pub fn is_finished(&self) -> bool {
        self.completed_count + self.failed_count == self.total_files
    }
}

/// 単一ファイル変換のメタデータ
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionMetadata {
    pub input_size: u64,
    pub output_size: u64,
    pub dimensions: (u32, u32),
    pub processing_time_ms: u64,
}

/// バッチ全体のサマリー
#[derive(Debug, Clone, PartialEq)]
pub struct BatchSummary {
    pub total_files: usize,
    pub completed_files: usize,
    pub failed_files: usize,
    pub total_processing_time_ms: u64,
    pub average_time_per_file_ms: f64,
}
