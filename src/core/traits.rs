// 変換処理システムのトレイト定義
// 外部コラボレーター（コーデック・進捗通知）の抽象化インターフェース

use super::types::SourceFormat;
use anyhow::Result;
use async_trait::async_trait;
use image::DynamicImage;
use mockall::automock;
use std::path::Path;
use std::sync::Arc;

/// 画像コーデックの抽象化トレイト
///
/// デコードとエンコードはCPUバウンドな同期処理として扱い、
/// 呼び出し側がブロッキングスレッドプール上で実行する
#[automock]
pub trait ImageCodec: Send + Sync {
    /// バイト列を指定形式としてデコード
    fn decode(&self, data: &[u8], format: SourceFormat) -> Result<DynamicImage>;

    /// 画像をWebPバイト列にエンコード
    fn encode(&self, image: &DynamicImage, quality: u8, lossless: bool) -> Result<Vec<u8>>;

    /// コーデック実装の名前を取得
    fn codec_name(&self) -> &'static str;
}

// ImageCodec for Box<dyn ImageCodec>
impl ImageCodec for Box<dyn ImageCodec> {
    fn decode(&self, data: &[u8], format: SourceFormat) -> Result<DynamicImage> {
        self.as_ref().decode(data, format)
    }

    fn encode(&self, image: &DynamicImage, quality: u8, lossless: bool) -> Result<Vec<u8>> {
        self.as_ref().encode(image, quality, lossless)
    }

    fn codec_name(&self) -> &'static str {
        self.as_ref().codec_name()
    }
}

/// 進捗報告の抽象化トレイト
///
/// スケジューラーは自身の呼び出しをロックで直列化するため、
/// 実装側が同時呼び出しを考慮する必要はない
#[automock]
#[async_trait]
pub trait ProgressReporter: Send + Sync {
    /// 処理開始時の報告
    async fn report_started(&self, total_files: usize);

    /// 進捗更新の報告（completedは1からtotalまで単調増加）
    async fn report_progress(&self, completed: usize, total: usize);

    /// 状態メッセージの報告
    async fn report_status(&self, message: &str);

    /// エラー発生時の報告
    async fn report_error(&self, file_path: &Path, error: &str);

    /// 処理完了時の報告
    async fn report_completed(&self, total_completed: usize, total_failed: usize);
}

// ProgressReporter for Box<dyn ProgressReporter>
#[async_trait]
impl ProgressReporter for Box<dyn ProgressReporter> {
    async fn report_started(&self, total_files: usize) {
        self.as_ref().report_started(total_files).await
    }

    async fn report_progress(&self, completed: usize, total: usize) {
        self.as_ref().report_progress(completed, total).await
    }

    async fn report_status(&self, message: &str) {
        self.as_ref().report_status(message).await
    }

    async fn report_error(&self, file_path: &Path, error: &str) {
        self.as_ref().report_error(file_path, error).await
    }

    async fn report_completed(&self, total_completed: usize, total_failed: usize) {
        self.as_ref()
            .report_completed(total_completed, total_failed)
            .await
    }
}

// ProgressReporter for Arc<R>
#[async_trait]
impl<R: ProgressReporter + ?Sized> ProgressReporter for Arc<R> {
    async fn report_started(&self, total_files: usize) {
        self.as_ref().report_started(total_files).await
    }

    async fn report_progress(&self, completed: usize, total: usize) {
        self.as_ref().report_progress(completed, total).await
    }

    async fn report_status(&self, message: &str) {
        self.as_ref().report_status(message).await
    }

    async fn report_error(&self, file_path: &Path, error: &str) {
        self.as_ref().report_error(file_path, error).await
    }

    async fn report_completed(&self, total_completed: usize, total_failed: usize) {
        self.as_ref()
            .report_completed(total_completed, total_failed)
            .await
    }
}
