// BatchScheduler - 変換ジョブの並列実行
// セマフォによる流入制御、ロック越しの集計、全ジョブ合流後のエラー判定

use crate::{
    core::{
        progress_status, BatchResult, BatchSummary, ConversionError, ConversionJob,
        ConversionResult, ConversionSettings, ImageCodec, ProgressReporter,
    },
    services::conversion::convert_single_file,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{Mutex, Semaphore};
use tokio::task::JoinHandle;

/// バッチ変換スケジューラー
///
/// 最大 `max_concurrency` 件のジョブを同時に実行する。
/// 個々の失敗は他のジョブを止めず、最初に記録されたエラーを全ジョブ完了後に返す
pub struct BatchScheduler<C, R> {
    codec: Arc<C>,
    reporter: Arc<R>,
}

impl<C, R> BatchScheduler<C, R>
where
    C: ImageCodec + 'static,
    R: ProgressReporter + 'static,
{
    pub fn new(codec: Arc<C>, reporter: Arc<R>) -> Self {
        Self { codec, reporter }
    }

    /// ジョブ一覧を変換する
    pub async fn run_batch(
        &self,
        jobs: Vec<ConversionJob>,
        settings: &ConversionSettings,
    ) -> ConversionResult<BatchSummary> {
        if jobs.is_empty() {
            return Err(ConversionError::NoInputFiles);
        }
        settings.validate()?;

        let start_time = Instant::now();
        let total_files = jobs.len();
        let state = Arc::new(Mutex::new(BatchResult::new(total_files)));
        let semaphore = Arc::new(Semaphore::new(settings.max_concurrency()));

        tracing::info!(
            total_files,
            max_concurrency = settings.max_concurrency(),
            quality = settings.quality(),
            lossless = settings.lossless(),
            codec = self.codec.codec_name(),
            "バッチ変換を開始します"
        );
        self.reporter.report_started(total_files).await;

        let mut handles: Vec<(PathBuf, JoinHandle<()>)> = Vec::with_capacity(total_files);

        for job in jobs {
            // 空き枠ができるまでここで待機する（ジョブは破棄しない）
            let permit = match Arc::clone(&semaphore).acquire_owned().await {
                Ok(permit) => permit,
                Err(e) => {
                    let error = ConversionError::configuration(format!("セマフォエラー: {e}"));
                    state.lock().await.record_failure(error);
                    break;
                }
            };

            let input_path = job.input_path().to_path_buf();
            let codec = Arc::clone(&self.codec);
            let reporter = Arc::clone(&self.reporter);
            let state = Arc::clone(&state);
            let settings = settings.clone();

            let handle = tokio::spawn(async move {
                let _permit = permit;
                let outcome = convert_single_file(codec, &job, &settings).await;

                // 通知中もロックを保持し、完了数の通知順を保証する
                let mut state = state.lock().await;
                match outcome {
                    Ok(metadata) => {
                        let completed = state.record_success();
                        let total = state.total_files;
                        tracing::debug!(
                            input = %job.input_path().display(),
                            processing_time_ms = metadata.processing_time_ms,
                            completed,
                            total,
                            "ファイルを変換しました"
                        );
                        reporter.report_progress(completed, total).await;
                        reporter
                            .report_status(&progress_status(completed, total))
                            .await;
                    }
                    Err(error) => {
                        tracing::warn!(
                            input = %job.input_path().display(),
                            error = %error,
                            "変換に失敗しました"
                        );
                        reporter
                            .report_error(job.input_path(), &error.to_string())
                            .await;
                        state.record_failure(error);
                    }
                }
            });

            handles.push((input_path, handle));
        }

        // 全ジョブの終了を待ってからエラーを確認する
        for (input_path, handle) in handles {
            if let Err(join_error) = handle.await {
                let error = ConversionError::task(join_error);
                tracing::warn!(
                    input = %input_path.display(),
                    error = %error,
                    "変換タスクが異常終了しました"
                );
                self.reporter
                    .report_error(&input_path, &error.to_string())
                    .await;
                state.lock().await.record_failure(error);
            }
        }

        let mut state = state.lock().await;
        debug_assert!(state.is_finished() || state.first_error.is_some());
        let completed_files = state.completed_count;
        let failed_files = state.failed_count;
        self.reporter
            .report_completed(completed_files, failed_files)
            .await;

        let total_processing_time_ms = start_time.elapsed().as_millis() as u64;
        tracing::info!(
            completed_files,
            failed_files,
            total_processing_time_ms,
            "バッチ変換が終了しました"
        );

        if let Some(error) = state.first_error.take() {
            return Err(error);
        }

        Ok(BatchSummary {
            total_files,
            completed_files,
            failed_files,
            total_processing_time_ms,
            average_time_per_file_ms: total_processing_time_ms as f64 / total_files as f64,
        })
    }
}
