// ConversionEngine - 依存性注入による変換エンジン
// 探索・パス対応付け・並列変換を1回のバッチとしてまとめる

use super::scheduler::BatchScheduler;
use crate::{
    core::{
        BatchSummary, ConversionError, ConversionJob, ConversionResult, ConversionSettings,
        ImageCodec, ProgressReporter,
    },
    file_scanner::FileScanner,
    path_mapper::PathMapper,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// 変換エンジン
///
/// コーデック・進捗通知・設定をコンストラクタで受け取る。
/// 共有される依存関係は初期からArcで管理する
pub struct ConversionEngine<C, R> {
    codec: Arc<C>,
    reporter: Arc<R>,
    settings: ConversionSettings,
}

impl<C, R> ConversionEngine<C, R>
where
    C: ImageCodec + 'static,
    R: ProgressReporter + 'static,
{
    pub fn new(codec: C, reporter: R, settings: ConversionSettings) -> Self {
        Self {
            codec: Arc::new(codec),
            reporter: Arc::new(reporter),
            settings,
        }
    }

    /// 入力ディレクトリ配下の画像を出力ディレクトリへWebP変換する
    ///
    /// 終了時には成否に応じた最終状態メッセージを通知する
    pub async fn convert_directory(
        &self,
        input_root: &Path,
        output_root: &Path,
    ) -> ConversionResult<BatchSummary> {
        let result = self.run(input_root, output_root).await;

        match &result {
            Ok(_) => self.reporter.report_status("Conversion complete").await,
            Err(error) => {
                tracing::error!(error = %error, "変換処理がエラーで終了しました");
                self.reporter
                    .report_status(&format!("Error: {error}"))
                    .await
            }
        }

        result
    }

    async fn run(&self, input_root: &Path, output_root: &Path) -> ConversionResult<BatchSummary> {
        self.settings.validate()?;
        self.reporter.report_status("Converting...").await;

        tokio::fs::create_dir_all(output_root)
            .await
            .map_err(|e| ConversionError::io(output_root, e))?;

        let input_root_owned = input_root.to_path_buf();
        let output_root_owned = output_root.to_path_buf();
        let jobs =
            tokio::task::spawn_blocking(move || plan_jobs(&input_root_owned, &output_root_owned))
                .await??;

        tracing::info!(
            input_root = %input_root.display(),
            output_root = %output_root.display(),
            files = jobs.len(),
            "変換対象を決定しました"
        );

        let scheduler = BatchScheduler::new(Arc::clone(&self.codec), Arc::clone(&self.reporter));
        scheduler.run_batch(jobs, &self.settings).await
    }

    /// 設定への参照を取得
    pub fn settings(&self) -> &ConversionSettings {
        &self.settings
    }

    /// レポーターへの参照を取得
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// コーデックへの参照を取得
    pub fn codec(&self) -> &C {
        &self.codec
    }
}

/// 入力ディレクトリを走査し、出力先ディレクトリを作成しながらジョブを組み立てる
pub fn plan_jobs(input_root: &Path, output_root: &Path) -> ConversionResult<Vec<ConversionJob>> {
    let files: Vec<PathBuf> = FileScanner::scan_directory(input_root)?;
    let mapper = PathMapper::new(input_root, output_root)?;
    mapper.create_jobs(&files)
}
