// 高レベル公開API
// ConversionEngineを簡単に使用できるようにするための便利な関数

use super::ConversionEngine;
use crate::{
    codec::WebpCodec,
    core::{BatchSummary, ConversionResult, ConversionSettings, ImageCodec, ProgressReporter},
    services::{ConsoleProgressReporter, NoOpProgressReporter},
};
use std::path::Path;

/// 設定済みConversionEngineでディレクトリを変換
pub async fn convert_directory_with_engine<C, R>(
    input_root: &Path,
    output_root: &Path,
    engine: &ConversionEngine<C, R>,
) -> ConversionResult<BatchSummary>
where
    C: ImageCodec + 'static,
    R: ProgressReporter + 'static,
{
    engine.convert_directory(input_root, output_root).await
}

/// 標準コーデックとコンソール出力を使うエンジンを作成
pub fn create_default_conversion_engine(
    settings: ConversionSettings,
) -> ConversionEngine<WebpCodec, ConsoleProgressReporter> {
    ConversionEngine::new(WebpCodec::new(), ConsoleProgressReporter::new(), settings)
}

/// 静音版エンジンを作成（テスト・バックグラウンド処理用）
pub fn create_quiet_conversion_engine(
    settings: ConversionSettings,
) -> ConversionEngine<WebpCodec, NoOpProgressReporter> {
    ConversionEngine::new(WebpCodec::new(), NoOpProgressReporter::new(), settings)
}
