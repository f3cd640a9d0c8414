// Worker - 単一ファイル変換機能

use crate::core::{
    ConversionError, ConversionJob, ConversionMetadata, ConversionResult, ConversionSettings,
    ImageCodec, SourceFormat,
};
use std::sync::Arc;
use std::time::Instant;

/// 単一ファイルの変換
///
/// デコードとエンコードはブロッキングスレッドプールで実行する。
/// 出力ファイルが既に存在する場合は上書きする
pub async fn convert_single_file<C>(
    codec: Arc<C>,
    job: &ConversionJob,
    settings: &ConversionSettings,
) -> ConversionResult<ConversionMetadata>
where
    C: ImageCodec + 'static,
{
    let start_time = Instant::now();
    let input_path = job.input_path().to_path_buf();

    // 形式判定は読み込み前に行う
    let format = SourceFormat::from_path(&input_path)?;

    let data = tokio::fs::read(&input_path)
        .await
        .map_err(|e| ConversionError::io(&input_path, e))?;
    let input_size = data.len() as u64;

    let quality = settings.quality();
    let lossless = settings.lossless();

    let (encoded, dimensions) = tokio::task::spawn_blocking(move || {
        let image = codec
            .decode(&data, format)
            .map_err(|e| ConversionError::decode(&input_path, e))?;
        let dimensions = (image.width(), image.height());

        let encoded = codec
            .encode(&image, quality, lossless)
            .map_err(|e| ConversionError::encode(&input_path, e))?;

        ConversionResult::Ok((encoded, dimensions))
    })
    .await??;

    tokio::fs::write(job.output_path(), &encoded)
        .await
        .map_err(|e| ConversionError::io(job.output_path(), e))?;

    let metadata = ConversionMetadata {
        input_size,
        output_size: encoded.len() as u64,
        dimensions,
        processing_time_ms: start_time.elapsed().as_millis() as u64,
    };

    tracing::debug!(
        input = %job.input_path().display(),
        output = %job.output_path().display(),
        input_size = metadata.input_size,
        output_size = metadata.output_size,
        "変換完了"
    );

    Ok(metadata)
}
