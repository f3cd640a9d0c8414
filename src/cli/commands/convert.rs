use super::validate_input_directory;
use crate::{
    codec::WebpCodec,
    core::ConversionSettings,
    engine::ConversionEngine,
    services::{load_settings_file, resolve_settings, ConsoleProgressReporter, SettingsOverrides},
};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Configuration struct for convert command to reduce argument count
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    pub input_directory: PathBuf,
    pub output_directory: PathBuf,
    pub quality: Option<u8>,
    pub lossless: bool,
    pub threads: Option<usize>,
    pub config_file: Option<PathBuf>,
    pub quiet: bool,
}

impl ConvertConfig {
    /// 設定ファイルとコマンドライン引数から変換設定を決定する
    pub fn resolve_settings(&self) -> Result<ConversionSettings> {
        let file = match &self.config_file {
            Some(path) => Some(load_settings_file(path)?),
            None => None,
        };

        let overrides = SettingsOverrides {
            quality: self.quality,
            lossless: self.lossless,
            threads: self.threads,
        };

        Ok(resolve_settings(file.as_ref(), &overrides)?)
    }
}

/// Execute convert command
pub async fn execute_convert(config: ConvertConfig) -> Result<()> {
    validate_input_directory(&config.input_directory)?;

    let settings = config.resolve_settings()?;

    if !config.quiet {
        println!("🖼️  WebP変換開始");
        println!("   - 入力ディレクトリ: {}", config.input_directory.display());
        println!("   - 出力ディレクトリ: {}", config.output_directory.display());
        println!("⚙️  変換設定:");
        println!("   - 品質: {}", settings.quality());
        println!(
            "   - 圧縮方式: {}",
            if settings.lossless() { "可逆" } else { "非可逆" }
        );
        println!("   - 最大並列数: {}", settings.max_concurrency());
    }

    let reporter = if config.quiet {
        ConsoleProgressReporter::quiet()
    } else {
        ConsoleProgressReporter::new()
    };
    let engine = ConversionEngine::new(WebpCodec::new(), reporter, settings);

    let summary = engine
        .convert_directory(&config.input_directory, &config.output_directory)
        .await
        .with_context(|| {
            format!(
                "{} の変換に失敗しました",
                config.input_directory.display()
            )
        })?;

    if !config.quiet {
        println!("✅ 変換完了!");
        println!("   - 変換済ファイル: {}", summary.completed_files);
        println!("   - 総ファイル数: {}", summary.total_files);
        println!("   - 処理時間: {}ms", summary.total_processing_time_ms);
        println!(
            "   - 平均処理時間: {:.2}ms/ファイル",
            summary.average_time_per_file_ms
        );
        println!(
            "📁 出力先: {}",
            config.output_directory.display()
        );
    }

    Ok(())
}
