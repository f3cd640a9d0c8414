// 設定管理の具象実装

use crate::core::{default_max_concurrency, ConversionError, ConversionResult, ConversionSettings};
use serde::Deserialize;
use std::path::Path;

/// JSON設定ファイルの内容
///
/// 全項目が省略可能。未知のキーはエラーにする
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsFile {
    pub quality: Option<u8>,
    pub lossless: Option<bool>,
    pub threads: Option<usize>,
}

/// コマンドライン引数から渡される上書き値
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
    pub quality: Option<u8>,
    pub lossless: bool,
    pub threads: Option<usize>,
}

/// 設定ファイルを読み込む
pub fn load_settings_file(path: &Path) -> ConversionResult<SettingsFile> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        ConversionError::configuration(format!(
            "設定ファイル {} を読み込めません: {e}",
            path.display()
        ))
    })?;

    serde_json::from_str(&content).map_err(|e| {
        ConversionError::configuration(format!(
            "設定ファイル {} の形式が不正です: {e}",
            path.display()
        ))
    })
}

/// 既定値 < 設定ファイル < コマンドライン引数 の優先順で設定を決定する
pub fn resolve_settings(
    file: Option<&SettingsFile>,
    overrides: &SettingsOverrides,
) -> ConversionResult<ConversionSettings> {
    let mut settings = ConversionSettings::default();

    if let Some(file) = file {
        if let Some(quality) = file.quality {
            settings = settings.with_quality(quality);
        }
        if let Some(lossless) = file.lossless {
            settings = settings.with_lossless(lossless);
        }
        if let Some(threads) = file.threads {
            settings = settings.with_max_concurrency(threads);
        }
    }

    if let Some(quality) = overrides.quality {
        settings = settings.with_quality(quality);
    }
    // --lossless はフラグなので指定時のみ上書き
    if overrides.lossless {
        settings = settings.with_lossless(true);
    }
    if let Some(threads) = overrides.threads {
        settings = settings.with_max_concurrency(threads);
    }

    settings.validate()?;

    if settings.max_concurrency() > default_max_concurrency() {
        tracing::warn!(
            threads = settings.max_concurrency(),
            recommended_max = default_max_concurrency(),
            "並列数がCPU数の2倍を超えています"
        );
    }

    Ok(settings)
}
