use super::validate_input_directory;
use crate::{file_scanner::FileScanner, path_mapper::PathMapper};
use anyhow::Result;
use std::path::PathBuf;

/// Configuration struct for scan command
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub input_directory: PathBuf,
    pub output_directory: Option<PathBuf>,
}

/// 変換対象の一覧（出力先が指定された場合は対応する出力パス付き）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanEntry {
    pub input_path: PathBuf,
    pub output_path: Option<PathBuf>,
}

/// 変換対象を列挙する（ファイルシステムは変更しない）
pub fn collect_scan_entries(config: &ScanConfig) -> Result<Vec<ScanEntry>> {
    validate_input_directory(&config.input_directory)?;

    let files = FileScanner::scan_directory(&config.input_directory)?;
    let mapper = config
        .output_directory
        .as_ref()
        .map(|output| PathMapper::new(&config.input_directory, output))
        .transpose()?;

    files
        .into_iter()
        .map(|input_path| -> Result<ScanEntry> {
            let output_path = mapper
                .as_ref()
                .map(|mapper| mapper.output_path_for(&input_path))
                .transpose()?;
            Ok(ScanEntry {
                input_path,
                output_path,
            })
        })
        .collect()
}

/// Execute scan command
pub async fn execute_scan(config: ScanConfig) -> Result<()> {
    let entries = tokio::task::spawn_blocking(move || collect_scan_entries(&config)).await??;

    if entries.is_empty() {
        println!("⚠️  変換対象の画像ファイルが見つかりませんでした");
        return Ok(());
    }

    println!("🔍 変換対象: {}件", entries.len());
    for entry in &entries {
        match &entry.output_path {
            Some(output_path) => println!(
                "   {} -> {}",
                entry.input_path.display(),
                output_path.display()
            ),
            None => println!("   {}", entry.input_path.display()),
        }
    }

    Ok(())
}
