use crate::core::{ConversionError, ConversionResult, SourceFormat};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 変換対象ファイルの探索
pub struct FileScanner;

impl FileScanner {
    /// ディレクトリを再帰的に走査し、対応形式の画像ファイルの絶対パスを返す
    ///
    /// 各ディレクトリ内はファイル名順で走査するため、同じツリーに対しては常に同じ順序になる。
    /// 対象ファイルが無い場合は空のVecを返す（エラーにはしない）
    pub fn scan_directory(directory: &Path) -> ConversionResult<Vec<PathBuf>> {
        let root = std::path::absolute(directory)
            .map_err(|e| ConversionError::io(directory, e))?;

        let metadata = std::fs::metadata(&root).map_err(|e| ConversionError::io(&root, e))?;
        if !metadata.is_dir() {
            return Err(ConversionError::io(
                &root,
                std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "入力パスがディレクトリではありません",
                ),
            ));
        }

        let mut file_paths = Vec::new();

        for entry in WalkDir::new(&root).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| root.clone());
                ConversionError::io(path, e.into())
            })?;

            if entry.file_type().is_file() && Self::is_supported_file(entry.path()) {
                file_paths.push(entry.into_path());
            }
        }

        tracing::debug!(
            root = %root.display(),
            count = file_paths.len(),
            "画像ファイルの探索が完了しました"
        );

        Ok(file_paths)
    }

    /// 拡張子が変換対象かどうか（大文字小文字は区別しない）
    pub fn is_supported_file(path: &Path) -> bool {
        path.extension()
            .map(|ext| SourceFormat::from_extension(&ext.to_string_lossy()).is_some())
            .unwrap_or(false)
    }
}
