// 変換処理専用のカスタムエラー型定義

use std::path::{Path, PathBuf};
use thiserror::Error;

/// 変換処理固有のエラー型
#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("入出力エラー: {} - {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("入力フォルダにサポートされている画像ファイルがありません")]
    NoInputFiles,

    #[error("サポートされていない画像形式です: {} ({extension})", path.display())]
    UnsupportedFormat { path: PathBuf, extension: String },

    #[error("画像のデコードに失敗しました: {} - {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("WebPエンコードに失敗しました: {} - {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("設定値エラー: {field} - {reason}")]
    InvalidSettings { field: String, reason: String },

    #[error("設定エラー: {message}")]
    Configuration { message: String },

    #[error("タスクエラー: {source}")]
    Task {
        #[source]
        source: tokio::task::JoinError,
    },
}

impl ConversionError {
    /// 入出力エラーの作成
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// 非対応形式エラーの作成
    pub fn unsupported_format(path: impl AsRef<Path>, extension: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            path: path.as_ref().to_path_buf(),
            extension: extension.into(),
        }
    }

    /// デコードエラーの作成
    pub fn decode(path: impl AsRef<Path>, source: anyhow::Error) -> Self {
        Self::Decode {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// エンコードエラーの作成
    pub fn encode(path: impl AsRef<Path>, source: anyhow::Error) -> Self {
        Self::Encode {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// 設定値エラーの作成
    pub fn invalid_settings(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSettings {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// 設定エラーの作成
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// タスクエラーの作成
    pub fn task(source: tokio::task::JoinError) -> Self {
        Self::Task { source }
    }
}

impl From<tokio::task::JoinError> for ConversionError {
    fn from(error: tokio::task::JoinError) -> Self {
        ConversionError::Task { source: error }
    }
}

/// 変換処理の結果型
pub type ConversionResult<T> = std::result::Result<T, ConversionError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_conversion_error_creation() {
        let io_error = ConversionError::io(
            "/test/path",
            std::io::Error::new(std::io::ErrorKind::NotFound, "見つかりません"),
        );
        assert!(io_error.to_string().contains("/test/path"));
        assert!(io_error.to_string().contains("入出力エラー"));

        let unsupported = ConversionError::unsupported_format("/test/a.bmp", "bmp");
        assert!(unsupported.to_string().contains("bmp"));

        let settings = ConversionError::invalid_settings("quality", "0から100の範囲で指定してください");
        assert!(settings.to_string().contains("quality"));

        let config = ConversionError::configuration("JSONの解析に失敗しました");
        assert!(config.to_string().contains("設定エラー"));

        assert!(ConversionError::NoInputFiles
            .to_string()
            .contains("画像ファイルがありません"));
    }

    #[test]
    fn test_error_source_chain() {
        let error = ConversionError::decode("/a.png", anyhow::anyhow!("壊れたヘッダー"));
        assert!(error.source().is_some());
        assert!(error.to_string().contains("壊れたヘッダー"));

        let error = ConversionError::io(
            "/out",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(error.source().is_some());
    }

    #[tokio::test]
    async fn test_task_error() {
        let task = tokio::spawn(async {
            std::future::pending::<()>().await;
        });
        // タスクをキャンセルしてJoinErrorを発生させる
        task.abort();

        let join_error = task.await.expect_err("タスクエラーが期待されます");
        let error: ConversionError = join_error.into();

        assert!(error.to_string().contains("タスクエラー"));
    }
}
