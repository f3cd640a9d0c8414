// サービス層 - 機能別のビジネスロジック
// 各サービスは特定の責任を持ち、疎結合で設計されている

pub mod config;
pub mod conversion;
pub mod monitoring;

// 公開API - 各サービスの主要機能を明示的にエクスポート
pub use config::{load_settings_file, resolve_settings, SettingsFile, SettingsOverrides};
pub use conversion::convert_single_file;
pub use monitoring::{ConsoleProgressReporter, NoOpProgressReporter};
