// 設定管理機能
// 設定ファイルの読み込みとCLI引数とのマージ

pub mod implementations;

// 公開API
pub use implementations::{load_settings_file, resolve_settings, SettingsFile, SettingsOverrides};
