// ログ出力の初期化
// 進捗表示（標準出力）とは分離し、ログは標準エラー出力に出す

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 既定のログレベルを決定する
///
/// `RUST_LOG` が設定されていればそちらを優先する
pub fn build_env_filter(verbose: bool) -> EnvFilter {
    let default_level = if verbose { "debug" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// グローバルなtracingサブスクライバーを登録する
///
/// 二重登録はエラーにせず無視する
pub fn init_logging(verbose: bool) {
    let result = tracing_subscriber::registry()
        .with(build_env_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();

    if result.is_ok() {
        tracing::debug!(verbose, "ログ出力を初期化しました");
    }
}
