// コアレイヤー - 基盤となるトレイト、型、エラー定義
// 他のレイヤーから参照される基本的な抽象化を提供

pub mod error;
pub mod traits;
pub mod types;

// 公開API - 明示的にエクスポートして曖昧性を回避
pub use error::{ConversionError, ConversionResult};
pub use traits::{ImageCodec, ProgressReporter};
pub use types::{
    default_max_concurrency, progress_status, BatchResult, BatchSummary, ConversionJob,
    ConversionMetadata, ConversionSettings, SourceFormat, DEFAULT_QUALITY, MAX_CONCURRENCY,
    OUTPUT_EXTENSION, PROGRESS_STATUS_PREFIX, SUPPORTED_EXTENSIONS,
};
