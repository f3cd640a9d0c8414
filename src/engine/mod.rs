// エンジン層 - 並列処理とオーケストレーション
// サービス層を組み合わせて高レベルな処理を提供

pub mod api;
pub mod conversion_engine;
pub mod scheduler;

// 公開API - 主要エンジンクラス
pub use api::{
    convert_directory_with_engine, create_default_conversion_engine,
    create_quiet_conversion_engine,
};
pub use conversion_engine::{plan_jobs, ConversionEngine};
pub use scheduler::BatchScheduler;
