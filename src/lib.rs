// 画像一括WebP変換ライブラリ
// ディレクトリを再帰的に探索し、JPEG/PNG/GIFを同じ階層構造のWebPに変換する

pub mod cli;
pub mod codec;
pub mod core;
pub mod engine;
pub mod file_scanner;
pub mod logging;
pub mod path_mapper;
pub mod services;

#[cfg(test)]
pub(crate) mod test_support;

pub use crate::codec::WebpCodec;
pub use crate::core::{
    BatchSummary, ConversionError, ConversionJob, ConversionResult, ConversionSettings,
    ImageCodec, ProgressReporter, SourceFormat,
};
pub use crate::engine::{
    convert_directory_with_engine, create_default_conversion_engine,
    create_quiet_conversion_engine, BatchScheduler, ConversionEngine,
};
pub use crate::file_scanner::FileScanner;
pub use crate::path_mapper::PathMapper;
pub use crate::services::{ConsoleProgressReporter, NoOpProgressReporter};
