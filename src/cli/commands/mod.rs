pub mod convert;
pub mod scan;

pub use convert::*;
pub use scan::*;

use anyhow::Result;
use std::path::Path;

/// 入力ディレクトリが存在し、ディレクトリであることを確認する
pub(crate) fn validate_input_directory(input_directory: &Path) -> Result<()> {
    if !input_directory.exists() {
        anyhow::bail!(
            "Input directory does not exist: {}",
            input_directory.display()
        );
    }

    if !input_directory.is_dir() {
        anyhow::bail!(
            "Input path is not a directory: {}",
            input_directory.display()
        );
    }

    Ok(())
}
