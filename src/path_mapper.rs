// 入力パスから出力パスへのマッピング
// 入力ルートからの相対ディレクトリ構造を出力ルート側に再現する

use crate::core::{ConversionError, ConversionJob, ConversionResult, OUTPUT_EXTENSION};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// 入力ルート・出力ルートの組に対するパスマッパー
#[derive(Debug, Clone)]
pub struct PathMapper {
    input_root: PathBuf,
    output_root: PathBuf,
}

impl PathMapper {
    /// 両ルートを絶対パスに正規化してマッパーを作成
    pub fn new(input_root: impl AsRef<Path>, output_root: impl AsRef<Path>) -> ConversionResult<Self> {
        let input_root = input_root.as_ref();
        let output_root = output_root.as_ref();

        Ok(Self {
            input_root: std::path::absolute(input_root)
                .map_err(|e| ConversionError::io(input_root, e))?,
            output_root: std::path::absolute(output_root)
                .map_err(|e| ConversionError::io(output_root, e))?,
        })
    }

    pub fn input_root(&self) -> &Path {
        &self.input_root
    }

    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    /// 出力パスを計算する（ファイルシステムには触れない）
    ///
    /// `<input_root>/sub/c.gif` は `<output_root>/sub/c.webp` になる
    pub fn output_path_for(&self, input_path: &Path) -> ConversionResult<PathBuf> {
        let input_path =
            std::path::absolute(input_path).map_err(|e| ConversionError::io(input_path, e))?;

        let relative = input_path.strip_prefix(&self.input_root).map_err(|_| {
            ConversionError::io(
                &input_path,
                std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!(
                        "入力ルート {} の配下にありません",
                        self.input_root.display()
                    ),
                ),
            )
        })?;

        if relative.file_name().is_none() {
            return Err(ConversionError::io(
                &input_path,
                std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "入力ルートそのものは変換できません",
                ),
            ));
        }

        Ok(self
            .output_root
            .join(relative)
            .with_extension(OUTPUT_EXTENSION))
    }

    /// 出力パスを計算し、親ディレクトリを作成する
    ///
    /// ディレクトリ作成は冪等で、不足している祖先もまとめて作成する
    pub fn map_path(&self, input_path: &Path) -> ConversionResult<PathBuf> {
        let output_path = self.output_path_for(input_path)?;

        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConversionError::io(parent, e))?;
        }

        Ok(output_path)
    }

    /// 変換ジョブを作成
    pub fn create_job(&self, input_path: &Path) -> ConversionResult<ConversionJob> {
        let output_path = self.map_path(input_path)?;
        Ok(ConversionJob::new(input_path, output_path))
    }

    /// 複数ファイル分の変換ジョブを作成（最初の失敗で中断）
    ///
    /// 同じ出力パスになる入力（`a.png` と `a.jpg` など）は警告を出す。
    /// ジョブはそのまま作成され、後に書き込んだ方が残る
    pub fn create_jobs(&self, input_paths: &[PathBuf]) -> ConversionResult<Vec<ConversionJob>> {
        let jobs = input_paths
            .iter()
            .map(|path| self.create_job(path))
            .collect::<ConversionResult<Vec<_>>>()?;

        for (output_path, inputs) in Self::output_collisions(&jobs) {
            tracing::warn!(
                output = %output_path.display(),
                inputs = ?inputs,
                "複数の入力ファイルが同じ出力パスに変換されます"
            );
        }

        Ok(jobs)
    }

    /// 出力パスが重複しているジョブを出力パスごとにまとめる
    pub fn output_collisions(jobs: &[ConversionJob]) -> Vec<(PathBuf, Vec<PathBuf>)> {
        let mut by_output: HashMap<&Path, Vec<PathBuf>> = HashMap::new();
        for job in jobs {
            by_output
                .entry(job.output_path())
                .or_default()
                .push(job.input_path().to_path_buf());
        }

        let mut collisions: Vec<(PathBuf, Vec<PathBuf>)> = by_output
            .into_iter()
            .filter(|(_, inputs)| inputs.len() > 1)
            .map(|(output, inputs)| (output.to_path_buf(), inputs))
            .collect();
        collisions.sort();
        collisions
    }
}
