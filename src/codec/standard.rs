use crate::core::{ImageCodec, SourceFormat};
use anyhow::{anyhow, Context, Result};
use image::DynamicImage;
use std::io::Cursor;

/// imageクレートでデコードし、libwebpでエンコードする標準コーデック
#[derive(Clone, Debug, Default)]
pub struct WebpCodec;

impl WebpCodec {
    pub fn new() -> Self {
        Self
    }
}

impl ImageCodec for WebpCodec {
    fn decode(&self, data: &[u8], format: SourceFormat) -> Result<DynamicImage> {
        // GIFは先頭フレームのみ
        image::load(Cursor::new(data), format.image_format())
            .with_context(|| format!("{format:?}形式として読み込めません"))
    }

    fn encode(&self, image: &DynamicImage, quality: u8, lossless: bool) -> Result<Vec<u8>> {
        if image.width() == 0 || image.height() == 0 {
            anyhow::bail!("空の画像はエンコードできません");
        }

        let quality = quality.min(100) as f32;

        let memory = match image {
            DynamicImage::ImageRgb8(rgb) => {
                webp::Encoder::from_rgb(rgb.as_raw(), rgb.width(), rgb.height())
                    .encode_simple(lossless, quality)
            }
            other => {
                let rgba = other.to_rgba8();
                webp::Encoder::from_rgba(rgba.as_raw(), rgba.width(), rgba.height())
                    .encode_simple(lossless, quality)
            }
        }
        .map_err(|e| anyhow!("libwebpエンコードエラー: {e:?}"))?;

        Ok(memory.to_vec())
    }

    fn codec_name(&self) -> &'static str {
        "image + libwebp"
    }
}
