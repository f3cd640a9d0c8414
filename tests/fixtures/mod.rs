// テストユーティリティ
// imageクレートで実際のJPEG/PNG/GIFファイルを作成するヘルパー

#![allow(dead_code)]

use image::{DynamicImage, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use std::fs;
use std::path::{Path, PathBuf};

/// 指定形式の画像ファイルを作成する（親ディレクトリも作成）
pub fn write_image(path: &Path, format: ImageFormat, width: u32, height: u32) -> PathBuf {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }

    let image = match format {
        // JPEGはアルファチャンネル非対応
        ImageFormat::Jpeg => DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x * 16) as u8, (y * 16) as u8, 128])
        })),
        _ => DynamicImage::ImageRgba8(RgbaImage::from_fn(width, height, |x, y| {
            Rgba([(x * 16) as u8, (y * 16) as u8, 64, 255])
        })),
    };

    image.save_with_format(path, format).unwrap();
    path.to_path_buf()
}

pub fn write_png(path: &Path) -> PathBuf {
    write_image(path, ImageFormat::Png, 8, 6)
}

pub fn write_jpeg(path: &Path) -> PathBuf {
    write_image(path, ImageFormat::Jpeg, 8, 6)
}

pub fn write_gif(path: &Path) -> PathBuf {
    write_image(path, ImageFormat::Gif, 8, 6)
}

/// 代表的な入力ツリーを作成する
///
/// ```text
/// a.png, b.jpg, sub/c.gif, sub/deeper/d.jpeg, readme.txt, sub/notes.md
/// ```
pub fn setup_sample_tree(root: &Path) {
    write_png(&root.join("a.png"));
    write_jpeg(&root.join("b.jpg"));
    write_gif(&root.join("sub/c.gif"));
    write_jpeg(&root.join("sub/deeper/d.jpeg"));

    fs::write(root.join("readme.txt"), "This is a text file").unwrap();
    fs::write(root.join("sub/notes.md"), "# notes").unwrap();
}

/// WebPファイルのヘッダーを持つか
pub fn is_webp(path: &Path) -> bool {
    match fs::read(path) {
        Ok(bytes) => bytes.len() > 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP",
        Err(_) => false,
    }
}
