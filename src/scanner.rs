use crate::error::{PhStripError, Result};
use image::DynamicImage;
use std::path::Path;

/// 受け付ける画像形式の拡張子
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

/// 拡張子が対応形式かどうか（大文字小文字は区別しない）
pub fn is_supported_extension(ext: &str) -> bool {
    let ext = ext.to_lowercase();
    IMAGE_EXTENSIONS.iter().any(|&e| e == ext)
}

/// ファイルパスが対応形式かどうか
pub fn is_supported_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(is_supported_extension)
        .unwrap_or(false)
}

/// 画像ファイルを1枚読み込んでデコードする
///
/// 対応形式外のファイルはデコードを試みずに拒否する。
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    if !path.exists() {
        return Err(PhStripError::FileNotFound(path.display().to_string()));
    }

    if !is_supported_file(path) {
        return Err(PhStripError::UnsupportedFile(path.display().to_string()));
    }

    let reader = image::ImageReader::open(path)?;
    reader
        .decode()
        .map_err(|e| PhStripError::ImageLoad(format!("{}: {}", path.display(), e)))
}
