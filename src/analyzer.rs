use crate::config::Config;
use crate::error::{PhStripError, Result};
use crate::scanner;
use image::GenericImageView;
use ph_strip_common::{matcher, sampler, AnalysisResult, Rgb};
use std::path::Path;

/// 画像1枚を解析してpH推定結果を返す
///
/// デコードはブロッキングワーカーで実行し、完了を待ってから
/// サンプリングと照合を同期的に最後まで行う。
pub async fn analyze_file(path: &Path, config: &Config, verbose: bool) -> Result<AnalysisResult> {
    let decode_path = path.to_path_buf();
    let image = tokio::task::spawn_blocking(move || scanner::load_image(&decode_path))
        .await
        .map_err(|e| PhStripError::ImageLoad(e.to_string()))??;

    let color = sampler::sample_with(&image, config.strip_width_ratio, config.strip_height_ratio);

    if verbose {
        let region = sampler::sample_region_with(
            image.width(),
            image.height(),
            config.strip_width_ratio,
            config.strip_height_ratio,
        );
        println!(
            "  サンプリング領域: {}x{} @ ({}, {})",
            region.width, region.height, region.x, region.y
        );
        println!("  検出色: {}", color);
    }

    Ok(build_result(path, color))
}

/// 検出色から解析結果を組み立てる
pub fn build_result(path: &Path, color: Rgb) -> AnalysisResult {
    let matched = matcher::match_color(color);
    AnalysisResult {
        file_name: path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default(),
        file_path: path.display().to_string(),
        color: color.to_hex(),
        ph: matched.ph,
        description: matched.description.to_string(),
        example: matched.example.map(|s| s.to_string()),
    }
}
