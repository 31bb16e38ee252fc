//! カラーサンプリング
//!
//! デコード済み画像の中央領域からチャンネル別平均で代表色を抽出する。
//! 領域はほぼ中央・垂直に写った試験紙の反応部を狙ったヒューリスティック:
//! 幅の中央30%、高さの中央80%（上下10%マージン）。

use crate::types::Rgb;
use image::{DynamicImage, GenericImageView};

/// サンプリング領域の幅比率（デフォルト）
pub const STRIP_WIDTH_RATIO: f32 = 0.3;

/// サンプリング領域の高さ比率（デフォルト）
pub const STRIP_HEIGHT_RATIO: f32 = 0.8;

/// サンプリング領域（ピクセル座標）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// デフォルト比率でのサンプリング領域を求める
pub fn sample_region(image_width: u32, image_height: u32) -> SampleRegion {
    sample_region_with(
        image_width,
        image_height,
        STRIP_WIDTH_RATIO,
        STRIP_HEIGHT_RATIO,
    )
}

/// 指定比率でのサンプリング領域を求める
///
/// 幅・高さとも中央寄せ。導出寸法は最低1ピクセルにクランプするため、
/// 入力が1x1でも領域が空になることはない。
pub fn sample_region_with(
    image_width: u32,
    image_height: u32,
    width_ratio: f32,
    height_ratio: f32,
) -> SampleRegion {
    let width = ((image_width as f32 * width_ratio) as u32).clamp(1, image_width);
    let height = ((image_height as f32 * height_ratio) as u32).clamp(1, image_height);
    SampleRegion {
        x: (image_width - width) / 2,
        y: (image_height - height) / 2,
        width,
        height,
    }
}

/// 中央領域の平均色を抽出する（デフォルト比率）
pub fn sample(image: &DynamicImage) -> Rgb {
    sample_with(image, STRIP_WIDTH_RATIO, STRIP_HEIGHT_RATIO)
}

/// 中央領域の平均色を抽出する（指定比率）
///
/// R/G/Bチャンネルを独立に平均し、四捨五入した値を返す。
/// アルファチャンネルは無視する。
pub fn sample_with(image: &DynamicImage, width_ratio: f32, height_ratio: f32) -> Rgb {
    let (image_width, image_height) = image.dimensions();
    let region = sample_region_with(image_width, image_height, width_ratio, height_ratio);

    let pixels = image
        .crop_imm(region.x, region.y, region.width, region.height)
        .to_rgb8();

    let mut sum_r: u64 = 0;
    let mut sum_g: u64 = 0;
    let mut sum_b: u64 = 0;
    for pixel in pixels.pixels() {
        sum_r += pixel[0] as u64;
        sum_g += pixel[1] as u64;
        sum_b += pixel[2] as u64;
    }

    let count = (region.width as u64 * region.height as u64) as f64;
    Rgb::new(
        (sum_r as f64 / count).round() as u8,
        (sum_g as f64 / count).round() as u8,
        (sum_b as f64 / count).round() as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb as ImageRgb, RgbImage};

    fn uniform_image(width: u32, height: u32, color: [u8; 3]) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, ImageRgb(color)))
    }

    #[test]
    fn test_sample_region_100x100() {
        // 30%幅・80%高さの中央領域: x=[35,65), y=[10,90)
        let region = sample_region(100, 100);
        assert_eq!(region.x, 35);
        assert_eq!(region.y, 10);
        assert_eq!(region.width, 30);
        assert_eq!(region.height, 80);
    }

    #[test]
    fn test_sample_region_never_empty() {
        for (w, h) in [(1, 1), (2, 3), (3, 2), (4, 4)] {
            let region = sample_region(w, h);
            assert!(region.width >= 1);
            assert!(region.height >= 1);
            assert!(region.x + region.width <= w);
            assert!(region.y + region.height <= h);
        }
    }

    #[test]
    fn test_sample_uniform_color_is_exact() {
        for (w, h) in [(4, 4), (10, 20), (100, 100), (7, 13)] {
            let image = uniform_image(w, h, [0x12, 0x34, 0x56]);
            assert_eq!(
                sample(&image),
                Rgb::new(0x12, 0x34, 0x56),
                "uniform sample mismatch at {}x{}",
                w,
                h
            );
        }
    }

    #[test]
    fn test_sample_ignores_border_outside_region() {
        // 領域外だけを派手な色で塗っても結果に影響しないこと
        let mut image = RgbImage::from_pixel(100, 100, ImageRgb([255, 0, 255]));
        for x in 35..65 {
            for y in 10..90 {
                image.put_pixel(x, y, ImageRgb([0x00, 0xff, 0x00]));
            }
        }
        let sampled = sample(&DynamicImage::ImageRgb8(image));
        assert_eq!(sampled, Rgb::new(0, 255, 0));
    }

    #[test]
    fn test_sample_averages_channels_independently() {
        // 領域内を半分ずつ黒と白にすると平均は中間グレー
        let mut image = RgbImage::from_pixel(100, 100, ImageRgb([0, 0, 0]));
        for x in 35..65 {
            for y in 10..50 {
                image.put_pixel(x, y, ImageRgb([255, 255, 255]));
            }
        }
        let sampled = sample(&DynamicImage::ImageRgb8(image));
        // 白40行+黒40行 → 平均127.5、四捨五入で128
        assert_eq!(sampled, Rgb::new(128, 128, 128));
    }

    #[test]
    fn test_sample_ignores_alpha() {
        let mut image = image::RgbaImage::from_pixel(10, 10, image::Rgba([10, 20, 30, 0]));
        for x in 0..10 {
            for y in 0..10 {
                image.put_pixel(x, y, image::Rgba([10, 20, 30, (x * 25) as u8]));
            }
        }
        let sampled = sample(&DynamicImage::ImageRgba8(image));
        assert_eq!(sampled, Rgb::new(10, 20, 30));
    }

    #[test]
    fn test_custom_ratios() {
        let region = sample_region_with(200, 100, 0.5, 0.5);
        assert_eq!(region.x, 50);
        assert_eq!(region.y, 25);
        assert_eq!(region.width, 100);
        assert_eq!(region.height, 50);
    }
}
