//! pH照合
//!
//! 入力色とリファレンスパレット15色のRGB空間ユークリッド距離を比較し、
//! 最も近いpH値を返す最近傍分類。クラスタリングや補間は行わない。

use crate::palette::{self, REFERENCE_PALETTE};
use crate::types::Rgb;

/// 照合結果（pH値+付随ラベル）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorMatch {
    pub ph: u8,
    pub description: &'static str,
    pub example: Option<&'static str>,
}

// 距離の2乗（大小比較だけなので開方は不要）
#[inline]
fn distance_squared(a: Rgb, b: Rgb) -> u32 {
    let dr = a.r as i32 - b.r as i32;
    let dg = a.g as i32 - b.g as i32;
    let db = a.b as i32 - b.b as i32;
    (dr * dr + dg * dg + db * db) as u32
}

/// 入力色に最も近いpH値を返す
///
/// パレットをpH昇順に走査し、厳密な`<`比較で更新するため、
/// 等距離の場合は小さい方のpH値が選ばれる。全域で必ず値を返す。
pub fn closest_ph(color: Rgb) -> u8 {
    let mut best_ph = REFERENCE_PALETTE[0].ph;
    let mut best_distance = u32::MAX;

    for entry in &REFERENCE_PALETTE {
        let distance = distance_squared(color, entry.color);
        if distance < best_distance {
            best_distance = distance;
            best_ph = entry.ph;
        }
    }

    best_ph
}

/// 入力色を照合して説明・例付きの結果を返す
pub fn match_color(color: Rgb) -> ColorMatch {
    let ph = closest_ph(color);
    ColorMatch {
        ph,
        description: palette::description_for(ph).unwrap_or(""),
        example: palette::example_for(ph),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_colors_match_themselves() {
        // 基準色そのものは必ず自分のpH値に分類される
        for entry in &REFERENCE_PALETTE {
            assert_eq!(
                closest_ph(entry.color),
                entry.ph,
                "palette color {} should match its own pH",
                entry.color
            );
        }
    }

    #[test]
    fn test_closest_ph_is_total() {
        // RGB立方体の頂点を含む任意の入力で0-14が返ること
        let corners = [
            Rgb::new(0, 0, 0),
            Rgb::new(255, 255, 255),
            Rgb::new(255, 0, 255),
            Rgb::new(0, 255, 255),
            Rgb::new(128, 128, 128),
        ];
        for color in corners {
            let ph = closest_ph(color);
            assert!(ph <= 14, "pH {} out of range for {}", ph, color);
        }
    }

    #[test]
    fn test_tie_break_prefers_lower_ph() {
        // #00e37f はpH 7 (#00ff00) とpH 8 (#00ccff) から等距離（距離の2乗16913）
        let midpoint = Rgb::from_hex("#00e37f").unwrap();
        assert_eq!(
            distance_squared(midpoint, REFERENCE_PALETTE[7].color),
            distance_squared(midpoint, REFERENCE_PALETTE[8].color)
        );
        assert_eq!(closest_ph(midpoint), 7);
    }

    #[test]
    fn test_near_palette_color() {
        // 基準色の近傍は同じpH値に分類される
        let near_neutral = Rgb::new(5, 250, 5);
        assert_eq!(closest_ph(near_neutral), 7);

        let near_strong_acid = Rgb::new(250, 5, 5);
        assert_eq!(closest_ph(near_strong_acid), 0);
    }

    #[test]
    fn test_match_color_neutral() {
        let result = match_color(Rgb::from_hex("#00ff00").unwrap());
        assert_eq!(result.ph, 7);
        assert_eq!(result.description, "Neutral");
        assert_eq!(result.example, Some("Pure water"));
    }

    #[test]
    fn test_match_color_without_example() {
        // pH 11 (#6600cc) には身近な例がない
        let result = match_color(Rgb::from_hex("#6600cc").unwrap());
        assert_eq!(result.ph, 11);
        assert_eq!(result.description, "Moderate base");
        assert!(result.example.is_none());
    }
}
