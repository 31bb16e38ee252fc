//! pHリファレンステーブル
//!
//! 万能試験紙の標準変色表に基づく15段階 (pH 0-14) の固定パレット。
//! プロセス起動時から不変の定数テーブルとして扱う。

use crate::types::Rgb;
use lazy_static::lazy_static;
use std::collections::HashMap;

/// リファレンスパレットの1行
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceEntry {
    /// pH値 (0-14)
    pub ph: u8,
    /// 基準色
    pub color: Rgb,
    /// pH区分の説明
    pub description: &'static str,
}

const fn entry(ph: u8, r: u8, g: u8, b: u8, description: &'static str) -> ReferenceEntry {
    ReferenceEntry {
        ph,
        color: Rgb::new(r, g, b),
        description,
    }
}

/// pH昇順の基準色テーブル（インデックス = pH値）
pub const REFERENCE_PALETTE: [ReferenceEntry; 15] = [
    entry(0, 0xff, 0x00, 0x00, "Strong acid"),
    entry(1, 0xff, 0x33, 0x00, "Very strong acid"),
    entry(2, 0xff, 0x66, 0x00, "Strong acid"),
    entry(3, 0xff, 0x99, 0x00, "Moderate acid"),
    entry(4, 0xff, 0xcc, 0x00, "Moderate acid"),
    entry(5, 0xff, 0xff, 0x00, "Weak acid"),
    entry(6, 0xcc, 0xff, 0x00, "Weak acid"),
    entry(7, 0x00, 0xff, 0x00, "Neutral"),
    entry(8, 0x00, 0xcc, 0xff, "Weak base"),
    entry(9, 0x00, 0x66, 0xff, "Weak base"),
    entry(10, 0x00, 0x00, 0xff, "Moderate base"),
    entry(11, 0x66, 0x00, 0xcc, "Moderate base"),
    entry(12, 0x99, 0x00, 0x99, "Strong base"),
    entry(13, 0xcc, 0x00, 0x66, "Very strong base"),
    entry(14, 0xff, 0x00, 0x33, "Strong base"),
];

lazy_static! {
    /// 身近な例（全pH値にあるわけではない）
    static ref PH_EXAMPLES: HashMap<u8, &'static str> = {
        let mut map = HashMap::new();
        map.insert(1, "Stomach acid");
        map.insert(2, "Lemon juice");
        map.insert(3, "Vinegar");
        map.insert(4, "Orange juice");
        map.insert(5, "Black coffee");
        map.insert(6, "Urine");
        map.insert(7, "Pure water");
        map.insert(8, "Sea water");
        map.insert(9, "Baking soda");
        map.insert(10, "Milk of magnesia");
        map.insert(12, "Household bleach");
        map.insert(14, "Drain cleaner");
        map
    };
}

/// pH値から区分説明を引く
pub fn description_for(ph: u8) -> Option<&'static str> {
    REFERENCE_PALETTE.get(ph as usize).map(|e| e.description)
}

/// pH値から身近な例を引く（該当なしはNone）
pub fn example_for(ph: u8) -> Option<&'static str> {
    PH_EXAMPLES.get(&ph).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_covers_full_range() {
        // pH 0-14が重複なく揃っていて、インデックスと一致すること
        assert_eq!(REFERENCE_PALETTE.len(), 15);
        for (index, entry) in REFERENCE_PALETTE.iter().enumerate() {
            assert_eq!(entry.ph as usize, index);
        }
    }

    #[test]
    fn test_palette_colors() {
        assert_eq!(REFERENCE_PALETTE[0].color, Rgb::new(255, 0, 0));
        assert_eq!(REFERENCE_PALETTE[7].color, Rgb::from_hex("#00ff00").unwrap());
        assert_eq!(REFERENCE_PALETTE[8].color, Rgb::from_hex("#00ccff").unwrap());
        assert_eq!(REFERENCE_PALETTE[14].color, Rgb::from_hex("#ff0033").unwrap());
    }

    #[test]
    fn test_description_for() {
        assert_eq!(description_for(0), Some("Strong acid"));
        assert_eq!(description_for(7), Some("Neutral"));
        assert_eq!(description_for(14), Some("Strong base"));
        assert_eq!(description_for(15), None);
    }

    #[test]
    fn test_example_for() {
        assert_eq!(example_for(1), Some("Stomach acid"));
        assert_eq!(example_for(7), Some("Pure water"));
        // pH 0, 11, 13には例がない
        assert_eq!(example_for(0), None);
        assert_eq!(example_for(11), None);
        assert_eq!(example_for(13), None);
    }
}
