//! 解析結果の型定義
//!
//! CLIとデスクトップアプリで共有される型:
//! - Rgb: 8bitカラー（16進カラーコードと相互変換）
//! - AnalysisResult: 最終出力（検出色+pH判定）

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// 8bit RGBカラー
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// 6桁の16進カラーコードをパースする（先頭の`#`は省略可）
    pub fn from_hex(code: &str) -> Result<Self> {
        let digits = code.strip_prefix('#').unwrap_or(code);
        if digits.len() != 6 {
            return Err(Error::InvalidColor(code.to_string()));
        }
        let bytes = hex::decode(digits).map_err(|_| Error::InvalidColor(code.to_string()))?;
        Ok(Self::new(bytes[0], bytes[1], bytes[2]))
    }

    /// `#rrggbb`形式の文字列に変換する
    pub fn to_hex(self) -> String {
        format!("#{}", hex::encode([self.r, self.g, self.b]))
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// pH解析結果
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisResult {
    pub file_name: String,

    /// 画像ファイルの絶対パス（手動カラー入力の場合は空）
    #[serde(default)]
    pub file_path: String,

    /// 検出色（16進カラーコード）
    pub color: String,

    /// 推定pH値 (0-14)
    pub ph: u8,

    /// pH区分の説明
    pub description: String,

    /// 身近な例（該当するpH値のみ）
    pub example: Option<String>,
}
