use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhStripError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("対応していないファイル形式です（jpeg/png/webpのみ）: {0}")]
    UnsupportedFile(String),

    #[error("画像読み込みエラー: {0}")]
    ImageLoad(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] ph_strip_common::Error),
}

pub type Result<T> = std::result::Result<T, PhStripError>;
