use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ph-strip")]
#[command(about = "pH試験紙カラー解析ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 試験紙の写真を解析してpHを推定
    Analyze {
        /// 画像ファイルのパス (jpeg/png/webp)
        #[arg(required = true)]
        image: PathBuf,

        /// 結果をJSONで保存（省略時は表示のみ）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// カラーコードから直接pHを判定
    Color {
        /// 6桁の16進カラーコード（例: #00ff00）
        #[arg(required = true)]
        hex: String,
    },

    /// pHリファレンスチャートを表示
    Chart,

    /// 設定を表示/編集
    Config {
        /// サンプリング領域の幅比率を設定 (0.0-1.0]
        #[arg(long)]
        set_width_ratio: Option<f32>,

        /// サンプリング領域の高さ比率を設定 (0.0-1.0]
        #[arg(long)]
        set_height_ratio: Option<f32>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
