use clap::Parser;
use ph_strip_common::{matcher, palette, AnalysisResult, Rgb};
use ph_strip_rust::{analyzer, cli, config, error};

use cli::{Cli, Commands};
use config::Config;
use error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze { image, output } => {
            println!("🧪 ph-strip - 試験紙解析\n");

            println!("[1/2] 画像を解析中...");
            let result = analyzer::analyze_file(&image, &config, cli.verbose).await?;
            println!("✔ 解析完了\n");

            println!("[2/2] 判定結果");
            print_result(&result);

            if let Some(output) = output {
                let json = serde_json::to_string_pretty(&result)?;
                std::fs::write(&output, json)?;
                println!("\n✔ 結果を保存: {}", output.display());
            }

            println!("\n✅ 完了");
        }

        Commands::Color { hex } => {
            let color = Rgb::from_hex(&hex)?;
            let matched = matcher::match_color(color);

            println!("🎨 ph-strip - カラー判定\n");
            println!("  入力色: {}", color);
            println!("  pH: {} ({})", matched.ph, matched.description);
            if let Some(example) = matched.example {
                println!("  身近な例: {}", example);
            }
        }

        Commands::Chart => {
            println!("pHリファレンスチャート:\n");
            println!("  {:>3}  {:<9} {:<18} {}", "pH", "基準色", "区分", "身近な例");
            for entry in &palette::REFERENCE_PALETTE {
                println!(
                    "  {:>3}  {:<9} {:<18} {}",
                    entry.ph,
                    entry.color.to_hex(),
                    entry.description,
                    palette::example_for(entry.ph).unwrap_or("-")
                );
            }
        }

        Commands::Config {
            set_width_ratio,
            set_height_ratio,
            show,
        } => {
            let mut config = config;

            if set_width_ratio.is_some() || set_height_ratio.is_some() {
                config.set_ratios(set_width_ratio, set_height_ratio)?;
                println!("✔ 設定を保存しました");
            }

            if show {
                println!("設定:");
                println!("  サンプリング幅比率: {}", config.strip_width_ratio);
                println!("  サンプリング高さ比率: {}", config.strip_height_ratio);
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}

fn print_result(result: &AnalysisResult) {
    println!("  検出色: {}", result.color);
    println!("  pH: {} ({})", result.ph, result.description);
    if let Some(example) = &result.example {
        println!("  身近な例: {}", example);
    }
}
