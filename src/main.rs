use clap::Parser;
use smart_report::{cli, config, error, export, interactive, loader, logging};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use smart_report_common::calculate_results;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Report { input, output, sheet, max_ew, exclude_zero_ew, json } => {
            println!("📊 smart-report - 集計レポート\n");

            let mut config = config;
            if let Some(sheet) = sheet {
                config.sheet_name = sheet;
            }

            // 1. 読み込み
            let input = input.unwrap_or_else(|| config.input_path.clone());
            println!("[1/3] 測定データを読み込み中...");
            let rows = loader::load_measurements(&input)?;
            println!("✔ {}行を読み込み\n", rows.len());

            // 2. 集計
            println!("[2/3] 集計中...");
            let filter = cli::row_filter(max_ew, exclude_zero_ew);
            let rows = if filter.is_active() {
                let filtered = filter.apply(&rows);
                println!("- フィルタ適用: {} → {}行", rows.len(), filtered.len());
                filtered
            } else {
                rows
            };
            let results = calculate_results(&rows);
            let passed = results.iter().filter(|r| r.passed).count();
            println!("✔ {}件（合格 {}件）\n", results.len(), passed);

            // 3. 出力
            println!("[3/3] レポートを出力中...");
            let output_dir = output.unwrap_or_else(|| config.output_dir.clone());
            export::export_report(&results, &output_dir, &config)?;

            if let Some(json_path) = json {
                export::json::generate_json(&results, &json_path)?;
                println!("✔ JSON出力: {}", json_path.display());
            }

            println!("\n✅ 完了");
        }

        Commands::Lookup { input, material } => {
            let input = input.unwrap_or_else(|| config.input_path.clone());
            let rows = loader::load_measurements(&input)?;

            match material {
                Some(material) => println!("{}", interactive::run_single_lookup(&rows, &material)),
                None => interactive::run_lookup_loop(&rows)?,
            }
        }

        Commands::Config { set_input, show } => {
            let mut config = config;

            if let Some(path) = set_input {
                config.set_input_path(path)?;
                println!("✔ 入力ファイルを設定しました");
            }

            if show {
                println!("設定:");
                println!("  入力ファイル: {}", config.input_path.display());
                println!("  出力先: {}", config.output_dir.display());
                println!("  シート名: {}", config.sheet_name);
                println!("  ファイル名接頭辞: {}", config.file_prefix);
                println!("  UTCオフセット: {:+}時間", config.utc_offset_hours);
                println!("  列幅パディング: {}", config.column_padding);
            }
        }
    }

    Ok(())
}
