//! courier 命令列：載入 CSV、執行派送、輸出報表

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use courier::report::{render_assignments, render_loads, render_preview, render_table};
use courier::{load_dataset, DataPaths, DispatchCalculator, DispatchConfig};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

/// 校園快遞派送
#[derive(Debug, Parser)]
#[command(name = "courier", version)]
struct Cli {
    /// 樞紐 CSV（hub_id,hub_name,campus）
    #[arg(long)]
    hubs: PathBuf,

    /// 包裹 CSV（parcel_id,recipient,priority,hub_id,destination,weight_kg）
    #[arg(long)]
    parcels: PathBuf,

    /// 騎手 CSV（rider_id,name,max_load_kg,home_hub_id）
    #[arg(long)]
    riders: PathBuf,

    /// 取件點 CSV（pickup_id,label,hub_id,bias）；省略時使用預設取件點
    #[arg(long)]
    pickups: Option<PathBuf>,

    /// 輸出分派報表
    #[arg(long)]
    assign: bool,

    /// 預覽「重件優先」的重量門檻（公斤），覆蓋配置值
    #[arg(long)]
    threshold: Option<Decimal>,

    /// 預覽騎手的包裹順序
    #[arg(long)]
    preview: bool,

    /// 只預覽指定騎手
    #[arg(long)]
    rider: Option<String>,

    /// 輸出騎手載重累計
    #[arg(long)]
    loads: bool,

    /// JSON 配置檔
    #[arg(long)]
    config: Option<PathBuf>,

    /// 以 JSON 輸出分派結果（取代 --assign 的文字報表）
    #[arg(long, requires = "assign")]
    json: bool,

    /// 列出載入的所有資料
    #[arg(long)]
    list: bool,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> anyhow::Result<DispatchConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("無法讀取配置檔 {}", path.display()))?;
            DispatchConfig::from_json_str(&json)?
        }
        None => DispatchConfig::default(),
    };
    if let Some(threshold) = cli.threshold {
        config = config.with_preview_threshold(threshold);
        config.validate()?;
    }
    Ok(config)
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{line}");
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let paths = DataPaths {
        hubs: cli.hubs.clone(),
        parcels: cli.parcels.clone(),
        riders: cli.riders.clone(),
        pickups: cli.pickups.clone(),
    };
    let dataset = load_dataset(&paths, &config).context("載入資料失敗")?;
    tracing::info!(
        "資料載入完成：樞紐 {} 個，騎手 {} 位，包裹 {} 件，取件點 {} 個",
        dataset.hubs.len(),
        dataset.riders.len(),
        dataset.parcels.len(),
        dataset.pickups.len()
    );
    for warning in &dataset.warnings {
        tracing::debug!("{} 第 {} 行：{}", warning.source, warning.line, warning.message);
    }

    if cli.list {
        print_lines(render_table("Hubs", dataset.hubs.all()));
        print_lines(render_table("Parcels", dataset.parcels.all()));
        print_lines(render_table("Riders", dataset.riders.all()));
        print_lines(render_table("Pickups", dataset.pickups.all()));
    }

    if !(cli.assign || cli.preview || cli.loads) {
        return Ok(());
    }

    let result = DispatchCalculator::new(config.clone()).calculate(
        &dataset.hubs,
        &dataset.riders,
        &dataset.parcels,
        &dataset.pickups,
    );

    if !result.warnings.is_empty() {
        tracing::info!("派送警告 {} 筆", result.warnings.len());
    }

    if cli.assign {
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            print_lines(render_assignments(&result));
        }
    }

    let targets: Vec<String> = match &cli.rider {
        Some(rider_id) => vec![rider_id.clone()],
        None => dataset
            .riders
            .all()
            .iter()
            .map(|r| r.rider_id.clone())
            .collect(),
    };

    if cli.preview {
        for rider_id in &targets {
            print_lines(render_preview(
                rider_id,
                result.parcels_for(rider_id),
                config.preview_threshold_kg,
            ));
        }
    }

    if cli.loads {
        for rider_id in &targets {
            print_lines(render_loads(rider_id, &result));
        }
    }

    Ok(())
}
