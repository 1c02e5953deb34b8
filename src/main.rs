// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use axum::Extension;
use chrono::Local;
use clap::{Parser, Subcommand};
use sirekaprs::application::usecases::build_hierarchy::HierarchyBuilder;
use sirekaprs::application::usecases::collect_votes::VoteCollector;
use sirekaprs::config::settings::Settings;
use sirekaprs::infrastructure::export::csv::CsvExporter;
use sirekaprs::infrastructure::export::json::JsonExporter;
use sirekaprs::infrastructure::sirekap::client::SirekapClient;
use sirekaprs::presentation::routes;
use sirekaprs::utils::telemetry;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Sirekap行政区划与计票数据抓取工具
#[derive(Parser)]
#[command(name = "sirekaprs", version, about = "Fetch KPU Sirekap location hierarchies and vote tallies")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// 启动HTTP服务
    Serve,
    /// 抓取完整的四级区划层级并写出JSON文件
    FetchLocations {
        /// 只扩展前N个省份（采样用）
        #[arg(long)]
        max_roots: Option<usize>,
        /// 使用固定文件名而不是时间戳文件名
        #[arg(long)]
        static_file_name: bool,
        /// 覆盖配置中的输出目录
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// 抓取全国计票数据并写出JSON快照与按省CSV
    FetchVotes {
        /// 只抓取并打印这个投票站的计票报告
        #[arg(long)]
        tps: Option<String>,
        /// 覆盖配置中的输出目录
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并分发子命令
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();

    let cli = Cli::parse();

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    // 3. Build the shared upstream client
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(settings.upstream.timeout_secs))
        .danger_accept_invalid_certs(settings.upstream.accept_invalid_certs)
        .build()?;
    let client = Arc::new(SirekapClient::new(&settings.upstream.base_url, http)?);

    match cli.command {
        Command::Serve => serve(&settings, client).await,
        Command::FetchLocations {
            max_roots,
            static_file_name,
            out,
        } => fetch_locations(&settings, client, max_roots, static_file_name, out).await,
        Command::FetchVotes { tps, out } => fetch_votes(&settings, client, tps, out).await,
    }
}

/// 启动HTTP服务并阻塞到进程结束
async fn serve(settings: &Settings, client: Arc<SirekapClient>) -> anyhow::Result<()> {
    let builder = Arc::new(HierarchyBuilder::new(
        client.clone(),
        settings.concurrency.capacity,
    ));
    let collector = Arc::new(VoteCollector::new(client));

    let app = routes::routes()
        .layer(Extension(builder))
        .layer(Extension(collector))
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server started on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

/// 抓取完整区划层级并写出JSON文件
async fn fetch_locations(
    settings: &Settings,
    client: Arc<SirekapClient>,
    max_roots: Option<usize>,
    static_file_name: bool,
    out: Option<PathBuf>,
) -> anyhow::Result<()> {
    let started = Instant::now();
    let builder = HierarchyBuilder::new(client, settings.concurrency.capacity);

    let forest = builder.build_tree(max_roots).await?;
    info!(provinces = forest.len(), "location hierarchy assembled");

    let output_dir = out.unwrap_or_else(|| PathBuf::from(&settings.export.output_dir));
    let path = JsonExporter::new(output_dir)
        .write_locations(&forest, static_file_name)
        .await?;

    info!(path = %path.display(), elapsed = ?started.elapsed(), "done");
    Ok(())
}

/// 抓取计票数据
///
/// 带`--tps`时只打印单站报告；否则抓取全国总统与立法机构计票，
/// 写出JSON快照并为每个省份追加CSV行
async fn fetch_votes(
    settings: &Settings,
    client: Arc<SirekapClient>,
    tps: Option<String>,
    out: Option<PathBuf>,
) -> anyhow::Result<()> {
    let collector = VoteCollector::new(client);

    if let Some(tps_code) = tps {
        let report = collector.tps_report(&tps_code).await?;
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let started = Instant::now();
    let recorded_at = Local::now();
    let output_dir = out.unwrap_or_else(|| PathBuf::from(&settings.export.output_dir));
    let json_exporter = JsonExporter::new(&output_dir);
    let csv_exporter = CsvExporter::new(&output_dir);

    let presidential = collector.presidential_nationwide().await?;
    json_exporter
        .write_votes_snapshot("votes_nationwide.json", &presidential)
        .await?;

    let province_names = collector.province_names().await?;
    let written = csv_exporter.append_presidential(&province_names, &presidential, recorded_at)?;
    info!(files = written.len(), "presidential tallies appended");

    let legislative = collector.legislative_nationwide().await?;
    let written = csv_exporter.append_legislative(&province_names, &legislative, recorded_at)?;
    info!(files = written.len(), "legislative tallies appended");

    info!(elapsed = ?started.elapsed(), "done");
    Ok(())
}
