/**
* filename : main
* author : HAMA
* date: 2025. 5. 8.
* description:
**/

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use xSignal::config::{Config, DEFAULT_CONFIG_PATH};
use xSignal::market_data::{CsvObservationSource, MockObservationSource, ObservationSource};
use xSignal::strategies::{DirectionalStrategy, PreviewRow, DEFAULT_PREVIEW_ROWS};
use xSignal::utils::{current_timestamp_ms, logging};
use xSignal::{Decision, StrategyConfig};

#[derive(Parser, Debug)]
#[command(
    name = "signal-bot",
    about = "Directional strategy bot (SMA + RSI + Volume) over mock or CSV observations"
)]
struct Cli {
    /// Path to a JSON config file.
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Currency pair (e.g., EUR/USD). Also selects the mock feed seed.
    #[arg(long)]
    pair: Option<String>,

    /// Read observations from a CSV file (timestamp,close,volume) instead of the mock feed.
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Number of mock observations to generate.
    #[arg(long)]
    rows: Option<usize>,

    /// Number of trailing rows in the data preview.
    #[arg(long, default_value_t = DEFAULT_PREVIEW_ROWS)]
    preview: usize,

    /// Emit the decision and preview as JSON.
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Disable the SMA crossover filter.
    #[arg(long, default_value_t = false)]
    no_sma: bool,

    /// Disable the RSI filter.
    #[arg(long, default_value_t = false)]
    no_rsi: bool,

    /// Disable the volume filter.
    #[arg(long, default_value_t = false)]
    no_vol: bool,

    #[arg(long)]
    sma_short: Option<usize>,

    #[arg(long)]
    sma_long: Option<usize>,

    #[arg(long)]
    rsi_len: Option<usize>,

    #[arg(long)]
    rsi_overbought: Option<u32>,

    #[arg(long)]
    rsi_oversold: Option<u32>,

    #[arg(long)]
    vol_ma_len: Option<usize>,
}

impl Cli {
    // 명령줄 값이 설정 파일보다 우선
    fn apply_to(&self, config: &mut Config) {
        if let Some(pair) = &self.pair { config.data.pair = pair.clone(); }
        if let Some(path) = &self.csv { config.data.csv_path = Some(path.display().to_string()); }
        if let Some(rows) = self.rows { config.data.rows = rows; }

        let strategy: &mut StrategyConfig = &mut config.strategy;
        if self.no_sma { strategy.use_sma = false; }
        if self.no_rsi { strategy.use_rsi = false; }
        if self.no_vol { strategy.use_vol = false; }
        if let Some(v) = self.sma_short { strategy.sma_short_len = v; }
        if let Some(v) = self.sma_long { strategy.sma_long_len = v; }
        if let Some(v) = self.rsi_len { strategy.rsi_len = v; }
        if let Some(v) = self.rsi_overbought { strategy.rsi_overbought = v; }
        if let Some(v) = self.rsi_oversold { strategy.rsi_oversold = v; }
        if let Some(v) = self.vol_ma_len { strategy.vol_ma_len = v; }
    }
}

#[derive(serde::Serialize)]
struct JsonOutput<'a> {
    pair: &'a str,
    strategy: &'a str,
    decision: Decision,
    preview: Vec<PreviewRow>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 설정 로드 (검증은 명령줄 값 적용 후)
    let mut config = Config::load_from(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;

    // 로깅 초기화
    logging::init(&config.logging.level)?;

    cli.apply_to(&mut config);
    config.validate()?;
    log::info!("설정 로드 완료");

    let source: Box<dyn ObservationSource> = match &config.data.csv_path {
        Some(path) => Box::new(CsvObservationSource::new(PathBuf::from(path), config.data.csv_delimiter)?),
        None => Box::new(MockObservationSource::new(
            &config.data.pair,
            config.data.rows,
            current_timestamp_ms(),
        )),
    };
    log::info!("데이터 소스: {}", source.name());

    let observations = source.load()?;
    let strategy = DirectionalStrategy::new(config.strategy.clone())?;

    let report = match strategy.evaluate(&config.data.pair, &observations) {
        Ok(report) => report,
        Err(e) => {
            logging::log_error("strategy evaluation", &e);
            return Err(e.into());
        }
    };

    if cli.json {
        let output = JsonOutput {
            pair: &report.pair,
            strategy: &report.strategy,
            decision: report.decision,
            preview: report.preview(cli.preview),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("Trade Signals for {} [{}]", report.pair, report.strategy);
        println!("Latest Signal: {}", report.decision);
        println!();
        print!("{}", report.render_preview(cli.preview));
    }

    Ok(())
}
