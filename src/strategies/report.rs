/**
* filename : report
* author : HAMA
* date: 2025. 5. 11.
* description:
**/

use serde::Serialize;
use crate::models::market_data::Observation;
use crate::signals::{Decision, IndicatorFrame, SignalSeries};
use crate::utils::format_timestamp;

pub const DEFAULT_PREVIEW_ROWS: usize = 10;

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// 한 번의 평가 결과 (지표, 신호, 최종 판단)
#[derive(Debug, Clone, Serialize)]
pub struct StrategyReport {
  pub pair: String,
  pub strategy: String,
  pub observations: Vec<Observation>,
  pub frame: IndicatorFrame,
  pub signals: SignalSeries,
  pub decision: Decision,
}

/// 미리보기 테이블의 한 행
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewRow {
  pub datetime: String,
  pub close: f64,
  pub volume: f64,
  pub sma_short: Option<f64>,
  pub sma_long: Option<f64>,
  pub rsi: Option<f64>,
  pub vol_ma: Option<f64>,
  pub buy_signal: bool,
  pub sell_signal: bool,
  pub signal: Decision,
}

impl StrategyReport {
  pub fn len(&self) -> usize {
    self.observations.len()
  }

  pub fn is_empty(&self) -> bool {
    self.observations.is_empty()
  }

  // 마지막 rows개 행
  pub fn preview(&self, rows: usize) -> Vec<PreviewRow> {
    let start = self.len().saturating_sub(rows);

    (start..self.len())
      .map(|i| {
        let observation = &self.observations[i];
        PreviewRow {
          datetime: format_timestamp(observation.timestamp, DATETIME_FORMAT),
          close: observation.close,
          volume: observation.volume,
          sma_short: self.frame.sma_short[i],
          sma_long: self.frame.sma_long[i],
          rsi: self.frame.rsi[i],
          vol_ma: self.frame.vol_ma[i],
          buy_signal: self.signals.buy[i],
          sell_signal: self.signals.sell[i],
          signal: self.signals.decision_at(i).unwrap_or(Decision::Hold),
        }
      })
      .collect()
  }

  /// 고정폭 텍스트 테이블
  pub fn render_preview(&self, rows: usize) -> String {
    let mut out = format!(
      "{:<16} {:>10} {:>8} {:>10} {:>10} {:>7} {:>8} {:>5} {:>5} {:>6}\n",
      "datetime", "close", "volume", "sma_short", "sma_long", "rsi", "vol_ma", "buy", "sell", "signal"
    );

    for row in self.preview(rows) {
      out.push_str(&format!(
        "{:<16} {:>10.4} {:>8.0} {:>10} {:>10} {:>7} {:>8} {:>5} {:>5} {:>6}\n",
        row.datetime,
        row.close,
        row.volume,
        fmt_opt(row.sma_short, 4),
        fmt_opt(row.sma_long, 4),
        fmt_opt(row.rsi, 2),
        fmt_opt(row.vol_ma, 1),
        row.buy_signal,
        row.sell_signal,
        row.signal.as_str(),
      ));
    }

    out
  }
}

fn fmt_opt(value: Option<f64>, precision: usize) -> String {
  match value {
    Some(v) => format!("{:.*}", precision, v),
    None => "-".to_string(),
  }
}
