/**
* filename : composer
* author : HAMA
* date: 2025. 5. 11.
* description:
**/

use serde::{Deserialize, Serialize};
use crate::error::TradingError;
use crate::indicators::{compute_rsi, rolling_mean, volume_moving_average, IndicatorSeries};
use crate::strategies::StrategyConfig;
use super::signal_types::SignalSeries;

/// 신호 계산에 쓰이는 네 개의 지표 시리즈
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorFrame {
  pub sma_short: IndicatorSeries,
  pub sma_long: IndicatorSeries,
  pub rsi: IndicatorSeries,
  pub vol_ma: IndicatorSeries,
}

impl IndicatorFrame {
  pub fn len(&self) -> usize {
    self.sma_short.len()
  }

  pub fn is_empty(&self) -> bool {
    self.sma_short.is_empty()
  }

  fn columns(&self) -> [(&'static str, &IndicatorSeries); 4] {
    [
      ("sma_short", &self.sma_short),
      ("sma_long", &self.sma_long),
      ("rsi", &self.rsi),
      ("vol_ma", &self.vol_ma),
    ]
  }
}

/// 한 행에서 평가된 필터 조건
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowConditions {
  pub trend_up: bool,
  pub momentum_ok_for_buy: bool,
  pub momentum_ok_for_sell: bool,
  pub participation_ok: bool,
}

impl RowConditions {
  pub fn buy(&self) -> bool {
    self.trend_up && self.momentum_ok_for_buy && self.participation_ok
  }

  pub fn sell(&self) -> bool {
    !self.trend_up && self.momentum_ok_for_sell && self.participation_ok
  }
}

// 정의되지 않은 피연산자가 있으면 비교는 항상 false
fn defined_gt(lhs: Option<f64>, rhs: Option<f64>) -> bool {
  match (lhs, rhs) {
    (Some(a), Some(b)) => a > b,
    _ => false,
  }
}

fn defined_lt(lhs: Option<f64>, rhs: Option<f64>) -> bool {
  match (lhs, rhs) {
    (Some(a), Some(b)) => a < b,
    _ => false,
  }
}

fn ensure_aligned(what: &str, expected: usize, actual: usize) -> Result<(), TradingError> {
  if expected != actual {
    return Err(TradingError::length_mismatch(what, expected, actual));
  }
  Ok(())
}

/// 설정된 윈도우로 네 개의 지표를 모두 계산 (토글과 무관)
pub fn compute_indicators(
  closes: &[f64],
  volumes: &[f64],
  config: &StrategyConfig,
) -> Result<IndicatorFrame, TradingError> {
  ensure_aligned("volume", closes.len(), volumes.len())?;

  Ok(IndicatorFrame {
    sma_short: rolling_mean(closes, config.sma_short_len)?,
    sma_long: rolling_mean(closes, config.sma_long_len)?,
    rsi: compute_rsi(closes, config.rsi_len)?,
    vol_ma: volume_moving_average(volumes, config.vol_ma_len)?,
  })
}

/// 행 `index`의 필터 조건 평가. 꺼진 필터는 항상 true.
///
/// `index`가 프레임 길이를 벗어나면 panic.
pub fn row_conditions(
  frame: &IndicatorFrame,
  volume: f64,
  index: usize,
  config: &StrategyConfig,
) -> RowConditions {
  let rsi = frame.rsi[index];

  RowConditions {
    trend_up: !config.use_sma || defined_gt(frame.sma_short[index], frame.sma_long[index]),
    momentum_ok_for_buy: !config.use_rsi || defined_lt(rsi, Some(f64::from(config.rsi_overbought))),
    momentum_ok_for_sell: !config.use_rsi || defined_gt(rsi, Some(f64::from(config.rsi_oversold))),
    participation_ok: !config.use_vol || defined_gt(Some(volume), frame.vol_ma[index]),
  }
}

/// 이미 계산된 지표로 매수/매도 시퀀스 구성
pub fn compose_from_frame(
  volumes: &[f64],
  frame: &IndicatorFrame,
  config: &StrategyConfig,
) -> Result<SignalSeries, TradingError> {
  let rows = volumes.len();
  for (what, series) in frame.columns() {
    ensure_aligned(what, rows, series.len())?;
  }

  let mut signals = SignalSeries::with_capacity(rows);
  for (index, volume) in volumes.iter().enumerate() {
    let conditions = row_conditions(frame, *volume, index, config);
    signals.push(conditions.buy(), conditions.sell());
  }

  log::debug!(
    "signals composed: {} rows, {} buy, {} sell",
    rows,
    signals.buy_count(),
    signals.sell_count()
  );

  Ok(signals)
}

/// 종가/거래량에서 바로 매수/매도 시퀀스 계산
pub fn compose_signals(
  closes: &[f64],
  volumes: &[f64],
  config: &StrategyConfig,
) -> Result<SignalSeries, TradingError> {
  let frame = compute_indicators(closes, volumes, config)?;
  compose_from_frame(volumes, &frame, config)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn frame_of(sma_short: Vec<Option<f64>>, sma_long: Vec<Option<f64>>, rsi: Vec<Option<f64>>, vol_ma: Vec<Option<f64>>) -> IndicatorFrame {
    IndicatorFrame { sma_short, sma_long, rsi, vol_ma }
  }

  #[test]
  fn test_defined_comparisons() {
    assert!(defined_gt(Some(2.0), Some(1.0)));
    assert!(!defined_gt(Some(1.0), Some(1.0)));
    assert!(!defined_gt(None, Some(1.0)));
    assert!(!defined_lt(Some(1.0), None));
    assert!(defined_lt(Some(1.0), Some(2.0)));
  }

  #[test]
  fn test_undefined_indicators_force_conditions_false() {
    let frame = frame_of(vec![None], vec![Some(1.0)], vec![None], vec![None]);
    let conditions = row_conditions(&frame, 500.0, 0, &StrategyConfig::default());

    assert!(!conditions.trend_up);
    assert!(!conditions.momentum_ok_for_buy);
    assert!(!conditions.momentum_ok_for_sell);
    assert!(!conditions.participation_ok);
    assert!(!conditions.buy());
    assert!(!conditions.sell());
  }

  #[test]
  fn test_disabled_filters_pass() {
    let config = StrategyConfig::default().with_filters(false, false, false);
    let frame = frame_of(vec![None], vec![None], vec![None], vec![None]);
    let conditions = row_conditions(&frame, 0.0, 0, &config);

    assert!(conditions.trend_up);
    assert!(conditions.buy());
    assert!(!conditions.sell());
  }

  #[test]
  fn test_equal_smas_are_not_trend_up() {
    let config = StrategyConfig::default().with_filters(true, false, false);
    let frame = frame_of(vec![Some(1.5)], vec![Some(1.5)], vec![None], vec![None]);
    let conditions = row_conditions(&frame, 1.0, 0, &config);

    assert!(!conditions.trend_up);
    assert!(conditions.sell());
  }

  #[test]
  fn test_rsi_thresholds() {
    let config = StrategyConfig::default().with_filters(false, true, false).with_rsi(14, 70, 30);
    let frame = frame_of(
      vec![None; 3],
      vec![None; 3],
      vec![Some(75.0), Some(50.0), Some(20.0)],
      vec![None; 3],
    );

    let overbought = row_conditions(&frame, 0.0, 0, &config);
    assert!(!overbought.momentum_ok_for_buy);
    assert!(overbought.momentum_ok_for_sell);

    let neutral = row_conditions(&frame, 0.0, 1, &config);
    assert!(neutral.momentum_ok_for_buy && neutral.momentum_ok_for_sell);

    let oversold = row_conditions(&frame, 0.0, 2, &config);
    assert!(oversold.momentum_ok_for_buy);
    assert!(!oversold.momentum_ok_for_sell);
  }

  #[test]
  fn test_frame_length_mismatch() {
    let frame = frame_of(vec![None; 2], vec![None; 2], vec![None; 1], vec![None; 2]);
    let result = compose_from_frame(&[1.0, 2.0], &frame, &StrategyConfig::default());

    match result {
      Err(TradingError::LengthMismatch { what, expected, actual }) => {
        assert_eq!(what, "rsi");
        assert_eq!(expected, 2);
        assert_eq!(actual, 1);
      }
      other => panic!("unexpected result: {:?}", other),
    }
  }

  #[test]
  fn test_close_volume_mismatch() {
    let result = compose_signals(&[1.0, 2.0, 3.0], &[1.0], &StrategyConfig::default());
    assert!(matches!(result, Err(TradingError::LengthMismatch { .. })));
  }
}
