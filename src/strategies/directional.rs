/**
* filename : directional
* author : HAMA
* date: 2025. 5. 11.
* description:
**/

use crate::error::TradingError;
use crate::models::market_data::{split_columns, Observation};
use crate::signals::{compose_from_frame, compute_indicators, latest_decision};
use crate::utils::logging;
use super::report::StrategyReport;
use super::strategy_config::StrategyConfig;

/// SMA 크로스오버 + RSI + 거래량 필터 전략
#[derive(Debug, Clone)]
pub struct DirectionalStrategy {
  name: String,
  config: StrategyConfig,
}

impl DirectionalStrategy {
  pub fn new(config: StrategyConfig) -> Result<Self, TradingError> {
    config.validate()?;

    Ok(DirectionalStrategy {
      name: config.name(),
      config,
    })
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn config(&self) -> &StrategyConfig {
    &self.config
  }

  pub fn evaluate(&self, pair: &str, observations: &[Observation]) -> Result<StrategyReport, TradingError> {
    if observations.is_empty() {
      return Err(TradingError::EmptySequence(format!("no observations for {}", pair)));
    }

    logging::log_evaluation_start(pair, observations.len());

    let (closes, volumes) = split_columns(observations);
    let frame = compute_indicators(&closes, &volumes, &self.config)?;
    let signals = compose_from_frame(&volumes, &frame, &self.config)?;
    let decision = latest_decision(&signals.buy, &signals.sell)?;

    logging::log_decision(pair, decision);

    Ok(StrategyReport {
      pair: pair.to_string(),
      strategy: self.name.clone(),
      observations: observations.to_vec(),
      frame,
      signals,
      decision,
    })
  }
}

/// 설정 검증 후 한 번 평가
pub fn evaluate(
  pair: &str,
  observations: &[Observation],
  config: &StrategyConfig,
) -> Result<StrategyReport, TradingError> {
  DirectionalStrategy::new(config.clone())?.evaluate(pair, observations)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::signals::Decision;

  fn rising(rows: usize) -> Vec<Observation> {
    (0..rows)
      .map(|i| Observation::new(i as i64 * 60_000, 1.0 + i as f64, 100.0 + i as f64))
      .collect()
  }

  #[test]
  fn test_empty_observations() {
    let result = evaluate("EUR/USD", &[], &StrategyConfig::default());
    assert!(matches!(result, Err(TradingError::EmptySequence(_))));
  }

  #[test]
  fn test_invalid_config_rejected_before_evaluation() {
    let config = StrategyConfig::default().with_sma(0, 4);
    assert!(matches!(evaluate("EUR/USD", &rising(5), &config), Err(TradingError::InvalidWindow(_))));
  }

  #[test]
  fn test_rising_market_without_rsi_buys() {
    // 꾸준히 상승: 단기 SMA > 장기 SMA, 거래량도 평균 위
    let config = StrategyConfig::default()
      .with_filters(true, false, true)
      .with_sma(2, 4)
      .with_volume(3);
    let report = evaluate("EUR/USD", &rising(10), &config).unwrap();

    assert_eq!(report.decision, Decision::Buy);
    assert_eq!(report.len(), 10);
    assert_eq!(report.strategy, "SMA 2/4 + VOL 3");
  }

  #[test]
  fn test_rising_market_saturated_rsi_holds() {
    // 하락이 없으면 RSI = 100 -> 과매수로 매수 차단, 상승 추세라 매도도 아님
    let config = StrategyConfig::default().with_sma(2, 4).with_rsi(3, 70, 30).with_volume(3);
    let report = evaluate("EUR/USD", &rising(10), &config).unwrap();

    assert_eq!(report.frame.rsi[9], Some(100.0));
    assert_eq!(report.decision, Decision::Hold);
  }
}
