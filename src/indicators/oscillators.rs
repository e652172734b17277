/**
* filename : oscillators
* author : HAMA
* date: 2025. 5. 11.
* description:
**/

use crate::error::TradingError;
use crate::utils::math::{clamp, positive_part};
use super::moving_averages::SimpleMovingAverage;
use super::utils::{ensure_finite, indicator_series};
use super::{Indicator, IndicatorSeries};

pub const DEFAULT_RSI_PERIOD: usize = 14;

/// 단순 평균 기반 RSI (Wilder 스무딩 아님).
///
/// 평균 하락폭이 0이고 평균 상승폭이 양수면 100으로 포화되고,
/// 둘 다 0인 횡보 구간은 정의되지 않음(`None`)으로 처리합니다.
#[derive(Debug, Clone)]
pub struct RelativeStrengthIndex {
  name: String,
  avg_gain: SimpleMovingAverage,
  avg_loss: SimpleMovingAverage,
  prev_price: Option<f64>,
}

impl RelativeStrengthIndex {
  pub fn new(period: usize) -> Result<Self, TradingError> {
    if period == 0 {
      return Err(TradingError::InvalidWindow("RSI period must be at least 1".to_string()));
    }

    Ok(RelativeStrengthIndex {
      name: format!("RSI-{}", period),
      avg_gain: SimpleMovingAverage::new(period)?.with_name("RSI-gain"),
      avg_loss: SimpleMovingAverage::new(period)?.with_name("RSI-loss"),
      prev_price: None,
    })
  }

  pub fn averages(&self) -> (Option<f64>, Option<f64>) {
    (self.avg_gain.current(), self.avg_loss.current())
  }
}

impl Indicator for RelativeStrengthIndex {
  fn name(&self) -> &str {
    &self.name
  }

  fn update(&mut self, price: f64) -> Result<(), TradingError> {
    ensure_finite(&self.name, price)?;

    // 이전 가격과 비교하여 gain/loss 계산 (첫 가격은 차분이 없음)
    if let Some(prev_price) = self.prev_price {
      let change = price - prev_price;
      if !change.is_finite() {
        return Err(TradingError::InvalidParameter(format!(
          "{} price change overflows f64: {} -> {}",
          self.name, prev_price, price
        )));
      }

      self.avg_gain.update(positive_part(change))?;
      self.avg_loss.update(positive_part(-change))?;
    }

    self.prev_price = Some(price);

    Ok(())
  }

  fn current(&self) -> Option<f64> {
    match self.averages() {
      (Some(avg_gain), Some(avg_loss)) => rsi_from_averages(avg_gain, avg_loss),
      _ => None,
    }
  }

  fn is_ready(&self) -> bool {
    self.avg_gain.is_ready() && self.avg_loss.is_ready()
  }

  fn reset(&mut self) {
    self.avg_gain.reset();
    self.avg_loss.reset();
    self.prev_price = None;
  }
}

/// RSI = 100 - (100 / (1 + RS)), RS = 평균 상승폭 / 평균 하락폭
pub fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> Option<f64> {
  if avg_loss == 0.0 {
    // 하락 없음: 상승이 있으면 100으로 포화, 횡보면 정의되지 않음
    return if avg_gain > 0.0 { Some(100.0) } else { None };
  }

  let rs = avg_gain / avg_loss;
  Some(clamp(100.0 - (100.0 / (1.0 + rs)), 0.0, 100.0))
}

/// 종가 시퀀스의 RSI 시리즈. 처음 `period`개 인덱스는 `None`.
pub fn compute_rsi(closes: &[f64], period: usize) -> Result<IndicatorSeries, TradingError> {
  let mut rsi = RelativeStrengthIndex::new(period)?;
  indicator_series(&mut rsi, closes)
}
