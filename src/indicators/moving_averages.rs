/**
* filename : moving_averages
* author : HAMA
* date: 2025. 5. 11.
* description:
**/

use std::collections::VecDeque;
use crate::error::TradingError;
use super::utils::{ensure_finite, indicator_series};
use super::{Indicator, IndicatorSeries};

#[derive(Debug, Clone)]
pub struct SimpleMovingAverage {
  name: String,
  period: usize,
  values: VecDeque<f64>,
}

impl SimpleMovingAverage {
  pub fn new(period: usize) -> Result<Self, TradingError> {
    if period == 0 {
      return Err(TradingError::InvalidWindow("SMA window must be at least 1".to_string()));
    }

    Ok(SimpleMovingAverage {
      name: format!("SMA-{}", period),
      period,
      values: VecDeque::with_capacity(period),
    })
  }

  pub fn with_name(mut self, name: &str) -> Self {
    self.name = name.to_string();
    self
  }

}

impl Indicator for SimpleMovingAverage {
  fn name(&self) -> &str {
    &self.name
  }

  fn update(&mut self, value: f64) -> Result<(), TradingError> {
    ensure_finite(&self.name, value)?;

    self.values.push_back(value);

    // 오래된 값 제거
    if self.values.len() > self.period {
      self.values.pop_front();
    }

    // 유한한 값끼리도 합이 f64 범위를 넘을 수 있음
    let sum: f64 = self.values.iter().sum();
    if !sum.is_finite() {
      self.values.pop_back();
      return Err(TradingError::InvalidParameter(format!(
        "{} window sum overflows f64 at value {}",
        self.name, value
      )));
    }

    Ok(())
  }

  fn current(&self) -> Option<f64> {
    if !self.is_ready() {
      return None;
    }

    // 누적 합 대신 윈도우 내 값으로 다시 계산 (전부 0이면 정확히 0)
    Some(self.values.iter().sum::<f64>() / self.period as f64)
  }

  fn is_ready(&self) -> bool {
    self.values.len() >= self.period
  }

  fn reset(&mut self) {
    self.values.clear();
  }
}

/// 단순 이동 평균 시리즈.
///
/// 인덱스 `i`는 `series[i-window+1..=i]`의 산술 평균이며, 윈도우가 다 차기 전에는 `None`.
/// 윈도우 합이 f64 범위를 넘으면 `InvalidParameter`.
pub fn rolling_mean(series: &[f64], window: usize) -> Result<IndicatorSeries, TradingError> {
  let mut sma = SimpleMovingAverage::new(window)?;
  indicator_series(&mut sma, series)
}
