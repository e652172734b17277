/**
* filename : volume
* author : HAMA
* date: 2025. 5. 11.
* description:
**/

use crate::error::TradingError;
use super::moving_averages::SimpleMovingAverage;
use super::utils::indicator_series;
use super::{Indicator, IndicatorSeries};

/// 거래량 이동 평균 (참여도 기준선)
#[derive(Debug, Clone)]
pub struct VolumeMovingAverage {
  name: String,
  inner: SimpleMovingAverage,
}

impl VolumeMovingAverage {
  pub fn new(period: usize) -> Result<Self, TradingError> {
    let name = format!("VOL-MA-{}", period);
    let inner = SimpleMovingAverage::new(period)?.with_name(&name);

    Ok(VolumeMovingAverage { name, inner })
  }
}

impl Indicator for VolumeMovingAverage {
  fn name(&self) -> &str {
    &self.name
  }

  fn update(&mut self, volume: f64) -> Result<(), TradingError> {
    if volume < 0.0 {
      return Err(TradingError::InvalidParameter(format!("Negative volume: {}", volume)));
    }

    self.inner.update(volume)
  }

  fn current(&self) -> Option<f64> {
    self.inner.current()
  }

  fn is_ready(&self) -> bool {
    self.inner.is_ready()
  }

  fn reset(&mut self) {
    self.inner.reset();
  }
}

pub fn volume_moving_average(volumes: &[f64], window: usize) -> Result<IndicatorSeries, TradingError> {
  let mut vol_ma = VolumeMovingAverage::new(window)?;
  indicator_series(&mut vol_ma, volumes)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_volume_baseline() {
    let out = volume_moving_average(&[100.0, 300.0, 200.0, 400.0], 2).unwrap();

    assert_eq!(out, vec![None, Some(200.0), Some(250.0), Some(300.0)]);
  }

  #[test]
  fn test_negative_volume_rejected() {
    let result = volume_moving_average(&[100.0, -1.0], 2);
    assert!(matches!(result, Err(TradingError::InvalidParameter(_))));
  }

  #[test]
  fn test_zero_window_rejected() {
    assert!(matches!(VolumeMovingAverage::new(0), Err(TradingError::InvalidWindow(_))));
  }
}
