/**
* filename : strategy_config
* author : HAMA
* date: 2025. 5. 11.
* description:
**/

use std::ops::RangeInclusive;
use serde::{Deserialize, Serialize};
use crate::error::TradingError;
use crate::indicators::DEFAULT_RSI_PERIOD;

// UI에서 허용하던 일반적인 범위 (벗어나면 경고만 남김)
pub const SMA_SHORT_RANGE: RangeInclusive<usize> = 5..=50;
pub const SMA_LONG_RANGE: RangeInclusive<usize> = 10..=100;
pub const RSI_LEN_RANGE: RangeInclusive<usize> = 5..=30;
pub const RSI_OVERBOUGHT_RANGE: RangeInclusive<u32> = 60..=90;
pub const RSI_OVERSOLD_RANGE: RangeInclusive<u32> = 10..=40;
pub const VOL_MA_RANGE: RangeInclusive<usize> = 5..=50;

/// 필터 토글과 윈도우 길이. 평가 중에는 변경되지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyConfig {
  pub use_sma: bool,
  pub use_rsi: bool,
  pub use_vol: bool,
  pub sma_short_len: usize,
  pub sma_long_len: usize,
  pub rsi_len: usize,
  pub rsi_overbought: u32,
  pub rsi_oversold: u32,
  pub vol_ma_len: usize,
}

impl Default for StrategyConfig {
  fn default() -> Self {
    StrategyConfig {
      use_sma: true,
      use_rsi: true,
      use_vol: true,
      sma_short_len: 20,
      sma_long_len: 50,
      rsi_len: DEFAULT_RSI_PERIOD,
      rsi_overbought: 70,
      rsi_oversold: 30,
      vol_ma_len: 20,
    }
  }
}

impl StrategyConfig {
  pub fn with_filters(mut self, use_sma: bool, use_rsi: bool, use_vol: bool) -> Self {
    self.use_sma = use_sma;
    self.use_rsi = use_rsi;
    self.use_vol = use_vol;
    self
  }

  pub fn with_sma(mut self, short_len: usize, long_len: usize) -> Self {
    self.sma_short_len = short_len;
    self.sma_long_len = long_len;
    self
  }

  pub fn with_rsi(mut self, len: usize, overbought: u32, oversold: u32) -> Self {
    self.rsi_len = len;
    self.rsi_overbought = overbought;
    self.rsi_oversold = oversold;
    self
  }

  pub fn with_volume(mut self, len: usize) -> Self {
    self.vol_ma_len = len;
    self
  }

  // 활성화된 필터만 나열한 이름
  pub fn name(&self) -> String {
    let mut parts = Vec::new();

    if self.use_sma {
      parts.push(format!("SMA {}/{}", self.sma_short_len, self.sma_long_len));
    }
    if self.use_rsi {
      parts.push(format!("RSI {} ({}/{})", self.rsi_len, self.rsi_overbought, self.rsi_oversold));
    }
    if self.use_vol {
      parts.push(format!("VOL {}", self.vol_ma_len));
    }

    if parts.is_empty() {
      "Unfiltered".to_string()
    } else {
      parts.join(" + ")
    }
  }

  /// 0 윈도우와 100을 넘는 임계값은 거부하고, 일반 범위를 벗어난 값은 경고만 남깁니다.
  pub fn validate(&self) -> Result<(), TradingError> {
    let windows = [
      ("sma_short_len", self.sma_short_len),
      ("sma_long_len", self.sma_long_len),
      ("rsi_len", self.rsi_len),
      ("vol_ma_len", self.vol_ma_len),
    ];
    for (field, value) in windows {
      if value == 0 {
        return Err(TradingError::InvalidWindow(format!("{} must be at least 1", field)));
      }
    }

    for (field, value) in [("rsi_overbought", self.rsi_overbought), ("rsi_oversold", self.rsi_oversold)] {
      if value > 100 {
        return Err(TradingError::InvalidParameter(format!("{} must be within 0..=100, got {}", field, value)));
      }
    }

    if self.sma_short_len >= self.sma_long_len {
      log::warn!("sma_short_len ({}) is not shorter than sma_long_len ({})", self.sma_short_len, self.sma_long_len);
    }
    if self.rsi_oversold >= self.rsi_overbought {
      log::warn!("rsi_oversold ({}) is not below rsi_overbought ({})", self.rsi_oversold, self.rsi_overbought);
    }

    warn_outside("sma_short_len", self.sma_short_len, &SMA_SHORT_RANGE);
    warn_outside("sma_long_len", self.sma_long_len, &SMA_LONG_RANGE);
    warn_outside("rsi_len", self.rsi_len, &RSI_LEN_RANGE);
    warn_outside("rsi_overbought", self.rsi_overbought, &RSI_OVERBOUGHT_RANGE);
    warn_outside("rsi_oversold", self.rsi_oversold, &RSI_OVERSOLD_RANGE);
    warn_outside("vol_ma_len", self.vol_ma_len, &VOL_MA_RANGE);

    Ok(())
  }
}

fn warn_outside<T>(field: &str, value: T, range: &RangeInclusive<T>)
where
  T: PartialOrd + std::fmt::Display,
{
  if !range.contains(&value) {
    log::warn!("{} = {} is outside the typical range {}..={}", field, value, range.start(), range.end());
  }
}
