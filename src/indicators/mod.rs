/**
* filename : mod
* author : HAMA
* date: 2025. 5. 11.
* description:
**/
pub mod moving_averages;
pub mod oscillators;
pub mod volume;
pub mod utils;

pub use moving_averages::*;
pub use oscillators::*;
pub use volume::*;
pub use utils::*;

use std::fmt::Debug;

/// 관측치와 1:1 정렬된 지표 시리즈 (`None` = 워밍업/정의되지 않음)
pub type IndicatorSeries = Vec<Option<f64>>;

pub trait Indicator: Debug + Send + Sync {
  fn name(&self) -> &str;

  // 새로운 값으로 지표 업데이트
  fn update(&mut self, value: f64) -> Result<(), crate::error::TradingError>;

  // 현재 지표 값 반환 (워밍업 구간이거나 정의되지 않으면 None)
  fn current(&self) -> Option<f64>;

  // 지표가 계산 가능한지 (충분한 데이터가 있는지) 확인
  fn is_ready(&self) -> bool;

  // 지표 상태 리셋
  fn reset(&mut self);
}
