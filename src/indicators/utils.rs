/**
* filename : utils
* author : HAMA
* date: 2025. 5. 11.
* description:
**/

use crate::error::TradingError;
use super::{Indicator, IndicatorSeries};

// 값 시퀀스 전체로 지표를 갱신하며 각 행의 결과를 수집
pub fn indicator_series(
  indicator: &mut dyn Indicator,
  values: &[f64],
) -> Result<IndicatorSeries, TradingError> {
  indicator.reset();

  let mut series = Vec::with_capacity(values.len());
  for value in values {
    indicator.update(*value)?;
    series.push(indicator.current());
  }

  log::debug!(
    "{}: {} rows, {} warm-up",
    indicator.name(),
    series.len(),
    warm_up_len(&series)
  );

  Ok(series)
}

// 선두의 정의되지 않은 구간 길이
pub fn warm_up_len(series: &[Option<f64>]) -> usize {
  series.iter().take_while(|v| v.is_none()).count()
}

// 유한한 입력만 허용
pub(crate) fn ensure_finite(name: &str, value: f64) -> Result<(), TradingError> {
  if value.is_finite() {
    Ok(())
  } else {
    Err(TradingError::InvalidParameter(format!("{} received non-finite value {}", name, value)))
  }
}
