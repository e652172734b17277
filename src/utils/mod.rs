//! 시간 관련 유틸리티
//!
//! 시간 변환, 포맷팅 함수 제공

pub mod logging;
pub mod math;

use chrono::{DateTime, TimeZone, Utc};

/// 1분 (밀리초)
pub const MINUTE_MS: i64 = 60_000;

/// 타임스탬프(밀리초)를 DateTime<Utc>로 변환
pub fn timestamp_to_datetime(timestamp_ms: i64) -> DateTime<Utc> {
  Utc.timestamp_millis_opt(timestamp_ms).single().unwrap_or_default()
}

/// DateTime<Utc>를 타임스탬프(밀리초)로 변환
pub fn datetime_to_timestamp(dt: DateTime<Utc>) -> i64 {
  dt.timestamp_millis()
}

/// 현재 시간을 타임스탬프(밀리초)로 반환
pub fn current_timestamp_ms() -> i64 {
  datetime_to_timestamp(Utc::now())
}

/// 타임스탬프(밀리초)를 포맷팅된 문자열로 변환
pub fn format_timestamp(timestamp_ms: i64, format: &str) -> String {
  let dt = timestamp_to_datetime(timestamp_ms);
  dt.format(format).to_string()
}

/// end_ts에서 끝나는 분 단위 타임스탬프 count개 (오름차순)
pub fn minute_timestamps_ending_at(end_ts: i64, count: usize) -> Vec<i64> {
  (0..count)
    .map(|i| end_ts - (count - 1 - i) as i64 * MINUTE_MS)
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_timestamp_conversion() {
    let now = Utc::now();
    let ts = datetime_to_timestamp(now);
    let dt = timestamp_to_datetime(ts);

    // 밀리초 변환으로 인한 약간의 손실 허용 (1초 이내)
    let diff = (now - dt).num_milliseconds().abs();
    assert!(diff < 1000);
  }

  #[test]
  fn test_format_timestamp() {
    assert_eq!(format_timestamp(0, "%Y-%m-%d %H:%M"), "1970-01-01 00:00");
    assert_eq!(format_timestamp(90 * MINUTE_MS, "%H:%M"), "01:30");
  }

  #[test]
  fn test_minute_timestamps() {
    let stamps = minute_timestamps_ending_at(10 * MINUTE_MS, 3);

    assert_eq!(stamps, vec![8 * MINUTE_MS, 9 * MINUTE_MS, 10 * MINUTE_MS]);
    assert!(minute_timestamps_ending_at(0, 0).is_empty());
  }
}
