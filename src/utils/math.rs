//! 수학 관련 유틸리티
//!
//! RSI 계산용 보조 함수 제공

/// 양수 부분 (음수는 0)
pub fn positive_part(value: f64) -> f64 {
  if value > 0.0 { value } else { 0.0 }
}

/// 값을 범위 내로 제한
pub fn clamp(value: f64, min_value: f64, max_value: f64) -> f64 {
  value.max(min_value).min(max_value)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_positive_part() {
    assert_eq!(positive_part(1.5), 1.5);
    assert_eq!(positive_part(-2.0), 0.0);
    assert_eq!(positive_part(0.0), 0.0);
  }

  #[test]
  fn test_clamp() {
    assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
    assert_eq!(clamp(-5.0, 0.0, 10.0), 0.0);
    assert_eq!(clamp(105.0, 0.0, 100.0), 100.0);
  }
}
