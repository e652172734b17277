/**
* filename : decision
* author : HAMA
* date: 2025. 5. 11.
* description:
**/

use crate::error::TradingError;
use super::signal_types::Decision;

/// 마지막 행만 읽어 BUY/SELL/HOLD 결정 (BUY를 먼저 확인)
pub fn latest_decision(buy: &[bool], sell: &[bool]) -> Result<Decision, TradingError> {
  if buy.is_empty() || sell.is_empty() {
    return Err(TradingError::EmptySequence("cannot take a decision from empty signal series".to_string()));
  }

  if buy.len() != sell.len() {
    return Err(TradingError::length_mismatch("sell_signal", buy.len(), sell.len()));
  }

  let last = buy.len() - 1;

  Ok(if buy[last] {
    Decision::Buy
  } else if sell[last] {
    Decision::Sell
  } else {
    Decision::Hold
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use rstest::rstest;

  #[rstest]
  #[case(&[false, true], &[true, false], Decision::Buy)]
  #[case(&[true, false], &[false, true], Decision::Sell)]
  #[case(&[true, false], &[true, false], Decision::Hold)]
  #[case(&[true], &[true], Decision::Buy)]
  fn test_reads_final_row(#[case] buy: &[bool], #[case] sell: &[bool], #[case] expected: Decision) {
    assert_eq!(latest_decision(buy, sell).unwrap(), expected);
  }

  #[test]
  fn test_empty_input() {
    assert!(matches!(latest_decision(&[], &[]), Err(TradingError::EmptySequence(_))));
    assert!(matches!(latest_decision(&[true], &[]), Err(TradingError::EmptySequence(_))));
  }

  #[test]
  fn test_length_mismatch() {
    let result = latest_decision(&[true, false], &[false]);
    assert!(matches!(result, Err(TradingError::LengthMismatch { expected: 2, actual: 1, .. })));
  }
}
