/**
* filename : signal_types
* author : HAMA
* date: 2025. 5. 11.
* description:
**/

use std::fmt;
use serde::{Deserialize, Serialize};

/// 최신 관측치에 대한 최종 판단
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Decision {
  Buy,
  Sell,
  Hold,
}

impl Decision {
  pub fn as_str(&self) -> &'static str {
    match self {
      Decision::Buy => "BUY",
      Decision::Sell => "SELL",
      Decision::Hold => "HOLD",
    }
  }
}

impl fmt::Display for Decision {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// 관측치와 1:1 정렬된 매수/매도 신호 시퀀스.
///
/// 어떤 행에서도 `buy[i]`와 `sell[i]`가 동시에 참이 되지 않습니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalSeries {
  pub buy: Vec<bool>,
  pub sell: Vec<bool>,
}

impl SignalSeries {
  pub fn with_capacity(capacity: usize) -> Self {
    SignalSeries {
      buy: Vec::with_capacity(capacity),
      sell: Vec::with_capacity(capacity),
    }
  }

  pub fn push(&mut self, buy: bool, sell: bool) {
    self.buy.push(buy);
    self.sell.push(sell);
  }

  pub fn len(&self) -> usize {
    self.buy.len()
  }

  pub fn is_empty(&self) -> bool {
    self.buy.is_empty()
  }

  pub fn buy_count(&self) -> usize {
    self.buy.iter().filter(|b| **b).count()
  }

  pub fn sell_count(&self) -> usize {
    self.sell.iter().filter(|s| **s).count()
  }

  // 행별 판단 (BUY 우선)
  pub fn decision_at(&self, index: usize) -> Option<Decision> {
    let buy = *self.buy.get(index)?;
    let sell = *self.sell.get(index)?;

    Some(if buy {
      Decision::Buy
    } else if sell {
      Decision::Sell
    } else {
      Decision::Hold
    })
  }

  pub fn latest_decision(&self) -> Result<Decision, crate::error::TradingError> {
    super::decision::latest_decision(&self.buy, &self.sell)
  }
}
