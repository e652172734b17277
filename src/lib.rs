//! 방향성 시그널 봇 라이브러리
//!
//! SMA 크로스오버, RSI, 거래량 필터를 조합해 BUY/SELL/HOLD 신호를 계산합니다.

pub mod config;
pub mod error;
pub mod indicators;
pub mod market_data;
pub mod models;
pub mod signals;
pub mod strategies;
pub mod utils;

// 핵심 타입 재노출
pub use crate::error::TradingError;
pub use crate::indicators::{compute_rsi, rolling_mean, IndicatorSeries};
pub use crate::models::market_data::Observation;
pub use crate::signals::{compose_signals, latest_decision, Decision, SignalSeries};
pub use crate::strategies::{evaluate, DirectionalStrategy, StrategyConfig, StrategyReport};

/// 버전 정보
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 결과 타입 별칭
pub type Result<T> = std::result::Result<T, TradingError>;
