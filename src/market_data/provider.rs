use crate::error::TradingError;
use crate::models::market_data::Observation;

/// 선택 가능한 통화쌍
pub const SUPPORTED_PAIRS: [&str; 7] = [
    "EUR/USD", "USD/JPY", "GBP/USD", "AUD/USD", "USD/CAD", "NZD/USD", "USD/CHF",
];

/// 관측치 시퀀스 제공자 인터페이스
pub trait ObservationSource: Send + Sync {
    /// 제공자 이름
    fn name(&self) -> &str;

    /// 시간 순으로 정렬된 관측치 전체 로드
    fn load(&self) -> Result<Vec<Observation>, TradingError>;
}

/// 지원하는 통화쌍인지 확인
pub fn validate_pair(pair: &str) -> Result<(), TradingError> {
    if SUPPORTED_PAIRS.contains(&pair) {
        Ok(())
    } else {
        Err(TradingError::InvalidParameter(format!(
            "Unsupported currency pair '{}', expected one of {}",
            pair,
            SUPPORTED_PAIRS.join(", ")
        )))
    }
}
