use serde::{Deserialize, Serialize};

/// 단일 가격/거래량 관측치 (타임스탬프는 밀리초)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub timestamp: i64,
    pub close: f64,
    pub volume: f64,
}

impl Observation {
    pub fn new(timestamp: i64, close: f64, volume: f64) -> Self {
        Observation {
            timestamp,
            close,
            volume,
        }
    }
}

/// 관측치 시퀀스를 종가/거래량 컬럼으로 분리
pub fn split_columns(observations: &[Observation]) -> (Vec<f64>, Vec<f64>) {
    observations
        .iter()
        .map(|o| (o.close, o.volume))
        .unzip()
}
