use rand::distributions::Distribution;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sha2::{Digest, Sha256};
use statrs::distribution::Normal;

use crate::error::TradingError;
use crate::models::market_data::Observation;
use crate::utils::minute_timestamps_ending_at;
use super::provider::ObservationSource;

pub const DEFAULT_MOCK_ROWS: usize = 100;
const BASE_PRICE: f64 = 100.0;
const VOLUME_RANGE: std::ops::Range<u32> = 100..1000;

/// 통화쌍 이름에서 안정적인 시드 생성 (SHA-256 앞 8바이트)
pub fn seed_for_pair(pair: &str) -> u64 {
    let digest = Sha256::digest(pair.as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(bytes)
}

/// 랜덤 워크 종가와 균등 분포 거래량을 만드는 모의 피드
///
/// 같은 시드와 종료 시각이면 항상 같은 시퀀스를 돌려줍니다.
#[derive(Debug, Clone)]
pub struct MockObservationSource {
    name: String,
    rows: usize,
    end_time: i64,
    seed: u64,
}

impl MockObservationSource {
    pub fn new(pair: &str, rows: usize, end_time: i64) -> Self {
        MockObservationSource {
            name: format!("mock:{}", pair),
            rows,
            end_time,
            seed: seed_for_pair(pair),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl ObservationSource for MockObservationSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Result<Vec<Observation>, TradingError> {
        let normal = Normal::new(0.0, 1.0)
            .map_err(|e| TradingError::InvalidParameter(format!("Invalid normal distribution: {}", e)))?;
        let mut rng = StdRng::seed_from_u64(self.seed);

        let steps: Vec<f64> = (0..self.rows).map(|_| normal.sample(&mut rng)).collect();
        let volumes: Vec<f64> = (0..self.rows)
            .map(|_| f64::from(rng.gen_range(VOLUME_RANGE)))
            .collect();

        let mut close = BASE_PRICE;
        let observations = minute_timestamps_ending_at(self.end_time, self.rows)
            .into_iter()
            .zip(steps.into_iter().zip(volumes))
            .map(|(timestamp, (step, volume))| {
                close += step;
                Observation::new(timestamp, close, volume)
            })
            .collect();

        log::debug!("{}: generated {} observations (seed {})", self.name, self.rows, self.seed);

        Ok(observations)
    }
}
