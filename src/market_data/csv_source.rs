use std::path::PathBuf;

use crate::error::TradingError;
use crate::models::market_data::Observation;
use super::provider::ObservationSource;

/// `timestamp,close,volume` 헤더를 가진 CSV 파일 제공자
pub struct CsvObservationSource {
    name: String,
    path: PathBuf,
    delimiter: u8,
}

impl CsvObservationSource {
    pub fn new(path: PathBuf, delimiter: char) -> Result<Self, TradingError> {
        if !delimiter.is_ascii() {
            return Err(TradingError::InvalidParameter(format!("Delimiter must be ASCII: {:?}", delimiter)));
        }

        Ok(Self {
            name: format!("csv:{}", path.display()),
            path,
            delimiter: delimiter as u8,
        })
    }
}

impl ObservationSource for CsvObservationSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Result<Vec<Observation>, TradingError> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(csv::Trim::All)
            .from_path(&self.path)?;

        let mut result: Vec<Observation> = Vec::new();
        for (line, rec) in rdr.deserialize::<Observation>().enumerate() {
            let row = rec
                .map_err(|e| TradingError::ParseError(format!("{} row {}: {}", self.name, line + 1, e)))?;

            if let Some(prev) = result.last() {
                if row.timestamp <= prev.timestamp {
                    log::warn!(
                        "{}: non-increasing timestamp at row {} ({} after {})",
                        self.name,
                        line + 1,
                        row.timestamp,
                        prev.timestamp
                    );
                }
            }

            result.push(row);
        }

        log::debug!("{}: loaded {} observations", self.name, result.len());

        Ok(result)
    }
}
