/**
* filename : mod
* author : HAMA
* date: 2025. 5. 8.
* description:
**/

pub mod csv_source;
pub mod mock;
pub mod provider;

pub use csv_source::CsvObservationSource;
pub use mock::MockObservationSource;
pub use provider::{validate_pair, ObservationSource, SUPPORTED_PAIRS};
