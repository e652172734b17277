pub mod directional;
pub mod report;
pub mod strategy_config;

// 핵심 타입 재노출
pub use directional::{evaluate, DirectionalStrategy};
pub use report::{PreviewRow, StrategyReport, DEFAULT_PREVIEW_ROWS};
pub use strategy_config::StrategyConfig;
