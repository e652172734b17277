//! 지표와 신호 합성의 성질 테스트

use proptest::prelude::*;
use xSignal::indicators::{compute_rsi, rolling_mean};
use xSignal::signals::compose_signals;
use xSignal::StrategyConfig;

fn arb_closes() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(50.0..150.0f64, 0..120)
}

fn arb_config() -> impl Strategy<Value = StrategyConfig> {
    (
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        1usize..30,
        1usize..60,
        1usize..30,
        50u32..=100,
        0u32..50,
        1usize..30,
    )
        .prop_map(|(use_sma, use_rsi, use_vol, short, long, rsi_len, ob, os, vol_len)| {
            StrategyConfig::default()
                .with_filters(use_sma, use_rsi, use_vol)
                .with_sma(short, long)
                .with_rsi(rsi_len, ob, os)
                .with_volume(vol_len)
        })
}

proptest! {
    /// 윈도우보다 짧은 시리즈는 전부 정의되지 않음
    #[test]
    fn short_series_is_undefined(values in prop::collection::vec(-1e6..1e6f64, 0..20), extra in 1usize..10) {
        let window = values.len() + extra;
        let out = rolling_mean(&values, window).unwrap();

        prop_assert_eq!(out.len(), values.len());
        prop_assert!(out.iter().all(|v| v.is_none()));
    }

    /// RSI는 정의된 곳에서 항상 [0, 100]
    #[test]
    fn rsi_is_bounded(closes in arb_closes(), period in 1usize..30) {
        let rsi = compute_rsi(&closes, period).unwrap();

        prop_assert_eq!(rsi.len(), closes.len());
        for value in rsi.iter().flatten() {
            prop_assert!((0.0..=100.0).contains(value));
        }
        for value in rsi.iter().take(period) {
            prop_assert!(value.is_none());
        }
    }

    /// 한 행에서 매수와 매도가 동시에 참이 되지 않음
    #[test]
    fn buy_and_sell_are_exclusive(closes in arb_closes(), config in arb_config(), seed in 0u64..1000) {
        let volumes: Vec<f64> = (0..closes.len())
            .map(|i| 100.0 + ((i as u64 * 7919 + seed) % 900) as f64)
            .collect();

        let signals = compose_signals(&closes, &volumes, &config).unwrap();

        prop_assert_eq!(signals.len(), closes.len());
        for i in 0..signals.len() {
            prop_assert!(!(signals.buy[i] && signals.sell[i]));
        }
    }

    /// 같은 입력이면 같은 출력
    #[test]
    fn composition_is_deterministic(closes in arb_closes(), config in arb_config()) {
        let volumes = vec![500.0; closes.len()];

        let first = compose_signals(&closes, &volumes, &config).unwrap();
        let second = compose_signals(&closes, &volumes, &config).unwrap();

        prop_assert_eq!(first, second);
    }
}
