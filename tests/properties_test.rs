//! Property tests over arbitrary seeds, symbols and windows.

mod common;

use proptest::prelude::*;
use rust_decimal::Decimal;

use common::{FIVE_MINUTES_MS, NOW_MS};
use tickforge::generator::SeriesGenerator;
use tickforge::random::SeededRandom;
use tickforge::stats::{compute_change, compute_range_summary};

fn symbol_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("BTC/USD".to_string()),
        Just("ETH/USD".to_string()),
        Just("TSLA".to_string()),
        "[A-Z]{1,6}",
    ]
}

proptest! {
    #[test]
    fn generated_series_hold_invariants(
        symbol in symbol_strategy(),
        count in 1usize..300,
        seed in any::<u64>(),
    ) {
        let series = SeriesGenerator::new(5)
            .generate_at(&symbol, count, NOW_MS, &mut SeededRandom::new(seed))
            .unwrap();
        let bars = series.bars();

        prop_assert_eq!(bars.len(), count);
        for bar in bars {
            prop_assert!(bar.low <= bar.open.min(bar.close));
            prop_assert!(bar.high >= bar.open.max(bar.close));
            prop_assert!(bar.low > Decimal::ZERO);
        }
        for pair in bars.windows(2) {
            prop_assert_eq!(pair[1].timestamp - pair[0].timestamp, FIVE_MINUTES_MS);
        }
    }

    #[test]
    fn range_window_is_clamped(
        count in 1usize..80,
        window in 1usize..160,
        seed in any::<u64>(),
    ) {
        let series = SeriesGenerator::default()
            .generate_at("TSLA", count, NOW_MS, &mut SeededRandom::new(seed))
            .unwrap();
        let summary = compute_range_summary(&series, Some(window)).unwrap();

        prop_assert_eq!(summary.bars, window.min(count));
        prop_assert!(summary.low <= summary.high);
        prop_assert_eq!(summary.close, series.last().unwrap().close);
        if window >= count {
            prop_assert_eq!(summary.open, series.bars()[0].open);
        }
    }

    #[test]
    fn change_is_consistent_with_closes(
        count in 2usize..60,
        seed in any::<u64>(),
    ) {
        let series = SeriesGenerator::default()
            .generate_at("ETH/USD", count, NOW_MS, &mut SeededRandom::new(seed))
            .unwrap();
        let change = compute_change(&series).unwrap();
        let bars = series.bars();

        prop_assert_eq!(change.absolute_change, bars[count - 1].close - bars[count - 2].close);
        prop_assert_eq!(change.is_positive, change.absolute_change > Decimal::ZERO);
        prop_assert_eq!(
            change.percent_change.is_sign_negative() && !change.percent_change.is_zero(),
            change.absolute_change < Decimal::ZERO
        );
    }
}
