//! Range summary and change calculation tests.

mod common;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use common::{bar, seeded_series, series_from};
use tickforge::stats::{DEFAULT_RANGE_WINDOW, compute_change, compute_range_summary};
use tickforge::{Series, TickforgeError};

fn five_bar_series() -> Series {
    series_from(vec![
        bar(0, dec!(100.00), dec!(101.50), dec!(99.20), dec!(101.00), 600_000),
        bar(1, dec!(101.10), dec!(102.40), dec!(100.80), dec!(102.00), 700_000),
        bar(2, dec!(102.00), dec!(102.10), dec!(98.75), dec!(99.10), 800_000),
        bar(3, dec!(99.00), dec!(100.30), dec!(98.90), dec!(100.25), 900_000),
        bar(4, dec!(100.30), dec!(100.90), dec!(99.95), dec!(100.60), 1_000_000),
    ])
}

#[test]
fn window_longer_than_series_uses_everything() {
    let series = five_bar_series();
    let summary = compute_range_summary(&series, Some(24)).unwrap();

    assert_eq!(summary.open, series.bars()[0].open);
    assert_eq!(summary.high, dec!(102.40));
    assert_eq!(summary.low, dec!(98.75));
    assert_eq!(summary.close, dec!(100.60));
    assert_eq!(summary.volume, 4_000_000);
    assert_eq!(summary.bars, 5);
}

#[test]
fn window_equal_to_length_matches_full_series() {
    let series = five_bar_series();
    assert_eq!(
        compute_range_summary(&series, Some(5)).unwrap(),
        compute_range_summary(&series, Some(500)).unwrap()
    );
}

#[test]
fn short_window_trails_the_series() {
    let summary = compute_range_summary(&five_bar_series(), Some(2)).unwrap();
    assert_eq!(summary.open, dec!(99.00));
    assert_eq!(summary.high, dec!(100.90));
    assert_eq!(summary.low, dec!(98.90));
    assert_eq!(summary.close, dec!(100.60));
    assert_eq!(summary.volume, 1_900_000);
}

#[test]
fn default_window_on_generated_series() {
    let series = seeded_series("BTC/USD", 60, 17);
    let summary = compute_range_summary(&series, None).unwrap();
    let tail = &series.bars()[60 - DEFAULT_RANGE_WINDOW..];

    assert_eq!(summary.bars, DEFAULT_RANGE_WINDOW);
    assert_eq!(summary.open, tail[0].open);
    assert_eq!(summary.high, tail.iter().map(|b| b.high).max().unwrap());
    assert_eq!(summary.low, tail.iter().map(|b| b.low).min().unwrap());
    assert_eq!(summary.close, series.last().unwrap().close);
    assert_eq!(summary.volume, tail.iter().map(|b| b.volume).sum::<u64>());
}

#[test]
fn range_summary_rejects_empty_series() {
    let empty = series_from(Vec::new());
    assert!(matches!(
        compute_range_summary(&empty, None),
        Err(TickforgeError::InvalidInput(_))
    ));
}

#[test]
fn change_between_last_two_closes() {
    let change = compute_change(&five_bar_series()).unwrap();
    assert_eq!(change.absolute_change, dec!(0.35));
    // 0.35 / 100.25 * 100
    assert_eq!(
        change.percent_change.round_dp(6),
        dec!(0.349127)
    );
    assert!(change.is_positive);
}

#[test]
fn flat_close_is_not_positive() {
    let series = series_from(vec![
        bar(0, dec!(50), dec!(51), dec!(49), dec!(50.5), 1),
        bar(1, dec!(50.5), dec!(51), dec!(50), dec!(50.5), 1),
    ]);
    let change = compute_change(&series).unwrap();
    assert_eq!(change.absolute_change, Decimal::ZERO);
    assert!(!change.is_positive);
}

#[test]
fn change_needs_two_bars() {
    for bars in [
        Vec::new(),
        vec![bar(0, dec!(1), dec!(1), dec!(1), dec!(1), 1)],
    ] {
        let available = bars.len();
        let err = compute_change(&series_from(bars)).unwrap_err();
        match err {
            TickforgeError::InsufficientData {
                required,
                available: got,
            } => {
                assert_eq!(required, 2);
                assert_eq!(got, available);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}

#[test]
fn change_sign_matches_generated_closes() {
    let series = seeded_series("ETH/USD", 40, 4);
    let bars = series.bars();
    let change = compute_change(&series).unwrap();
    let expected = bars[39].close - bars[38].close;

    assert_eq!(change.absolute_change, expected);
    assert_eq!(change.is_positive, expected > Decimal::ZERO);
}
