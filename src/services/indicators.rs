use crate::models::BestTrade;

/// Default window for the strategy moving average.
pub const DEFAULT_MA_WINDOW: usize = 3;

/// Simple Moving Average over complete windows only.
///
/// Output has `values.len() - window + 1` entries (or none when the series is
/// shorter than the window): entry `i` is the mean of `values[i..i + window]`.
/// This is a uniform convolution with "valid" alignment, no padding.
///
/// Each window is summed from scratch rather than with a running sum so that
/// results do not drift from the plain arithmetic mean on long series.
pub fn moving_average(values: &[f64], window: usize) -> Vec<f64> {
    if window == 0 || values.len() < window {
        return Vec::new();
    }

    let n = window as f64;
    values
        .windows(window)
        .map(|w| w.iter().sum::<f64>() / n)
        .collect()
}

/// Best single buy-then-sell pair (one buy, one later sell).
///
/// Single pass, O(1) space. At each index either the running minimum moves or
/// the best trade is checked against it, never both. A value equal to the
/// running minimum does not move it, so the first occurrence of a minimum is
/// the one a trade is anchored to.
///
/// Profit starts at zero, so a series with no rise above its running minimum
/// yields `{0, 0, 0.0}`.
pub fn best_trade(values: &[f64]) -> BestTrade {
    let mut min_price = f64::INFINITY;
    let mut min_index = 0;
    let mut best = BestTrade::default();

    for (i, &price) in values.iter().enumerate() {
        if price < min_price {
            min_price = price;
            min_index = i;
        } else if price - min_price > best.profit {
            best = BestTrade {
                buy_index: min_index,
                sell_index: i,
                profit: price - min_price,
            };
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len(), "length mismatch: {:?} vs {:?}", actual, expected);
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "expected {}, got {}", e, a);
        }
    }

    #[test]
    fn test_moving_average_basic() {
        let ma = moving_average(&[100.0, 105.0, 110.0, 115.0, 120.0], 3);
        assert_close(&ma, &[105.0, 110.0, 115.0]);
    }

    #[test]
    fn test_moving_average_real_data() {
        let closes = [114.0, 111.1, 113.8, 111.75, 108.1, 109.55];
        let ma = moving_average(&closes, 3);
        assert_close(
            &ma,
            &[
                (114.0 + 111.1 + 113.8) / 3.0,
                (111.1 + 113.8 + 111.75) / 3.0,
                (113.8 + 111.75 + 108.1) / 3.0,
                (111.75 + 108.1 + 109.55) / 3.0,
            ],
        );
    }

    #[test]
    fn test_moving_average_shorter_than_window_is_empty() {
        assert!(moving_average(&[], 3).is_empty());
        assert!(moving_average(&[100.0], 3).is_empty());
        assert!(moving_average(&[100.0, 110.0], 3).is_empty());
    }

    #[test]
    fn test_moving_average_exact_window_yields_one_value() {
        let ma = moving_average(&[100.0, 110.0, 120.0], 3);
        assert_close(&ma, &[110.0]);
    }

    #[test]
    fn test_moving_average_length_follows_window() {
        let closes: Vec<f64> = (0..8).map(|i| 100.0 + i as f64).collect();
        assert_eq!(moving_average(&closes, 1).len(), 8);
        assert_eq!(moving_average(&closes, 5).len(), 4);
        assert_eq!(moving_average(&closes, 8).len(), 1);
    }

    #[test]
    fn test_moving_average_zero_window_is_empty() {
        assert!(moving_average(&[1.0, 2.0, 3.0], 0).is_empty());
    }

    #[test]
    fn test_best_trade_dip_then_rise() {
        let trade = best_trade(&[100.0, 90.0, 95.0, 110.0, 105.0]);
        assert_eq!(trade, BestTrade { buy_index: 1, sell_index: 3, profit: 20.0 });
    }

    #[test]
    fn test_best_trade_declining_market() {
        let trade = best_trade(&[100.0, 95.0, 90.0, 85.0, 80.0]);
        assert_eq!(trade, BestTrade { buy_index: 0, sell_index: 0, profit: 0.0 });
    }

    #[test]
    fn test_best_trade_increasing_market() {
        let trade = best_trade(&[80.0, 85.0, 90.0, 95.0, 100.0]);
        assert_eq!(trade, BestTrade { buy_index: 0, sell_index: 4, profit: 20.0 });
    }

    #[test]
    fn test_best_trade_empty_and_single_point() {
        assert_eq!(best_trade(&[]), BestTrade::default());
        assert_eq!(best_trade(&[100.0]), BestTrade::default());
    }

    #[test]
    fn test_best_trade_v_shaped_market() {
        let trade = best_trade(&[100.0, 95.0, 90.0, 85.0, 90.0, 95.0, 100.0, 105.0]);
        assert_eq!(trade, BestTrade { buy_index: 3, sell_index: 7, profit: 20.0 });
    }

    #[test]
    fn test_best_trade_keeps_earlier_larger_spread() {
        // A later, lower minimum does not beat an earlier wider spread.
        let trade = best_trade(&[114.0, 111.1, 113.8, 111.75, 108.1, 109.55]);
        assert_eq!(trade.buy_index, 1);
        assert_eq!(trade.sell_index, 2);
        assert!((trade.profit - 2.7).abs() < 1e-9);
    }

    #[test]
    fn test_best_trade_first_minimum_wins_on_tie() {
        let trade = best_trade(&[90.0, 100.0, 90.0, 100.0]);
        assert_eq!(trade, BestTrade { buy_index: 0, sell_index: 1, profit: 10.0 });

        let trade = best_trade(&[100.0, 90.0, 90.0, 120.0]);
        assert_eq!(trade, BestTrade { buy_index: 1, sell_index: 3, profit: 30.0 });
    }

    #[test]
    fn test_best_trade_not_global_min_max_pair() {
        // Global max (200) precedes global min (50).
        let trade = best_trade(&[100.0, 200.0, 50.0, 60.0]);
        assert_eq!(trade, BestTrade { buy_index: 0, sell_index: 1, profit: 100.0 });
    }

    #[test]
    fn test_analytics_are_idempotent() {
        let closes = [100.0, 90.0, 95.0, 110.0, 105.0];
        assert_eq!(best_trade(&closes), best_trade(&closes));
        assert_eq!(moving_average(&closes, 3), moving_average(&closes, 3));
    }
}
