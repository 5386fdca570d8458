use crate::analytics::round2;
use common::model::dashboard::{Fuel, FuelVolumes, ValueComparison};
use common::model::prices::FuelPrices;
use common::model::summary::DailySales;

/// Margin assumed per litre (or unit) of any product.
pub const PROFIT_PER_LITER: f64 = 5.0;

fn price_of(prices: &FuelPrices, fuel: Fuel) -> f64 {
    match fuel {
        Fuel::Diesel => prices.diesel,
        Fuel::AdBlue => prices.ad_blue,
        Fuel::SuperE5 => prices.super_e5,
        Fuel::SuperE10 => prices.super_e10,
        Fuel::Cleaning => prices.cleaning,
    }
}

fn value_of(volumes: &FuelVolumes, prices: &FuelPrices) -> f64 {
    Fuel::ALL
        .iter()
        .map(|fuel| volumes.get(*fuel) * price_of(prices, *fuel))
        .sum()
}

/// Unsigned change in percent; 0 when there was nothing before.
fn magnitude_percent(difference: f64, previous: f64) -> f64 {
    if previous > 0.0 {
        round2((difference / previous * 100.0).abs())
    } else {
        0.0
    }
}

/// Sales value and profit of the latest summary day against the one before.
///
/// Needs at least two days; otherwise every figure is zero.
pub fn value_comparison(days: &[DailySales], prices: &FuelPrices) -> ValueComparison {
    let mut sorted: Vec<&DailySales> = days.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    let (Some(today), Some(yesterday)) = (sorted.first(), sorted.get(1)) else {
        return ValueComparison::default();
    };

    let today = FuelVolumes::from(*today);
    let yesterday = FuelVolumes::from(*yesterday);

    let today_value = value_of(&today, prices);
    let yesterday_value = value_of(&yesterday, prices);
    let difference = today_value - yesterday_value;

    let today_profit = today.total() * PROFIT_PER_LITER;
    let yesterday_profit = yesterday.total() * PROFIT_PER_LITER;
    let profit_difference = today_profit - yesterday_profit;

    ValueComparison {
        today_total_value: round2(today_value),
        yesterday_total_value: round2(yesterday_value),
        difference: round2(difference),
        percentage_change: magnitude_percent(difference, yesterday_value),
        is_increase: difference > 0.0,
        today_total_profit: round2(today_profit),
        yesterday_total_profit: round2(yesterday_profit),
        profit_difference: round2(profit_difference),
        profit_percentage_change: magnitude_percent(profit_difference, yesterday_profit),
        is_profit_increase: profit_difference > 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(d: u32, ad_blue: f64, cleaning: f64) -> DailySales {
        DailySales {
            date: NaiveDate::from_ymd_opt(2024, 3, d).unwrap(),
            total_sales: 0.0,
            total_profit: 0.0,
            malfunctions: 0,
            diesel: 0.0,
            ad_blue,
            super_e5: 0.0,
            super_e10: 0.0,
            cleaning,
        }
    }

    #[test]
    fn compares_latest_two_days_at_configured_prices() {
        let days = vec![day(2, 10.0, 2.0), day(1, 12.0, 4.0)];

        let comparison = value_comparison(&days, &FuelPrices::default());

        assert_eq!(comparison.today_total_value, 570.0);
        assert_eq!(comparison.yesterday_total_value, 740.0);
        assert_eq!(comparison.difference, -170.0);
        assert_eq!(comparison.percentage_change, 22.97);
        assert!(!comparison.is_increase);
        assert_eq!(comparison.today_total_profit, 60.0);
        assert_eq!(comparison.yesterday_total_profit, 80.0);
        assert_eq!(comparison.profit_difference, -20.0);
        assert_eq!(comparison.profit_percentage_change, 25.0);
        assert!(!comparison.is_profit_increase);
    }

    #[test]
    fn growth_from_nothing_has_no_percentage() {
        let days = vec![day(1, 0.0, 0.0), day(2, 1.0, 0.0)];

        let comparison = value_comparison(&days, &FuelPrices::default());

        assert!(comparison.is_increase);
        assert_eq!(comparison.difference, 50.0);
        assert_eq!(comparison.percentage_change, 0.0);
    }

    #[test]
    fn one_day_is_not_enough() {
        let comparison = value_comparison(&[day(1, 5.0, 5.0)], &FuelPrices::default());
        assert_eq!(comparison, ValueComparison::default());
    }
}
