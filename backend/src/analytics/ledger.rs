use crate::analytics::{change_percent, round2};
use chrono::NaiveDate;
use common::model::dashboard::{HourlyPoint, SalesOverview};
use common::model::sales::SalesRecord;

/// Share of the gross amount counted as profit.
pub const PROFIT_MARGIN: f64 = 0.15;
/// Payment location of the register's own end-of-day rows; not a sale.
pub const DAILY_LOCATION: &str = "DAILY";
const FUEL_PRODUCTS: [&str; 3] = ["Benzin 95", "Motorin", "LPG"];

/// A ledger line that points at a faulty pump or register.
///
/// Fuel sold without a pump number, a non-positive quantity, unit price or
/// gross amount all count.
pub fn is_malfunction(record: &SalesRecord) -> bool {
    let is_fuel = FUEL_PRODUCTS.contains(&record.product_description.as_str());
    let pump_issue = is_fuel && record.fuel_pump_number.is_none();
    let quantity_issue = record.quantity <= 0.0;
    let price_issue = record.unit_price <= 0.0 || record.gross_amount <= 0.0;
    pump_issue || quantity_issue || price_issue
}

fn is_sale(record: &SalesRecord) -> bool {
    record.payment_location != DAILY_LOCATION
}

fn hour_of(time: &str) -> Option<usize> {
    time.split(':')
        .next()?
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|h| *h < 24)
}

fn total_sales(records: &[&SalesRecord]) -> f64 {
    records
        .iter()
        .filter(|r| is_sale(r))
        .map(|r| r.gross_amount)
        .sum()
}

fn hourly(records: &[&SalesRecord]) -> Vec<HourlyPoint> {
    let mut points: Vec<HourlyPoint> = (0..24)
        .map(|hour| HourlyPoint {
            hour,
            label: format!("{}:00", hour),
            sales: 0.0,
            profit: 0.0,
            malfunctions: 0,
        })
        .collect();

    for record in records {
        let Some(hour) = hour_of(&record.time) else {
            continue;
        };
        let point = &mut points[hour];
        if is_sale(record) {
            point.sales += record.gross_amount;
            point.profit += record.gross_amount * PROFIT_MARGIN;
        }
        if is_malfunction(record) {
            point.malfunctions += 1;
        }
    }
    points
}

/// Totals for `date` (latest ledger day when `None`) against the previous day in the data.
pub fn sales_overview(records: &[SalesRecord], date: Option<NaiveDate>) -> SalesOverview {
    let mut days: Vec<NaiveDate> = records.iter().map(|r| r.date).collect();
    days.sort();
    days.dedup();

    let date = date.or_else(|| days.last().copied());
    let previous_date = date.and_then(|d| days.iter().rev().find(|day| **day < d).copied());

    let on = |day: Option<NaiveDate>| -> Vec<&SalesRecord> {
        records
            .iter()
            .filter(|r| Some(r.date) == day)
            .collect()
    };
    let today = on(date);
    let yesterday = on(previous_date);

    let total = total_sales(&today);
    let previous_total = total_sales(&yesterday);
    let profit = total * PROFIT_MARGIN;
    let previous_profit = previous_total * PROFIT_MARGIN;

    let malfunctions: Vec<SalesRecord> = today
        .iter()
        .filter(|r| is_malfunction(r))
        .map(|r| (*r).clone())
        .collect();
    let previous_malfunctions = yesterday.iter().filter(|r| is_malfunction(r)).count();

    SalesOverview {
        date,
        previous_date,
        total_sales: round2(total),
        previous_total_sales: round2(previous_total),
        sales_change_percent: change_percent(total, previous_total),
        total_profit: round2(profit),
        previous_total_profit: round2(previous_profit),
        profit_change_percent: change_percent(profit, previous_profit),
        malfunction_count: malfunctions.len(),
        previous_malfunction_count: previous_malfunctions,
        malfunction_change_percent: change_percent(
            malfunctions.len() as f64,
            previous_malfunctions as f64,
        ),
        malfunctions,
        hourly: hourly(&today),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sale(day: u32, time: &str, product: &str, gross: f64, pump: Option<&str>) -> SalesRecord {
        SalesRecord {
            transaction_number: format!("{day}-{time}"),
            date: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            time: time.to_string(),
            article_number: "A1".to_string(),
            product_description: product.to_string(),
            quantity: 10.0,
            unit_price: 2.0,
            gross_amount: gross,
            unit: "L".to_string(),
            vat_percent: 19.0,
            vat_identifier: "A".to_string(),
            currency_code: "EUR".to_string(),
            vat_amount: 0.0,
            payment_method_id: "1".to_string(),
            payment_location: "SHOP".to_string(),
            card_number: None,
            customer_number: None,
            person_card: None,
            driver_number: None,
            fuel_pump_number: pump.map(str::to_string),
            station_number: None,
            cost_center: None,
            cash_register_number: None,
            extra_field: None,
            terminal_id: None,
            coupon_number: None,
        }
    }

    #[test]
    fn malfunction_rules() {
        assert!(!is_malfunction(&sale(1, "08:00", "Motorin", 20.0, Some("3"))));
        assert!(is_malfunction(&sale(1, "08:00", "Motorin", 20.0, None)));
        assert!(!is_malfunction(&sale(1, "08:00", "Kaffee", 20.0, None)));
        assert!(is_malfunction(&sale(1, "08:00", "Kaffee", 0.0, None)));

        let mut no_quantity = sale(1, "08:00", "Kaffee", 20.0, None);
        no_quantity.quantity = 0.0;
        assert!(is_malfunction(&no_quantity));
    }

    #[test]
    fn overview_compares_latest_two_days() {
        let mut daily_row = sale(5, "23:59", "Kaffee", 999.0, None);
        daily_row.payment_location = DAILY_LOCATION.to_string();
        let records = vec![
            sale(1, "08:00", "Motorin", 100.0, Some("1")),
            sale(3, "09:30", "Motorin", 50.0, Some("1")),
            sale(3, "14:10", "Motorin", 30.0, None),
            sale(5, "09:05", "Kaffee", 60.0, None),
            sale(5, "09:45", "Kaffee", 40.0, None),
            daily_row,
        ];

        let overview = sales_overview(&records, None);

        assert_eq!(overview.date, NaiveDate::from_ymd_opt(2024, 3, 5));
        assert_eq!(overview.previous_date, NaiveDate::from_ymd_opt(2024, 3, 3));
        assert_eq!(overview.total_sales, 100.0);
        assert_eq!(overview.previous_total_sales, 80.0);
        assert_eq!(overview.sales_change_percent, 25.0);
        assert_eq!(overview.total_profit, 15.0);
        assert_eq!(overview.profit_change_percent, 25.0);
        assert_eq!(overview.malfunction_count, 0);
        assert_eq!(overview.previous_malfunction_count, 1);
        assert_eq!(overview.malfunction_change_percent, -100.0);
        assert_eq!(overview.hourly.len(), 24);
        assert_eq!(overview.hourly[9].sales, 100.0);
        assert_eq!(overview.hourly[23].sales, 0.0);
    }

    #[test]
    fn overview_for_a_chosen_day() {
        let records = vec![
            sale(1, "08:00", "Motorin", 100.0, None),
            sale(3, "09:30", "Motorin", 50.0, Some("1")),
        ];

        let overview = sales_overview(&records, NaiveDate::from_ymd_opt(2024, 3, 1));

        assert_eq!(overview.previous_date, None);
        assert_eq!(overview.total_sales, 100.0);
        assert_eq!(overview.sales_change_percent, 100.0);
        assert_eq!(overview.malfunction_count, 1);
        assert_eq!(overview.hourly[8].malfunctions, 1);
    }

    #[test]
    fn empty_ledger_is_all_zero() {
        let overview = sales_overview(&[], None);
        assert_eq!(overview.date, None);
        assert_eq!(overview.total_sales, 0.0);
        assert_eq!(overview.sales_change_percent, 0.0);
        assert!(overview.hourly.iter().all(|p| p.sales == 0.0));
    }

    #[test]
    fn unreadable_times_are_left_out_of_the_hours() {
        assert_eq!(hour_of("07:15:00"), Some(7));
        assert_eq!(hour_of("24:00"), None);
        assert_eq!(hour_of("late"), None);
    }
}
