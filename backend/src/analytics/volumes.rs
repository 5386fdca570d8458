use crate::analytics::round2;
use chrono::Datelike;
use common::model::dashboard::{
    Fuel, FuelMix, FuelShare, FuelTrend, FuelVolumes, Period, VolumePoint, VolumeSeries,
};
use common::model::summary::DailySales;

const WEEKDAYS: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];
const MONTHS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];
/// How a day's volume spreads over its six 4-hour slots.
const INTRADAY_SLOTS: [(&str, f64); 6] = [
    ("00:00", 0.10),
    ("04:00", 0.15),
    ("08:00", 0.25),
    ("12:00", 0.20),
    ("16:00", 0.20),
    ("20:00", 0.10),
];
const MAX_MONTHS: usize = 6;

fn newest_first(days: &[DailySales]) -> Vec<&DailySales> {
    let mut sorted: Vec<&DailySales> = days.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

fn month_key(day: &DailySales) -> String {
    day.date.format("%Y-%m").to_string()
}

fn intraday(latest: Option<&DailySales>) -> Vec<VolumePoint> {
    let volumes = latest.map(FuelVolumes::from).unwrap_or_default();
    INTRADAY_SLOTS
        .iter()
        .map(|(name, share)| VolumePoint {
            name: name.to_string(),
            volumes: volumes.map(|v| (v * share).round()),
        })
        .collect()
}

fn weekly(sorted: &[&DailySales]) -> Vec<VolumePoint> {
    let mut points: Vec<VolumePoint> = sorted
        .iter()
        .take(7)
        .map(|day| VolumePoint {
            name: WEEKDAYS[day.date.weekday().num_days_from_sunday() as usize].to_string(),
            volumes: FuelVolumes::from(*day),
        })
        .collect();
    points.reverse();
    points
}

fn monthly(sorted: &[&DailySales]) -> Vec<VolumePoint> {
    // (year, month, sums, days), newest month first
    let mut months: Vec<(i32, u32, FuelVolumes, usize)> = Vec::new();
    for day in sorted {
        let (year, month) = (day.date.year(), day.date.month0());
        match months.iter_mut().find(|m| m.0 == year && m.1 == month) {
            Some(entry) => {
                entry.2.add(&FuelVolumes::from(*day));
                entry.3 += 1;
            }
            None => months.push((year, month, FuelVolumes::from(*day), 1)),
        }
    }

    months
        .into_iter()
        .take(MAX_MONTHS)
        .map(|(_, month, sums, count)| VolumePoint {
            name: MONTHS[month as usize].to_string(),
            volumes: sums.map(|v| (v / count as f64).round()),
        })
        .collect()
}

fn trends(sorted: &[&DailySales]) -> Vec<FuelTrend> {
    let latest = sorted.first().map(|d| FuelVolumes::from(*d));
    let previous = sorted.get(1).map(|d| FuelVolumes::from(*d));

    Fuel::ALL
        .iter()
        .map(|fuel| {
            let percentage = match (latest, previous) {
                (Some(now), Some(before)) if before.get(*fuel) != 0.0 => {
                    let (now, before) = (now.get(*fuel), before.get(*fuel));
                    // halves round up, so -12.5 is -12
                    ((now - before) / before * 100.0 + 0.5).floor() as i64
                }
                _ => 0,
            };
            FuelTrend {
                fuel: *fuel,
                name: fuel.label().to_string(),
                percentage,
            }
        })
        .collect()
}

/// Chart points for `period` plus the latest day's change per fuel.
pub fn volume_series(days: &[DailySales], period: Period) -> VolumeSeries {
    let sorted = newest_first(days);
    let points = match period {
        Period::Daily => intraday(sorted.first().copied()),
        Period::Weekly => weekly(&sorted),
        Period::Monthly => monthly(&sorted),
    };
    VolumeSeries {
        period,
        points,
        trends: trends(&sorted),
    }
}

/// Share of each fuel in the volume sold during `month` (`YYYY-MM`).
///
/// Without a month the latest one in the data is used. Fuels that sold
/// nothing are left out.
pub fn fuel_mix(days: &[DailySales], month: Option<&str>) -> FuelMix {
    let mut available_months: Vec<String> = days.iter().map(month_key).collect();
    available_months.sort_by(|a, b| b.cmp(a));
    available_months.dedup();

    let month = month
        .map(str::to_string)
        .or_else(|| available_months.first().cloned());

    let mut totals = FuelVolumes::default();
    for day in days.iter().filter(|d| Some(month_key(d)) == month) {
        totals.add(&FuelVolumes::from(day));
    }
    let total = totals.total();

    let shares = Fuel::ALL
        .iter()
        .filter(|fuel| totals.get(**fuel) > 0.0)
        .map(|fuel| FuelShare {
            fuel: *fuel,
            name: fuel.label().to_string(),
            value: totals.get(*fuel),
            percentage: round2(totals.get(*fuel) / total * 100.0),
        })
        .collect();

    FuelMix {
        month,
        available_months,
        shares,
    }
}
