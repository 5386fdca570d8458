use crate::analytics::round2;
use common::model::dashboard::TankGauge;
use common::model::stored::Stored;
use common::model::tank::TankReading;
use regex::Regex;

const TANK_NUMBER: &str = r"(?i)Tank\s*(\d+)";

fn tank_number(pattern: &Regex, name: &str) -> u32 {
    pattern
        .captures(name)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// Current state of every tank: its most recently written reading.
///
/// Gauges are ordered by the number in the tank name ("Tank 2" before
/// "Tank 10"); names without one sort first.
pub fn tank_gauges(readings: &[Stored<TankReading>]) -> Result<Vec<TankGauge>, regex::Error> {
    let pattern = Regex::new(TANK_NUMBER)?;

    let mut latest: Vec<&Stored<TankReading>> = Vec::new();
    for reading in readings {
        match latest
            .iter_mut()
            .find(|r| r.record.tank_id == reading.record.tank_id)
        {
            Some(current) if reading.updated_at > current.updated_at => *current = reading,
            Some(_) => {}
            None => latest.push(reading),
        }
    }
    latest.sort_by_key(|r| tank_number(&pattern, &r.record.tank_name));

    Ok(latest
        .into_iter()
        .map(|r| {
            let tank = &r.record;
            let fill_percent = if tank.max_capacity > 0.0 {
                round2(tank.current_level / tank.max_capacity * 100.0)
            } else {
                0.0
            };
            TankGauge {
                tank_id: tank.tank_id.clone(),
                tank_name: tank.tank_name.clone(),
                fuel_type: tank.fuel_type.clone(),
                current_level: tank.current_level,
                max_capacity: tank.max_capacity,
                fill_percent,
                updated_at: r.updated_at,
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};

    fn at(minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, minute, 0).unwrap()
    }

    fn reading(id: &str, name: &str, level: f64, max: f64, minute: u32) -> Stored<TankReading> {
        Stored {
            id: minute as i64,
            upload_id: "u".to_string(),
            created_at: at(minute),
            updated_at: at(minute),
            record: TankReading {
                tank_id: id.to_string(),
                tank_name: name.to_string(),
                fuel_type: "Diesel".to_string(),
                max_capacity: max,
                current_level: level,
                date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                time: "08:00".to_string(),
                sales_amount: 0.0,
                refill_amount: 0.0,
            },
        }
    }

    #[test]
    fn latest_reading_per_tank_wins() {
        let readings = vec![
            reading("T10", "Tank 10", 100.0, 1000.0, 5),
            reading("T2", "Tank 2", 500.0, 2000.0, 1),
            reading("T2", "Tank 2", 300.0, 2000.0, 9),
            reading("T2", "Tank 2", 900.0, 2000.0, 3),
        ];

        let gauges = tank_gauges(&readings).unwrap();

        assert_eq!(gauges.len(), 2);
        assert_eq!(gauges[0].tank_id, "T2");
        assert_eq!(gauges[0].current_level, 300.0);
        assert_eq!(gauges[0].fill_percent, 15.0);
        assert_eq!(gauges[0].updated_at, at(9));
        assert_eq!(gauges[1].tank_id, "T10");
        assert_eq!(gauges[1].fill_percent, 10.0);
    }

    #[test]
    fn unnumbered_tanks_sort_first_and_empty_capacity_reads_zero() {
        let readings = vec![
            reading("T1", "Tank1", 10.0, 100.0, 1),
            reading("X", "Reserve", 10.0, 0.0, 1),
        ];

        let gauges = tank_gauges(&readings).unwrap();

        assert_eq!(gauges[0].tank_name, "Reserve");
        assert_eq!(gauges[0].fill_percent, 0.0);
        assert_eq!(gauges[1].tank_name, "Tank1");
    }

    #[test]
    fn tank_numbers_ignore_case() {
        let readings = vec![
            reading("A", "TANK 3", 10.0, 100.0, 1),
            reading("B", "tank 2", 10.0, 100.0, 1),
            reading("C", "Tank 1", 10.0, 100.0, 1),
        ];

        let gauges = tank_gauges(&readings).unwrap();

        let names: Vec<&str> = gauges.iter().map(|g| g.tank_name.as_str()).collect();
        assert_eq!(names, ["Tank 1", "tank 2", "TANK 3"]);
    }
}
