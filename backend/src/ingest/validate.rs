use crate::error::RowError;
use crate::ingest::profile::{Column, Presence};
use crate::ingest::table::RawRow;

/// Structural check of one row: every required cell is present and non-empty.
///
/// Values are not interpreted here; dates and numbers are left to coercion.
/// All violations of the row are reported together.
pub fn validate_row(row: &RawRow, columns: &[Column]) -> Result<(), RowError> {
    let violations: Vec<String> = columns
        .iter()
        .filter(|c| c.presence == Presence::Required)
        .filter_map(|c| match row.get(c.field) {
            None => Some(format!("{} is missing", c.header)),
            Some(v) if v.trim().is_empty() => Some(format!("{} must not be empty", c.header)),
            Some(_) => None,
        })
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(RowError::Validation(violations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::profile::profile;
    use common::model::kind::UploadKind;
    use std::collections::HashMap;

    fn row(cells: &[(&'static str, &str)]) -> RawRow {
        RawRow::new(
            2,
            cells.iter().map(|(k, v)| (*k, v.to_string())).collect::<HashMap<_, _>>(),
        )
    }

    #[test]
    fn accepts_a_complete_row() {
        let row = row(&[
            ("tankId", "T1"),
            ("tankName", "Tank 1"),
            ("fuelType", "Diesel"),
            ("date", "01.03.2024"),
            ("time", "08:00"),
        ]);
        assert!(validate_row(&row, profile(UploadKind::TankReading).columns).is_ok());
    }

    #[test]
    fn numeric_fields_are_not_required() {
        let row = row(&[
            ("tankId", "T1"),
            ("tankName", "Tank 1"),
            ("fuelType", "Diesel"),
            ("date", "01.03.2024"),
            ("time", "08:00"),
            ("currentLevel", ""),
        ]);
        assert!(validate_row(&row, profile(UploadKind::TankReading).columns).is_ok());
    }

    #[test]
    fn collects_every_violation() {
        let row = row(&[("tankId", "T1"), ("tankName", " "), ("date", "01.03.2024")]);
        let err = validate_row(&row, profile(UploadKind::TankReading).columns).unwrap_err();

        assert_eq!(
            err,
            RowError::Validation(vec![
                "TankName must not be empty".to_string(),
                "KraftstoffTyp is missing".to_string(),
                "Zeit is missing".to_string(),
            ])
        );
        assert_eq!(
            err.to_string(),
            "Row validation error: TankName must not be empty, KraftstoffTyp is missing, Zeit is missing"
        );
    }
}
