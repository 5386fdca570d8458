use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The family of CSV export an upload belongs to.
///
/// The kind decides which column table the backend applies to the header row,
/// which delimiter is used to tokenize the file and which record type the rows
/// are normalized into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UploadKind {
    /// Per-transaction cash register export (`LaufNr`, `Datum`, `Menge`, ...).
    SalesLedger,
    /// One row per day with totals and per-fuel volumes.
    SummarySales,
    /// Periodic tank level readings (`TankID;TankName;...`).
    TankReading,
}

impl UploadKind {
    pub const ALL: [UploadKind; 3] = [
        UploadKind::SalesLedger,
        UploadKind::SummarySales,
        UploadKind::TankReading,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UploadKind::SalesLedger => "sales-ledger",
            UploadKind::SummarySales => "summary-sales",
            UploadKind::TankReading => "tank-reading",
        }
    }
}

impl fmt::Display for UploadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UploadKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UploadKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("Unknown upload kind '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_kebab_case_names() {
        assert_eq!("tank-reading".parse::<UploadKind>(), Ok(UploadKind::TankReading));
        assert_eq!("sales-ledger".parse::<UploadKind>(), Ok(UploadKind::SalesLedger));
        assert!("tanks".parse::<UploadKind>().is_err());
    }

    #[test]
    fn serde_uses_the_same_names() {
        let json = serde_json::to_string(&UploadKind::SummarySales).unwrap();
        assert_eq!(json, "\"summary-sales\"");
    }
}
