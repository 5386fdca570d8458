//! Per-kind ingestion settings.
//!
//! Every upload kind is described by one `Profile`: how the file is tokenized,
//! how dates are written, how duplicates are treated and which CSV header feeds
//! which record field. The column tables replace free-form header lookups: the
//! header row is checked against them before any data row is read.

use crate::store::InsertMode;
use common::model::kind::UploadKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Header must exist and every row needs a non-empty cell.
    Required,
    /// Header must exist; empty or missing cells fall back to a default.
    Field,
    /// Header may be absent; empty cells become `None`.
    Optional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// `DD.MM.YYYY`
    European,
    /// `YYYY-MM-DD`, optionally followed by a time.
    Iso,
}

#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub header: &'static str,
    pub field: &'static str,
    pub presence: Presence,
}

const fn required(header: &'static str, field: &'static str) -> Column {
    Column {
        header,
        field,
        presence: Presence::Required,
    }
}

const fn field(header: &'static str, field: &'static str) -> Column {
    Column {
        header,
        field,
        presence: Presence::Field,
    }
}

const fn optional(header: &'static str, field: &'static str) -> Column {
    Column {
        header,
        field,
        presence: Presence::Optional,
    }
}

#[derive(Debug)]
pub struct Profile {
    pub kind: UploadKind,
    pub delimiter: u8,
    pub date_format: DateFormat,
    pub insert_mode: InsertMode,
    pub columns: &'static [Column],
    pub success_message: &'static str,
}

impl Profile {
    #[cfg(test)]
    pub fn column(&self, field: &str) -> Option<&'static Column> {
        self.columns.iter().find(|c| c.field == field)
    }
}

const SALES_LEDGER_COLUMNS: &[Column] = &[
    required("LaufNr", "transactionNumber"),
    required("Datum", "date"),
    required("Zeit", "time"),
    required("ArtikelNr", "articleNumber"),
    required("WarenBezeichnung", "productDescription"),
    field("Menge", "quantity"),
    field("Einzelpreis", "unitPrice"),
    field("BetragBrutto", "grossAmount"),
    field("MengenEinheit", "unit"),
    field("MwstProzent", "vatPercent"),
    required("MwstKennzeichen", "vatIdentifier"),
    required("WaehrungsKennzeichen", "currencyCode"),
    field("BetragMwst", "vatAmount"),
    required("ZahlungsmittelID", "paymentMethodId"),
    required("OrtZahlungsvorgang", "paymentLocation"),
    optional("KartenNr", "cardNumber"),
    optional("KundenNr", "customerNumber"),
    optional("PersonenKarte", "personCard"),
    optional("FahrerNr", "driverNumber"),
    optional("TankplatzNr", "fuelPumpNumber"),
    optional("StationsNr", "stationNumber"),
    optional("KostenStelle", "costCenter"),
    optional("KassenNr", "cashRegisterNumber"),
    optional("BedienerNr", "extraField"),
    optional("TerminalID", "terminalId"),
    optional("GutscheinNr", "couponNumber"),
];

const SUMMARY_SALES_COLUMNS: &[Column] = &[
    required("date", "date"),
    field("totalSales", "totalSales"),
    field("totalProfit", "totalProfit"),
    field("malfunctions", "malfunctions"),
    field("diesel", "diesel"),
    field("adBlue", "adBlue"),
    field("superE5", "superE5"),
    field("superE10", "superE10"),
    field("cleaning", "cleaning"),
];

const TANK_READING_COLUMNS: &[Column] = &[
    required("TankID", "tankId"),
    required("TankName", "tankName"),
    required("KraftstoffTyp", "fuelType"),
    field("MaxKapazitaet", "maxCapacity"),
    field("AktuellerBestand", "currentLevel"),
    required("Datum", "date"),
    required("Zeit", "time"),
    field("Verkaufsmenge", "salesAmount"),
    field("Nachfuellung", "refillAmount"),
];

static SALES_LEDGER: Profile = Profile {
    kind: UploadKind::SalesLedger,
    delimiter: b',',
    date_format: DateFormat::European,
    insert_mode: InsertMode::Strict,
    columns: SALES_LEDGER_COLUMNS,
    success_message: "CSV uploaded successfully",
};

static SUMMARY_SALES: Profile = Profile {
    kind: UploadKind::SummarySales,
    delimiter: b',',
    date_format: DateFormat::Iso,
    insert_mode: InsertMode::SkipDuplicates,
    columns: SUMMARY_SALES_COLUMNS,
    success_message: "CSV uploaded successfully",
};

static TANK_READING: Profile = Profile {
    kind: UploadKind::TankReading,
    delimiter: b';',
    date_format: DateFormat::European,
    insert_mode: InsertMode::Strict,
    columns: TANK_READING_COLUMNS,
    success_message: "Tank data uploaded successfully",
};

pub fn profile(kind: UploadKind) -> &'static Profile {
    match kind {
        UploadKind::SalesLedger => &SALES_LEDGER,
        UploadKind::SummarySales => &SUMMARY_SALES,
        UploadKind::TankReading => &TANK_READING,
    }
}
