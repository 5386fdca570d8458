/// Tables of the three record kinds. Every table carries the id of the upload
/// that produced the row plus creation/update timestamps.
pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS sales_ledger (
    id                   INTEGER PRIMARY KEY AUTOINCREMENT,
    upload_id            TEXT NOT NULL,
    created_at           TEXT NOT NULL,
    updated_at           TEXT NOT NULL,
    transaction_number   TEXT NOT NULL,
    date                 TEXT NOT NULL,
    time                 TEXT NOT NULL,
    article_number       TEXT NOT NULL,
    product_description  TEXT NOT NULL,
    quantity             REAL NOT NULL DEFAULT 0,
    unit_price           REAL NOT NULL DEFAULT 0,
    gross_amount         REAL NOT NULL DEFAULT 0,
    unit                 TEXT NOT NULL DEFAULT '',
    vat_percent          REAL NOT NULL DEFAULT 0,
    vat_identifier       TEXT NOT NULL,
    currency_code        TEXT NOT NULL,
    vat_amount           REAL NOT NULL DEFAULT 0,
    payment_method_id    TEXT NOT NULL,
    payment_location     TEXT NOT NULL,
    card_number          TEXT,
    customer_number      TEXT,
    person_card          TEXT,
    driver_number        TEXT,
    fuel_pump_number     TEXT,
    station_number       TEXT,
    cost_center          TEXT,
    cash_register_number TEXT,
    extra_field          TEXT,
    terminal_id          TEXT,
    coupon_number        TEXT,
    UNIQUE (transaction_number, date, time, article_number)
);

CREATE TABLE IF NOT EXISTS daily_sales (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    upload_id     TEXT NOT NULL,
    created_at    TEXT NOT NULL,
    updated_at    TEXT NOT NULL,
    date          TEXT NOT NULL UNIQUE,
    total_sales   REAL NOT NULL DEFAULT 0,
    total_profit  REAL NOT NULL DEFAULT 0,
    malfunctions  INTEGER NOT NULL DEFAULT 0,
    diesel        REAL NOT NULL DEFAULT 0,
    ad_blue       REAL NOT NULL DEFAULT 0,
    super_e5      REAL NOT NULL DEFAULT 0,
    super_e10     REAL NOT NULL DEFAULT 0,
    cleaning      REAL NOT NULL DEFAULT 0
);

CREATE TABLE IF NOT EXISTS tank_readings (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    upload_id      TEXT NOT NULL,
    created_at     TEXT NOT NULL,
    updated_at     TEXT NOT NULL,
    tank_id        TEXT NOT NULL,
    tank_name      TEXT NOT NULL,
    fuel_type      TEXT NOT NULL,
    max_capacity   REAL NOT NULL DEFAULT 0,
    current_level  REAL NOT NULL DEFAULT 0,
    date           TEXT NOT NULL,
    time           TEXT NOT NULL,
    sales_amount   REAL NOT NULL DEFAULT 0,
    refill_amount  REAL NOT NULL DEFAULT 0,
    UNIQUE (tank_id, date, time)
);
";
