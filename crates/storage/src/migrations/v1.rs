//! Migration v1: Initial schema

pub(super) const SQL: &str = "
CREATE TABLE IF NOT EXISTS measurements (
    device_id TEXT NOT NULL,
    time INTEGER NOT NULL,
    temperature REAL NOT NULL,
    humidity REAL NOT NULL,
    PRIMARY KEY (device_id, time)
);

CREATE TABLE IF NOT EXISTS locations (
    device_id TEXT PRIMARY KEY,
    location TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_locations_location ON locations(location);
";
