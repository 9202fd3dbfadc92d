//! The process-wide default is snapshotted when a request is built.
//!
//! Kept in its own test binary: it mutates global state.

use sqlinsert::{Insert, InsertConfig, Record, TokenKind, config};

#[derive(Record)]
struct Reading {
    #[col = "sensor"]
    #[tag(db = "SENSOR_ID")]
    sensor: String,
    #[col = "celsius"]
    #[tag(db = "TEMP_C")]
    celsius: f64,
}

#[test]
fn defaults_are_read_at_construction() {
    let reading = Reading {
        sensor: "s-1".to_string(),
        celsius: 21.5,
    };

    assert_eq!(config::default_config(), InsertConfig::default());
    let before = Insert::one("readings", &reading);
    assert_eq!(before.statement().0, "INSERT INTO readings (sensor, celsius) VALUES (?, ?)");

    config::set_token_kind(TokenKind::OrdinalNumber);
    config::set_tag_key("db");

    // Existing requests keep their snapshot.
    assert_eq!(before.statement().0, "INSERT INTO readings (sensor, celsius) VALUES (?, ?)");

    let after = Insert::one("readings", &reading);
    assert_eq!(after.config().token_kind, TokenKind::OrdinalNumber);
    assert_eq!(after.statement().0, "INSERT INTO readings (SENSOR_ID, TEMP_C) VALUES ($1, $2)");

    // An explicit kind always wins over the configured one.
    assert_eq!(after.sql(TokenKind::Colon), "INSERT INTO readings (SENSOR_ID, TEMP_C) VALUES (:SENSOR_ID, :TEMP_C)");

    config::set_default(InsertConfig::new().compact());
    let compact = Insert::one("readings", &reading);
    assert_eq!(compact.statement().0, "INSERT INTO readings (sensor,celsius) VALUES (?,?)");

    config::set_default(InsertConfig::default());
}
