// CIM DATETIME conversion: `yyyymmddHHMMSS.mmmmmmsUUU`, where `s` is the
// sign and `UUU` the offset from UTC in minutes. Any field may be filled with
// `*` to mark it as unused.

use crate::error::{PnpError, Result};
use chrono::{DateTime, NaiveDate, TimeDelta, TimeZone, Utc};

const CIM_DATETIME_LEN: usize = 25;

/// One numeric field: `Some(value)` for digits, `None` for an all-`*` field
fn field(text: &str) -> std::result::Result<Option<u32>, ()> {
    if text.bytes().all(|b| b == b'*') {
        return Ok(None);
    }
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(());
    }
    text.parse().map(Some).map_err(|_| ())
}

/// Parse a CIM datetime into UTC.
///
/// Wildcard fields take their lowest value: year 1, month and day 1,
/// time fields and microseconds 0. A wildcard offset means UTC.
pub fn parse_cim_datetime(value: &str) -> Result<DateTime<Utc>> {
    let value = value.trim();
    let invalid = || PnpError::date_time(value);

    if value.len() != CIM_DATETIME_LEN || !value.is_ascii() || &value[14..15] != "." {
        return Err(invalid());
    }

    let parse = |range: std::ops::Range<usize>, default: u32| {
        field(&value[range]).map(|v| v.unwrap_or(default)).map_err(|_| invalid())
    };

    let year = parse(0..4, 1)?;
    let month = parse(4..6, 1)?;
    let day = parse(6..8, 1)?;
    let hour = parse(8..10, 0)?;
    let minute = parse(10..12, 0)?;
    let second = parse(12..14, 0)?;
    let micros = parse(15..21, 0)?;
    let offset = parse(22..25, 0)? as i64;

    let offset = match &value[21..22] {
        "+" => offset,
        "-" => -offset,
        _ => return Err(invalid()),
    };

    let naive = NaiveDate::from_ymd_opt(year as i32, month, day)
        .and_then(|date| date.and_hms_micro_opt(hour, minute, second, micros))
        .ok_or_else(invalid)?;

    let utc = naive - TimeDelta::minutes(offset);
    Ok(Utc.from_utc_datetime(&utc))
}
