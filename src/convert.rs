//! Pure conversion functions: CLI and TOML strings -> crate API types.

use anyhow::{Context, Result, bail};
use chrono::{NaiveDate, NaiveDateTime};

use bup_date::{BupDate, PackedDate, compress};
use bup_header::Language;

/// Parses a language name (`English`, `Deutsch`, `german`, ...).
pub fn parse_language(s: &str) -> Result<Language> {
    s.parse::<Language>().with_context(|| {
        let names: Vec<_> = Language::ALL.iter().map(|l| l.name()).collect();
        format!("save language must be one of: {}", names.join(", "))
    })
}

/// Parses `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM` or `YYYY-MM-DD HH:MM`.
pub fn parse_datetime(s: &str) -> Result<NaiveDateTime> {
    for format in ["%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(dt);
        }
    }
    match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        Ok(date) => Ok(date.and_time(chrono::NaiveTime::MIN)),
        Err(_) => bail!("{s:?} is not a proper date: expected YYYY-MM-DD or YYYY-MM-DDTHH:MM"),
    }
}

/// Parses a packed date written in decimal or as `0x`-prefixed hex.
pub fn parse_packed(s: &str) -> Result<PackedDate> {
    let raw = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse::<u32>(),
    }
    .with_context(|| format!("{s:?} is not a 32-bit packed date"))?;
    Ok(PackedDate::new(raw))
}

/// Parses a date string and compresses it into a packed date.
pub fn packed_from_str(s: &str) -> Result<PackedDate> {
    let record = BupDate::from_naive(parse_datetime(s)?)?;
    Ok(compress(&record))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_names() {
        assert_eq!(parse_language("Espanol").unwrap(), Language::Spanish);
        let err = parse_language("Esperanto").unwrap_err();
        assert!(format!("{err:#}").contains("Japanese, English, Francais"));
    }

    #[test]
    fn datetime_formats() {
        let midnight = parse_datetime("1994-11-24").unwrap();
        assert_eq!(midnight.to_string(), "1994-11-24 00:00:00");
        let with_t = parse_datetime("2001-02-03T04:05").unwrap();
        let with_space = parse_datetime("2001-02-03 04:05").unwrap();
        assert_eq!(with_t, with_space);
        assert!(parse_datetime("24/11/1994").is_err());
        assert!(parse_datetime("1994-02-30").is_err());
    }

    #[test]
    fn packed_hex_and_decimal() {
        assert_eq!(parse_packed("0x008246A0").unwrap().get(), 0x0082_46A0);
        assert_eq!(parse_packed("0X80aea").unwrap().get(), 0x0008_0AEA);
        assert_eq!(parse_packed("527082").unwrap().get(), 527_082);
        assert!(parse_packed("0x1_0000_0000").is_err());
        assert!(parse_packed("-1").is_err());
    }

    #[test]
    fn packed_from_date_string() {
        assert_eq!(packed_from_str("1981-01-01T00:42").unwrap().get(), 0x0008_0AEA);
        assert_eq!(packed_from_str("1980-01-01").unwrap().get(), 0);
        assert!(packed_from_str("1979-12-31").is_err());
    }
}
