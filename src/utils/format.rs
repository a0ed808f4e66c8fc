//! Display strings for prices and timestamps.

use chrono::{DateTime, NaiveDateTime};

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

fn display_override(display: Option<&str>) -> Option<String> {
    display
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
}

/// Card/table price: the custom label, else thousands with a `K` suffix.
pub fn price_short(price: i64, display: Option<&str>) -> String {
    display_override(display)
        .unwrap_or_else(|| format!("{}K", (price as f64 / 1000.0).round() as i64))
}

/// `Rp 55.000`.
pub fn rupiah(price: i64) -> String {
    let digits = price.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    let sign = if price < 0 { "-" } else { "" };
    format!("Rp {}{}", sign, grouped)
}

/// Detail page price: the custom label, else full rupiah.
pub fn price_full(price: i64, display: Option<&str>) -> String {
    display_override(display).unwrap_or_else(|| rupiah(price))
}

/// `17 Okt 2026, 18.25` for an API timestamp; `empty` when there is none.
pub fn timestamp(raw: Option<&str>, empty: &str) -> String {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return empty.to_string();
    };
    let parsed = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.naive_local())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S"))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f"));
    match parsed {
        Ok(dt) => {
            use chrono::{Datelike, Timelike};
            format!(
                "{} {} {}, {:02}.{:02}",
                dt.day(),
                MONTHS[dt.month0() as usize],
                dt.year(),
                dt.hour(),
                dt.minute()
            )
        }
        Err(_) => raw.to_string(),
    }
}

/// Last path segment, for "Current: clip.mp3".
pub fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_short() {
        assert_eq!(price_short(55_000, None), "55K");
        assert_eq!(price_short(55_500, None), "56K");
        assert_eq!(price_short(55_000, Some("55rb")), "55rb");
        assert_eq!(price_short(120_000, Some("  ")), "120K");
    }

    #[test]
    fn test_rupiah_groups_thousands() {
        assert_eq!(rupiah(0), "Rp 0");
        assert_eq!(rupiah(500), "Rp 500");
        assert_eq!(rupiah(55_000), "Rp 55.000");
        assert_eq!(rupiah(1_250_000), "Rp 1.250.000");
        assert_eq!(price_full(85_000, None), "Rp 85.000");
        assert_eq!(price_full(85_000, Some("85K / toples")), "85K / toples");
    }

    #[test]
    fn test_timestamp_formats() {
        assert_eq!(timestamp(Some("2026-10-17T18:25:00Z"), "-"), "17 Okt 2026, 18.25");
        assert_eq!(timestamp(Some("2026-01-05 08:03:59"), "-"), "5 Jan 2026, 08.03");
        assert_eq!(timestamp(Some("2026-08-01T07:30:00.123"), "-"), "1 Agu 2026, 07.30");
        assert_eq!(timestamp(None, "Never"), "Never");
        assert_eq!(timestamp(Some("kemarin"), "-"), "kemarin");
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name("uploads/voice/nastar.mp3"), "nastar.mp3");
        assert_eq!(file_name("nastar.mp3"), "nastar.mp3");
    }
}
