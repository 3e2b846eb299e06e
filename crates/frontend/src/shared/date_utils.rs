//! Utilities for date and time formatting
//!
//! Formats follow pt-BR (DD/MM/YYYY) across the application

use chrono::{Datelike, NaiveDate};

pub const MESES: [&str; 12] = [
    "Janeiro", "Fevereiro", "Março", "Abril", "Maio", "Junho", "Julho", "Agosto", "Setembro",
    "Outubro", "Novembro", "Dezembro",
];

/// Format ISO datetime string to DD/MM/YYYY HH:MM
/// Example: "2024-03-15T14:02:26.123Z" -> "15/03/2024 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once(|c: char| c == 'T' || c == ' ') {
        let date = format_date(date_part);
        if date != date_part {
            let hhmm: String = time_part.chars().take(5).collect();
            return format!("{} {}", date, hhmm);
        }
    }
    datetime_str.to_string()
}

/// Format ISO date string to DD/MM/YYYY
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15/03/2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}/{}/{}", day, month, year);
        }
    }
    date_str.to_string()
}

pub fn format_naive(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Nome do mês (1..=12)
pub fn month_name(month: u32) -> &'static str {
    MESES
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("")
}

/// Rótulo de mês usado nos filtros: "03 - Março"
pub fn month_label(date: NaiveDate) -> String {
    format!("{:02} - {}", date.month(), month_name(date.month()))
}

/// Valor de `<input type="date">` → data
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

pub fn to_input_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "15/03/2024 14:02");
        assert_eq!(format_datetime("2024-12-31 23:59:59"), "31/12/2024 23:59");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15/03/2024");
        assert_eq!(format_naive(NaiveDate::from_ymd_opt(2025, 1, 2).unwrap()), "02/01/2025");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(parse_input_date(""), None);
    }

    #[test]
    fn test_month_labels() {
        let d = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        assert_eq!(month_label(d), "03 - Março");
        assert_eq!(month_name(0), "");
        assert_eq!(month_name(13), "");
    }

    #[test]
    fn test_input_date_round_trip() {
        let d = parse_input_date("2025-07-01");
        assert_eq!(to_input_date(d), "2025-07-01");
    }
}
