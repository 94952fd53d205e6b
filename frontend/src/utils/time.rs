use chrono::{Local, NaiveDate};

use crate::api::DATE_FORMAT;

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// `2025-10-21` becomes `Tue, 21 Oct 2025`; unparsable input is shown as-is.
pub fn format_display_date(value: &str) -> String {
    parse_date(value)
        .map(|d| d.format("%a, %d %b %Y").to_string())
        .unwrap_or_else(|| value.to_string())
}

pub fn format_range(start: NaiveDate, end: NaiveDate) -> String {
    if start == end {
        start.format("%d %b %Y").to_string()
    } else {
        format!("{} - {}", start.format("%d %b"), end.format("%d %b %Y"))
    }
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(value: &str) -> NaiveDate {
        parse_date(value).expect("date")
    }

    #[test]
    fn display_date_includes_weekday() {
        assert_eq!(format_display_date("2025-10-21"), "Tue, 21 Oct 2025");
        assert_eq!(format_display_date("soon"), "soon");
    }

    #[test]
    fn range_collapses_single_day() {
        assert_eq!(
            format_range(date("2025-01-26"), date("2025-01-26")),
            "26 Jan 2025"
        );
        assert_eq!(
            format_range(date("2025-10-20"), date("2025-10-22")),
            "20 Oct - 22 Oct 2025"
        );
    }
}
