use jiff::civil::Date;
use jiff::tz::TimeZone;
use jiff::Timestamp;

use super::locale::{DateOrder, LocaleData};
use super::resolve_locale;
use crate::error::I18nError;

/// Numeric short dates ("1.3.2024", "3/1/2024") in a fixed time zone.
#[derive(Debug, Clone)]
pub struct DateFormat {
    locale: &'static LocaleData,
    time_zone: TimeZone,
}

impl DateFormat {
    /// Formatter for an IANA time zone name such as "Europe/Berlin".
    pub fn new(locale: &str, time_zone: &str) -> Result<Self, I18nError> {
        let tz = TimeZone::get(time_zone).map_err(|source| I18nError::UnknownTimeZone {
            name: time_zone.to_string(),
            source,
        })?;
        Ok(DateFormat {
            locale: resolve_locale(locale),
            time_zone: tz,
        })
    }

    pub fn utc(locale: &str) -> Self {
        DateFormat {
            locale: resolve_locale(locale),
            time_zone: TimeZone::UTC,
        }
    }

    pub fn locale(&self) -> &'static str {
        self.locale.tag
    }

    pub fn time_zone(&self) -> &TimeZone {
        &self.time_zone
    }

    pub fn is_utc(&self) -> bool {
        self.time_zone.iana_name() == Some("UTC")
    }

    /// Calendar date of `timestamp` in this formatter's time zone.
    pub fn local_date(&self, timestamp: Timestamp) -> Date {
        timestamp.to_zoned(self.time_zone.clone()).date()
    }

    pub fn format_timestamp(&self, timestamp: Timestamp) -> String {
        self.format_date(self.local_date(timestamp))
    }

    pub fn format_date(&self, date: Date) -> String {
        let sep = self.locale.date_separator;
        let (day, month) = if self.locale.date_padded {
            (format!("{:02}", date.day()), format!("{:02}", date.month()))
        } else {
            (date.day().to_string(), date.month().to_string())
        };
        match self.locale.date_order {
            DateOrder::DayMonthYear => format!("{day}{sep}{month}{sep}{}", date.year()),
            DateOrder::MonthDayYear => format!("{month}{sep}{day}{sep}{}", date.year()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    #[test]
    fn short_dates_per_locale() {
        let d = date(2024, 3, 1);
        assert_eq!(DateFormat::utc("de-DE").format_date(d), "1.3.2024");
        assert_eq!(DateFormat::utc("en-US").format_date(d), "3/1/2024");
        assert_eq!(DateFormat::utc("en-GB").format_date(d), "01/03/2024");
        assert_eq!(DateFormat::utc("fr-FR").format_date(d), "01/03/2024");
        assert_eq!(DateFormat::utc("nl-NL").format_date(d), "1-3-2024");
    }

    #[test]
    fn timestamp_uses_zone_date() {
        let ts: Timestamp = "2024-02-29T23:30:00Z".parse().unwrap();
        assert_eq!(DateFormat::utc("de-DE").format_timestamp(ts), "29.2.2024");
        let berlin = DateFormat::new("de-DE", "Europe/Berlin").unwrap();
        assert_eq!(berlin.format_timestamp(ts), "1.3.2024");
        assert!(!berlin.is_utc());
    }

    #[test]
    fn unknown_zone_is_an_error() {
        let err = DateFormat::new("de-DE", "Europa/Berlin").unwrap_err();
        assert!(err.to_string().contains("Europa/Berlin"));
    }
}
