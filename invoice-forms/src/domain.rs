//! Invoice and receiver records as they arrive from the billing side.
//!
//! Every field is optional or defaulted so partially filled records still
//! map; JSON uses camelCase keys.

use jiff::civil::Date;
use jiff::tz::TimeZone;
use jiff::{Span, Timestamp};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, FormError};
use crate::i18n::round_half_expand;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InvoiceData {
    pub header: InvoiceHeader,
    pub items: Vec<InvoiceItem>,
    pub vat_percentage: f64,
    pub cash_discount_percentage: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InvoiceHeader {
    pub id: Option<u64>,
    /// RFC 3339 timestamp, or a plain date taken as UTC midnight.
    #[serde(with = "flexible_timestamp")]
    pub issued_at: Option<Timestamp>,
    pub billing_period: Option<String>,
    pub payment_terms: Option<String>,
    pub invoice_text: Option<String>,
    pub cash_discount_days: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InvoiceItem {
    pub id: Option<u64>,
    pub description: Option<String>,
    pub quantity: Option<f64>,
    pub price_per_unit: Option<f64>,
}

impl InvoiceItem {
    pub fn net_value(&self) -> f64 {
        self.quantity.unwrap_or(0.0) * self.price_per_unit.unwrap_or(0.0)
    }
}

impl InvoiceData {
    pub fn from_json_str(json: &str) -> Result<Self, FormError> {
        from_json(json)
    }

    pub fn net_value(&self) -> f64 {
        self.items.iter().map(InvoiceItem::net_value).sum()
    }

    pub fn vat_amount(&self) -> f64 {
        round_cents(self.net_value() * self.vat_percentage / 100.0)
    }

    pub fn gross_value(&self) -> f64 {
        self.net_value() + self.vat_amount()
    }

    /// Cash discount is granted on the gross amount.
    pub fn cash_discount_base_amount(&self) -> f64 {
        self.gross_value()
    }

    pub fn cash_discount_amount(&self) -> f64 {
        round_cents(self.cash_discount_base_amount() * self.cash_discount_percentage / 100.0)
    }

    pub fn payment_amount(&self) -> f64 {
        self.gross_value() - self.cash_discount_amount()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReceiverData {
    pub header: ReceiverHeader,
    pub address: ReceiverAddress,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReceiverHeader {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub name_add: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReceiverAddress {
    pub street: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
}

impl ReceiverData {
    pub fn from_json_str(json: &str) -> Result<Self, FormError> {
        from_json(json)
    }
}

fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, FormError> {
    Ok(serde_json::from_str(json)?)
}

fn round_cents(value: f64) -> f64 {
    round_half_expand(value, 2)
}

pub struct DateUtility;

impl DateUtility {
    /// `date` shifted by `days` calendar days (negative moves back).
    pub fn add_days_to_date(date: Date, days: i64) -> Result<Date, DomainError> {
        let error = move |source: jiff::Error| DomainError::DateArithmetic { date, days, source };
        let span = Span::new().try_days(days).map_err(error)?;
        date.checked_add(span).map_err(error)
    }
}

/// Parse an RFC 3339 timestamp, or a `YYYY-MM-DD` date as UTC midnight.
pub fn parse_timestamp(value: &str) -> Result<Timestamp, jiff::Error> {
    if let Ok(ts) = value.parse::<Timestamp>() {
        return Ok(ts);
    }
    let date: Date = value.parse()?;
    Ok(date.to_zoned(TimeZone::UTC)?.timestamp())
}

mod flexible_timestamp {
    use jiff::Timestamp;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<Timestamp>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(ts) => serializer.serialize_some(&ts.to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Timestamp>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.map(|s| super::parse_timestamp(&s).map_err(de::Error::custom))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    fn invoice(vat: f64, discount: f64, items: &[(f64, f64)]) -> InvoiceData {
        InvoiceData {
            vat_percentage: vat,
            cash_discount_percentage: discount,
            items: items
                .iter()
                .map(|&(q, p)| InvoiceItem {
                    quantity: Some(q),
                    price_per_unit: Some(p),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "{} != {}", actual, expected);
    }

    #[test]
    fn totals_follow_items() {
        let inv = invoice(19.0, 2.0, &[(2.0, 50.0), (1.5, 10.0)]);
        assert_close(inv.net_value(), 115.0);
        assert_close(inv.vat_amount(), 21.85);
        assert_close(inv.gross_value(), 136.85);
        assert_close(inv.cash_discount_base_amount(), 136.85);
        assert_close(inv.cash_discount_amount(), 2.74);
        assert_close(inv.payment_amount(), 134.11);
    }

    #[test]
    fn half_cent_vat_rounds_up() {
        let inv = invoice(19.0, 0.0, &[(1.0, 1.5)]);
        assert_close(inv.vat_amount(), 0.29);
        assert_close(inv.gross_value(), 1.79);
    }

    #[test]
    fn missing_quantity_or_price_is_zero() {
        let item = InvoiceItem {
            quantity: Some(3.0),
            ..Default::default()
        };
        assert_eq!(item.net_value(), 0.0);
        assert_eq!(InvoiceData::default().payment_amount(), 0.0);
    }

    #[test]
    fn add_days_crosses_month() {
        assert_eq!(DateUtility::add_days_to_date(date(2024, 3, 1), 10).unwrap(), date(2024, 3, 11));
        assert_eq!(DateUtility::add_days_to_date(date(2024, 2, 25), 5).unwrap(), date(2024, 3, 1));
        assert_eq!(DateUtility::add_days_to_date(date(2024, 3, 1), -1).unwrap(), date(2024, 2, 29));
    }

    #[test]
    fn add_days_overflow_is_an_error() {
        assert!(DateUtility::add_days_to_date(date(9999, 12, 31), 1).is_err());
        assert!(DateUtility::add_days_to_date(date(2024, 1, 1), i64::MAX).is_err());
    }

    #[test]
    fn json_uses_camel_case() {
        let inv = InvoiceData::from_json_str(
            r#"{
                "header": {"id": 1001, "issuedAt": "2024-03-01", "cashDiscountDays": 10},
                "items": [{"id": 1, "description": "Beratung", "quantity": 2, "pricePerUnit": 50}],
                "vatPercentage": 19,
                "cashDiscountPercentage": 2
            }"#,
        )
        .unwrap();
        assert_eq!(inv.header.id, Some(1001));
        assert_eq!(inv.header.cash_discount_days, Some(10));
        assert_eq!(inv.header.issued_at, Some("2024-03-01T00:00:00Z".parse().unwrap()));
        assert_eq!(inv.items[0].price_per_unit, Some(50.0));

        let receiver = ReceiverData::from_json_str(
            r#"{"header": {"id": 7, "nameAdd": "Buchhaltung"}, "address": {"postalCode": "10115"}}"#,
        )
        .unwrap();
        assert_eq!(receiver.header.name_add.as_deref(), Some("Buchhaltung"));
        assert_eq!(receiver.address.postal_code.as_deref(), Some("10115"));
        assert_eq!(receiver.address.city, None);
    }

    #[test]
    fn issued_at_accepts_full_timestamp() {
        let ts = parse_timestamp("2024-03-01T09:15:00+01:00").unwrap();
        assert_eq!(ts, "2024-03-01T08:15:00Z".parse().unwrap());
        assert!(parse_timestamp("March 1st").is_err());
    }

    #[test]
    fn bad_json_is_reported() {
        assert!(matches!(
            InvoiceData::from_json_str("{\"vatPercentage\": \"x\"}"),
            Err(FormError::Json(_))
        ));
    }
}
