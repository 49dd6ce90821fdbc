use jiff::{SignedDuration, Timestamp};
use tracing::{debug, warn};

use crate::config::{MapperSettings, DEFAULT_CURRENCY, DEFAULT_LOCALE, DEFAULT_TIME_ZONE};
use crate::domain::{DateUtility, InvoiceData, ReceiverData};
use crate::i18n::{CurrencyFormat, DateFormat, NumberFormat};
use crate::invoice_form_data::{InvoiceFormData, InvoiceItemFormData};

/// Minutes added to UTC when the configured time zone is unavailable.
/// Approximates Central European Summer Time regardless of the date.
pub const UTC_FALLBACK_OFFSET_MINUTES: i64 = 120;

/// Turns an invoice and its receiver into print-ready [`InvoiceFormData`].
///
/// Formatters are built once per mapper from the locale and currency;
/// [`map`](Self::map) itself is pure.
pub struct InvoiceFormDataMapper<'a> {
    invoice: &'a InvoiceData,
    receiver: &'a ReceiverData,
    number_format: NumberFormat,
    currency_format: CurrencyFormat,
    date_format: DateFormat,
    offset: SignedDuration,
}

impl<'a> InvoiceFormDataMapper<'a> {
    /// Mapper for `locale` and `currency` with dates in Europe/Berlin.
    pub fn new(invoice: &'a InvoiceData, receiver: &'a ReceiverData, locale: &str, currency: &str) -> Self {
        Self::with_time_zone(invoice, receiver, locale, currency, DEFAULT_TIME_ZONE)
    }

    /// Mapper with the German defaults: de-DE, EUR, Europe/Berlin.
    pub fn with_defaults(invoice: &'a InvoiceData, receiver: &'a ReceiverData) -> Self {
        Self::new(invoice, receiver, DEFAULT_LOCALE, DEFAULT_CURRENCY)
    }

    pub fn with_settings(invoice: &'a InvoiceData, receiver: &'a ReceiverData, settings: &MapperSettings) -> Self {
        Self::with_time_zone(
            invoice,
            receiver,
            &settings.locale,
            &settings.currency,
            &settings.time_zone,
        )
    }

    /// Dates are shown in `time_zone`. An unknown zone falls back to UTC
    /// shifted by [`UTC_FALLBACK_OFFSET_MINUTES`].
    pub fn with_time_zone(
        invoice: &'a InvoiceData,
        receiver: &'a ReceiverData,
        locale: &str,
        currency: &str,
        time_zone: &str,
    ) -> Self {
        let (date_format, offset) = match DateFormat::new(locale, time_zone) {
            Ok(format) => (format, SignedDuration::ZERO),
            Err(err) => {
                warn!(error = %err, "time zone not supported, using UTC instead");
                (
                    DateFormat::utc(locale),
                    SignedDuration::from_mins(UTC_FALLBACK_OFFSET_MINUTES),
                )
            }
        };
        InvoiceFormDataMapper {
            invoice,
            receiver,
            number_format: NumberFormat::new(locale),
            currency_format: CurrencyFormat::new(locale, currency),
            date_format,
            offset,
        }
    }

    pub fn map(&self) -> InvoiceFormData {
        let mut data = InvoiceFormData::default();
        self.map_address(&mut data);
        self.map_reference(&mut data);
        data.payment_terms = text_or_empty(&self.invoice.header.payment_terms);
        data.text = text_or_empty(&self.invoice.header.invoice_text);
        self.map_items(&mut data);
        self.map_totals(&mut data);
        data
    }

    fn map_address(&self, data: &mut InvoiceFormData) {
        let header = &self.receiver.header;
        let address = &self.receiver.address;
        let postal_line = format!(
            "{} {}",
            address.postal_code.as_deref().unwrap_or(""),
            address.city.as_deref().unwrap_or("")
        );
        data.address = vec![
            text_or_empty(&header.name),
            text_or_empty(&header.name_add),
            text_or_empty(&address.street),
            postal_line,
        ];
    }

    fn map_reference(&self, data: &mut InvoiceFormData) {
        data.invoice_id = id_or_empty(self.invoice.header.id);
        data.customer_id = id_or_empty(self.receiver.header.id);
        data.billing_period = text_or_empty(&self.invoice.header.billing_period);
        if let Some(issued_at) = self.print_time() {
            data.invoice_date = self.date_format.format_timestamp(issued_at);
            debug!(
                time_zone = self.date_format.time_zone().iana_name().unwrap_or("fixed"),
                offset_minutes = self.offset.as_mins(),
                invoice_date = %data.invoice_date,
                "formatted invoice date"
            );
        }
    }

    fn map_items(&self, data: &mut InvoiceFormData) {
        data.items = self
            .invoice
            .items
            .iter()
            .map(|item| InvoiceItemFormData {
                item_id: id_or_empty(item.id),
                description: text_or_empty(&item.description),
                quantity: self.number_format.format(item.quantity.unwrap_or(0.0)),
                unit_price: self.currency_format.format(item.price_per_unit.unwrap_or(0.0)),
                net_value: self.currency_format.format(item.net_value()),
            })
            .collect();
    }

    fn map_totals(&self, data: &mut InvoiceFormData) {
        let invoice = self.invoice;
        data.vat_percentage = invoice.vat_percentage.to_string();
        data.cash_discount_percentage = invoice.cash_discount_percentage.to_string();

        // The due date counts from the unshifted issue time, even when the
        // invoice date carries the fallback offset.
        if let Some(issued_at) = invoice.header.issued_at {
            let days = invoice.header.cash_discount_days.unwrap_or(0);
            let issue_date = self.date_format.local_date(issued_at);
            data.cash_discount_due_date = match DateUtility::add_days_to_date(issue_date, days) {
                Ok(due) => self.date_format.format_date(due),
                Err(err) => {
                    warn!(error = %err, "cannot compute cash discount due date, using invoice date");
                    data.invoice_date.clone()
                }
            };
            debug!(due_date = %data.cash_discount_due_date, "formatted cash discount due date");
        }

        let money = |value: f64| self.currency_format.format(value);
        data.total_net_value = money(invoice.net_value());
        data.total_vat_amount = money(invoice.vat_amount());
        data.total_gross_amount = money(invoice.gross_value());
        data.cash_discount_base_amount = money(invoice.cash_discount_base_amount());
        data.cash_discount_amount = money(invoice.cash_discount_amount());
        data.payable_amount = money(invoice.payment_amount());
    }

    /// Issue timestamp shifted by the fallback offset, if any.
    fn print_time(&self) -> Option<Timestamp> {
        let issued_at = self.invoice.header.issued_at?;
        Some(issued_at.checked_add(self.offset).unwrap_or(issued_at))
    }
}

fn text_or_empty(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn id_or_empty(id: Option<u64>) -> String {
    id.map(|id| id.to_string()).unwrap_or_default()
}
