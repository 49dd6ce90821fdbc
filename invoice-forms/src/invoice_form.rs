use std::path::Path;

use jiff::Timestamp;
use pdf_core::{PdfDocument, TextAlign, TextOptions};
use tracing::debug;

use crate::base_form::{BaseForm, DocumentInfo};
use crate::error::FormError;
use crate::form_options::FormOptions;
use crate::invoice_form_data::InvoiceFormData;
use crate::layout::{Column, InvoiceLayout};

/// One invoice page: the base form plus the invoice fields drawn at the
/// positions of an [`InvoiceLayout`].
pub struct InvoiceForm {
    base: BaseForm,
    data: InvoiceFormData,
    layout: InvoiceLayout,
}

impl InvoiceForm {
    pub fn new(options: &FormOptions, data: InvoiceFormData) -> Result<Self, FormError> {
        Self::with_layout(options, data, InvoiceLayout::STANDARD)
    }

    pub fn with_layout(
        options: &FormOptions,
        data: InvoiceFormData,
        layout: InvoiceLayout,
    ) -> Result<Self, FormError> {
        let title = format!("{} {}", layout.title, data.invoice_id);
        let info = DocumentInfo {
            title: title.clone(),
            author: layout.author.to_string(),
            producer: layout.author.to_string(),
            creator: layout.author.to_string(),
            creation_date: Some(Timestamp::now()),
            keywords: title,
        };
        let base = BaseForm::with_template(options, &info, layout.page)?;
        Ok(InvoiceForm { base, data, layout })
    }

    /// The invoice id the form was built for.
    pub fn id(&self) -> &str {
        &self.data.invoice_id
    }

    pub fn data(&self) -> &InvoiceFormData {
        &self.data
    }

    /// Draw every invoice field onto the page.
    pub fn print(&mut self) -> Result<(), FormError> {
        self.print_address()?;
        self.print_subject()?;
        self.print_reference()?;
        self.print_billing_period()?;
        self.print_page_number(1, 1)?;

        let y = self.print_items()?;
        let y = self.print_totals(y)?;
        let y = self.print_payment_terms(y)?;
        let y = self.print_invoice_text(y)?;
        debug!(invoice = %self.data.invoice_id, bottom = y, "invoice printed");
        Ok(())
    }

    fn form_font(&mut self) -> Result<&mut PdfDocument<Vec<u8>>, FormError> {
        let page = self.layout.page;
        self.base.set_font_color(page.font, page.label_size, page.form_color)
    }

    fn text_font(&mut self) -> Result<&mut PdfDocument<Vec<u8>>, FormError> {
        let page = self.layout.page;
        self.base.set_font_color(page.font, page.text_size, page.text_color)
    }

    fn print_address(&mut self) -> Result<(), FormError> {
        let block = self.layout.address;
        let lines: Vec<String> = (0..block.lines)
            .map(|i| match self.data.address.get(i) {
                Some(line) if !line.is_empty() => line.clone(),
                _ => " ".to_string(),
            })
            .collect();
        let doc = self.text_font()?;
        for (i, line) in lines.iter().enumerate() {
            let y = block.y + i as f64 * block.line_step;
            doc.text(line, block.x, y, &TextOptions::new())?;
        }
        Ok(())
    }

    fn print_subject(&mut self) -> Result<(), FormError> {
        let subject = self.layout.subject;
        let page = self.layout.page;
        let title = self.layout.title;
        self.base
            .set_font_color(page.font, subject.size, page.form_color)?
            .text(title, subject.x, subject.y, &TextOptions::new())?;
        Ok(())
    }

    fn print_reference(&mut self) -> Result<(), FormError> {
        let r = self.layout.reference;
        self.form_font()?
            .text(r.heading, r.x, r.y, &TextOptions::new().underline())?;

        let y = r.y + r.heading_gap;
        let right = TextOptions::new().align(TextAlign::Right);
        let customer_id = self.data.customer_id.clone();
        let invoice_id = self.data.invoice_id.clone();
        let invoice_date = self.data.invoice_date.clone();
        self.text_font()?
            .text(r.customer_label, r.x, y, &TextOptions::new())?
            .text(r.invoice_label, r.x, y + r.line_step, &TextOptions::new())?
            .text(r.date_label, r.x, y + 2.0 * r.line_step, &TextOptions::new())?
            .text(&customer_id, r.x + r.value_offset, y, &right)?
            .text(&invoice_id, r.x + r.value_offset, y + r.line_step, &right)?
            .text(&invoice_date, r.x + r.date_offset, y + 2.0 * r.line_step, &right)?;
        Ok(())
    }

    fn print_billing_period(&mut self) -> Result<(), FormError> {
        let line = self.layout.billing_period;
        let text = format!("{} {}", line.label, self.data.billing_period);
        self.text_font()?
            .text(&text, line.x, line.y, &TextOptions::new())?;
        Ok(())
    }

    fn print_page_number(&mut self, page: usize, pages: usize) -> Result<(), FormError> {
        let line = self.layout.page_number;
        let text = format!("{} {}/{}", line.label, page, pages);
        self.form_font()?
            .text(&text, line.x, line.y, &TextOptions::new())?;
        Ok(())
    }

    fn print_item_column_headers(&mut self) -> Result<(), FormError> {
        let header = self.layout.item_header;
        let mut y = header.y_cm * self.layout.page.points_per_cm;
        self.base.print_line(y)?;

        y += header.label_gap;
        let doc = self.form_font()?;
        for column in header.columns {
            doc.text(column.label, column.x, y, &TextOptions::new().no_line_break())?;
        }

        y += header.row_height;
        self.base.print_line(y)
    }

    /// Item rows; returns the cursor below the last row.
    fn print_items(&mut self) -> Result<f64, FormError> {
        self.print_item_column_headers()?;

        let rows = self.layout.items;
        let items = self.data.items.clone();
        let mut y = rows.y;
        for item in &items {
            let cell = |column: Column| {
                (
                    rows.x + column.offset,
                    TextOptions::new().align(column.align).width(column.width),
                )
            };
            let doc = self.text_font()?;
            for (value, column) in [
                (&item.item_id, rows.id),
                (&item.quantity, rows.quantity),
                (&item.description, rows.description),
                (&item.unit_price, rows.unit_price),
                (&item.net_value, rows.net_value),
            ] {
                let (x, options) = cell(column);
                doc.text(value, x, y, &options)?;
            }
            y += rows.advance(&item.description);
        }
        Ok(y)
    }

    /// Totals band and, for a positive discount, the cash discount band
    /// below it. Returns the cursor under the last rule.
    fn print_totals(&mut self, y: f64) -> Result<f64, FormError> {
        let band = self.layout.totals_band;
        let labels = self.layout.totals;
        let vat_label = format!("{}{}", self.data.vat_percentage, labels.vat_suffix);
        let values = [
            self.data.total_net_value.clone(),
            self.data.total_vat_amount.clone(),
            self.data.total_gross_amount.clone(),
        ];
        self.base.print_line(y)?;
        let mut y = y + band.label_gap;
        y = self.print_amount_band(y, [labels.net, &vat_label, labels.gross], &values)?;
        y += band.label_gap;

        if self.data.has_cash_discount() {
            let labels = self.layout.cash_discount;
            let discount_label = format!("{} {}%", labels.discount, self.data.cash_discount_percentage);
            let due_label = format!("{} {}", labels.due, self.data.cash_discount_due_date);
            let values = [
                self.data.cash_discount_base_amount.clone(),
                self.data.cash_discount_amount.clone(),
                self.data.payable_amount.clone(),
            ];
            y = self.print_amount_band(y, [labels.base, &discount_label, &due_label], &values)?;
        }
        Ok(y)
    }

    /// Label row at `y`, rule, value row, closing rule. Returns the cursor
    /// at the closing rule.
    fn print_amount_band(&mut self, y: f64, labels: [&str; 3], values: &[String; 3]) -> Result<f64, FormError> {
        let band = self.layout.totals_band;
        let doc = self.form_font()?;
        doc.text(labels[0], band.label_x[0], y, &TextOptions::new())?
            .text(labels[1], band.label_x[1], y, &TextOptions::new())?
            .text(labels[2], band.label_x[2], y, &TextOptions::new().no_line_break())?;

        let mut y = y + band.label_height;
        self.base.print_line(y)?;
        y += band.value_gap;

        let right = TextOptions::new().align(TextAlign::Right).width(band.value_width);
        let doc = self.text_font()?;
        for (value, x) in values.iter().zip(band.value_x) {
            doc.text(value, x, y, &right)?;
        }

        y += band.value_height;
        self.base.print_line(y)?;
        Ok(y)
    }

    fn print_payment_terms(&mut self, y: f64) -> Result<f64, FormError> {
        if self.data.payment_terms.is_empty() {
            return Ok(y);
        }
        let trailer = self.layout.payment_terms;
        let y = y + trailer.gap;
        let text = format!("{}{}", trailer.prefix, self.data.payment_terms);
        let x = self.layout.page.start_x;
        self.form_font()?.text(&text, x, y, &TextOptions::new())?;
        Ok(y)
    }

    fn print_invoice_text(&mut self, y: f64) -> Result<f64, FormError> {
        if self.data.text.is_empty() {
            return Ok(y);
        }
        let trailer = self.layout.invoice_text;
        let y = y + trailer.gap;
        let text = format!("{}{}", trailer.prefix, self.data.text);
        let x = self.layout.page.start_x;
        self.text_font()?.text(&text, x, y, &TextOptions::new())?;
        Ok(y)
    }

    pub fn into_bytes(self) -> Result<Vec<u8>, FormError> {
        self.base.into_bytes()
    }

    pub fn save_as<P, F>(self, path: P, callback: F)
    where
        P: AsRef<Path>,
        F: FnOnce(Result<(), FormError>),
    {
        self.base.save_as(path, callback)
    }

    pub async fn save_as_async<P: AsRef<Path>>(self, path: P) -> Result<(), FormError> {
        self.base.save_as_async(path).await
    }
}
