//! Page geometry and field positions, in points from the top-left corner.
//!
//! A different page design is a different table; the drawing code in
//! `base_form` and `invoice_form` only reads these values.

use pdf_core::{Color, TextAlign};

/// An image scaled to `width`, height from its aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageSlot {
    pub x: f64,
    pub y: f64,
    pub width: f64,
}

/// Shared geometry of every form page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageTemplate {
    pub width: f64,
    pub height: f64,
    pub points_per_cm: f64,
    /// Left edge of text and rules.
    pub start_x: f64,
    /// Right edge of rules.
    pub end_x: f64,
    pub header: ImageSlot,
    pub address_window: ImageSlot,
    pub footer: ImageSlot,
    pub font: &'static str,
    pub text_size: f64,
    pub label_size: f64,
    pub text_color: Color,
    pub form_color: Color,
}

/// A4 portrait with the letterhead centered at the top.
pub const STANDARD_PAGE: PageTemplate = PageTemplate {
    width: 595.28,
    height: 841.89,
    points_per_cm: 28.3,
    start_x: 65.1,
    end_x: 530.2,
    header: ImageSlot {
        x: 189.6,
        y: 0.0,
        width: 226.4,
    },
    address_window: ImageSlot {
        x: 65.1,
        y: 141.5,
        width: 201.0,
    },
    footer: ImageSlot {
        x: 65.1,
        y: 764.0,
        width: 481.1,
    },
    font: "Helvetica",
    text_size: 12.0,
    label_size: 9.0,
    text_color: Color::BLACK,
    // #005F69
    form_color: Color {
        r: 0.0,
        g: 95.0 / 255.0,
        b: 105.0 / 255.0,
    },
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AddressBlock {
    pub x: f64,
    pub y: f64,
    pub line_step: f64,
    pub lines: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Subject {
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

/// "Please quote" box with customer id, invoice id and date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceBlock {
    pub x: f64,
    pub y: f64,
    pub heading: &'static str,
    pub heading_gap: f64,
    pub line_step: f64,
    pub customer_label: &'static str,
    pub invoice_label: &'static str,
    pub date_label: &'static str,
    /// Left edge of the right-aligned id values, from `x`.
    pub value_offset: f64,
    pub date_offset: f64,
}

/// A single label followed by a value, e.g. "Seite 1/1".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabeledLine {
    pub x: f64,
    pub y: f64,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnHeading {
    pub label: &'static str,
    pub x: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemHeader {
    /// Vertical position of the upper rule, in centimeters.
    pub y_cm: f64,
    pub label_gap: f64,
    pub row_height: f64,
    pub columns: [ColumnHeading; 5],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Column {
    pub offset: f64,
    pub width: f64,
    pub align: TextAlign,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemRows {
    pub x: f64,
    pub y: f64,
    pub id: Column,
    pub quantity: Column,
    pub description: Column,
    pub unit_price: Column,
    pub net_value: Column,
    pub base_advance: f64,
    pub line_advance: f64,
    pub chars_per_line: usize,
}

impl ItemRows {
    /// Vertical advance after a row, estimated from the description length.
    pub fn advance(&self, description: &str) -> f64 {
        let lines = description.chars().count().div_ceil(self.chars_per_line);
        self.base_advance + lines as f64 * self.line_advance
    }
}

/// Three labels over three right-aligned amounts, framed by rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmountBand {
    pub label_gap: f64,
    pub label_x: [f64; 3],
    pub label_height: f64,
    pub value_gap: f64,
    pub value_x: [f64; 3],
    pub value_width: f64,
    pub value_height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TotalsLabels {
    pub net: &'static str,
    /// Appended to the VAT percentage.
    pub vat_suffix: &'static str,
    pub gross: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CashDiscountLabels {
    pub base: &'static str,
    /// Followed by the percentage and "%".
    pub discount: &'static str,
    /// Followed by the due date.
    pub due: &'static str,
}

/// Text following the totals at `gap` below the cursor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trailer {
    pub gap: f64,
    pub prefix: &'static str,
}

/// Every position and label of the invoice page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvoiceLayout {
    pub page: PageTemplate,
    pub title: &'static str,
    pub author: &'static str,
    pub address: AddressBlock,
    pub subject: Subject,
    pub reference: ReferenceBlock,
    pub billing_period: LabeledLine,
    pub page_number: LabeledLine,
    pub item_header: ItemHeader,
    pub items: ItemRows,
    pub totals_band: AmountBand,
    pub totals: TotalsLabels,
    pub cash_discount: CashDiscountLabels,
    pub payment_terms: Trailer,
    pub invoice_text: Trailer,
}

impl InvoiceLayout {
    pub const STANDARD: InvoiceLayout = InvoiceLayout {
        page: STANDARD_PAGE,
        title: "Rechnung",
        author: "JOVISCO GmbH",
        address: AddressBlock {
            x: 70.0,
            y: 155.0,
            line_step: 15.0,
            lines: 5,
        },
        subject: Subject {
            x: 65.1,
            y: 255.0,
            size: 24.0,
        },
        reference: ReferenceBlock {
            x: 395.0,
            y: 267.0,
            heading: "Bitte bei Zahlung angeben:",
            heading_gap: 17.0,
            line_step: 15.0,
            customer_label: "Kd.Nr.",
            invoice_label: "Re.Nr.",
            date_label: "Datum",
            value_offset: 80.0,
            date_offset: 65.0,
        },
        billing_period: LabeledLine {
            x: 65.1,
            y: 314.0,
            label: "Leistungszeitraum",
        },
        page_number: LabeledLine {
            x: 395.0,
            y: 335.0,
            label: "Seite",
        },
        item_header: ItemHeader {
            y_cm: 12.4,
            label_gap: 3.0,
            row_height: 12.0,
            columns: [
                ColumnHeading { label: "Pos", x: 67.1 },
                ColumnHeading { label: "Menge", x: 100.0 },
                ColumnHeading { label: "Beschreibung", x: 155.0 },
                ColumnHeading { label: "Einzelpreis", x: 392.0 },
                ColumnHeading { label: "Gesamtpreis", x: 477.0 },
            ],
        },
        items: ItemRows {
            x: 66.1,
            y: 375.0,
            id: Column {
                offset: 0.0,
                width: 15.0,
                align: TextAlign::Center,
            },
            quantity: Column {
                offset: 30.0,
                width: 35.0,
                align: TextAlign::Right,
            },
            description: Column {
                offset: 89.0,
                width: 220.0,
                align: TextAlign::Left,
            },
            unit_price: Column {
                offset: 310.0,
                width: 60.0,
                align: TextAlign::Right,
            },
            net_value: Column {
                offset: 387.0,
                width: 75.0,
                align: TextAlign::Right,
            },
            base_advance: 10.0,
            line_advance: 15.0,
            chars_per_line: 40,
        },
        totals_band: AmountBand {
            label_gap: 3.0,
            label_x: [100.0, 260.0, 477.0],
            label_height: 12.0,
            value_gap: 10.0,
            value_x: [75.0, 230.0, 453.1],
            value_width: 75.0,
            value_height: 25.0,
        },
        totals: TotalsLabels {
            net: "Nettobetrag",
            vat_suffix: "% MwSt",
            gross: "Bruttobetrag",
        },
        cash_discount: CashDiscountLabels {
            base: "Skontobasis",
            discount: "Skonto",
            due: "Zahlbar bis spätestens",
        },
        payment_terms: Trailer {
            gap: 20.0,
            prefix: "Zahlungsbedingungen: ",
        },
        invoice_text: Trailer {
            gap: 25.0,
            prefix: "",
        },
    };
}
