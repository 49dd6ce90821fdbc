use invoice_forms::domain::{InvoiceHeader, InvoiceItem, ReceiverAddress, ReceiverHeader};
use invoice_forms::{InvoiceData, InvoiceFormDataMapper, MapperSettings, ReceiverData};

fn sample_invoice() -> InvoiceData {
    InvoiceData {
        header: InvoiceHeader {
            id: Some(1001),
            issued_at: Some("2024-03-01T00:00:00Z".parse().unwrap()),
            billing_period: Some("März 2024".to_string()),
            payment_terms: Some("14 Tage netto".to_string()),
            invoice_text: Some("Vielen Dank für Ihren Auftrag.".to_string()),
            cash_discount_days: Some(10),
        },
        items: vec![InvoiceItem {
            id: Some(1),
            description: Some("Beratung".to_string()),
            quantity: Some(2.0),
            price_per_unit: Some(50.0),
        }],
        vat_percentage: 19.0,
        cash_discount_percentage: 2.0,
    }
}

fn sample_receiver() -> ReceiverData {
    ReceiverData {
        header: ReceiverHeader {
            id: Some(20),
            name: Some("Muster GmbH".to_string()),
            name_add: Some("z. Hd. Frau Beispiel".to_string()),
        },
        address: ReceiverAddress {
            street: Some("Lindenweg 3".to_string()),
            postal_code: Some("80331".to_string()),
            city: Some("München".to_string()),
        },
    }
}

#[test]
fn maps_sample_invoice_for_germany() {
    let invoice = sample_invoice();
    let receiver = sample_receiver();
    let data = InvoiceFormDataMapper::new(&invoice, &receiver, "de-DE", "EUR").map();

    assert_eq!(data.invoice_id, "1001");
    assert_eq!(data.customer_id, "20");
    assert_eq!(data.invoice_date, "1.3.2024");
    assert_eq!(data.cash_discount_due_date, "11.3.2024");
    assert_eq!(data.billing_period, "März 2024");
    assert_eq!(data.payment_terms, "14 Tage netto");
    assert_eq!(data.text, "Vielen Dank für Ihren Auftrag.");
    assert_eq!(
        data.address,
        vec!["Muster GmbH", "z. Hd. Frau Beispiel", "Lindenweg 3", "80331 München"]
    );

    let item = &data.items[0];
    assert_eq!(item.item_id, "1");
    assert_eq!(item.quantity, "2");
    assert_eq!(item.unit_price, "50,00\u{a0}€");
    assert_eq!(item.net_value, "100,00\u{a0}€");

    assert_eq!(data.vat_percentage, "19");
    assert_eq!(data.cash_discount_percentage, "2");
    assert_eq!(data.total_net_value, "100,00\u{a0}€");
    assert_eq!(data.total_vat_amount, "19,00\u{a0}€");
    assert_eq!(data.total_gross_amount, "119,00\u{a0}€");
    assert_eq!(data.cash_discount_base_amount, "119,00\u{a0}€");
    assert_eq!(data.cash_discount_amount, "2,38\u{a0}€");
    assert_eq!(data.payable_amount, "116,62\u{a0}€");
}

#[test]
fn map_is_deterministic() {
    let invoice = sample_invoice();
    let receiver = sample_receiver();
    let mapper = InvoiceFormDataMapper::new(&invoice, &receiver, "de-DE", "EUR");
    let first = serde_json::to_string(&mapper.map()).unwrap();
    let second = serde_json::to_string(&mapper.map()).unwrap();
    let other_mapper = InvoiceFormDataMapper::new(&invoice, &receiver, "de-DE", "EUR");
    assert_eq!(first, second);
    assert_eq!(first, serde_json::to_string(&other_mapper.map()).unwrap());
}

#[test]
fn zero_or_absent_amounts_format_as_zero() {
    let invoice = InvoiceData {
        items: vec![
            InvoiceItem {
                quantity: Some(0.0),
                price_per_unit: Some(80.0),
                ..Default::default()
            },
            InvoiceItem {
                quantity: Some(3.0),
                price_per_unit: None,
                ..Default::default()
            },
            InvoiceItem::default(),
        ],
        ..Default::default()
    };
    let data = InvoiceFormDataMapper::with_defaults(&invoice, &ReceiverData::default()).map();
    for item in &data.items {
        assert_eq!(item.net_value, "0,00\u{a0}€");
    }
    assert_eq!(data.items[2].unit_price, "0,00\u{a0}€");
    assert_eq!(data.items[2].description, "");
}

#[test]
fn settings_select_locale_currency_and_zone() {
    let invoice = sample_invoice();
    let receiver = sample_receiver();
    let settings = MapperSettings {
        locale: "en-US".to_string(),
        currency: "USD".to_string(),
        time_zone: "America/New_York".to_string(),
    };
    let data = InvoiceFormDataMapper::with_settings(&invoice, &receiver, &settings).map();
    // Midnight UTC is still the previous evening in New York.
    assert_eq!(data.invoice_date, "2/29/2024");
    assert_eq!(data.cash_discount_due_date, "3/10/2024");
    assert_eq!(data.items[0].net_value, "$100.00");
}

#[test]
fn records_load_from_json() {
    let invoice = InvoiceData::from_json_str(
        r#"{"header": {"id": 1001, "issuedAt": "2024-03-01", "cashDiscountDays": 10},
            "items": [{"id": 1, "description": "Beratung", "quantity": 2, "pricePerUnit": 50}],
            "vatPercentage": 19, "cashDiscountPercentage": 2}"#,
    )
    .unwrap();
    let receiver = ReceiverData::from_json_str(r#"{"header": {"name": "Muster GmbH"}}"#).unwrap();
    let data = InvoiceFormDataMapper::with_defaults(&invoice, &receiver).map();
    assert_eq!(data.invoice_id, "1001");
    assert_eq!(data.items[0].net_value, "100,00\u{a0}€");
    assert_eq!(data.cash_discount_due_date, "11.3.2024");
    assert_eq!(data.address[0], "Muster GmbH");
    assert_eq!(data.address[3], " ");
}

#[test]
fn half_cent_vat_rounds_up() {
    let mut invoice = sample_invoice();
    invoice.items[0].quantity = Some(1.0);
    invoice.items[0].price_per_unit = Some(1.5);
    let data = InvoiceFormDataMapper::with_defaults(&invoice, &sample_receiver()).map();
    assert_eq!(data.total_net_value, "1,50\u{a0}€");
    assert_eq!(data.total_vat_amount, "0,29\u{a0}€");
    assert_eq!(data.total_gross_amount, "1,79\u{a0}€");
}

#[test]
fn unknown_zone_offsets_invoice_date_only() {
    let mut invoice = sample_invoice();
    invoice.header.issued_at = Some("2024-02-29T22:30:00Z".parse().unwrap());
    let settings = MapperSettings {
        time_zone: "Europa/Berlin".to_string(),
        ..MapperSettings::default()
    };
    let data = InvoiceFormDataMapper::with_settings(&invoice, &sample_receiver(), &settings).map();
    assert_eq!(data.invoice_date, "1.3.2024");
    assert_eq!(data.cash_discount_due_date, "10.3.2024");
}
