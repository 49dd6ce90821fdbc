use invoice_forms::{FormOptions, InvoiceForm, InvoiceFormData, InvoiceItemFormData};

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

fn item(description: &str) -> InvoiceItemFormData {
    InvoiceItemFormData {
        item_id: "1".to_string(),
        description: description.to_string(),
        quantity: "2".to_string(),
        unit_price: "50,00\u{a0}€".to_string(),
        net_value: "100,00\u{a0}€".to_string(),
    }
}

fn form_data(discount: &str, description: &str) -> InvoiceFormData {
    InvoiceFormData {
        address: vec!["Muster GmbH".to_string(), "".to_string(), "Lindenweg 3".to_string()],
        invoice_id: "1001".to_string(),
        invoice_date: "1.3.2024".to_string(),
        customer_id: "20".to_string(),
        billing_period: "März 2024".to_string(),
        total_net_value: "100,00\u{a0}€".to_string(),
        vat_percentage: "19".to_string(),
        total_vat_amount: "19,00\u{a0}€".to_string(),
        total_gross_amount: "119,00\u{a0}€".to_string(),
        cash_discount_percentage: discount.to_string(),
        cash_discount_base_amount: "119,00\u{a0}€".to_string(),
        cash_discount_amount: "2,38\u{a0}€".to_string(),
        payable_amount: "116,62\u{a0}€".to_string(),
        cash_discount_due_date: "11.3.2024".to_string(),
        items: vec![item(description)],
        ..Default::default()
    }
}

fn render(data: InvoiceFormData) -> Vec<u8> {
    let mut form = InvoiceForm::new(&FormOptions::default(), data).unwrap();
    form.print().unwrap();
    form.into_bytes().unwrap()
}

#[test]
fn id_and_metadata_follow_invoice() {
    let form = InvoiceForm::new(&FormOptions::default(), form_data("2", "Beratung")).unwrap();
    assert_eq!(form.id(), "1001");
    assert_eq!(form.data().customer_id, "20");
    let pdf = form.into_bytes().unwrap();
    assert!(contains(&pdf, b"/Title (Rechnung 1001)"));
    assert!(contains(&pdf, b"/Keywords (Rechnung 1001)"));
    assert!(contains(&pdf, b"/Author (JOVISCO GmbH)"));
    assert!(contains(&pdf, b"/CreationDate (D:"));
}

#[test]
fn fixed_blocks_are_printed() {
    let pdf = render(form_data("2", "Beratung"));
    assert!(contains(&pdf, b"/F1 24 Tf"));
    assert!(contains(&pdf, b"(Rechnung) Tj"));
    assert!(contains(&pdf, b"(Muster GmbH) Tj"));
    assert!(contains(&pdf, b"(Bitte bei Zahlung angeben:) Tj"));
    assert!(contains(&pdf, b"(Kd.Nr.) Tj"));
    assert!(contains(&pdf, b"(Leistungszeitraum M\xe4rz 2024) Tj"));
    assert!(contains(&pdf, b"(Seite 1/1) Tj"));
    for label in ["Pos", "Menge", "Beschreibung", "Einzelpreis", "Gesamtpreis"] {
        assert!(contains(&pdf, format!("({}) Tj", label).as_bytes()), "{}", label);
    }
    assert!(contains(&pdf, b"(19% MwSt) Tj"));
    assert!(contains(&pdf, b"(100,00\xa0\x80) Tj"));
}

#[test]
fn cash_discount_band_present_for_positive_percentage() {
    let pdf = render(form_data("2", "Beratung"));
    assert!(contains(&pdf, b"(Skontobasis) Tj"));
    assert!(contains(&pdf, b"(Skonto 2%) Tj"));
    assert!(contains(&pdf, b"(Zahlbar bis sp\xe4testens 11.3.2024) Tj"));
    assert!(contains(&pdf, b"(116,62\xa0\x80) Tj"));
}

#[test]
fn cash_discount_band_absent_for_zero_percentage() {
    for discount in ["0", "", "abc"] {
        let pdf = render(form_data(discount, "Beratung"));
        assert!(!contains(&pdf, b"(Skontobasis) Tj"), "discount {:?}", discount);
        assert!(!contains(&pdf, b"Zahlbar bis"));
    }
}

#[test]
fn long_description_advances_one_more_line() {
    // Rows start at y 375; the totals band opens at 400 for up to 40
    // characters and at 415 for 41 (441.89 and 426.89 from the bottom).
    // Its closing rule lands at 450 or 465 (391.89 or 376.89).
    let short = render(form_data("0", "Wartung und Pflege der Serverumgebung Q1"));
    let long = render(form_data("0", "Wartung und Pflege der Serverumgebung Q12"));
    assert!(contains(&short, b"65.1 441.89 m"));
    assert!(!contains(&short, b"65.1 376.89 m"));
    assert!(!contains(&long, b"65.1 441.89 m"));
    assert!(contains(&long, b"65.1 376.89 m"));
}

#[test]
fn optional_trailers_only_when_present() {
    let pdf = render(form_data("0", "Beratung"));
    assert!(!contains(&pdf, b"Zahlungsbedingungen"));

    let mut data = form_data("0", "Beratung");
    data.payment_terms = "14 Tage netto".to_string();
    data.text = "Vielen Dank.".to_string();
    let pdf = render(data);
    assert!(contains(&pdf, b"(Zahlungsbedingungen: 14 Tage netto) Tj"));
    assert!(contains(&pdf, b"(Vielen Dank.) Tj"));
}

#[test]
fn empty_record_still_prints() {
    let pdf = render(InvoiceFormData::default());
    assert!(contains(&pdf, b"(Rechnung) Tj"));
    assert!(contains(&pdf, b"/Count 1"));
}
