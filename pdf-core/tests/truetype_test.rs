use pdf_core::{FontRef, PdfDocument, TextOptions};

const FONT_PATH: &str = "tests/fixtures/DejaVuSans-ExtraLight.ttf";

#[test]
fn ttf_font_is_embedded_as_win_ansi_truetype() {
    let mut doc = PdfDocument::new(Vec::<u8>::new()).unwrap();
    doc.begin_page(595.28, 841.89).unwrap();
    doc.font_by_name(FONT_PATH).unwrap().font_size(12.0);
    assert!(matches!(doc.text_state().font, FontRef::TrueType(_)));
    doc.text("Grüße", 10.0, 10.0, &TextOptions::new()).unwrap();
    let output = String::from_utf8_lossy(&doc.end_document().unwrap()).into_owned();
    assert!(output.contains("/Subtype /TrueType"));
    assert!(output.contains("/FontFile2"));
    assert!(output.contains("/Encoding /WinAnsiEncoding"));
    assert!(output.contains("/TT1 12 Tf"));
}

#[test]
fn ttf_metrics_measure_text() {
    let mut doc = PdfDocument::new(Vec::<u8>::new()).unwrap();
    let font = doc.load_font_file(FONT_PATH).unwrap();
    doc.font(font).font_size(10.0);
    let narrow = doc.measure_text("iii").unwrap();
    let wide = doc.measure_text("WWW").unwrap();
    assert!(narrow > 0.0);
    assert!(wide > narrow);
    assert!(doc.line_height().unwrap() > 10.0);
}

#[test]
fn invalid_font_bytes_are_rejected() {
    let mut doc = PdfDocument::new(Vec::<u8>::new()).unwrap();
    assert!(doc.load_font_bytes(vec![0; 16]).is_err());
}
