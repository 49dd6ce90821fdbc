use pdf_core::{BuiltinFont, Color, PdfDocument, PdfError, TextAlign, TextOptions};

fn render(build: impl FnOnce(&mut PdfDocument<Vec<u8>>)) -> String {
    let mut doc = PdfDocument::new(Vec::<u8>::new()).unwrap();
    doc.begin_page(595.28, 841.89).unwrap();
    build(&mut doc);
    let bytes = doc.end_document().unwrap();
    String::from_utf8_lossy(&bytes).into_owned()
}

#[test]
fn empty_page_is_a_valid_skeleton() {
    let output = render(|_| {});
    assert!(output.starts_with("%PDF-1.7"));
    assert!(output.contains("/Type /Catalog"));
    assert!(output.contains("/Count 1"));
    assert!(output.contains("/MediaBox [0.0 0.0 595.28 841.89]"));
    assert!(output.ends_with("%%EOF\n"));
}

#[test]
fn info_entries_are_written() {
    let mut doc = PdfDocument::new(Vec::<u8>::new()).unwrap();
    doc.set_info("Title", "Rechnung 1001").set_info("Author", "ACME");
    doc.begin_page(595.28, 841.89).unwrap();
    let output = String::from_utf8_lossy(&doc.end_document().unwrap()).into_owned();
    assert!(output.contains("/Title (Rechnung 1001)"));
    assert!(output.contains("/Author (ACME)"));
    assert!(output.contains("/Info"));
}

#[test]
fn page_count_includes_open_page() {
    let mut doc = PdfDocument::new(Vec::<u8>::new()).unwrap();
    assert_eq!(doc.page_count(), 0);
    assert_eq!(doc.page_size(), None);
    doc.begin_page(595.28, 841.89).unwrap();
    assert_eq!(doc.page_count(), 1);
    assert_eq!(doc.page_size(), Some((595.28, 841.89)));
    doc.begin_page(595.28, 841.89).unwrap();
    assert_eq!(doc.page_count(), 2);
}

#[test]
fn text_uses_top_left_coordinates() {
    // Baseline sits one ascender (718/1000 em) below the requested top.
    let output = render(|doc| {
        doc.text("Hallo", 100.0, 41.89, &TextOptions::new().no_line_break())
            .unwrap();
    });
    assert!(output.contains("/F1 12 Tf"));
    assert!(output.contains("100 791.384 Td"));
    assert!(output.contains("(Hallo) Tj"));
    assert!(output.contains("/BaseFont /Helvetica /Encoding /WinAnsiEncoding"));
}

#[test]
fn right_aligned_text_ends_at_box_edge() {
    // "10" is 2 * 556/1000 * 10 = 11.12pt wide.
    let output = render(|doc| {
        doc.font_size(10.0);
        doc.text("10", 100.0, 0.0, &TextOptions::new().align(TextAlign::Right).width(50.0))
            .unwrap();
    });
    assert!(output.contains("138.88 "));
}

#[test]
fn right_align_without_width_uses_page_margin() {
    // Box runs from x to page width minus the 72pt margin.
    let output = render(|doc| {
        doc.font_size(10.0);
        doc.text("10", 475.0, 0.0, &TextOptions::new().align(TextAlign::Right))
            .unwrap();
    });
    assert!(output.contains("512.16 "));
}

#[test]
fn long_text_wraps_inside_width() {
    let output = render(|doc| {
        doc.text(
            "Wartung und Pflege der Serverinfrastruktur im Quartal",
            100.0,
            100.0,
            &TextOptions::new().width(120.0),
        )
        .unwrap();
    });
    assert!(output.matches(" Tj").count() >= 3);
}

#[test]
fn fill_color_and_font_are_applied() {
    let output = render(|doc| {
        doc.font(BuiltinFont::HelveticaBold)
            .font_size(9.0)
            .fill_color(Color::from_rgb8(255, 0, 0));
        doc.text("Label", 10.0, 10.0, &TextOptions::new()).unwrap();
    });
    assert!(output.contains("/F2 9 Tf\n1 0 0 rg\n"));
    assert!(output.contains("/BaseFont /Helvetica-Bold"));
}

#[test]
fn underline_strokes_below_text() {
    let output = render(|doc| {
        doc.font_size(9.0);
        doc.text("Bitte", 10.0, 10.0, &TextOptions::new().underline()).unwrap();
    });
    assert!(output.contains("0.5 w\n"));
    assert!(output.contains(" l\nS\nQ\n"));
}

#[test]
fn euro_sign_is_win_ansi_encoded() {
    let mut doc = PdfDocument::new(Vec::<u8>::new()).unwrap();
    doc.begin_page(595.28, 841.89).unwrap();
    doc.text("100,00\u{a0}€", 10.0, 10.0, &TextOptions::new()).unwrap();
    let bytes = doc.end_document().unwrap();
    let needle = b"(100,00\xa0\x80) Tj";
    assert!(bytes.windows(needle.len()).any(|w| w == needle));
}

#[test]
fn unknown_font_name_is_an_error() {
    let mut doc = PdfDocument::new(Vec::<u8>::new()).unwrap();
    let err = doc.font_by_name("Papyrus").err().unwrap();
    assert!(matches!(err, PdfError::Font(_)));
}

#[test]
fn drawing_without_page_is_an_error() {
    let mut doc = PdfDocument::new(Vec::<u8>::new()).unwrap();
    assert!(matches!(
        doc.move_to(0.0, 0.0),
        Err(PdfError::NoOpenPage("move_to"))
    ));
    assert!(doc.text("x", 0.0, 0.0, &TextOptions::new()).is_err());
}

#[test]
fn compressed_content_is_smaller() {
    let make_pdf = |compress: bool| -> Vec<u8> {
        let mut doc = PdfDocument::new(Vec::<u8>::new()).unwrap();
        doc.set_compression(compress);
        doc.begin_page(595.28, 841.89).unwrap();
        for i in 0..40 {
            doc.text("Pos Menge Beschreibung", 65.1, 20.0 * i as f64, &TextOptions::new())
                .unwrap();
        }
        doc.end_document().unwrap()
    };
    let plain = make_pdf(false);
    let packed = make_pdf(true);
    assert!(packed.len() < plain.len());
    assert!(String::from_utf8_lossy(&packed).contains("/Filter /FlateDecode"));
}

#[test]
fn end_document_writes_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.pdf");
    let mut doc = PdfDocument::create(&path).unwrap();
    doc.begin_page(595.28, 841.89).unwrap();
    doc.end_document().unwrap();
    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF-1.7"));
}
