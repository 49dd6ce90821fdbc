use pdf_core::{Color, PdfDocument};

fn render(build: impl FnOnce(&mut PdfDocument<Vec<u8>>)) -> String {
    let mut doc = PdfDocument::new(Vec::<u8>::new()).unwrap();
    doc.begin_page(595.28, 841.89).unwrap();
    build(&mut doc);
    String::from_utf8_lossy(&doc.end_document().unwrap()).into_owned()
}

#[test]
fn horizontal_rule_flips_y() {
    let output = render(|doc| {
        doc.set_stroke_color(Color::from_rgb8(0x00, 0x5F, 0x69))
            .unwrap()
            .move_to(65.1, 350.92)
            .unwrap()
            .line_to(530.2, 350.92)
            .unwrap()
            .stroke()
            .unwrap();
    });
    assert!(output.contains("0 0.3725 0.4118 RG\n"));
    assert!(output.contains("65.1 490.97 m\n"));
    assert!(output.contains("530.2 490.97 l\n"));
    assert!(output.contains("S\n"));
}

#[test]
fn rect_uses_top_left_corner() {
    let output = render(|doc| {
        doc.rect(50.0, 41.89, 200.0, 100.0).unwrap().fill().unwrap();
    });
    assert!(output.contains("50 700 200 100 re\n"));
    assert!(output.contains("f\n"));
}

#[test]
fn state_and_line_width() {
    let output = render(|doc| {
        doc.save_state()
            .unwrap()
            .set_line_width(2.5)
            .unwrap()
            .restore_state()
            .unwrap();
    });
    assert!(output.contains("q\n2.5 w\nQ\n"));
}
