/// Base form example: the empty letterhead page with a few free-form
/// draw calls, saved through the callback API.
///
/// Run with:
///   cargo run --example generate_base_form -p invoice-demos
///
/// Writes demos/output/base-form.pdf.
use std::fs;
use std::process::ExitCode;

use invoice_forms::{BaseForm, DocumentInfo, FormOptions};
use pdf_core::{TextAlign, TextOptions};
use tracing_subscriber::EnvFilter;

const OUTPUT_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/output");

fn draw(form: &mut BaseForm) -> Result<(), invoice_forms::FormError> {
    form.set_font("Helvetica-Bold", 24.0, "#005F69")?
        .text("Briefbogen", 65.1, 255.0, &TextOptions::new())?;
    form.print_line(350.92)?;
    form.set_font("Helvetica", 12.0, "black")?.text(
        "Freitext unterhalb der Linie, rechtsbündig im Textbereich.",
        65.1,
        360.0,
        &TextOptions::new().align(TextAlign::Right).width(465.1),
    )?;
    form.print_line(400.0)?;
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let info = DocumentInfo {
        title: "Briefbogen".to_string(),
        author: "JOVISCO GmbH".to_string(),
        ..Default::default()
    };
    let mut form = match BaseForm::new(&FormOptions::default(), &info) {
        Ok(form) => form,
        Err(err) => {
            eprintln!("cannot build form: {}", err);
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = draw(&mut form) {
        eprintln!("cannot draw form: {}", err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = fs::create_dir_all(OUTPUT_DIR) {
        eprintln!("cannot create {}: {}", OUTPUT_DIR, err);
        return ExitCode::FAILURE;
    }
    let path = format!("{OUTPUT_DIR}/base-form.pdf");
    let mut code = ExitCode::SUCCESS;
    form.save_as(&path, |result| match result {
        Ok(()) => println!("Written to {}", path),
        Err(err) => {
            eprintln!("cannot save {}: {}", path, err);
            code = ExitCode::FAILURE;
        }
    });
    code
}
