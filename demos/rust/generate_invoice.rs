/// Invoice example: JSON records -> mapper -> invoice form -> PDF.
///
/// Run with:
///   cargo run --example generate_invoice -p invoice-demos [config.toml]
///
/// Without an argument the config in demos/data/forms.toml is used.
/// Writes demos/output/invoice-<id>.pdf. Set RUST_LOG=debug to see the
/// resolved dates and locale decisions.
use std::error::Error;
use std::fs;
use std::path::PathBuf;

use invoice_forms::{setup_i18n, FormConfig, InvoiceData, InvoiceForm, InvoiceFormDataMapper, ReceiverData};
use tracing_subscriber::EnvFilter;

const DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data");
const OUTPUT_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/output");

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DATA_DIR).join("forms.toml"));
    let config = FormConfig::load(&config_path)?;
    setup_i18n(&[config.mapper.locale.as_str()]);

    let invoice = InvoiceData::from_json_str(&fs::read_to_string(format!("{DATA_DIR}/invoice.json"))?)?;
    let receiver = ReceiverData::from_json_str(&fs::read_to_string(format!("{DATA_DIR}/receiver.json"))?)?;

    let data = InvoiceFormDataMapper::with_settings(&invoice, &receiver, &config.mapper).map();
    let json = serde_json::to_string(&data)?;
    tracing::debug!(data = %json, "mapped form data");

    let mut form = InvoiceForm::new(&config.form, data)?;
    form.print()?;

    fs::create_dir_all(OUTPUT_DIR)?;
    let path = format!("{OUTPUT_DIR}/invoice-{}.pdf", form.id());
    form.save_as_async(&path).await?;
    println!("Written to {}", path);
    Ok(())
}
