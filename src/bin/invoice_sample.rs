//! Generates a demonstration invoice with 50 random line items and writes
//! it to `invoice_sample.pdf` in the current directory.

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Local;
use rand::SeedableRng;
use rand::rngs::StdRng;

use fatura_pdf::pdf::{self, RenderOptions};
use fatura_pdf::sample;

const OUTPUT_PATH: &str = "invoice_sample.pdf";
const LOGO_PATH: &str = "logo.jpg";

fn run() -> Result<(), fatura_pdf::InvoiceError> {
    let mut rng = StdRng::from_entropy();
    let today = Local::now().date_naive();
    let invoice = sample::sample_invoice(&mut rng, today)?;

    let logo = PathBuf::from(LOGO_PATH);
    let options = RenderOptions {
        logo: logo.exists().then_some(logo),
    };

    pdf::render_to_file(&invoice, &options, OUTPUT_PATH)?;
    println!("Invoice generated: {OUTPUT_PATH}");
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
