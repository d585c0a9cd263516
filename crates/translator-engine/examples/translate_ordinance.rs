//! Translate a sample ordinance paragraph and print the result as JSON.
//!
//! Run with: cargo run --example translate_ordinance

use anyhow::Result;
use muni_types::CodeType;
use translator_engine::MunicipalTranslator;

const SAMPLE: &str = "Properties zoned R-1 are limited to one accessory dwelling unit. \
A conditional use permit is required for short-term rentals; the application fee is $250. \
Owners shall not operate a business without a business license. \
Contact the Planning Department at (555) 123-4567 or permits@springfield.gov within 30 days. \
Submit two copies of the site plan with your application.";

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let translator = MunicipalTranslator::new();
    let result = translator.translate(SAMPLE, CodeType::Zoning, "Springfield");

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
