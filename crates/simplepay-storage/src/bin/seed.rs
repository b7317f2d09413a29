//! # Seed Data Generator
//!
//! Populates a data directory with sample products for development.
//!
//! ## Usage
//! ```bash
//! # Seed 24 products into ./data (defaults)
//! cargo run -p simplepay-storage --bin seed
//!
//! # Custom amount and directory
//! cargo run -p simplepay-storage --bin seed -- --count 50 --data-dir /tmp/simplepay
//! ```
//!
//! Generated products are sheet goods (the shop sells by length × width):
//! glass, plywood, banner material. Prices derive from the per-unit rate
//! and the sheet dimensions; stock levels cycle deterministically so
//! repeated runs are reproducible.

use std::env;

use simplepay_core::NewProduct;
use simplepay_storage::Session;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Sheet-good templates: name, price per unit area in cents.
const SHEETS: &[(&str, i64)] = &[
    ("Kaca Bening 5mm", 9500),
    ("Kaca Bening 8mm", 14000),
    ("Kaca Riben 5mm", 10500),
    ("Kaca Es 5mm", 11000),
    ("Triplek 9mm", 4500),
    ("Triplek 12mm", 6000),
    ("Triplek Melamin", 7500),
    ("Spanduk Flexi 280gsm", 1800),
    ("Spanduk Flexi 340gsm", 2400),
    ("Akrilik Bening 3mm", 21000),
    ("Akrilik Bening 5mm", 32000),
    ("GRC Board 6mm", 5200),
];

/// Dimension presets cycled across the generated products.
const DIMENSIONS: &[(f64, f64)] = &[(2.0, 1.0), (2.44, 1.22), (1.5, 1.0), (3.0, 1.5)];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let (data_dir, count) = parse_args();
    info!(%data_dir, count, "seeding products");

    let mut session = Session::open(&data_dir)?;

    for n in 0..count {
        let (name, price_per_unit_cents) = SHEETS[n % SHEETS.len()];
        let (length, width) = DIMENSIONS[n % DIMENSIONS.len()];

        // Derived price, rounded to the cent; stock cycles 4..=15.
        let price_cents = (price_per_unit_cents as f64 * length * width).round() as i64;
        let stock = 4 + (n as i64 * 7) % 12;

        let name = if n < SHEETS.len() {
            name.to_string()
        } else {
            format!("{} ({:.2}x{:.2})", name, length, width)
        };

        session.add_product(NewProduct {
            name,
            price_cents,
            price_per_unit_cents,
            length,
            width,
            stock,
        })?;
    }

    info!(
        products = session.products().len(),
        dir = %data_dir,
        "seed complete"
    );
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Override with `RUST_LOG`, e.g. `RUST_LOG=debug`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Parses `--data-dir <path>` and `--count <n>` from the command line.
fn parse_args() -> (String, usize) {
    let mut data_dir = "./data".to_string();
    let mut count = 24usize;

    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--data-dir" if i + 1 < args.len() => {
                data_dir = args[i + 1].clone();
                i += 2;
            }
            "--count" if i + 1 < args.len() => {
                count = args[i + 1].parse().unwrap_or(count);
                i += 2;
            }
            _ => i += 1,
        }
    }

    (data_dir, count)
}
