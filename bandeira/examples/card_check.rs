//! Line-oriented demo of the validation core, rendering the same states an
//! input form would.
//!
//! Usage:
//!   cargo run -p bandeira --example card_check
//!
//! Type a card number (separators allowed) per line; an empty line quits.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use bandeira::prelude::*;

fn render(report: &ValidationReport) {
    let badge = match brand_badge(report) {
        BrandBadge::Empty => "-".to_string(),
        BrandBadge::Typing => "typing...".to_string(),
        BrandBadge::Unrecognized => "unrecognized".to_string(),
        BrandBadge::Known(brand) => brand.to_string(),
    };

    let status = match luhn_status(report) {
        LuhnStatus::Waiting => "waiting for a number",
        LuhnStatus::Typing => "keep typing",
        LuhnStatus::UnrecognizedBrand => "brand not recognized",
        LuhnStatus::Valid => "checksum OK",
        LuhnStatus::Invalid => "checksum FAILED",
    };

    let percent = (input_progress(report) * 100.0).round() as u32;
    let colors = badge_colors(report.brand);

    println!(
        "  digits={} length={} progress={}%",
        report.digits, report.length, percent
    );
    println!("  brand:  {} (badge {})", badge, colors.background);
    println!("  luhn:   {}", status);
}

fn main() -> Result<()> {
    env_logger::init();

    println!("bandeira card check - empty line to quit");
    let stdin = io::stdin();

    print!("card> ");
    io::stdout().flush()?;
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }

        let report = validate_card(&line);
        render(&report);

        print!("card> ");
        io::stdout().flush()?;
    }

    Ok(())
}
