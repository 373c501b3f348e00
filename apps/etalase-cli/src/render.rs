//! # Display Formatting
//!
//! Turns engine output into text. All rounding happens here and only here.
//!
//! ```text
//! Perhitungan Harga Etalase Kaca Aluminium
//! Panjang 1,2 m | Lebar 0,5 m | Tinggi 1 m | Sekat 2
//!
//! Frame Aluminium (Rp 35.000 per m1)  11,80    413.000
//! Kaca (Rp 200.000 per m²)             5,80  1.160.000
//! Karet (Rp 2.000 per m)              21,60     43.200
//!
//! Total: 1.616.200 IDR
//! ```
//!
//! Numbers use Indonesian grouping: `.` between thousands, `,` before
//! decimals.

use etalase_core::{Dimensions, GlassTier, Material, PriceList, PricingResult, Unit};

use crate::config::Settings;

const TITLE: &str = "Perhitungan Harga Etalase Kaca Aluminium";

// =============================================================================
// Number Formatting
// =============================================================================

/// Formats a money amount to two decimals, dropping a `,00` tail.
///
/// `2460000.0` → `2.460.000`, `1234.5` → `1.234,50`
pub fn format_amount(amount: f64) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }

    let fixed = format!("{:.2}", amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };

    if fraction == "00" {
        format!("{}{}", sign, group_thousands(whole))
    } else {
        format!("{}{},{}", sign, group_thousands(whole), fraction)
    }
}

/// Formats a quantity with exactly two decimals: `11.8` → `11,80`.
pub fn format_quantity(quantity: f64) -> String {
    let fixed = format!("{:.2}", quantity);
    match fixed.split_once('.') {
        Some((whole, fraction)) => format!("{},{}", group_thousands(whole), fraction),
        None => fixed,
    }
}

/// Formats a measurement without trailing zeros: `0.60` → `0,6`.
pub fn format_meters(meters: f64) -> String {
    meters.to_string().replace('.', ",")
}

fn group_thousands(digits: &str) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("{}{}", sign, grouped)
}

// =============================================================================
// Tables
// =============================================================================

/// Renders a quote as a table with one row per line item and a total.
pub fn quote_table(dims: &Dimensions, quote: &PricingResult, settings: &Settings) -> String {
    let rows: Vec<[String; 3]> = quote
        .iter()
        .map(|item| {
            [
                format!(
                    "{} ({} {} {})",
                    item.name,
                    settings.currency_symbol,
                    format_amount(item.unit_price.as_f64()),
                    item.unit
                ),
                format_quantity(item.quantity),
                format_amount(item.line_total),
            ]
        })
        .collect();

    let mut out = String::new();
    out.push_str(TITLE);
    out.push('\n');
    out.push_str(&dimension_summary(dims, quote));
    out.push_str("\n\n");
    out.push_str(&align_rows(&rows));
    out.push('\n');
    out.push_str(&format!(
        "Total: {} {}",
        format_amount(quote.total_cost),
        settings.currency_code
    ));
    out
}

/// Renders a price list, one row per rate. Glass gets one row per tier.
pub fn prices_table(prices: &PriceList, settings: &Settings) -> String {
    let symbol = &settings.currency_symbol;

    let rows: Vec<[String; 3]> = price_rows(prices)
        .into_iter()
        .map(|(label, rate, unit)| {
            [
                label,
                format!("{} {}", symbol, format_amount(rate as f64)),
                unit.label().to_string(),
            ]
        })
        .collect();

    format!("Daftar Harga ({})\n\n{}", settings.currency_code, align_rows(&rows))
}

fn price_rows(prices: &PriceList) -> Vec<(String, i64, Unit)> {
    Material::ALL
        .into_iter()
        .flat_map(|material| {
            let tiers: &[GlassTier] = match material {
                Material::Glass => &[
                    GlassTier::ReducedHeight,
                    GlassTier::Standard,
                    GlassTier::IncreasedHeight,
                ],
                _ => &[GlassTier::Standard],
            };
            tiers.iter().map(move |&tier| {
                (
                    price_label(material, tier, prices),
                    prices.rate(material, tier).amount(),
                    material.unit(),
                )
            })
        })
        .collect()
}

fn price_label(material: Material, tier: GlassTier, prices: &PriceList) -> String {
    match (material, tier) {
        (Material::Glass, GlassTier::ReducedHeight) => format!(
            "{} (tinggi < {} m)",
            material.name(),
            format_meters(prices.reduced_height_below)
        ),
        (Material::Glass, GlassTier::IncreasedHeight) => format!(
            "{} (tinggi > {} m)",
            material.name(),
            format_meters(prices.increased_height_above)
        ),
        _ => material.name().to_string(),
    }
}

/// Sizes, then the names of any optional materials on the quote.
fn dimension_summary(dims: &Dimensions, quote: &PricingResult) -> String {
    let mut summary = format!(
        "Panjang {} m | Lebar {} m | Tinggi {} m | Sekat {}",
        format_meters(dims.length()),
        format_meters(dims.width()),
        format_meters(dims.height()),
        dims.sections()
    );
    for item in quote.iter().filter(|item| item.material.is_optional()) {
        summary.push_str(" | ");
        summary.push_str(&item.name);
    }
    summary
}

/// Left-aligns the first column and right-aligns the others.
fn align_rows(rows: &[[String; 3]]) -> String {
    let width = |col: usize| {
        rows.iter()
            .map(|row| row[col].chars().count())
            .max()
            .unwrap_or(0)
    };
    let (w0, w1, w2) = (width(0), width(1), width(2));

    rows.iter()
        .map(|[label, middle, right]| {
            format!("{:<w0$}  {:>w1$}  {:>w2$}\n", label, middle, right)
        })
        .collect()
}
