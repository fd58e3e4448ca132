// src/domain/pricing.rs

use serde::Serialize;

/// Fixed conversion rates into Chilean pesos.
pub const UF_IN_CLP: f64 = 37_800.0;
pub const USD_IN_CLP: f64 = 950.0;
pub const EUR_IN_CLP: f64 = 1_020.0;

/// How a currency tag is interpreted. Tags outside the recognized set fall
/// through to `Clp`, meaning the price is already a peso amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencyUnit {
    Uf,
    Usd,
    Eur,
    Clp,
}

impl CurrencyUnit {
    pub fn classify(tag: &str) -> Self {
        match tag.trim() {
            "UF" => CurrencyUnit::Uf,
            "$" | "USD" => CurrencyUnit::Usd,
            "€" => CurrencyUnit::Eur,
            _ => CurrencyUnit::Clp,
        }
    }
}

/// A price expressed in both reference units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Valuation {
    pub uf: f64,
    pub clp: f64,
}

impl Valuation {
    pub fn display(&self) -> PriceDisplay {
        PriceDisplay {
            uf: format!("UF {}", format_grouped(self.uf, 0)),
            clp: format!("$ {}", format_grouped(self.clp, 3)),
        }
    }
}

/// Ready-to-render price strings: primary UF line and secondary peso line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceDisplay {
    pub uf: String,
    pub clp: String,
}

pub fn normalize(price: f64, currency: &str) -> Valuation {
    let clp = match CurrencyUnit::classify(currency) {
        CurrencyUnit::Uf => return Valuation { uf: price, clp: price * UF_IN_CLP },
        CurrencyUnit::Usd => price * USD_IN_CLP,
        CurrencyUnit::Eur => price * EUR_IN_CLP,
        CurrencyUnit::Clp => price,
    };

    Valuation {
        uf: clp / UF_IN_CLP,
        clp,
    }
}

pub fn price_display(price: f64, currency: &str) -> PriceDisplay {
    normalize(price, currency).display()
}

/// es-CL number formatting: `.` between thousands, `,` before decimals.
/// Rounds half away from zero to at most `max_fraction` digits and drops
/// trailing zeros in the fraction.
fn format_grouped(value: f64, max_fraction: u32) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let scale = 10u128.pow(max_fraction);
    let scaled = (value.abs() * scale as f64).round() as u128;
    let int_part = scaled / scale;
    let frac_part = scaled % scale;

    let digits = int_part.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 8);
    if value < 0.0 && scaled != 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }

    if frac_part != 0 {
        let frac = format!("{:0width$}", frac_part, width = max_fraction as usize);
        out.push(',');
        out.push_str(frac.trim_end_matches('0'));
    }

    out
}
