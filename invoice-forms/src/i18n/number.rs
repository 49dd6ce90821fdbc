use std::iter;

use super::locale::{LocaleData, MinusPosition, SymbolPosition};
use super::resolve_locale;

const MAX_FRACTION_DIGITS: u32 = 3;

/// Plain decimal numbers: grouped integer part, up to three fraction
/// digits with trailing zeros dropped.
#[derive(Debug, Clone, Copy)]
pub struct NumberFormat {
    locale: &'static LocaleData,
}

impl NumberFormat {
    pub fn new(locale: &str) -> Self {
        NumberFormat {
            locale: resolve_locale(locale),
        }
    }

    pub fn locale(&self) -> &'static str {
        self.locale.tag
    }

    pub fn format(&self, value: f64) -> String {
        format_decimal(value, 0, MAX_FRACTION_DIGITS, self.locale)
    }
}

/// Currency amounts with the currency's minor digits and the locale's
/// symbol placement.
#[derive(Debug, Clone)]
pub struct CurrencyFormat {
    locale: &'static LocaleData,
    currency: String,
    symbol: String,
    digits: u32,
}

impl CurrencyFormat {
    pub fn new(locale: &str, currency: &str) -> Self {
        let currency = currency.to_ascii_uppercase();
        CurrencyFormat {
            locale: resolve_locale(locale),
            symbol: currency_symbol(&currency).to_string(),
            digits: minor_digits(&currency),
            currency,
        }
    }

    pub fn locale(&self) -> &'static str {
        self.locale.tag
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn format(&self, value: f64) -> String {
        let amount = format_decimal(value.abs(), self.digits, self.digits, self.locale);
        let minus = if is_negative(value, self.digits) { "-" } else { "" };
        let (lead, inner) = match self.locale.minus_position {
            MinusPosition::BeforeSymbol => (minus, ""),
            MinusPosition::BeforeAmount => ("", minus),
        };
        let symbol = self.symbol.as_str();
        match self.locale.symbol_position {
            // ISO codes used as symbols are always set apart from the digits.
            SymbolPosition::Prefix if symbol.chars().all(|c| c.is_ascii_alphabetic()) => {
                format!("{lead}{symbol}\u{a0}{inner}{amount}")
            }
            SymbolPosition::Prefix => format!("{lead}{symbol}{inner}{amount}"),
            SymbolPosition::PrefixSpaced => format!("{lead}{symbol}\u{a0}{inner}{amount}"),
            SymbolPosition::SuffixSpaced => format!("{minus}{amount}\u{a0}{symbol}"),
        }
    }
}

fn currency_symbol(code: &str) -> &str {
    match code {
        "EUR" => "€",
        "USD" => "$",
        "GBP" => "£",
        "JPY" => "¥",
        other => other,
    }
}

fn minor_digits(code: &str) -> u32 {
    match code {
        "JPY" | "KRW" => 0,
        _ => 2,
    }
}

/// Integer and fraction digits of `|value|` rounded half away from zero to
/// `digits` places. Rounding works on the shortest decimal form of the
/// value, so 1.005 rounds up to 1.01.
fn round_digits(value: f64, digits: u32) -> (String, String) {
    let repr = value.abs().to_string();
    let (integer, fraction) = repr.split_once('.').unwrap_or((repr.as_str(), ""));
    let digits = digits as usize;

    let mut kept: Vec<u8> = integer.bytes().collect();
    kept.extend(fraction.bytes().chain(iter::repeat(b'0')).take(digits));
    if fraction.as_bytes().get(digits).is_some_and(|&d| d >= b'5') {
        increment(&mut kept);
    }

    let fraction = kept.split_off(kept.len() - digits);
    let text = |bytes: &[u8]| bytes.iter().map(|&b| b as char).collect::<String>();
    (text(&kept), text(&fraction))
}

fn increment(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

/// `value` rounded half away from zero to `digits` fraction digits.
pub(crate) fn round_half_expand(value: f64, digits: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let (integer, fraction) = round_digits(value, digits);
    let sign = if value < 0.0 { "-" } else { "" };
    let text = if fraction.is_empty() {
        format!("{sign}{integer}")
    } else {
        format!("{sign}{integer}.{fraction}")
    };
    text.parse().unwrap_or(value)
}

/// Whether `value` stays negative after rounding to `digits`.
fn is_negative(value: f64, digits: u32) -> bool {
    if value >= 0.0 || value.is_nan() {
        return false;
    }
    if value.is_infinite() {
        return true;
    }
    let (integer, fraction) = round_digits(value, digits);
    integer.bytes().chain(fraction.bytes()).any(|d| d != b'0')
}

/// Round half away from zero to `max_digits`, then drop trailing zeros
/// down to `min_digits`.
pub(crate) fn format_decimal(value: f64, min_digits: u32, max_digits: u32, locale: &LocaleData) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    let sign = if is_negative(value, max_digits) { "-" } else { "" };
    if value.is_infinite() {
        return format!("{sign}∞");
    }

    let (integer, mut fraction) = round_digits(value, max_digits);
    let integer = group_digits(&integer, locale.group);
    while fraction.len() > min_digits as usize && fraction.ends_with('0') {
        fraction.pop();
    }

    if fraction.is_empty() {
        format!("{sign}{integer}")
    } else {
        format!("{sign}{integer}{}{fraction}", locale.decimal)
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}
