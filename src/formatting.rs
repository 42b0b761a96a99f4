//! Display formatting for numbers, token supplies, addresses and sizes.
//!
//! Every function here is fail-soft: malformed input is logged at warning
//! level and echoed back in its string form instead of producing an error.

use std::fmt::{Display, Formatter};

use alloy_primitives::U256;

use crate::errors::ParseError;

/// Characters kept at the start of a shortened address.
pub const ADDRESS_PREFIX_LEN: usize = 6;
/// Characters kept at the end of a shortened address.
pub const ADDRESS_SUFFIX_LEN: usize = 4;

const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Raw numeric input as it arrives from a request, a database row or a template.
#[derive(Clone, Debug, PartialEq)]
pub enum Numeric {
    Int(i128),
    Float(f64),
    Text(String),
}

macro_rules! numeric_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Numeric {
                fn from(value: $ty) -> Self {
                    Numeric::Int(value as i128)
                }
            }
        )*
    };
}

numeric_from_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64, usize, isize);

impl From<f64> for Numeric {
    fn from(value: f64) -> Self {
        Numeric::Float(value)
    }
}

impl From<f32> for Numeric {
    fn from(value: f32) -> Self {
        Numeric::Float(f64::from(value))
    }
}

impl From<&str> for Numeric {
    fn from(value: &str) -> Self {
        Numeric::Text(value.to_string())
    }
}

impl From<String> for Numeric {
    fn from(value: String) -> Self {
        Numeric::Text(value)
    }
}

impl From<&String> for Numeric {
    fn from(value: &String) -> Self {
        Numeric::Text(value.clone())
    }
}

impl Display for Numeric {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Numeric::Int(value) => write!(f, "{value}"),
            Numeric::Float(value) => write!(f, "{value}"),
            Numeric::Text(value) => write!(f, "{value}"),
        }
    }
}

/// A [`Numeric`] after parsing: either integral or floating.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Int(i128),
    /// Integer text too wide for `i128`, such as an ERC-20 supply near `2^256`.
    Wide { negative: bool, magnitude: U256 },
    Float(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(value) => value as f64,
            Number::Wide {
                negative,
                magnitude,
            } => {
                let value = magnitude.to_string().parse::<f64>().unwrap_or(f64::INFINITY);
                if negative { -value } else { value }
            }
            Number::Float(value) => value,
        }
    }
}

/// Parses decimal integer text of up to 256 bits, with an optional sign.
fn parse_integer_text(text: &str) -> Option<Number> {
    if let Ok(value) = text.parse::<i128>() {
        return Some(Number::Int(value));
    }
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    U256::from_str_radix(digits, 10)
        .ok()
        .map(|magnitude| Number::Wide {
            negative,
            magnitude,
        })
}

impl Numeric {
    /// Parses the value. Text containing a `.` is read as floating point,
    /// anything else as an integer.
    pub fn parse(&self) -> Result<Number, ParseError> {
        match self {
            Numeric::Int(value) => Ok(Number::Int(*value)),
            Numeric::Float(value) => Ok(Number::Float(*value)),
            Numeric::Text(text) => {
                let trimmed = text.trim();
                let parsed = if trimmed.contains('.') {
                    trimmed.parse::<f64>().ok().map(Number::Float)
                } else {
                    parse_integer_text(trimmed)
                };
                parsed.ok_or_else(|| ParseError::InvalidNumber(text.clone()))
            }
        }
    }
}

/// Inserts `,` every three digits of an unsigned digit run.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

fn format_int(value: i128) -> String {
    let grouped = group_thousands(&value.unsigned_abs().to_string());
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn format_wide(negative: bool, magnitude: U256) -> String {
    let grouped = group_thousands(&magnitude.to_string());
    if negative && !magnitude.is_zero() {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn format_float(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rendered = format!("{value:.2}");
    let (sign, unsigned) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));
    format!("{sign}{}.{frac_part}", group_thousands(int_part))
}

fn format_parsed(number: Number) -> String {
    match number {
        Number::Int(n) => format_int(n),
        Number::Wide {
            negative,
            magnitude,
        } => format_wide(negative, magnitude),
        Number::Float(f) => format_float(f),
    }
}

/// Formats a number with thousands separators.
///
/// Integers render without a fraction, floating values with exactly two
/// fraction digits. Unparseable text is returned unchanged.
pub fn format_number(value: impl Into<Numeric>) -> String {
    let value = value.into();
    match value.parse() {
        Ok(number) => format_parsed(number),
        Err(err) => {
            log::warn!("{err}");
            value.to_string()
        }
    }
}

fn try_format_supply(supply: &str, decimals: i32) -> Result<String, ParseError> {
    let raw = parse_integer_text(supply.trim())
        .ok_or_else(|| ParseError::InvalidSupply(supply.to_string()))?;

    if decimals <= 0 {
        return Ok(format_parsed(raw));
    }

    let amount = raw.as_f64() / 10f64.powi(decimals);
    let formatted = if amount >= 1_000_000_000.0 {
        format!("{:.1}B", amount / 1_000_000_000.0)
    } else if amount >= 1_000_000.0 {
        format!("{:.1}M", amount / 1_000_000.0)
    } else if amount >= 1_000.0 {
        format!("{:.1}K", amount / 1_000.0)
    } else {
        format!("{amount:.2}")
    };
    Ok(formatted)
}

/// Formats a raw on-chain token supply into a human amount (`1.5M`, `12.0K`, `3.25`).
///
/// With `decimals <= 0` the supply is only grouped by thousands.
pub fn format_supply(supply: &str, decimals: i32) -> String {
    try_format_supply(supply, decimals).unwrap_or_else(|err| {
        log::warn!("{err}");
        supply.to_string()
    })
}

/// Shortens an address to `prefix...suffix` for narrow layouts.
///
/// Addresses no longer than `start + end` characters are returned as-is.
pub fn format_address(address: &str, start: usize, end: usize) -> String {
    let len = address.chars().count();
    if address.is_empty() || len <= start + end {
        return address.to_string();
    }
    let head: String = address.chars().take(start).collect();
    let tail: String = address.chars().skip(len - end).collect();
    format!("{head}...{tail}")
}

/// Percentage of `part` in `total`, rounded to one decimal with ties to even.
/// Non-positive totals yield `0.0`.
pub fn calculate_percentage(part: f64, total: f64) -> f64 {
    if !total.is_finite() || total <= 0.0 {
        return 0.0;
    }
    let percentage = (part / total * 1000.0).round_ties_even() / 10.0;
    if percentage.is_finite() { percentage } else { 0.0 }
}

/// Formats a byte count with the largest fitting binary unit (`1.5 MB`).
pub fn format_file_size(bytes: impl Into<Numeric>) -> String {
    let bytes = bytes.into();
    let size = match bytes.parse() {
        Ok(number) => number.as_f64(),
        Err(_) => {
            log::warn!("{}", ParseError::InvalidSize(bytes.to_string()));
            return bytes.to_string();
        }
    };

    if size.is_nan() || size <= 0.0 {
        return "0 B".to_string();
    }

    let mut scaled = size;
    let mut index = 0;
    while scaled >= 1024.0 && index < SIZE_UNITS.len() - 1 {
        scaled /= 1024.0;
        index += 1;
    }

    format!("{scaled:.1} {}", SIZE_UNITS[index])
}
