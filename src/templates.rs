//! Formatting helpers exposed to Tera templates.
//!
//! ```text
//! {{ total | format_number }}
//! {{ token.total_supply | format_supply(decimals=token.decimals) }}
//! {{ wallet.address | format_address(start=6, end=4) }}
//! {{ calculate_percentage(part=type_stats.wallet, total=total_wallets) }}%
//! ```
//!
//! None of these helpers fail a render: values of the wrong type fall back the
//! same way the underlying functions do.

use std::collections::HashMap;

use tera::{Tera, Value};

use crate::formatting::{
    ADDRESS_PREFIX_LEN, ADDRESS_SUFFIX_LEN, Numeric, calculate_percentage, format_address,
    format_file_size, format_number, format_supply,
};

fn numeric(value: &Value) -> Numeric {
    match value {
        Value::Number(number) => match (number.as_i64(), number.as_u64()) {
            (Some(n), _) => Numeric::from(n),
            (None, Some(n)) => Numeric::from(n),
            (None, None) => Numeric::Float(number.as_f64().unwrap_or(f64::NAN)),
        },
        Value::String(text) => Numeric::Text(text.clone()),
        other => Numeric::Text(other.to_string()),
    }
}

fn text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn int_arg(args: &HashMap<String, Value>, name: &str) -> Option<i64> {
    args.get(name).and_then(|value| match value {
        Value::String(text) => text.trim().parse().ok(),
        other => other.as_i64(),
    })
}

fn float_arg(args: &HashMap<String, Value>, name: &str) -> Option<f64> {
    args.get(name).and_then(|value| match value {
        Value::String(text) => text.trim().parse().ok(),
        other => other.as_f64(),
    })
}

fn format_number_filter(value: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    Ok(Value::String(format_number(numeric(value))))
}

fn format_supply_filter(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let decimals = int_arg(args, "decimals")
        .and_then(|d| i32::try_from(d).ok())
        .unwrap_or(0);
    Ok(Value::String(format_supply(&text(value), decimals)))
}

fn format_address_filter(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let length = |name: &str, default: usize| {
        int_arg(args, name)
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(default)
    };
    let start = length("start", ADDRESS_PREFIX_LEN);
    let end = length("end", ADDRESS_SUFFIX_LEN);
    Ok(Value::String(format_address(&text(value), start, end)))
}

fn format_file_size_filter(value: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    Ok(Value::String(format_file_size(numeric(value))))
}

fn calculate_percentage_function(args: &HashMap<String, Value>) -> tera::Result<Value> {
    let percentage = match (float_arg(args, "part"), float_arg(args, "total")) {
        (Some(part), Some(total)) => calculate_percentage(part, total),
        _ => 0.0,
    };
    Ok(Value::from(percentage))
}

/// Registers the dashboard formatting filters and functions on `tera`.
pub fn register_helpers(tera: &mut Tera) {
    tera.register_filter("format_number", format_number_filter);
    tera.register_filter("format_supply", format_supply_filter);
    tera.register_filter("format_address", format_address_filter);
    tera.register_filter("format_file_size", format_file_size_filter);
    tera.register_function("calculate_percentage", calculate_percentage_function);
}
