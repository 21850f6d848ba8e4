use bigdecimal::{num_bigint::BigInt, BigDecimal};
use chrono::{Local, TimeZone};

use crate::model::MemoryLevel;

/// Token amounts travel as integers with this many implied decimals (e8s).
pub const TOKEN_DECIMALS: u32 = 8;
pub const TOKEN_SCALE: u64 = 10_u64.pow(TOKEN_DECIMALS);

pub const MIN_FRACTION_DIGITS: usize = 2;

/// Canister timestamps are nanoseconds since epoch.
pub const NANOS_PER_MILLI: i64 = 1_000_000;

const DATE_TIME_FORMAT: &str = "%m/%d/%Y, %I:%M:%S %p";
const TIME_LABEL_FORMAT: &str = "%H:%M:%S";

pub fn token_amount(raw: u64) -> BigDecimal {
    BigDecimal::new(BigInt::from(raw), TOKEN_DECIMALS.into())
}

/// Formats an e8s amount with grouping separators and 2 to 8 fraction
/// digits, e.g. `25000000000` -> `"250.00"`.
pub fn format_token_amount(raw: u64) -> String {
    let whole = raw / TOKEN_SCALE;
    let fraction = raw % TOKEN_SCALE;
    let mut digits =
        format!("{:0width$}", fraction, width = TOKEN_DECIMALS as usize);

    while digits.len() > MIN_FRACTION_DIGITS && digits.ends_with('0') {
        digits.pop();
    }

    format!("{}.{}", group_digits(whole), digits)
}

pub fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, c) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}

pub fn nanos_to_millis(nanos: i64) -> i64 {
    nanos / NANOS_PER_MILLI
}

/// Zero or negative canister times mean "never happened".
pub fn optional_millis(nanos: i64) -> Option<i64> {
    if nanos > 0 {
        Some(nanos_to_millis(nanos))
    } else {
        None
    }
}

pub fn format_timestamp(millis: i64) -> Option<String> {
    format_timestamp_in(millis, &Local)
}

pub fn format_timestamp_in<Tz: TimeZone>(millis: i64, tz: &Tz) -> Option<String>
where
    Tz::Offset: std::fmt::Display,
{
    tz.timestamp_millis_opt(millis)
        .single()
        .map(|date| date.format(DATE_TIME_FORMAT).to_string())
}

pub fn format_time_label(millis: i64) -> String {
    format_time_label_in(millis, &Local)
}

pub fn format_time_label_in<Tz: TimeZone>(millis: i64, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    tz.timestamp_millis_opt(millis)
        .single()
        .map(|date| date.format(TIME_LABEL_FORMAT).to_string())
        .unwrap_or_else(|| String::from("--:--:--"))
}

/// `current / peak` as a whole percentage. A zero peak yields 0.
pub fn compute_percentage(current: u64, peak: u64) -> u8 {
    if peak == 0 {
        return 0;
    }

    let percentage = (current as f64 / peak as f64 * 100.0).round();
    percentage.clamp(0.0, 100.0) as u8
}

pub fn clamp_percentage(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 100.0)
}

pub fn memory_level(percentage: u8, warning: u8, critical: u8) -> MemoryLevel {
    if percentage >= critical {
        MemoryLevel::Critical
    } else if percentage >= warning {
        MemoryLevel::Warning
    } else {
        MemoryLevel::Normal
    }
}

/// `abcdef...wxyz` for display; short addresses are returned as-is.
pub fn truncate_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 10 {
        return address.to_owned();
    }

    let start: String = chars[..6].iter().collect();
    let end: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", start, end)
}
