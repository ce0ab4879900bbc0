//! Display formatting for byte sizes, gas prices and counts.

use crate::utils::config::WEI_PER_GWEI;

const BYTE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
const BYTE_SCALE: f64 = 1024.0;

/// Format a byte count with base-1024 units
///
/// Picks the largest unit where the scaled value is at least 1 and rounds
/// to two decimals. Plain bytes are shown without decimals.
///
/// ```ignore
/// assert_eq!(format_bytes(0), "0 B");
/// assert_eq!(format_bytes(1024), "1.00 KB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= BYTE_SCALE && unit < BYTE_UNITS.len() - 1 {
        value /= BYTE_SCALE;
        unit += 1;
    }

    if unit == 0 {
        format!("{} {}", bytes, BYTE_UNITS[0])
    } else {
        format!("{:.2} {}", value, BYTE_UNITS[unit])
    }
}

/// Format a price given in wei as Gwei with adaptive precision
///
/// Below 0.001 Gwei six decimals are shown, below 1 Gwei four, otherwise two.
pub fn format_gwei(wei: f64) -> String {
    if wei == 0.0 || !wei.is_finite() {
        return "0 Gwei".to_string();
    }

    let gwei = wei / WEI_PER_GWEI;
    if gwei < 0.001 {
        format!("{:.6} Gwei", gwei)
    } else if gwei < 1.0 {
        format!("{:.4} Gwei", gwei)
    } else {
        format!("{:.2} Gwei", gwei)
    }
}

/// Format an integer with `,` thousands separators (en-US grouping)
pub fn format_number(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Format an average with two decimals
pub fn format_avg(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    format!("{:.2}", value)
}
