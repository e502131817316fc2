//! Display and formatting utilities for Farmstead.
//!
//! This module provides the number formatting shared by every report line
//! and the functions that assemble and print the final farm report.

use crate::farm::Farm;

/// Significant digits kept when printing a number.
const SIGNIFICANT_DIGITS: usize = 6;

/// Formats a number for a report line.
///
/// Numbers are rounded to six significant digits and trailing zeros are
/// dropped, so whole values print without a decimal point. Values below
/// `1e-4` or from `1e6` upwards switch to scientific notation with a signed,
/// two-digit exponent.
///
/// # Arguments
///
/// * `value` - The number to format
///
/// # Returns
///
/// A formatted string like "10", "2.5", "9.32" or "1.5e+06"
///
/// # Example
///
/// ```
/// use farmstead::display::format_number;
///
/// assert_eq!(format_number(10.0), "10");
/// assert_eq!(format_number(186.4 * 0.05), "9.32");
/// assert_eq!(format_number(1500000.0), "1.5e+06");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Rounding to the kept digits first decides which notation applies.
    let scientific = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            strip_trailing_zeros(mantissa),
            sign,
            exponent.abs()
        )
    } else {
        let decimals = (SIGNIFICANT_DIGITS as i32 - 1 - exponent) as usize;
        strip_trailing_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn strip_trailing_zeros(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

/// Builds the complete report: the rendered farm followed by the total
/// yield line.
///
/// # Example
///
/// ```
/// use farmstead::display::format_report;
/// use farmstead::farm::Farm;
///
/// let farm = Farm::new();
/// assert_eq!(
///     format_report(&farm),
///     "Farm Details:\nThe farm is empty!\n\nTotal Farm Yield: 0 units\n"
/// );
/// ```
pub fn format_report(farm: &Farm<'_>) -> String {
    format!(
        "{}\nTotal Farm Yield: {} units\n",
        farm.render(),
        format_number(farm.total_farm_yield())
    )
}

/// Prints the complete farm report to stdout.
pub fn display_report(farm: &Farm<'_>) {
    print!("{}", format_report(farm));
}
