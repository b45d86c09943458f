// ============================================================================
// Number Formatter
// Locale digit grouping for integers and fixed-point decimals
// ============================================================================

use crate::domain::{DecimalValue, GroupingConfig};
use crate::numeric::{RenderError, RenderResult};

/// Delimiter between integer and fractional segments in a stored decimal
const STORED_DECIMAL_POINT: char = '.';

/// Insert the group separator into a run of ASCII digits, counting from the right.
fn group_digits(digits: &str, grouping: &GroupingConfig) -> String {
    let len = digits.len();
    let size = grouping.group_size.max(1);
    let mut out = String::with_capacity(len + len / size);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % size == 0 {
            out.push(grouping.separator);
        }
        out.push(c);
    }

    out
}

/// Render an unsigned integer with digit grouping, e.g. `1234567` -> `1,234,567`.
pub fn format_unsigned(value: u128, grouping: &GroupingConfig) -> String {
    group_digits(&value.to_string(), grouping)
}

/// Render a signed integer with digit grouping; the sign stays outside the groups.
pub fn format_integer(value: i64, grouping: &GroupingConfig) -> String {
    let grouped = format_unsigned(u128::from(value.unsigned_abs()), grouping);
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Render a decimal: the integer segment is grouped, the fractional segment
/// is appended verbatim after the locale decimal point.
///
/// The stored value always uses `.`; only the output follows the locale.
///
/// # Errors
/// - `EmptyInput` for an empty backing string
/// - `MalformedDecimal` unless there is exactly one delimiter
/// - `Parse` if the integer segment is not a valid i64
pub fn format_decimal(value: &DecimalValue, grouping: &GroupingConfig) -> RenderResult<String> {
    let repr = value.as_str();
    if repr.is_empty() {
        return Err(RenderError::EmptyInput);
    }

    let segments: Vec<&str> = repr.split(STORED_DECIMAL_POINT).collect();
    let &[int_part, frac_part] = segments.as_slice() else {
        return Err(RenderError::MalformedDecimal(repr.to_string()));
    };

    let int_val: i64 = int_part
        .parse()
        .map_err(|_| RenderError::Parse(int_part.to_string()))?;

    let mut out = String::with_capacity(repr.len() + repr.len() / 3);
    // "-0.5" parses its integer segment to 0; keep the sign
    if int_val == 0 && int_part.starts_with('-') {
        out.push('-');
    }
    out.push_str(&format_integer(int_val, grouping));
    out.push(grouping.decimal_point);
    out.push_str(frac_part);
    Ok(out)
}
