/// Resistance display and parsing with metric prefixes.
///
/// Display follows the usual bench notation: `220Ω`, `4.7kΩ`, `1MΩ`.
/// Parsing additionally accepts the RKM style where the prefix letter stands
/// in for the decimal point (`4k7` = 4.7kΩ, `2R2` = 2.2Ω).
use super::errors::DividerError;

/// Ohm sign appended to every formatted value.
pub const OHM: char = '\u{2126}';

/// Format a resistance with a `k` or `M` prefix.
///
/// Whole numbers print without a decimal point. Fractions print with the
/// shortest representation that round-trips, without fixed precision.
#[must_use]
pub fn ohms(r: f64) -> String {
    let (scaled, prefix) = if r < 1_000.0 {
        (r, "")
    } else if r < 1_000_000.0 {
        (r / 1_000.0, "k")
    } else {
        (r / 1_000_000.0, "M")
    };
    // `Display` for f64 already drops the ".0" of whole numbers.
    format!("{scaled}{prefix}{OHM}")
}

/// Parse a resistance such as `220`, `220R`, `4.7k`, `4k7`, `1M` or `10kΩ`.
///
/// The prefix is applied by rewriting the number into exponent notation, so
/// `2.2k` is parsed as `2.2e3` and comes out as exactly `2200.0`.
///
/// # Errors
///
/// Returns `DividerError::InvalidResistance` if the text is not a number with
/// an optional prefix and unit, or if the value is not finite and positive.
pub fn parse_ohms(text: &str) -> Result<f64, DividerError> {
    let invalid = |reason: &str| DividerError::InvalidResistance {
        value: text.to_owned(),
        reason: reason.to_owned(),
    };

    let body = strip_unit(text.trim());
    if body.is_empty() {
        return Err(invalid("empty value"));
    }

    let prefix = body
        .char_indices()
        .find_map(|(i, c)| prefix_exponent(c).map(|e| (i, c, e)));

    let literal = match prefix {
        None => body.to_owned(),
        Some((i, c, exp)) => {
            let whole = &body[..i];
            let rest = &body[i + c.len_utf8()..];
            if whole.is_empty() {
                return Err(invalid("missing digits before prefix"));
            }
            if rest.is_empty() {
                format!("{whole}e{exp}")
            } else if whole.contains('.') || !rest.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid("prefix used as decimal point must sit between digits"));
            } else {
                format!("{whole}.{rest}e{exp}")
            }
        }
    };

    let value: f64 = literal.parse().map_err(|_| invalid("not a number"))?;
    if !value.is_finite() || value <= 0.0 {
        return Err(invalid("resistance must be finite and positive"));
    }
    Ok(value)
}

/// Drop a trailing ohm sign, Greek capital omega, `ohm` or `ohms`.
fn strip_unit(text: &str) -> &str {
    if let Some(stripped) = text.strip_suffix([OHM, '\u{3a9}']) {
        return stripped.trim_end();
    }
    let lower = text.to_ascii_lowercase();
    for unit in ["ohms", "ohm"] {
        if lower.ends_with(unit) {
            return text[..text.len() - unit.len()].trim_end();
        }
    }
    text
}

/// Power of ten for a metric prefix letter.
fn prefix_exponent(c: char) -> Option<u8> {
    match c {
        'R' | 'r' => Some(0),
        'k' | 'K' => Some(3),
        'M' => Some(6),
        _ => None,
    }
}
