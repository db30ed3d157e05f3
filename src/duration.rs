use crate::error::{AppError, Result};

/// Convert clock text such as `3:45` or `1:02:03` into total seconds.
/// Components are folded most-significant first: `acc * 60 + component`.
pub fn parse_duration(text: &str) -> Result<u64> {
    text.trim().split(':').try_fold(0u64, |acc, component| {
        let value = Some(component)
            .filter(|c| !c.is_empty() && c.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|c| c.parse::<u64>().ok())
            .ok_or_else(|| AppError::MalformedDuration(text.to_string()))?;
        acc.checked_mul(60)
            .and_then(|acc| acc.checked_add(value))
            .ok_or_else(|| AppError::MalformedDuration(text.to_string()))
    })
}

/// Parse the ISO-8601 durations used by structured data (`PT3M45S`, `PT1H2M3S`).
/// Fractional seconds are truncated.
pub fn parse_iso_duration(text: &str) -> Option<u64> {
    let rest = text.trim().strip_prefix("PT")?;
    if rest.is_empty() {
        return None;
    }

    let mut total = 0u64;
    let mut number = String::new();
    for c in rest.chars() {
        match c {
            '0'..='9' | '.' => number.push(c),
            'H' | 'M' | 'S' => {
                let whole = number.split('.').next()?.parse::<u64>().ok()?;
                let unit = match c {
                    'H' => 3600,
                    'M' => 60,
                    _ => 1,
                };
                total += whole * unit;
                number.clear();
            }
            _ => return None,
        }
    }

    number.is_empty().then_some(total)
}
