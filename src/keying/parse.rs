use super::types::TargetColor;
use std::num::ParseIntError;
use thiserror::Error;

/// Why an `r,g,b` argument was rejected
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("expected 3 comma-separated components, got {0}")]
    Arity(usize),

    #[error("component `{value}` is not an integer")]
    Component {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Parse an `r,g,b` triplet. Components may be surrounded by whitespace
/// and are not range checked.
pub fn parse_target_color(s: &str) -> Result<TargetColor, ColorParseError> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 3 {
        return Err(ColorParseError::Arity(parts.len()));
    }

    let mut channels = [0i64; 3];
    for (slot, part) in channels.iter_mut().zip(&parts) {
        let value = part.trim();
        *slot = value.parse().map_err(|source| ColorParseError::Component {
            value: value.to_string(),
            source,
        })?;
    }

    let [r, g, b] = channels;
    Ok(TargetColor::new(r, g, b))
}

/// Resolve the optional color argument, warning and falling back to
/// [`TargetColor::default`] when it cannot be parsed.
pub fn target_color_or_default(arg: Option<&str>) -> TargetColor {
    match arg.map(parse_target_color) {
        None => TargetColor::default(),
        Some(Ok(color)) => color,
        Some(Err(e)) => {
            let fallback = TargetColor::default();
            tracing::warn!(
                "Ignoring target color {:?} ({}), using default {}",
                arg.unwrap_or_default(),
                e,
                fallback
            );
            fallback
        }
    }
}
