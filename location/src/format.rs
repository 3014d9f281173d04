//! Format templates for locations.
//!
//! A template is literal text with placeholders:
//!
//! | Placeholder | Output                                 |
//! |-------------|----------------------------------------|
//! | `{lat}`     | latitude, shortest exact decimal       |
//! | `{lon}`     | longitude, shortest exact decimal      |
//! | `{lat:.N}`  | latitude with `N` fractional digits    |
//! | `{lon:.N}`  | longitude with `N` fractional digits   |
//! | `{{`, `}}`  | a literal brace                        |

use std::io::Write;

use crate::Location;
use crate::error::LocationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    Lat,
    Lon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Piece<'a> {
    Literal(&'a str),
    Value {
        field: Field,
        precision: Option<usize>,
    },
}

/// Split a template into literal text and placeholders.
pub(crate) fn parse(template: &str) -> Result<Vec<Piece<'_>>, LocationError> {
    let mut pieces = Vec::new();
    let mut rest = template;
    let mut offset = 0;

    while let Some(i) = rest.find(['{', '}']) {
        if i > 0 {
            pieces.push(Piece::Literal(&rest[..i]));
        }

        let brace = &rest[i..i + 1];
        let after = &rest[i + 1..];

        let consumed = if after.starts_with(brace) {
            pieces.push(Piece::Literal(brace));
            i + 2
        } else if brace == "}" {
            return Err(LocationError::UnmatchedBrace { at: offset + i });
        } else {
            let close = after
                .find('}')
                .ok_or(LocationError::UnclosedPlaceholder { at: offset + i })?;
            pieces.push(parse_placeholder(&after[..close])?);
            i + 1 + close + 1
        };

        offset += consumed;
        rest = &rest[consumed..];
    }

    if !rest.is_empty() {
        pieces.push(Piece::Literal(rest));
    }

    Ok(pieces)
}

fn parse_placeholder(spec: &str) -> Result<Piece<'static>, LocationError> {
    let (name, precision) = match spec.split_once(':') {
        Some((name, precision)) => {
            let digits = precision
                .strip_prefix('.')
                .filter(|d| !d.is_empty() && d.bytes().all(|b| b.is_ascii_digit()))
                .ok_or_else(|| LocationError::InvalidPrecision(precision.to_string()))?;
            let precision = digits
                .parse::<usize>()
                .map_err(|_| LocationError::InvalidPrecision(precision.to_string()))?;
            (name, Some(precision))
        }
        None => (spec, None),
    };

    let field = match name {
        "lat" => Field::Lat,
        "lon" => Field::Lon,
        other => return Err(LocationError::UnknownField(other.to_string())),
    };

    Ok(Piece::Value { field, precision })
}

/// Write pre-parsed `pieces` for `loc`.
pub(crate) fn render(
    out: &mut dyn Write,
    pieces: &[Piece<'_>],
    loc: &Location,
) -> std::io::Result<()> {
    for piece in pieces {
        match *piece {
            Piece::Literal(text) => out.write_all(text.as_bytes())?,
            Piece::Value { field, precision } => {
                let value = match field {
                    Field::Lat => loc.lat(),
                    Field::Lon => loc.lon(),
                };
                match precision {
                    Some(digits) => write!(out, "{value:.digits$}")?,
                    None => write!(out, "{value}")?,
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show(template: &str, lat: f64, lon: f64) -> String {
        let loc = Location::new(lat, lon).unwrap();
        let mut out = Vec::new();
        loc.write_with(&mut out, template).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parses_pieces() {
        assert_eq!(
            parse("at {lat:.3}, {lon}").unwrap(),
            vec![
                Piece::Literal("at "),
                Piece::Value {
                    field: Field::Lat,
                    precision: Some(3)
                },
                Piece::Literal(", "),
                Piece::Value {
                    field: Field::Lon,
                    precision: None
                },
            ]
        );
        assert!(parse("").unwrap().is_empty());
        assert_eq!(parse("{{}}").unwrap(), vec![Piece::Literal("{"), Piece::Literal("}")]);
    }

    #[test]
    fn renders_values() {
        assert_eq!(show("{lat} {lon}", 41.5, -72.0), "41.5 -72");
        assert_eq!(show("{lat:.2},{lon:.0}", 1.0 / 3.0, 10.6), "0.33,11");
        assert_eq!(show("no placeholders\n", 0.0, 0.0), "no placeholders\n");
    }

    #[test]
    fn reports_template_errors() {
        assert!(matches!(
            parse("({lat"),
            Err(LocationError::UnclosedPlaceholder { at: 1 })
        ));
        assert!(matches!(
            parse("ab}c"),
            Err(LocationError::UnmatchedBrace { at: 2 })
        ));
        assert!(matches!(
            parse("{{x}} {alt}"),
            Err(LocationError::UnknownField(name)) if name == "alt"
        ));
        assert!(matches!(
            parse("{lat:3}"),
            Err(LocationError::InvalidPrecision(p)) if p == "3"
        ));
        assert!(matches!(
            parse("{lon:.}"),
            Err(LocationError::InvalidPrecision(_))
        ));
    }

    #[test]
    fn error_offsets_count_from_template_start() {
        assert!(matches!(
            parse("{lat} } "),
            Err(LocationError::UnmatchedBrace { at: 6 })
        ));
    }
}
