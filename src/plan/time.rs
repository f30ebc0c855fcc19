//! Time values and interval tokens.

use std::fmt;

use crate::Error;

/// Maximum number of colon-separated fields in a time value (`H:MM:SS`).
const MAX_FIELDS: usize = 3;

/// Maximum number of digits in a single field.
const MAX_FIELD_DIGITS: usize = 2;

/// A timestamp in one of the accepted shapes: `H:MM:SS`, `M:SS` or a bare
/// number, each field one or two ASCII digits.
///
/// Only the shape is checked. `9:99` is a valid time value; the text is
/// handed to the media tool exactly as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeValue(String);

impl TimeValue {
    /// Validate `s` and wrap it, or return `None` if the shape is wrong.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let fields: Vec<&str> = s.split(':').collect();
        if fields.len() > MAX_FIELDS {
            return None;
        }

        let well_formed = fields.iter().all(|field| {
            (1..=MAX_FIELD_DIGITS).contains(&field.len())
                && field.bytes().all(|b| b.is_ascii_digit())
        });

        well_formed.then(|| Self(s.to_string()))
    }

    /// The value as written on the command line.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Total seconds, reading the fields right to left as seconds, minutes
    /// and hours.
    #[must_use]
    pub fn as_seconds(&self) -> u32 {
        self.0
            .split(':')
            .fold(0, |total, field| total * 60 + field.parse::<u32>().unwrap_or(0))
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One interval to extract. A missing bound means "from the start" or
/// "to the end" of the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeRange {
    /// Start bound.
    pub from: Option<TimeValue>,
    /// End bound.
    pub to: Option<TimeValue>,
}

impl TimeRange {
    /// Parse an interval token: `<from>-<to>`, `<from>-`, `-<to>`, `-` or a
    /// bare `<from>` with no dash at all.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInterval`] if the token has two or more
    /// dashes, and [`Error::InvalidStartTime`] / [`Error::InvalidEndTime`]
    /// if a non-empty component is not a time value.
    pub fn parse(token: &str) -> Result<Self, Error> {
        let (from, to) = match token.matches('-').count() {
            // A lone value is a start bound and must be present.
            0 => {
                return TimeValue::parse(token)
                    .map(|from| Self {
                        from: Some(from),
                        to: None,
                    })
                    .ok_or_else(|| Error::InvalidStartTime {
                        value: token.to_string(),
                        token: token.to_string(),
                    });
            }
            1 => token.split_once('-').unwrap_or((token, "")),
            _ => {
                return Err(Error::InvalidInterval {
                    token: token.to_string(),
                });
            }
        };

        let from = parse_bound(from).map_err(|value| Error::InvalidStartTime {
            value,
            token: token.to_string(),
        })?;
        let to = parse_bound(to).map_err(|value| Error::InvalidEndTime {
            value,
            token: token.to_string(),
        })?;

        Ok(Self { from, to })
    }

    /// Whether both bounds are present and the start lies after the end.
    #[must_use]
    pub fn is_reversed(&self) -> bool {
        match (&self.from, &self.to) {
            (Some(from), Some(to)) => from.as_seconds() > to.as_seconds(),
            _ => false,
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(from) = &self.from {
            write!(f, "{from}")?;
        }
        f.write_str("-")?;
        if let Some(to) = &self.to {
            write!(f, "{to}")?;
        }
        Ok(())
    }
}

/// Empty components are absent bounds; anything else must be a time value.
fn parse_bound(component: &str) -> Result<Option<TimeValue>, String> {
    if component.is_empty() {
        return Ok(None);
    }
    TimeValue::parse(component)
        .map(Some)
        .ok_or_else(|| component.to_string())
}
