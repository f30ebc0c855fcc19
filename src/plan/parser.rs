//! Command line scanning.
//!
//! Tokens are read left to right. Flag-shaped tokens are matched against
//! the [`FlagTable`] wherever they appear, the first other token is the
//! input path and every token after it is an interval.

use std::path::PathBuf;

use crate::Error;
use crate::cli::{Flag, FlagTable};

use super::{CutPlan, TimeRange};

/// Build a [`CutPlan`] from the command line tokens (program name excluded).
///
/// Parsing stops at the first bad token; no partial plan is returned.
/// Deciding that a plan without input or intervals means "show usage" is
/// left to the caller.
///
/// # Errors
///
/// Returns [`Error::UnknownOption`] for a flag-shaped token that names no
/// known flag, and the errors of [`TimeRange::parse`] for bad intervals.
pub fn parse_args<I, S>(args: I) -> Result<CutPlan, Error>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let table = FlagTable::new();
    let mut plan = CutPlan::default();

    for arg in args {
        let token = arg.as_ref();

        if is_flag_shaped(token) {
            for flag in match_flags(&table, token)? {
                plan.set(flag);
            }
            continue;
        }

        if plan.input.is_none() {
            plan.input = Some(PathBuf::from(token));
            continue;
        }

        plan.ranges.push(TimeRange::parse(token)?);
    }

    Ok(plan)
}

/// A dash followed by anything but a digit. `-` alone and `-0:30` are not
/// flags.
fn is_flag_shaped(token: &str) -> bool {
    let mut chars = token.chars();
    chars.next() == Some('-') && chars.next().is_some_and(|c| !c.is_ascii_digit())
}

/// Resolve a flag-shaped token to the flags it sets. A combined short
/// token only succeeds if every character is a known flag.
fn match_flags(table: &FlagTable, token: &str) -> Result<Vec<Flag>, Error> {
    let unknown = || Error::UnknownOption {
        token: token.to_string(),
    };

    if let Some(name) = token.strip_prefix("--") {
        return table.long(name).map(|flag| vec![flag]).ok_or_else(unknown);
    }

    token
        .chars()
        .skip(1)
        .map(|c| table.short(c).ok_or_else(unknown))
        .collect()
}
