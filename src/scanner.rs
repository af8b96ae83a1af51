//! Option scanning: walk the remaining tokens left to right and accumulate
//! resolved option instances in first-seen order.

use tracing::debug;

use crate::catalog::{OptionSpec, ResolvedOption};
use crate::errors::{DispatchError, DispatchResult};

/// How an option-shaped token addresses the catalog after marker stripping.
#[derive(Debug, PartialEq, Eq)]
enum OptionForm<'t> {
    /// Double marker: long form only.
    Long(&'t str),
    /// Single marker: long form, or short form iff exactly one character.
    Bare(&'t str),
}

/// Classify a token. `None` means the token is not option-shaped.
fn classify(token: &str, marker: char) -> Option<OptionForm<'_>> {
    let rest = token.strip_prefix(marker)?;
    match rest.strip_prefix(marker) {
        Some(long) => Some(OptionForm::Long(long)),
        None => Some(OptionForm::Bare(rest)),
    }
}

fn matches(spec: &OptionSpec, form: &OptionForm<'_>) -> bool {
    match form {
        OptionForm::Long(name) => spec.long() == *name,
        OptionForm::Bare(name) => {
            if spec.long() == *name {
                return true;
            }
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => spec.short() == c,
                _ => false,
            }
        }
    }
}

/// Scan `tokens` (the stream after program name and command token) against the
/// option catalog.
///
/// A token is option-shaped iff it begins with `marker`. Each matched option
/// greedily attaches the immediately following token as its value, unless
/// that token is itself marker-prefixed, in which case the value is empty.
/// Bare tokens outside value attachment fail the scan.
///
/// Duplicates are retained as separate entries, positionally preserved;
/// accumulation is capped at `max_options`.
pub fn scan_options<'c>(
    options: &'c [OptionSpec],
    tokens: &[String],
    marker: char,
    max_options: usize,
) -> DispatchResult<Vec<ResolvedOption<'c>>> {
    let mut resolved: Vec<ResolvedOption<'c>> = Vec::new();
    let mut index = 0;

    while index < tokens.len() {
        let token = &tokens[index];
        let form = match classify(token, marker) {
            Some(form) => form,
            None => {
                debug!("unexpected argument: {}", token);
                return Err(DispatchError::UnexpectedArgument(token.clone()));
            }
        };

        // First match in catalog order wins.
        let spec = options
            .iter()
            .find(|o| matches(o, &form))
            .ok_or_else(|| {
                debug!("unknown option: {}", token);
                DispatchError::UnknownOption(token.clone())
            })?;

        // Greedy single-token look-ahead for the value.
        let value = match tokens.get(index + 1) {
            Some(next) if !next.starts_with(marker) => {
                index += 1;
                next.clone()
            }
            _ => String::new(),
        };

        if resolved.len() >= max_options {
            return Err(DispatchError::TooManyOptions {
                count: resolved.len() + 1,
                max: max_options,
            });
        }
        debug!("resolved option: {} = {:?}", spec.name(), value);
        resolved.push(ResolvedOption::new(spec, value));
        index += 1;
    }

    Ok(resolved)
}
