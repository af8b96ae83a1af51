//! Command resolution: match the first post-program token against the
//! declared command catalog.

use tracing::debug;

use crate::catalog::CommandSpec;
use crate::errors::{DispatchError, DispatchResult};

/// Resolve the command token against the catalog.
///
/// Exact, case-sensitive, first-match-wins scan in catalog order. Catalog
/// order is caller-determined priority: duplicate names are representable,
/// but only the first is ever reachable.
///
/// Pure lookup, no side effects beyond a debug trace.
pub fn resolve_command<'c>(
    commands: &'c [CommandSpec],
    token: Option<&str>,
) -> DispatchResult<&'c CommandSpec> {
    let token = token.ok_or(DispatchError::NoArgsProvided)?;

    match commands.iter().find(|c| c.name() == token) {
        Some(command) => {
            debug!("resolved command: {}", command.name());
            Ok(command)
        }
        None => {
            debug!("unknown command: {}", token);
            Err(DispatchError::UnknownCommand(token.to_string()))
        }
    }
}
