//! Validation and handler execution for a resolved dispatch cycle.

use tracing::debug;

use crate::catalog::{CommandSpec, ResolvedOption};
use crate::errors::{DispatchError, DispatchResult};

/// Validate the required-option constraint, then run the command handler and
/// the handlers of the resolved options.
///
/// Required names are checked in the command's declared order; the first
/// missing one halts the cycle. The command handler runs before any option
/// handler, and a failing command handler prevents all of them. Option
/// handlers run in accumulation order; the first failure halts the rest.
/// There is no rollback of handlers that already ran.
pub fn execute(command: &CommandSpec, resolved: &[ResolvedOption]) -> DispatchResult<()> {
    validate_required(command, resolved)?;

    debug!("executing command: {}", command.name());
    command.run(resolved)?;

    for option in resolved {
        if let Some(handler) = option.spec().handler_ref() {
            debug!("executing option handler: {} = {:?}", option.name(), option.value());
            handler(option.value())?;
        }
    }
    Ok(())
}

fn validate_required(command: &CommandSpec, resolved: &[ResolvedOption]) -> DispatchResult<()> {
    for name in command.required_names() {
        if !resolved.iter().any(|r| r.name() == name) {
            debug!("missing required option: {}", name);
            return Err(DispatchError::MissingRequiredOption(name.clone()));
        }
    }
    Ok(())
}
