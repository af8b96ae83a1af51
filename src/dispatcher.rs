//! The dispatcher: orchestrates one cycle from raw tokens to outcome.

use tracing::{debug, instrument};

use crate::argv::ArgSource;
use crate::catalog::Catalog;
use crate::config::Limits;
use crate::errors::{DispatchError, DispatchResult};
use crate::executor::execute;
use crate::resolver::resolve_command;
use crate::scanner::scan_options;

const DEFAULT_MARKER: char = '-';

/// Matches an argument vector against a borrowed [`Catalog`] and runs the
/// matched handlers. Stateless across cycles; the same dispatcher can be
/// reused for repeated parses.
#[derive(Debug)]
pub struct Dispatcher<'c> {
    catalog: &'c Catalog,
    limits: Limits,
    marker: char,
}

impl<'c> Dispatcher<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            limits: Limits::default(),
            marker: DEFAULT_MARKER,
        }
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Override the option marker character (default `-`).
    pub fn with_marker(mut self, marker: char) -> Self {
        self.marker = marker;
        self
    }

    /// Run one dispatch cycle.
    ///
    /// Token 0 is the program identifier and is skipped; token 1 selects the
    /// command; tokens 2.. are option/value tokens. Data flows strictly
    /// forward: resolve, scan, validate, execute. The first violation aborts
    /// the remaining stages.
    #[instrument(level = "debug", skip(self, argv))]
    pub fn dispatch(&self, argv: &[String]) -> DispatchResult<()> {
        self.check_capacity()?;

        let command = resolve_command(self.catalog.commands(), argv.get(1).map(String::as_str))?;
        let resolved = scan_options(
            self.catalog.options(),
            argv.get(2..).unwrap_or_default(),
            self.marker,
            self.limits.max_options,
        )?;
        execute(command, &resolved)
    }

    /// Run one dispatch cycle against tokens pulled from `source`.
    pub fn dispatch_from(&self, source: &impl ArgSource) -> DispatchResult<()> {
        self.dispatch(&source.args())
    }

    // Catalog bounds are configuration errors, raised before any token is
    // examined.
    fn check_capacity(&self) -> DispatchResult<()> {
        let declared = self.catalog.commands().len();
        if declared > self.limits.max_commands {
            debug!("command catalog over capacity: {}", declared);
            return Err(DispatchError::TooManyCommands {
                declared,
                max: self.limits.max_commands,
            });
        }
        let count = self.catalog.options().len();
        if count > self.limits.max_options {
            debug!("option catalog over capacity: {}", count);
            return Err(DispatchError::TooManyOptions {
                count,
                max: self.limits.max_options,
            });
        }
        Ok(())
    }
}
