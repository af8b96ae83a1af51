//! Catalog entities: the caller-declared commands and options a dispatch
//! cycle matches against, plus the per-cycle resolved option instances.
//!
//! Catalog entries are declared once at startup and stay read-only for the
//! lifetime of a dispatch cycle. A match never mutates the entry; it produces
//! a [`ResolvedOption`] borrowing the entry and owning the attached value, so
//! the same catalog can be reused across repeated parses.

use std::fmt;

use itertools::Itertools;

use crate::errors::HandlerResult;

/// Callback invoked for the resolved command, with the full resolved option
/// sequence as a read-only view.
pub type CommandHandler = Box<dyn Fn(&[ResolvedOption]) -> HandlerResult>;

/// Callback invoked per resolved option, with that option's attached value.
pub type OptionHandler = Box<dyn Fn(&str) -> HandlerResult>;

/// One invocable command.
pub struct CommandSpec {
    name: String,
    handler: CommandHandler,
    required: Vec<String>,
    optional: Vec<String>,
}

impl CommandSpec {
    pub fn new(
        name: impl Into<String>,
        handler: impl Fn(&[ResolvedOption]) -> HandlerResult + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            handler: Box::new(handler),
            required: Vec::new(),
            optional: Vec::new(),
        }
    }

    /// Logical option names that must be present for this command.
    /// Matching is by logical name, not by short/long textual form.
    pub fn required(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.required = names.into_iter().map(Into::into).collect();
        self
    }

    /// Option names informatively allowed. Documentation-only, not enforced.
    pub fn optional(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.optional = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn required_names(&self) -> &[String] {
        &self.required
    }

    pub fn optional_names(&self) -> &[String] {
        &self.optional
    }

    pub(crate) fn run(&self, resolved: &[ResolvedOption]) -> HandlerResult {
        (self.handler)(resolved)
    }
}

// Handlers are opaque, so Debug is manual.
impl fmt::Debug for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandSpec")
            .field("name", &self.name)
            .field("required", &self.required)
            .field("optional", &self.optional)
            .finish_non_exhaustive()
    }
}

/// One invocable option, addressable by short or long form.
pub struct OptionSpec {
    name: String,
    short: char,
    long: String,
    handler: Option<OptionHandler>,
}

impl OptionSpec {
    pub fn new(name: impl Into<String>, short: char, long: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            short,
            long: long.into(),
            handler: None,
        }
    }

    /// Attach a handler invoked with this option's resolved value.
    pub fn handler(mut self, handler: impl Fn(&str) -> HandlerResult + 'static) -> Self {
        self.handler = Some(Box::new(handler));
        self
    }

    /// Logical identifier, used for required-option matching.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn short(&self) -> char {
        self.short
    }

    pub fn long(&self) -> &str {
        &self.long
    }

    pub(crate) fn handler_ref(&self) -> Option<&OptionHandler> {
        self.handler.as_ref()
    }
}

impl fmt::Debug for OptionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionSpec")
            .field("name", &self.name)
            .field("short", &self.short)
            .field("long", &self.long)
            .field("has_handler", &self.handler.is_some())
            .finish()
    }
}

/// A catalog option entry paired with the value extracted from one specific
/// token stream (copy-on-match; the catalog entry itself is never touched).
#[derive(Debug, Clone)]
pub struct ResolvedOption<'c> {
    spec: &'c OptionSpec,
    value: String,
}

impl<'c> ResolvedOption<'c> {
    pub(crate) fn new(spec: &'c OptionSpec, value: String) -> Self {
        Self { spec, value }
    }

    /// Logical name of the matched catalog entry.
    pub fn name(&self) -> &str {
        self.spec.name()
    }

    /// Value attached from the token stream; empty if none followed.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn spec(&self) -> &'c OptionSpec {
        self.spec
    }
}

/// The static, caller-declared commands and options for a dispatch cycle.
#[derive(Debug, Default)]
pub struct Catalog {
    commands: Vec<CommandSpec>,
    options: Vec<OptionSpec>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn command(mut self, spec: CommandSpec) -> Self {
        self.commands.push(spec);
        self
    }

    pub fn option(mut self, spec: OptionSpec) -> Self {
        self.options.push(spec);
        self
    }

    pub fn commands(&self) -> &[CommandSpec] {
        &self.commands
    }

    pub fn options(&self) -> &[OptionSpec] {
        &self.options
    }

    /// Names declared more than once, commands and options separately.
    ///
    /// Duplicates are not rejected at declaration time; only the first entry
    /// is ever reachable at runtime (catalog order is caller priority).
    /// Callers that consider duplicates a mistake can reject them with this.
    pub fn duplicate_names(&self) -> Vec<String> {
        self.commands
            .iter()
            .map(CommandSpec::name)
            .duplicates()
            .chain(self.options.iter().map(OptionSpec::name).duplicates())
            .map(str::to_string)
            .collect()
    }
}
