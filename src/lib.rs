//! rsdispatch: minimal command-line dispatch engine.
//!
//! A caller declares a fixed [`Catalog`] of commands and options; a
//! [`Dispatcher`] matches an argument vector against it, enforces required
//! options, and invokes the handlers of the matched command and options.
//!
//! One dispatch cycle runs three sequential stages: command resolution,
//! option scanning, validation + execution. Everything is synchronous and
//! single-threaded; handlers run to completion on the calling thread.
//!
//! ```
//! use rsdispatch::{Catalog, CommandSpec, Dispatcher, OptionSpec};
//!
//! let catalog = Catalog::new()
//!     .command(CommandSpec::new("hello", |_| Ok(())).optional(["name"]))
//!     .option(OptionSpec::new("name", 'n', "name").handler(|value| {
//!         println!("Hello, {}!", value);
//!         Ok(())
//!     }));
//!
//! let argv: Vec<String> = ["prog", "hello", "-n", "Ada"]
//!     .iter()
//!     .map(ToString::to_string)
//!     .collect();
//! Dispatcher::new(&catalog).dispatch(&argv).unwrap();
//! ```
//!
//! Not covered by design: `--name=value` syntax, grouped short flags,
//! nested sub-commands, help-text generation.

pub mod argv;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod exitcode;
pub mod util;

pub mod dispatcher;
pub mod executor;
pub mod resolver;
pub mod scanner;

pub use argv::{ArgSource, ProcessArgs};
pub use catalog::{Catalog, CommandHandler, CommandSpec, OptionHandler, OptionSpec, ResolvedOption};
pub use config::Limits;
pub use dispatcher::Dispatcher;
pub use errors::{DispatchError, DispatchResult, HandlerError, HandlerResult};
