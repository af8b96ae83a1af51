//! Argument acquisition: the collaborator that supplies the raw token stream.

/// Produces the ordered, finite sequence of text tokens for one invocation,
/// with token 0 being the program identifier.
///
/// The dispatcher core never reads the process environment itself; it only
/// consumes what a source hands it. Any backing resource is acquired and
/// released within [`ArgSource::args`].
pub trait ArgSource {
    fn args(&self) -> Vec<String>;
}

/// The real process argument vector, via `std::env::args()`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessArgs;

impl ArgSource for ProcessArgs {
    fn args(&self) -> Vec<String> {
        std::env::args().collect()
    }
}
