//! CLI command handlers, one per file.

mod completions;
mod decode;
mod demo;
mod source;
mod url;

pub use completions::{run_completions, run_man};
pub use decode::run_decode;
pub use demo::run_demo;
pub use source::run_source;
pub use url::run_url;

#[cfg(test)]
pub(crate) use demo::demo_state;
#[cfg(test)]
pub(crate) use url::build_state;
