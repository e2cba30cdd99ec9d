//! Text generation for the two output formats.
//!
//! Both generators build the complete output in memory; writing it to disk is
//! left to `convert`.

mod outline;
mod script;
mod utils;

pub use outline::OutlineGenerator;
pub use script::ScriptGenerator;
pub use utils::{split_lines, INDENT_UNIT};
