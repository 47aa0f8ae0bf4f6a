pub mod registry;
pub mod repl;

pub use registry::{MenuEntry, MenuRegistry, Selection};
