pub mod repl;
pub mod theme;

pub use repl::Repl;
