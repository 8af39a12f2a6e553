pub mod compile;
pub mod error;
pub mod loaders;

pub use compile::{RawEntry, compile};
pub use error::{CompileError, LoadError};
pub use loaders::OnomatopoeiaLoader;
