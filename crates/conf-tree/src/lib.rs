//! Hierarchical configuration access for JSON and YAML sources
//!
//! Loads a document into a nested map and reads it back through dotted
//! keys, typed accessors and iteration, without manual type casting.

pub mod config;
pub mod error;
pub mod format;
pub mod iter;
pub mod path;
pub mod value;

pub use config::Config;
pub use error::{Error, Result};
pub use format::Format;
pub use iter::{Entry, Iter};
pub use value::ConfigValue;
