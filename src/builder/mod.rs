//! Declaration surface for building transition tables.
//!
//! This module provides the fluent builders and macros used during
//! declaration, before a table is finalized and handed to the runtime.

pub mod error;
pub mod macros;
pub mod table;
pub mod transition;

pub use error::ConfigError;
pub use table::TableBuilder;
pub use transition::TransitionDecl;
