//! Expression tree for parsed arithmetic
//!
//! The tree is built bottom-up by the parser and is immutable afterwards.

pub mod nodes;
pub mod visitor;

pub use nodes::{Expression, Operator};
pub use visitor::{walk_expression, NodeStats, Visitor};
