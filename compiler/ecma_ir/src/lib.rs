//! ECMAScript IR - the lowered program tree
//!
//! Data structures shared by the late checking passes of the compiler:
//! - Spans for source locations
//! - Names for interned identifiers
//! - The flat node arena and its node kinds
//! - A builder for constructing trees and a visitor for walking them
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifier strings become `Name(u32)`
//! - **Flatten Everything**: no `Box<Node>`, children are `NodeId(u32)` indices
//! - **Closed Kinds**: `NodeKind` lists every construct that survives
//!   lowering; passes match on it exhaustively

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
pub mod ast;
mod builder;
mod interner;
mod name;
mod node_id;
mod span;
pub mod visitor;

pub use arena::{NodeArena, Program};
pub use ast::{AssignOp, BinaryOp, Literal, NodeKind, UnaryOp, UpdateOp};
pub use builder::TreeBuilder;
pub use interner::{InternError, StringInterner};
pub use name::Name;
pub use node_id::{NodeId, NodeRange};
pub use span::{Span, SpanError};
