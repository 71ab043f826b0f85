//! # Fast List
//!
//! A doubly linked list whose nodes ("trays") live in a
//! [`crate::mem::MemPool`], so inserting and removing elements never
//! touches the general-purpose heap once the pool is warm.
//!
//! ## Core Components
//!
//! - [`Tray`]: the pool-managed node — a payload plus handles to its
//!   neighbors.
//! - [`FastList`]: the list itself. Every structural mutation, whether
//!   through the list's own methods or through a cursor, funnels into
//!   one splice/unsplice pair.
//! - [`FastListIter`]: a cursor supporting forward and backward
//!   traversal, in-place insertion, and removal with automatic advance.
//! - [`Values`]: a plain [`Iterator`] over payload clones.
//!
//! ## Ownership
//!
//! The list owns its trays, never its payloads' referents: clearing or
//! removing an element drops the payload *value* (for `Rc`-style
//! payloads, a reference count decrement), and `copy_into` duplicates
//! payload clones, not trays.

mod fast;
mod iter;
mod tray;

#[cfg(test)]
mod tests;

pub use fast::FastList;
pub use iter::{FastListIter, Values};
pub use tray::Tray;
