//! # fastlist
//!
//! A typed object-pool allocator and a pool-backed doubly linked list
//! for high-churn workloads: enormous numbers of short-lived,
//! fixed-shape nodes allocated and released without touching the
//! general-purpose heap on the hot path.
//!
//! ## Core Components
//!
//! - [`mem`]: the pool allocator — [`mem::MemPool`] keeps one arena and
//!   free-index stack per object kind, [`mem::MemManager`] is the
//!   per-kind registry, and [`mem::MemObject`] is the capability
//!   contract pooled kinds implement.
//! - [`list`]: the intrusive list — [`list::FastList`] stores its
//!   elements in pool-managed trays, [`list::FastListIter`] is a cursor
//!   supporting in-place insertion and removal during traversal.
//!
//! Everything is single-threaded by design: pools are shared between
//! lists through `Rc<RefCell<_>>` and no type here is `Send` or `Sync`.

#![no_std]

extern crate alloc;

pub mod contract;
pub mod list;
pub mod mem;
