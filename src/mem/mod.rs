//! # Pool Allocator
//!
//! Fixed-shape object pooling for high-churn workloads.
//!
//! ## Core Components
//!
//! - [`MemObject`]: the capability contract a pooled kind implements —
//!   a reported [`ObjectKind`] discriminant plus `employ`/`retire`
//!   lifecycle hooks.
//! - [`MemPool`]: one kind's storage — an arena of slots and a
//!   free-index stack, issuing generational [`ObjRef`] handles.
//! - [`MemManager`]: a registry owning one pool per registered kind.
//!
//! ## Contracts
//!
//! The pool hands out handles, not ownership: a released handle is
//! logically dead even though its slot is retained for reuse. Using a
//! handle after release, or releasing it twice, is a contract violation
//! caught by the generation check in debug builds.

mod manager;
mod pool;
mod traits;

#[cfg(test)]
mod tests;

pub use manager::MemManager;
pub use pool::{MemPool, ObjRef, SharedPool};
pub use traits::{MemObject, ObjectKind};
