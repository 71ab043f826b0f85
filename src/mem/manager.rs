use alloc::boxed::Box;
use alloc::rc::Rc;
use core::any::{Any, TypeId};
use core::cell::RefCell;

use hashbrown::HashMap;

use super::pool::{MemPool, ObjRef, SharedPool};
use super::traits::{MemObject, ObjectKind};
use crate::contract;

/// A registry owning one [`MemPool`] per registered object kind.
///
/// The manager is an explicit value, not a global: whoever owns it
/// decides its lifetime, and consumers hold [`SharedPool`] clones of
/// the pools they use. A generic kind (such as the list tray)
/// monomorphizes into one concrete shape per type parameter, so the
/// registry keys by kind *and* shape.
#[derive(Default)]
pub struct MemManager {
    pools: HashMap<(ObjectKind, TypeId), Box<dyn Any>>,
}

impl MemManager {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            pools: HashMap::new(),
        }
    }

    /// Registers kind `T`, creating its pool on first call, and
    /// returns a shared handle to it. Idempotent: a second call for
    /// the same `T` returns the same pool.
    pub fn register<T: MemObject + 'static>(&mut self) -> SharedPool<T> {
        let entry = self
            .pools
            .entry((T::KIND, TypeId::of::<T>()))
            .or_insert_with(|| Box::new(Rc::new(RefCell::new(MemPool::<T>::new()))));
        Self::downcast::<T>(entry.as_ref())
    }

    /// The pool registered for kind `T`, if any.
    pub fn pool<T: MemObject + 'static>(&self) -> Option<SharedPool<T>> {
        self.pools
            .get(&(T::KIND, TypeId::of::<T>()))
            .map(|entry| Self::downcast::<T>(entry.as_ref()))
    }

    /// Acquires an object of kind `T`. The kind must be registered.
    pub fn acquire<T: MemObject + 'static>(&self) -> ObjRef {
        let pool = self.pool::<T>();
        contract!(pool.is_some(), "acquire of an unregistered kind");
        pool.expect("kind must be registered").borrow_mut().acquire()
    }

    /// Releases an object of kind `T` back to its freelist.
    pub fn release<T: MemObject + 'static>(&self, obj: ObjRef) {
        let pool = self.pool::<T>();
        contract!(pool.is_some(), "release of an unregistered kind");
        pool.expect("kind must be registered").borrow_mut().release(obj);
    }

    /// Iterates the registered kinds, one entry per concrete shape.
    pub fn kinds(&self) -> impl Iterator<Item = ObjectKind> + '_ {
        self.pools.keys().map(|(kind, _)| *kind)
    }

    /// How many concrete shapes are registered.
    pub fn len(&self) -> usize {
        self.pools.len()
    }

    /// Whether no kind is registered yet.
    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    fn downcast<T: MemObject + 'static>(entry: &dyn Any) -> SharedPool<T> {
        entry
            .downcast_ref::<SharedPool<T>>()
            .expect("registry entry stores the pool for its key's shape")
            .clone()
    }
}
