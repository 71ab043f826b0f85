use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use super::traits::{MemObject, ObjectKind};
use crate::contract;

/// A pool shared between its consumers. Single-threaded by design; a
/// multi-threaded target would shard pools per thread instead.
pub type SharedPool<T> = Rc<RefCell<MemPool<T>>>;

/// A generational handle to an object inside a [`MemPool`].
///
/// Handles are cheap to copy and compare. A handle dies when its object
/// is released; using a dead handle is a contract violation detected by
/// the generation check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObjRef {
    index: u32,
    generation: u32,
}

struct Slot<T> {
    object: T,
    generation: u32,
    employed: bool,
}

/// One object kind's storage: an arena of slots plus a free-index
/// stack.
///
/// Acquiring pops the free stack, or grows the arena with a fresh
/// default-constructed object when the stack is empty; releasing bumps
/// the slot's generation and pushes its index back. Both are O(1)
/// (acquire amortized). The backing `Vec` growing is the only path that
/// touches the general-purpose heap; exhaustion there aborts the
/// process, as the design assumes effectively unbounded backing memory.
pub struct MemPool<T: MemObject> {
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
    fresh: usize,
}

impl<T: MemObject> MemPool<T> {
    /// Creates an empty pool for kind `T::KIND`.
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            fresh: 0,
        }
    }

    /// Creates a pool prewarmed with `capacity` retired slots, so the
    /// first `capacity` acquires never grow the arena.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut pool = Self::new();
        pool.slots.reserve(capacity);
        pool.free.reserve(capacity);
        for index in 0..capacity {
            pool.slots.push(Slot {
                object: T::default(),
                generation: 0,
                employed: false,
            });
            pool.free.push(index as u32);
        }
        pool
    }

    /// The kind this pool stores.
    pub fn kind(&self) -> ObjectKind {
        T::KIND
    }

    /// Issues a ready-to-use object, running its `employ` hook before
    /// the handle becomes visible.
    pub fn acquire(&mut self) -> ObjRef {
        let index = match self.free.pop() {
            Some(index) => index,
            None => {
                let index = self.slots.len() as u32;
                self.slots.push(Slot {
                    object: T::default(),
                    generation: 0,
                    employed: false,
                });
                self.fresh += 1;
                index
            }
        };

        let slot = &mut self.slots[index as usize];
        slot.employed = true;
        slot.object.employ();

        ObjRef {
            index,
            generation: slot.generation,
        }
    }

    /// Reclaims an object, running its `retire` hook, then pushing its
    /// slot onto the free stack.
    ///
    /// The handle is dead afterwards: the slot's generation is bumped,
    /// so any retained copy of it trips the contract layer.
    pub fn release(&mut self, obj: ObjRef) {
        contract!(self.contains(obj), "release of a dead or foreign handle");

        let slot = &mut self.slots[obj.index as usize];
        contract!(
            slot.object.kind() == T::KIND,
            "object reports a kind this pool does not store"
        );

        slot.object.retire();
        slot.employed = false;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(obj.index);
    }

    /// Reads the object behind a live handle.
    pub fn get(&self, obj: ObjRef) -> &T {
        contract!(self.contains(obj), "read through a dead or foreign handle");
        &self.slots[obj.index as usize].object
    }

    /// Mutably reads the object behind a live handle.
    pub fn get_mut(&mut self, obj: ObjRef) -> &mut T {
        contract!(self.contains(obj), "write through a dead or foreign handle");
        &mut self.slots[obj.index as usize].object
    }

    /// Whether the handle refers to a live object in this pool.
    pub fn contains(&self, obj: ObjRef) -> bool {
        self.slots
            .get(obj.index as usize)
            .is_some_and(|slot| slot.employed && slot.generation == obj.generation)
    }

    /// How many acquires had to grow the arena because the free stack
    /// was empty. Stable under steady-state reuse; prewarmed slots do
    /// not count.
    pub fn fresh_count(&self) -> usize {
        self.fresh
    }

    /// How many retired slots are waiting on the free stack.
    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    /// How many objects are currently issued.
    pub fn live_count(&self) -> usize {
        self.slots.len() - self.free.len()
    }
}

impl<T: MemObject> Default for MemPool<T> {
    fn default() -> Self {
        Self::new()
    }
}
