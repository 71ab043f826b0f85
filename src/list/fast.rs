use alloc::rc::Rc;
use core::cell::RefCell;
use core::fmt;

use super::iter::{FastListIter, Values};
use super::tray::Tray;
use crate::contract;
use crate::mem::{ObjRef, SharedPool};

#[derive(Default)]
struct Links {
    head: Option<ObjRef>,
    tail: Option<ObjRef>,
    len: usize,
    /// The embedded legacy cursor driven by `cursor_reset` and
    /// `cursor_advance`; transferred along with the link structure.
    cursor: Option<ObjRef>,
}

/// A doubly linked list whose trays come from a shared
/// [`crate::mem::MemPool`].
///
/// The list owns its trays but never the payloads' referents: removing
/// an element returns or drops the payload value and recycles the
/// tray. Lists sharing one pool can hand whole batches of elements to
/// each other in O(1) with [`FastList::transfer_into`].
///
/// The link structure sits behind a `RefCell` so that a
/// [`FastListIter`], which borrows the list shared, can splice and
/// unsplice trays during traversal. Borrows are transient — never held
/// across a public call — so interleaving list and cursor calls cannot
/// trip a re-borrow.
pub struct FastList<T> {
    pool: SharedPool<Tray<T>>,
    links: RefCell<Links>,
}

impl<T> FastList<T> {
    /// Creates an empty list drawing trays from `pool`.
    pub fn new(pool: SharedPool<Tray<T>>) -> Self {
        Self {
            pool,
            links: RefCell::new(Links::default()),
        }
    }

    /// The pool this list draws trays from.
    pub fn pool(&self) -> &SharedPool<Tray<T>> {
        &self.pool
    }

    /// How many elements are linked.
    pub fn len(&self) -> usize {
        self.links.borrow().len
    }

    /// Whether no element is linked.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts `payload` at the front. O(1).
    pub fn push_front(&mut self, payload: T) {
        let head = self.links.borrow().head;
        self.splice_before(head, payload);
    }

    /// Inserts `payload` at the back. O(1).
    pub fn push_back(&mut self, payload: T) {
        self.splice_before(None, payload);
    }

    /// Unlinks the front element and returns its payload, or `None` if
    /// the list is empty. O(1).
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.links.borrow().head?;
        Some(self.unsplice(head))
    }

    /// Removes the first element equal to `value`, or every such
    /// element if `all` is set. Returns how many were removed. O(n).
    pub fn remove(&mut self, value: &T, all: bool) -> usize
    where
        T: PartialEq,
    {
        let mut removed = 0;
        let mut cur = self.links.borrow().head;
        while let Some(tray) = cur {
            let (next, matches) = {
                let pool = self.pool.borrow();
                let node = pool.get(tray);
                (node.next, node.payload() == Some(value))
            };
            if matches {
                self.unsplice(tray);
                removed += 1;
                if !all {
                    break;
                }
            }
            cur = next;
        }
        removed
    }

    /// Releases every tray back to the pool and resets the list,
    /// including the embedded cursor. Any cursor position taken before
    /// the clear is dead afterwards and must be reset before reuse.
    pub fn clear(&mut self) {
        let mut links = self.links.borrow_mut();
        let mut pool = self.pool.borrow_mut();
        let mut cur = links.head;
        while let Some(tray) = cur {
            cur = pool.get(tray).next;
            pool.release(tray);
        }
        *links = Links::default();
    }

    /// Moves this list's entire link structure, count, and embedded
    /// cursor into `other` in O(1), leaving this list empty.
    ///
    /// Contract: `other` must be empty and draw from the same pool —
    /// the trays move wholesale, so they must stay releasable where
    /// they end up.
    pub fn transfer_into(&mut self, other: &mut FastList<T>) {
        contract!(
            Rc::ptr_eq(&self.pool, &other.pool),
            "transfer between lists of different pools"
        );
        contract!(other.is_empty(), "transfer into a non-empty list");

        let mut links = self.links.borrow_mut();
        *other.links.borrow_mut() = core::mem::take(&mut *links);
    }

    /// Appends a clone of each of this list's payloads, in order, onto
    /// `other`. O(n). `other` keeps what it already holds and gets its
    /// own fresh trays; the two lists stay fully independent.
    pub fn copy_into(&self, other: &mut FastList<T>)
    where
        T: Clone,
    {
        for payload in self.values() {
            other.push_back(payload);
        }
    }

    /// The front payload, or `None` if the list is empty.
    pub fn first(&self) -> Option<T>
    where
        T: Clone,
    {
        let head = self.links.borrow().head?;
        self.tray_payload(head)
    }

    /// The back payload, or `None` if the list is empty.
    pub fn last(&self) -> Option<T>
    where
        T: Clone,
    {
        let tail = self.links.borrow().tail?;
        self.tray_payload(tail)
    }

    /// The payload at 0-based `index`, walking from the head, or
    /// `None` past the tail. O(n).
    pub fn get(&self, index: usize) -> Option<T>
    where
        T: Clone,
    {
        let mut cur = self.links.borrow().head;
        for _ in 0..index {
            cur = self.tray_next(cur?);
        }
        self.tray_payload(cur?)
    }

    /// Whether some element equals `value`. O(n).
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let pool = self.pool.borrow();
        let mut cur = self.links.borrow().head;
        while let Some(tray) = cur {
            let node = pool.get(tray);
            if node.payload() == Some(value) {
                return true;
            }
            cur = node.next;
        }
        false
    }

    /// Resets the embedded cursor to the head and returns the payload
    /// there, if any.
    pub fn cursor_reset(&mut self) -> Option<T>
    where
        T: Clone,
    {
        let mut links = self.links.borrow_mut();
        links.cursor = links.head;
        let cursor = links.cursor;
        drop(links);
        self.tray_payload(cursor?)
    }

    /// Advances the embedded cursor one step and returns the payload
    /// there; `None` once it walks off the tail, and again on every
    /// further call until the next reset.
    pub fn cursor_advance(&mut self) -> Option<T>
    where
        T: Clone,
    {
        let mut links = self.links.borrow_mut();
        let next = match links.cursor {
            Some(tray) => self.pool.borrow().get(tray).next,
            None => None,
        };
        links.cursor = next;
        drop(links);
        self.tray_payload(next?)
    }

    /// A cursor over this list, positioned at the head.
    pub fn iter(&self) -> FastListIter<'_, T> {
        FastListIter::new(self)
    }

    /// A plain iterator over payload clones, front to back.
    pub fn values(&self) -> Values<'_, T> {
        Values::new(self, self.links.borrow().head)
    }

    /// Splices a fresh tray carrying `payload` immediately before
    /// `at`, or at the tail when `at` is `None`. The single insertion
    /// primitive behind every mutating path.
    pub(crate) fn splice_before(&self, at: Option<ObjRef>, payload: T) -> ObjRef {
        let mut pool = self.pool.borrow_mut();
        let mut links = self.links.borrow_mut();

        let tray = pool.acquire();
        let prev = match at {
            Some(at) => pool.get(at).prev,
            None => links.tail,
        };

        let node = pool.get_mut(tray);
        node.payload = Some(payload);
        node.prev = prev;
        node.next = at;

        match prev {
            Some(prev) => pool.get_mut(prev).next = Some(tray),
            None => links.head = Some(tray),
        }
        match at {
            Some(at) => pool.get_mut(at).prev = Some(tray),
            None => links.tail = Some(tray),
        }

        links.len += 1;
        tray
    }

    /// Unlinks `tray`, releases it to the pool, and returns its
    /// payload. The single removal primitive behind every mutating
    /// path.
    pub(crate) fn unsplice(&self, tray: ObjRef) -> T {
        let mut pool = self.pool.borrow_mut();
        let mut links = self.links.borrow_mut();

        let node = pool.get_mut(tray);
        let prev = node.prev;
        let next = node.next;
        let payload = node.payload.take();

        match prev {
            Some(prev) => pool.get_mut(prev).next = next,
            None => links.head = next,
        }
        match next {
            Some(next) => pool.get_mut(next).prev = prev,
            None => links.tail = prev,
        }

        links.len -= 1;
        pool.release(tray);
        payload.expect("a linked tray carries a payload")
    }

    pub(crate) fn head_tray(&self) -> Option<ObjRef> {
        self.links.borrow().head
    }

    pub(crate) fn tail_tray(&self) -> Option<ObjRef> {
        self.links.borrow().tail
    }

    pub(crate) fn tray_next(&self, tray: ObjRef) -> Option<ObjRef> {
        self.pool.borrow().get(tray).next
    }

    pub(crate) fn tray_prev(&self, tray: ObjRef) -> Option<ObjRef> {
        self.pool.borrow().get(tray).prev
    }

    pub(crate) fn tray_payload(&self, tray: ObjRef) -> Option<T>
    where
        T: Clone,
    {
        self.pool.borrow().get(tray).payload.clone()
    }
}

impl<T: PartialEq> PartialEq for FastList<T> {
    /// Two lists are equal iff they have equal counts and
    /// pairwise-equal payloads in traversal order.
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let mut a = self.links.borrow().head;
        let mut b = other.links.borrow().head;
        while let (Some(ta), Some(tb)) = (a, b) {
            let pool_a = self.pool.borrow();
            let pool_b = other.pool.borrow();
            let (node_a, node_b) = (pool_a.get(ta), pool_b.get(tb));
            if node_a.payload() != node_b.payload() {
                return false;
            }
            a = node_a.next;
            b = node_b.next;
        }
        true
    }
}

impl<T> Extend<T> for FastList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for payload in iter {
            self.push_back(payload);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for FastList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_list();
        let pool = self.pool.borrow();
        let mut cur = self.links.borrow().head;
        while let Some(tray) = cur {
            let node = pool.get(tray);
            if let Some(payload) = node.payload() {
                out.entry(payload);
            }
            cur = node.next;
        }
        out.finish()
    }
}

impl<T> Drop for FastList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}
