use core::ptr;

use super::fast::FastList;
use crate::contract;
use crate::mem::ObjRef;

/// A cursor over a [`FastList`].
///
/// The cursor is either on a tray or absent ("off-list"): walking past
/// either end leaves it absent with no wraparound. Because it borrows
/// the list shared, any number of sibling cursors can traverse at
/// once, and structural mutation during traversal goes through the
/// list's single splice/unsplice pair — removing through one cursor
/// never disturbs a sibling positioned elsewhere. The borrow also
/// keeps `&mut self` list methods (`clear`, `transfer_into`, ...) out
/// of reach while any cursor is alive.
pub struct FastListIter<'a, T> {
    list: &'a FastList<T>,
    cur: Option<ObjRef>,
}

impl<'a, T> FastListIter<'a, T> {
    /// Creates a cursor bound to `list`, positioned at the head.
    pub fn new(list: &'a FastList<T>) -> Self {
        Self {
            list,
            cur: list.head_tray(),
        }
    }

    /// Positions the cursor at the head and returns the payload there,
    /// or `None` if the list is empty.
    pub fn reset(&mut self) -> Option<T>
    where
        T: Clone,
    {
        self.cur = self.list.head_tray();
        self.current()
    }

    /// Positions the cursor at the tail and returns the payload there,
    /// or `None` if the list is empty.
    pub fn reset_reverse(&mut self) -> Option<T>
    where
        T: Clone,
    {
        self.cur = self.list.tail_tray();
        self.current()
    }

    /// Moves one step toward the tail and returns the payload there.
    /// Off the end the cursor stays absent and keeps returning `None`.
    pub fn advance(&mut self) -> Option<T>
    where
        T: Clone,
    {
        if let Some(tray) = self.cur {
            self.cur = self.list.tray_next(tray);
        }
        self.current()
    }

    /// Moves one step toward the head and returns the payload there.
    /// Off the end the cursor stays absent and keeps returning `None`.
    pub fn prev(&mut self) -> Option<T>
    where
        T: Clone,
    {
        if let Some(tray) = self.cur {
            self.cur = self.list.tray_prev(tray);
        }
        self.current()
    }

    /// The payload under the cursor, without moving it.
    pub fn current(&self) -> Option<T>
    where
        T: Clone,
    {
        self.list.tray_payload(self.cur?)
    }

    /// Whether the cursor sits on the first element. False when absent.
    pub fn is_first(&self) -> bool {
        self.cur.is_some() && self.cur == self.list.head_tray()
    }

    /// Whether the cursor sits on the last element. False when absent.
    pub fn is_last(&self) -> bool {
        self.cur.is_some() && self.cur == self.list.tail_tray()
    }

    /// The cursor's 0-based position, walking from the head, or `None`
    /// when the cursor is absent. O(n).
    pub fn index(&self) -> Option<usize> {
        let target = self.cur?;
        let mut index = 0;
        let mut cur = self.list.head_tray();
        while let Some(tray) = cur {
            if tray == target {
                return Some(index);
            }
            index += 1;
            cur = self.list.tray_next(tray);
        }
        contract!(false, "cursor tray is not reachable from its list");
        None
    }

    /// Splices `payload` immediately before the current tray, leaving
    /// the cursor where it is; with the cursor absent, appends at the
    /// tail of the bound list.
    pub fn insert(&mut self, payload: T) {
        self.list.splice_before(self.cur, payload);
    }

    /// Unlinks the current tray, releases it, and advances the cursor
    /// to the tray that followed it (absent if none). Returns the
    /// removed payload, or `None` — a no-op — when the cursor is
    /// absent.
    ///
    /// The auto-advance lets a caller filter a list in one forward
    /// pass: remove on a match, advance otherwise, and no element is
    /// skipped or visited twice.
    pub fn remove(&mut self) -> Option<T> {
        let tray = self.cur?;
        self.cur = self.list.tray_next(tray);
        Some(self.list.unsplice(tray))
    }

    /// Copies `other`'s position into this cursor and returns the
    /// payload there. Contract: both cursors must be bound to the same
    /// list.
    pub fn duplicate(&mut self, other: &FastListIter<'_, T>) -> Option<T>
    where
        T: Clone,
    {
        contract!(
            ptr::eq(self.list, other.list),
            "duplicate between cursors of different lists"
        );
        self.cur = other.cur;
        self.current()
    }

    /// Rebinds the cursor to `list` (the same one or another), always
    /// resetting to its head, and returns the payload there.
    pub fn bind(&mut self, list: &'a FastList<T>) -> Option<T>
    where
        T: Clone,
    {
        self.list = list;
        self.reset()
    }
}

/// A plain forward iterator over payload clones.
pub struct Values<'a, T> {
    list: &'a FastList<T>,
    cur: Option<ObjRef>,
}

impl<'a, T> Values<'a, T> {
    pub(crate) fn new(list: &'a FastList<T>, head: Option<ObjRef>) -> Self {
        Self { list, cur: head }
    }
}

impl<T: Clone> Iterator for Values<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let tray = self.cur?;
        let pool = self.list.pool().borrow();
        let node = pool.get(tray);
        self.cur = node.next;
        node.payload().cloned()
    }
}
