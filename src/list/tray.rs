use crate::mem::{MemObject, ObjRef, ObjectKind};

/// A pool-managed list node: the payload plus handles to its
/// neighbors.
///
/// Trays are an implementation detail of [`crate::list::FastList`];
/// consumers go through the list and its cursor and never touch a tray
/// directly. The type is public only so consumers can name the pool
/// they register (`MemPool<Tray<T>>`).
pub struct Tray<T> {
    pub(crate) payload: Option<T>,
    pub(crate) prev: Option<ObjRef>,
    pub(crate) next: Option<ObjRef>,
}

impl<T> Tray<T> {
    /// The payload of a linked tray. `None` only while the tray sits
    /// on the free stack.
    pub(crate) fn payload(&self) -> Option<&T> {
        self.payload.as_ref()
    }
}

impl<T> Default for Tray<T> {
    fn default() -> Self {
        Self {
            payload: None,
            prev: None,
            next: None,
        }
    }
}

impl<T> MemObject for Tray<T> {
    const KIND: ObjectKind = ObjectKind::LIST_TRAY;

    fn retire(&mut self) {
        self.payload = None;
        self.prev = None;
        self.next = None;
    }
}
