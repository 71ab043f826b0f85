/// A discriminant identifying which freelist an object kind belongs to.
///
/// The tag set is small and closed per process; consumer crates carve
/// out their own values with [`ObjectKind::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObjectKind(u16);

impl ObjectKind {
    /// The tray kind used by [`crate::list::FastList`].
    pub const LIST_TRAY: Self = Self(0);

    /// Creates a consumer-defined kind. Values below 16 are reserved
    /// for this crate.
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// The raw tag value.
    pub const fn raw(self) -> u16 {
        self.0
    }
}

/// A trait for objects managed by a [`crate::mem::MemPool`].
///
/// A pooled object is never constructed by its consumer: the pool
/// default-constructs it once, then cycles it through `employ` (on
/// every acquire, before the handle becomes visible) and `retire` (on
/// every release, before the slot returns to the free stack). Both
/// hooks default to no-ops; a kind whose fields must not leak across
/// reuses clears them in `retire`.
pub trait MemObject: Default {
    /// The kind discriminant for this shape.
    const KIND: ObjectKind;

    /// The kind this object reports; the pool uses it to select the
    /// freelist at release time.
    fn kind(&self) -> ObjectKind {
        Self::KIND
    }

    /// Prepare the object to be used or reused.
    fn employ(&mut self) {}

    /// Prepare the object to be released.
    fn retire(&mut self) {}
}
