extern crate std;

use alloc::rc::Rc;

use crate::list::Tray;
use crate::mem::{MemManager, MemObject, ObjectKind};

#[derive(Default)]
struct Widget {
    label: Option<&'static str>,
}

impl MemObject for Widget {
    const KIND: ObjectKind = ObjectKind::new(65);

    fn retire(&mut self) {
        self.label = None;
    }
}

#[derive(Default)]
struct Gadget;

impl MemObject for Gadget {
    const KIND: ObjectKind = ObjectKind::new(66);
}

#[test]
fn test_register_is_idempotent() {
    let mut manager = MemManager::new();
    let first = manager.register::<Widget>();
    let second = manager.register::<Widget>();

    assert!(Rc::ptr_eq(&first, &second));
    assert_eq!(manager.len(), 1);
}

#[test]
fn test_pool_lookup() {
    let mut manager = MemManager::new();
    assert!(manager.pool::<Widget>().is_none());

    manager.register::<Widget>();
    assert!(manager.pool::<Widget>().is_some());
    assert!(manager.pool::<Gadget>().is_none());
}

#[test]
fn test_acquire_and_release_through_the_manager() {
    let mut manager = MemManager::new();
    let pool = manager.register::<Widget>();

    let obj = manager.acquire::<Widget>();
    pool.borrow_mut().get_mut(obj).label = Some("w");
    assert_eq!(pool.borrow().live_count(), 1);

    manager.release::<Widget>(obj);
    assert_eq!(pool.borrow().live_count(), 0);
    assert_eq!(pool.borrow().free_count(), 1);
}

#[test]
fn test_kinds_lists_every_registered_shape() {
    let mut manager = MemManager::new();
    assert!(manager.is_empty());

    manager.register::<Widget>();
    manager.register::<Gadget>();

    let kinds: std::vec::Vec<_> = manager.kinds().collect();
    assert_eq!(kinds.len(), 2);
    assert!(kinds.contains(&Widget::KIND));
    assert!(kinds.contains(&Gadget::KIND));
}

#[test]
fn test_generic_kind_registers_one_pool_per_shape() {
    let mut manager = MemManager::new();
    manager.register::<Tray<i32>>();
    manager.register::<Tray<&'static str>>();

    // Same kind tag, two concrete shapes, two freelists.
    assert_eq!(manager.len(), 2);
    assert!(manager.kinds().all(|kind| kind == ObjectKind::LIST_TRAY));
}
