use alloc::rc::Rc;
use core::cell::RefCell;

use crate::list::Tray;
use crate::mem::{MemPool, SharedPool};


fn new_pool<T>() -> SharedPool<Tray<T>> {
    Rc::new(RefCell::new(MemPool::new()))
}
