use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

/// An opaque activation capability handed to one item's clickable surface.
///
/// Activating it queues the item's index; the controller drains the queue at the start of its
/// next tick and selects that item.
#[derive(Clone, Debug)]
pub struct ItemActivator {
    index: usize,
    pending: Rc<RefCell<Vec<usize>>>,
}

impl ItemActivator {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn activate(&self) {
        self.pending.borrow_mut().push(self.index);
    }
}

/// The single-threaded queue shared by every [`ItemActivator`] of a controller.
#[derive(Clone, Debug, Default)]
pub struct ActivationQueue {
    pending: Rc<RefCell<Vec<usize>>>,
}

impl ActivationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn activator(&self, index: usize) -> ItemActivator {
        ItemActivator {
            index,
            pending: Rc::clone(&self.pending),
        }
    }

    pub fn len(&self) -> usize {
        self.pending.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.borrow().is_empty()
    }

    /// Visits queued activations in the order they fired and empties the queue.
    pub fn drain(&self, mut f: impl FnMut(usize)) {
        let pending = core::mem::take(&mut *self.pending.borrow_mut());
        for index in pending {
            f(index);
        }
    }
}
