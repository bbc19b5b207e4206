use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::RefCell;

use snaplist::Region;

/// Builds a rendered cell from a data item.
///
/// The UI layer supplies this; reuse/pooling of the underlying views stays on its side.
pub trait CellFactory<T> {
    type Cell;

    fn make_cell(&mut self, item: &T) -> Self::Cell;
}

/// The capability the data-source adapter needs from its host.
///
/// Implemented by [`crate::ListWrapper`]; consumed by [`CellDataSource`]. Keeping this a trait
/// (rather than a concrete back-pointer) is what lets the adapter hold a non-owning reference.
pub trait CellHost {
    type Cell;
    type Attributes;

    fn cell_count(&self) -> usize;

    fn create_cell(&mut self, index: usize) -> Option<Self::Cell>;

    fn cell_attributes(&self, region: Region) -> Vec<Self::Attributes>;
}

/// The data-source adapter handed to the UI toolkit.
///
/// Holds a weak reference back to its host: the host owns the adapter's registration with the
/// toolkit, so an owning edge here would be a cycle. A dead host degrades to an empty list
/// rather than an error.
pub struct CellDataSource<H: CellHost> {
    host: Weak<RefCell<H>>,
}

impl<H: CellHost> CellDataSource<H> {
    pub fn new(host: &Rc<RefCell<H>>) -> Self {
        Self {
            host: Rc::downgrade(host),
        }
    }

    pub fn cell_count(&self) -> usize {
        self.host
            .upgrade()
            .map(|host| host.borrow().cell_count())
            .unwrap_or(0)
    }

    pub fn cell_at(&self, index: usize) -> Option<H::Cell> {
        let host = self.host.upgrade()?;
        let mut host = host.borrow_mut();
        host.create_cell(index)
    }

    pub fn attributes_in(&self, region: Region) -> Vec<H::Attributes> {
        self.host
            .upgrade()
            .map(|host| host.borrow().cell_attributes(region))
            .unwrap_or_default()
    }
}

impl<H: CellHost> Clone for CellDataSource<H> {
    fn clone(&self) -> Self {
        Self {
            host: self.host.clone(),
        }
    }
}

impl<H: CellHost> core::fmt::Debug for CellDataSource<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CellDataSource")
            .field("alive", &(self.host.strong_count() > 0))
            .finish()
    }
}
