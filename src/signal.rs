// SPDX-License-Identifier: MPL-2.0
//! Single-threaded change notifications with scoped subscriptions.
//!
//! A [`Signal`] keeps a list of handlers. [`Signal::connect`] returns a
//! [`Subscription`] guard; dropping the guard removes the handler, so a
//! component that stores at most one guard per source can never hold more
//! than one live handler on it.
//!
//! ```
//! use lens_sidebar::signal::Signal;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let signal = Signal::<u32>::new();
//! let seen = Rc::new(Cell::new(0));
//! let sink = seen.clone();
//! let subscription = signal.connect(move |value| sink.set(*value));
//!
//! signal.emit(&7);
//! assert_eq!(seen.get(), 7);
//!
//! drop(subscription);
//! signal.emit(&9);
//! assert_eq!(seen.get(), 7);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type Handler<T> = Rc<dyn Fn(&T)>;

struct Slots<T> {
    next_id: u64,
    handlers: Vec<(u64, Handler<T>)>,
}

impl<T> Slots<T> {
    fn remove(&mut self, id: u64) {
        self.handlers.retain(|(handler_id, _)| *handler_id != id);
    }
}

/// A list of handlers notified with a `&T` on every [`emit`](Signal::emit).
///
/// Cloning a `Signal` yields another handle to the same handler list.
pub struct Signal<T> {
    slots: Rc<RefCell<Slots<T>>>,
}

impl<T: 'static> Signal<T> {
    pub fn new() -> Self {
        Self {
            slots: Rc::new(RefCell::new(Slots {
                next_id: 0,
                handlers: Vec::new(),
            })),
        }
    }

    /// Registers `handler` until the returned guard is dropped.
    #[must_use = "dropping the subscription disconnects the handler immediately"]
    pub fn connect(&self, handler: impl Fn(&T) + 'static) -> Subscription {
        let handler: Handler<T> = Rc::new(handler);
        let id = {
            let mut slots = self.slots.borrow_mut();
            let id = slots.next_id;
            slots.next_id += 1;
            slots.handlers.push((id, handler));
            id
        };

        let weak: Weak<RefCell<Slots<T>>> = Rc::downgrade(&self.slots);
        Subscription {
            disconnect: Some(Box::new(move || {
                if let Some(slots) = weak.upgrade() {
                    slots.borrow_mut().remove(id);
                }
            })),
        }
    }

    /// Calls every handler connected at the time of the call.
    ///
    /// Handlers run without the list borrowed, so they may connect or drop
    /// subscriptions on this same signal.
    pub fn emit(&self, value: &T) {
        let handlers: Vec<Handler<T>> = self
            .slots
            .borrow()
            .handlers
            .iter()
            .map(|(_, handler)| Rc::clone(handler))
            .collect();

        for handler in handlers {
            handler(value);
        }
    }

    /// Number of live handlers.
    pub fn handler_count(&self) -> usize {
        self.slots.borrow().handlers.len()
    }
}

impl<T: 'static> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            slots: Rc::clone(&self.slots),
        }
    }
}

impl<T> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("handlers", &self.slots.borrow().handlers.len())
            .finish()
    }
}

/// Guard returned by [`Signal::connect`]; disconnects on drop.
pub struct Subscription {
    disconnect: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Disconnects the handler now instead of at drop.
    pub fn disconnect(mut self) {
        if let Some(disconnect) = self.disconnect.take() {
            disconnect();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(disconnect) = self.disconnect.take() {
            disconnect();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("connected", &self.disconnect.is_some())
            .finish()
    }
}
