//! Ordered callback registry with handle-based removal

use std::fmt;
use std::ops::AddAssign;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_CALLBACK_ID: AtomicU64 = AtomicU64::new(1);

/// Handle returned on registration; the only way to remove a callback
///
/// Ids are unique for the lifetime of the process, so a handle can never
/// remove a callback it was not issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CallbackId(u64);

impl CallbackId {
    fn next() -> Self {
        Self(NEXT_CALLBACK_ID.fetch_add(1, Ordering::Relaxed))
    }
}

type Handler<A> = Box<dyn FnMut(&A)>;

/// Ordered list of observers invoked with a shared argument
///
/// Multi-argument observers take a tuple as `A`.
pub struct Callback<A: ?Sized> {
    entries: Vec<(CallbackId, Handler<A>)>,
}

impl<A: ?Sized> Callback<A> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends `f`; it runs after every callback registered before it
    pub fn add<F>(&mut self, f: F) -> CallbackId
    where
        F: FnMut(&A) + 'static,
    {
        let id = CallbackId::next();
        self.entries.push((id, Box::new(f)));
        id
    }

    /// Removes the callback registered under `id`
    ///
    /// Returns false (and leaves the list untouched) for unknown ids.
    pub fn remove(&mut self, id: CallbackId) -> bool {
        match self.entries.iter().position(|(entry, _)| *entry == id) {
            Some(index) => {
                drop(self.entries.remove(index));
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, id: CallbackId) -> bool {
        self.entries.iter().any(|(entry, _)| *entry == id)
    }

    /// Invokes every callback in registration order
    pub fn call(&mut self, arg: &A) {
        for (_, handler) in &mut self.entries {
            handler(arg);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<A: ?Sized> Default for Callback<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: ?Sized> fmt::Debug for Callback<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|(id, _)| id))
            .finish()
    }
}

/// Fire-and-forget registration; use [`Callback::add`] to keep a handle
impl<A: ?Sized, F> AddAssign<F> for Callback<A>
where
    F: FnMut(&A) + 'static,
{
    fn add_assign(&mut self, f: F) {
        self.add(f);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, Callback<i32>) {
        (Rc::new(RefCell::new(Vec::new())), Callback::new())
    }

    #[test]
    fn test_call_in_registration_order() {
        let (log, mut callbacks) = recorder();
        for name in ["first", "second", "third"] {
            let log = Rc::clone(&log);
            callbacks.add(move |_| log.borrow_mut().push(name));
        }
        callbacks.call(&0);
        assert_eq!(*log.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_remove_by_handle_removes_exactly_that_callback() {
        let (log, mut callbacks) = recorder();
        let l = Rc::clone(&log);
        let first = callbacks.add(move |_| l.borrow_mut().push("first"));
        let l = Rc::clone(&log);
        callbacks.add(move |_| l.borrow_mut().push("last"));

        assert!(callbacks.remove(first));
        assert!(!callbacks.contains(first));
        callbacks.call(&0);
        assert_eq!(*log.borrow(), vec!["last"]);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let (_, mut callbacks) = recorder();
        let mut other: Callback<i32> = Callback::new();
        let foreign = other.add(|_| {});
        callbacks.add(|_| {});

        assert!(!callbacks.remove(foreign));
        assert_eq!(callbacks.len(), 1);
    }

    #[test]
    fn test_add_assign_appends() {
        let total = Rc::new(RefCell::new(0));
        let mut callbacks: Callback<i32> = Callback::default();
        let t = Rc::clone(&total);
        callbacks += move |v: &i32| *t.borrow_mut() += *v;
        let t = Rc::clone(&total);
        callbacks += move |v: &i32| *t.borrow_mut() += *v * 10;

        callbacks.call(&2);
        assert_eq!(*total.borrow(), 22);
        assert_eq!(callbacks.len(), 2);

        callbacks.clear();
        assert!(callbacks.is_empty());
    }
}
