use std::{cell::RefCell, rc::Rc};

use tracing::warn;

/// Something that wants to know when a new generation has been committed.
///
/// Observers get no arguments; they pull whatever state they need from the
/// [`GridHandle`](crate::GridHandle) they were given when they were set up.
pub trait Observer {
    fn notify(&mut self) -> anyhow::Result<()>;
}

impl<O> Observer for Rc<RefCell<O>>
where
    O: Observer + ?Sized,
{
    fn notify(&mut self) -> anyhow::Result<()> {
        self.borrow_mut().notify()
    }
}

/// Adapts a closure into an [`Observer`].
pub struct FnObserver<F>(F);

pub fn from_fn<F>(f: F) -> FnObserver<F>
where
    F: FnMut() -> anyhow::Result<()>,
{
    FnObserver(f)
}

impl<F> Observer for FnObserver<F>
where
    F: FnMut() -> anyhow::Result<()>,
{
    fn notify(&mut self) -> anyhow::Result<()> {
        (self.0)()
    }
}

/// Observers in subscription order. Subscribing the same observer twice
/// notifies it twice.
#[derive(Default)]
pub struct ObserverRegistry {
    observers: Vec<Box<dyn Observer>>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<O>(&mut self, observer: O)
    where
        O: Observer + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Notifies every observer once, in subscription order. A failing observer is
    /// logged and skipped; the rest are still notified. Returns the failure count.
    pub fn notify_all(&mut self) -> usize {
        let mut failures = 0;

        for (index, observer) in self.observers.iter_mut().enumerate() {
            if let Err(err) = observer.notify() {
                warn!(observer = index, error = %format!("{err:#}"), "observer failed to handle generation");
                failures += 1;
            }
        }

        failures
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}
