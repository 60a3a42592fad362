//! Change notification interface.
//!
//! The list core holds a single injectable observer and invokes it exactly
//! once per rebuild, no matter how many items changed. The callback carries
//! no payload; consumers re-read the list's queries, which are already
//! consistent when the callback fires.

/// Observer notified after every presentation rebuild.
///
/// A blanket implementation for `Fn()` closures keeps wiring lightweight:
///
/// ```
/// use appdrawer::{AlphabeticalAppList, DrawerContext};
///
/// let mut list = AlphabeticalAppList::new(&DrawerContext::default());
/// list.set_observer(Box::new(|| println!("presentation changed")));
/// ```
pub trait ListObserver {
    /// Called once after a rebuild completes.
    fn on_list_changed(&self);
}

impl<F: Fn()> ListObserver for F {
    fn on_list_changed(&self) {
        self();
    }
}
