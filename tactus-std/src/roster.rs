//! # Phase Roster
//!
//! [`Roster`] is the ordered, deduplicated listener registry behind one
//! dispatch phase. It is the only part of the crate with a real
//! invariant to protect: iteration must stay correct and
//! order-preserving while a listener currently being dispatched mutates
//! the roster underneath it.
//!
//! # Dispatch model
//!
//! A pass walks the entries by index (the *cursor*) from 0 upward
//! against a live length bound, so listeners subscribed mid-pass are
//! appended and visited in the same pass. Before each step the pass
//! checks a shared [`EnabledHandle`]; closing the gate mid-pass stops
//! the walk before the next entry, while the entry currently executing
//! always finishes. After a pass, completed or stopped early, the cursor
//! rests at 0.
//!
//! # The cursor rule
//!
//! Removing an entry shifts every later entry left by one. To keep the
//! cursor pointing at the same logical next entry, `unsubscribe` of an
//! entry at index `<=` cursor decrements the cursor, but never below
//! zero; removal strictly after the cursor leaves it untouched. An entry
//! not yet visited in the current pass is therefore never skipped, and
//! an entry already visited is never revisited. The zero floor has one
//! observable consequence: when the listener at index 0 removes itself
//! while the cursor rests at 0, the entry shifted into slot 0 is passed
//! over for the remainder of that pass. That behavior is part of the
//! contract and is pinned by test.
//!
//! # Reentrancy
//!
//! Every operation takes `&self`, and no internal borrow is held across
//! a listener invocation, so a callback may freely call `subscribe`,
//! `unsubscribe`, `set_enabled` or the queries on the roster that is
//! dispatching it. Driving a nested pass on the same roster from inside
//! a callback is not supported.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::ptr;
use std::rc::Rc;

use tactus_core::EnabledHandle;

struct Entry<L: ?Sized> {
    listener: Rc<L>,
    enabled: bool,
}

/// Ordered, deduplicated listener registry for one dispatch phase.
///
/// Generic over the phase's listener capability, which is how the three
/// structurally identical phases share a single implementation:
/// instantiate one roster per capability trait object. Listeners are
/// tracked by reference identity (the `Rc` allocation); the roster
/// keeps a shared handle and drops only its own clone on unsubscribe.
pub struct Roster<L: ?Sized> {
    entries: RefCell<Vec<Entry<L>>>,
    cursor: Cell<usize>,
}

impl<L: ?Sized> Roster<L> {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self {
            entries: RefCell::new(Vec::new()),
            cursor: Cell::new(0),
        }
    }

    /// Append `listener` to the dispatch order, enabled.
    ///
    /// No-op if the listener is already subscribed. When called from
    /// inside a callback during a pass, the new entry is visited later
    /// in that same pass.
    pub fn subscribe(&self, listener: Rc<L>) {
        if self.is_subscribed(&listener) {
            return;
        }
        self.entries.borrow_mut().push(Entry {
            listener,
            enabled: true,
        });
    }

    /// Remove `listener`, identified by reference identity.
    ///
    /// No-op if absent. The caller's own handle to the listener stays
    /// valid; only the roster's clone is dropped. See the module docs
    /// for how a removal mid-pass interacts with the cursor.
    pub fn unsubscribe(&self, listener: &L) {
        let mut entries = self.entries.borrow_mut();
        let Some(index) = entries
            .iter()
            .position(|entry| Self::holds(entry, listener))
        else {
            return;
        };
        entries.remove(index);

        let cursor = self.cursor.get();
        if index <= cursor && cursor > 0 {
            self.cursor.set(cursor - 1);
        }
    }

    /// Whether `listener` is currently subscribed.
    pub fn is_subscribed(&self, listener: &L) -> bool {
        self.entries
            .borrow()
            .iter()
            .any(|entry| Self::holds(entry, listener))
    }

    /// Set the local enabled flag of `listener`'s entry.
    ///
    /// No-op if the listener is absent. A disabled entry keeps its
    /// position in the dispatch order and is skipped by passes until
    /// re-enabled.
    pub fn set_enabled(&self, listener: &L, enabled: bool) {
        if let Some(entry) = self
            .entries
            .borrow_mut()
            .iter_mut()
            .find(|entry| Self::holds(entry, listener))
        {
            entry.enabled = enabled;
        }
    }

    /// Whether `listener` is subscribed and locally enabled.
    ///
    /// An absent listener answers `false`, not an error.
    pub fn is_enabled_for(&self, listener: &L) -> bool {
        self.entries
            .borrow()
            .iter()
            .find(|entry| Self::holds(entry, listener))
            .is_some_and(|entry| entry.enabled)
    }

    /// Number of subscribed listeners, disabled entries included.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Whether the roster has no subscribed listeners.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Run one dispatch pass, calling `invoke` on each enabled listener
    /// in subscription order.
    ///
    /// The pass checks `gate` before every step and stops as soon as it
    /// is closed; it ends when the cursor reaches the live entry count.
    /// Afterwards the cursor rests at 0.
    pub fn dispatch(&self, gate: &EnabledHandle, invoke: impl Fn(&L)) {
        self.cursor.set(0);
        loop {
            let index = self.cursor.get();
            let listener = {
                let entries = self.entries.borrow();
                if index >= entries.len() || !gate.is_enabled() {
                    break;
                }
                let entry = &entries[index];
                entry.enabled.then(|| Rc::clone(&entry.listener))
            };
            // The entries borrow is released here; the callback below may
            // reenter any roster operation.
            if let Some(listener) = listener {
                invoke(&*listener);
            }
            self.cursor.set(self.cursor.get() + 1);
        }
        self.cursor.set(0);
    }

    fn holds(entry: &Entry<L>, listener: &L) -> bool {
        ptr::addr_eq(Rc::as_ptr(&entry.listener), listener)
    }
}

impl<L: ?Sized> Default for Roster<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: ?Sized> fmt::Debug for Roster<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Roster")
            .field("len", &self.len())
            .field("cursor", &self.cursor.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Roster;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tactus_core::EnabledHandle;

    // Local capability trait: the roster is phase-agnostic, so the
    // cursor rules are pinned against a minimal stand-in.
    trait Step {
        fn step(&self);
    }

    type Log = Rc<RefCell<Vec<&'static str>>>;

    struct Scripted {
        tag: &'static str,
        log: Log,
        action: RefCell<Option<Box<dyn FnMut()>>>,
    }

    impl Scripted {
        fn new(tag: &'static str, log: &Log) -> Rc<Self> {
            Rc::new(Self {
                tag,
                log: log.clone(),
                action: RefCell::new(None),
            })
        }

        fn with_action(tag: &'static str, log: &Log, action: impl FnMut() + 'static) -> Rc<Self> {
            Rc::new(Self {
                tag,
                log: log.clone(),
                action: RefCell::new(Some(Box::new(action))),
            })
        }
    }

    impl Step for Scripted {
        fn step(&self) {
            self.log.borrow_mut().push(self.tag);
            if let Some(action) = self.action.borrow_mut().as_mut() {
                action();
            }
        }
    }

    fn new_log() -> Log {
        Rc::new(RefCell::new(Vec::new()))
    }

    fn run(roster: &Roster<dyn Step>) {
        roster.dispatch(&EnabledHandle::new(true), |listener| listener.step());
    }

    #[test]
    fn dispatches_in_subscription_order() {
        let log = new_log();
        let roster = Roster::<dyn Step>::new();
        let a = Scripted::new("a", &log);
        let b = Scripted::new("b", &log);
        let c = Scripted::new("c", &log);
        roster.subscribe(a);
        roster.subscribe(b);
        roster.subscribe(c);

        run(&roster);

        assert_eq!(*log.borrow(), ["a", "b", "c"]);
    }

    #[test]
    fn resubscribing_is_a_noop() {
        let log = new_log();
        let roster = Roster::<dyn Step>::new();
        let a = Scripted::new("a", &log);
        roster.subscribe(a.clone());
        roster.subscribe(a.clone());

        assert_eq!(roster.len(), 1);
        run(&roster);
        assert_eq!(*log.borrow(), ["a"]);
    }

    #[test]
    fn unsubscribing_an_absent_listener_is_a_noop() {
        let log = new_log();
        let roster = Roster::<dyn Step>::new();
        let a = Scripted::new("a", &log);
        let stranger = Scripted::new("stranger", &log);
        roster.subscribe(a);

        roster.unsubscribe(&*stranger);

        assert_eq!(roster.len(), 1);
        assert!(!roster.is_subscribed(&*stranger));
    }

    #[test]
    fn identity_is_per_allocation() {
        let log = new_log();
        let roster = Roster::<dyn Step>::new();
        let a = Scripted::new("a", &log);
        let twin = Scripted::new("a", &log);
        roster.subscribe(a.clone());

        assert!(roster.is_subscribed(&*a));
        assert!(!roster.is_subscribed(&*twin));
    }

    #[test]
    fn disabled_entry_is_skipped_but_keeps_its_place() {
        let log = new_log();
        let roster = Roster::<dyn Step>::new();
        let a = Scripted::new("a", &log);
        let b = Scripted::new("b", &log);
        roster.subscribe(a.clone());
        roster.subscribe(b);
        roster.set_enabled(&*a, false);

        run(&roster);
        assert_eq!(*log.borrow(), ["b"]);
        assert!(roster.is_subscribed(&*a));
        assert!(!roster.is_enabled_for(&*a));

        roster.set_enabled(&*a, true);
        log.borrow_mut().clear();
        run(&roster);
        assert_eq!(*log.borrow(), ["a", "b"]);
    }

    #[test]
    fn enabled_queries_on_absent_listeners_answer_false() {
        let log = new_log();
        let roster = Roster::<dyn Step>::new();
        let stranger = Scripted::new("stranger", &log);

        assert!(!roster.is_enabled_for(&*stranger));
        roster.set_enabled(&*stranger, true);
        assert!(!roster.is_subscribed(&*stranger));
    }

    #[test]
    fn closed_gate_dispatches_nothing() {
        let log = new_log();
        let roster = Roster::<dyn Step>::new();
        let a = Scripted::new("a", &log);
        roster.subscribe(a);

        roster.dispatch(&EnabledHandle::new(false), |listener| listener.step());

        assert!(log.borrow().is_empty());
        assert_eq!(roster.cursor.get(), 0);
    }

    #[test]
    fn closing_the_gate_mid_pass_stops_before_the_next_entry() {
        let log = new_log();
        let roster = Roster::<dyn Step>::new();
        let gate = EnabledHandle::new(true);
        let a = Scripted::with_action("a", &log, {
            let gate = gate.clone();
            move || gate.disable()
        });
        let b = Scripted::new("b", &log);
        roster.subscribe(a);
        roster.subscribe(b);

        roster.dispatch(&gate, |listener| listener.step());

        assert_eq!(*log.borrow(), ["a"]);
        assert_eq!(roster.cursor.get(), 0);
    }

    #[test]
    fn mid_pass_subscription_joins_the_running_pass() {
        let log = new_log();
        let roster = Rc::new(Roster::<dyn Step>::new());
        let c = Scripted::new("c", &log);
        let a = Scripted::with_action("a", &log, {
            let roster = roster.clone();
            let c = c.clone();
            move || roster.subscribe(c.clone())
        });
        let b = Scripted::new("b", &log);
        roster.subscribe(a);
        roster.subscribe(b);

        run(&roster);

        assert_eq!(*log.borrow(), ["a", "b", "c"]);
    }

    #[test]
    fn removal_ahead_of_the_cursor_is_not_visited() {
        let log = new_log();
        let roster = Rc::new(Roster::<dyn Step>::new());
        let c = Scripted::new("c", &log);
        let a = Scripted::with_action("a", &log, {
            let roster = roster.clone();
            let c = c.clone();
            move || roster.unsubscribe(&*c)
        });
        let b = Scripted::new("b", &log);
        roster.subscribe(a);
        roster.subscribe(b);
        roster.subscribe(c.clone());

        run(&roster);

        assert_eq!(*log.borrow(), ["a", "b"]);
        assert!(!roster.is_subscribed(&*c));
    }

    #[test]
    fn removal_behind_the_cursor_skips_and_revisits_nothing() {
        let log = new_log();
        let roster = Rc::new(Roster::<dyn Step>::new());
        let a = Scripted::new("a", &log);
        let b = Scripted::with_action("b", &log, {
            let roster = roster.clone();
            let a = a.clone();
            move || roster.unsubscribe(&*a)
        });
        let c = Scripted::new("c", &log);
        roster.subscribe(a.clone());
        roster.subscribe(b);
        roster.subscribe(c);

        run(&roster);

        assert_eq!(*log.borrow(), ["a", "b", "c"]);
        assert!(!roster.is_subscribed(&*a));
    }

    #[test]
    fn removal_behind_the_cursor_adjusts_the_live_cursor() {
        let log = new_log();
        let roster = Rc::new(Roster::<dyn Step>::new());
        let a = Scripted::new("a", &log);
        let observed = Rc::new(RefCell::new(Vec::new()));
        let b = Scripted::with_action("b", &log, {
            let roster = roster.clone();
            let a = a.clone();
            let observed = observed.clone();
            move || {
                observed.borrow_mut().push(roster.cursor.get());
                roster.unsubscribe(&*a);
                observed.borrow_mut().push(roster.cursor.get());
            }
        });
        let c = Scripted::new("c", &log);
        roster.subscribe(a);
        roster.subscribe(b);
        roster.subscribe(c);

        run(&roster);

        // b ran at index 1; removing a (index 0) pulled the cursor back
        // to 0 so the advance lands on c.
        assert_eq!(*observed.borrow(), [1, 0]);
        assert_eq!(*log.borrow(), ["a", "b", "c"]);
    }

    #[test]
    fn self_removal_mid_list_does_not_skip_the_successor() {
        let log = new_log();
        let roster = Rc::new(Roster::<dyn Step>::new());
        let b = Rc::new(RefCell::new(None::<Rc<Scripted>>));
        let a = Scripted::new("a", &log);
        let b_listener = Scripted::with_action("b", &log, {
            let roster = roster.clone();
            let b = b.clone();
            move || {
                let me = b.borrow().clone().unwrap();
                roster.unsubscribe(&*me);
            }
        });
        *b.borrow_mut() = Some(b_listener.clone());
        let c = Scripted::new("c", &log);
        roster.subscribe(a);
        roster.subscribe(b_listener.clone());
        roster.subscribe(c);

        run(&roster);

        assert_eq!(*log.borrow(), ["a", "b", "c"]);
        assert!(!roster.is_subscribed(&*b_listener));
    }

    #[test]
    fn self_removal_at_the_front_passes_over_the_shifted_entry() {
        // The cursor's zero floor: the listener at index 0 removing
        // itself leaves the cursor at 0, so the entry shifted into slot
        // 0 is passed over for the rest of the pass.
        let log = new_log();
        let roster = Rc::new(Roster::<dyn Step>::new());
        let a = Rc::new(RefCell::new(None::<Rc<Scripted>>));
        let a_listener = Scripted::with_action("a", &log, {
            let roster = roster.clone();
            let a = a.clone();
            move || {
                let me = a.borrow().clone().unwrap();
                roster.unsubscribe(&*me);
            }
        });
        *a.borrow_mut() = Some(a_listener.clone());
        let b = Scripted::new("b", &log);
        roster.subscribe(a_listener);
        roster.subscribe(b.clone());

        run(&roster);

        assert_eq!(*log.borrow(), ["a"]);
        assert!(roster.is_subscribed(&*b));

        // The next pass starts fresh and reaches it.
        log.borrow_mut().clear();
        run(&roster);
        assert_eq!(*log.borrow(), ["b"]);
    }

    #[test]
    fn cursor_rests_at_zero_between_passes() {
        let log = new_log();
        let roster = Roster::<dyn Step>::new();
        let a = Scripted::new("a", &log);
        let b = Scripted::new("b", &log);
        roster.subscribe(a);
        roster.subscribe(b);

        run(&roster);
        assert_eq!(roster.cursor.get(), 0);

        run(&roster);
        assert_eq!(*log.borrow(), ["a", "b", "a", "b"]);
    }

    #[test]
    fn dispatch_on_an_empty_roster_is_a_noop() {
        let roster = Roster::<dyn Step>::new();
        run(&roster);
        assert_eq!(roster.cursor.get(), 0);
        assert!(roster.is_empty());
    }

    #[test]
    fn unsubscribe_at_rest_does_not_move_the_cursor() {
        let log = new_log();
        let roster = Roster::<dyn Step>::new();
        let a = Scripted::new("a", &log);
        let b = Scripted::new("b", &log);
        roster.subscribe(a.clone());
        roster.subscribe(b.clone());

        roster.unsubscribe(&*a);

        assert_eq!(roster.cursor.get(), 0);
        run(&roster);
        assert_eq!(*log.borrow(), ["b"]);
    }
}
