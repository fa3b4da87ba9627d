//! Composer modal lifecycle and focus-trap decisions.
//!
//! DESIGN
//! ======
//! The lifecycle is `Closed -> Opening -> Open -> Closing -> Closed`. The
//! `Opening` and `Closing` legs end in fixed-delay timers that cannot be
//! cancelled, so every transition bumps an epoch and a timer only settles the
//! state if the epoch it captured is still current.
//!
//! `H` is the caller's element handle. The model only stores and compares
//! handles; it never dereferences them.
//!
//! TRADE-OFFS
//! ==========
//! Opening while `Opening`/`Open` is ignored so the restore target cannot be
//! overwritten by an element inside the modal. Opening while `Closing` reopens
//! and keeps the original restore target, because the pending close never got
//! to restore focus.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalPhase {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

/// What the controller must do after a close transition starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CloseTicket<H> {
    pub epoch: u64,
    /// Control that opened the modal; its `aria-expanded` goes back to false.
    pub trigger: Option<H>,
}

/// Result of a close timer firing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CloseSettle<H> {
    /// A later transition superseded this timer; touch nothing.
    Stale,
    /// The modal is now hidden; restore focus to `restore_to` if still usable.
    Hidden { restore_to: Option<H> },
}

#[derive(Clone, Debug)]
pub struct ModalState<H> {
    phase: ModalPhase,
    epoch: u64,
    restore_target: Option<H>,
    trigger: Option<H>,
}

impl<H> Default for ModalState<H> {
    fn default() -> Self {
        Self { phase: ModalPhase::Closed, epoch: 0, restore_target: None, trigger: None }
    }
}

impl<H> ModalState<H> {
    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn is_open(&self) -> bool {
        matches!(self.phase, ModalPhase::Opening | ModalPhase::Open)
    }

    pub fn restore_target(&self) -> Option<&H> {
        self.restore_target.as_ref()
    }

    /// Start opening. Returns the epoch the deferred focus step must present,
    /// or `None` when the modal is already open or opening.
    pub fn begin_open(&mut self, previously_focused: Option<H>, trigger: Option<H>) -> Option<u64> {
        match self.phase {
            ModalPhase::Opening | ModalPhase::Open => None,
            ModalPhase::Closed | ModalPhase::Closing => {
                if self.phase == ModalPhase::Closed {
                    self.restore_target = previously_focused;
                }
                self.trigger = trigger;
                self.phase = ModalPhase::Opening;
                self.epoch += 1;
                Some(self.epoch)
            }
        }
    }

    /// Settle the open transition. Returns `true` if focus should move into
    /// the modal now.
    pub fn finish_open(&mut self, epoch: u64) -> bool {
        if epoch != self.epoch || self.phase != ModalPhase::Opening {
            return false;
        }
        self.phase = ModalPhase::Open;
        true
    }

    /// Start closing. Closing from `Closed` is allowed so a modal revealed by
    /// outside markup changes can still be dismissed; a second close while
    /// `Closing` is ignored.
    pub fn begin_close(&mut self) -> Option<CloseTicket<H>> {
        if self.phase == ModalPhase::Closing {
            return None;
        }
        self.phase = ModalPhase::Closing;
        self.epoch += 1;
        Some(CloseTicket { epoch: self.epoch, trigger: self.trigger.take() })
    }

    /// Settle the close transition started with `epoch`.
    pub fn finish_close(&mut self, epoch: u64) -> CloseSettle<H> {
        if epoch != self.epoch || self.phase != ModalPhase::Closing {
            return CloseSettle::Stale;
        }
        self.phase = ModalPhase::Closed;
        CloseSettle::Hidden { restore_to: self.restore_target.take() }
    }
}

/// How a Tab keypress inside the open modal is handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TabMove {
    /// Nothing focusable inside: swallow the key.
    Suppress,
    WrapToFirst,
    WrapToLast,
    /// Let the browser move focus natively.
    PassThrough,
}

/// Decide a Tab keypress given the focusable descendants at keypress time.
pub fn trap_tab<T: PartialEq>(focusables: &[T], active: Option<&T>, shift: bool) -> TabMove {
    let (Some(first), Some(last)) = (focusables.first(), focusables.last()) else {
        return TabMove::Suppress;
    };
    if shift && active == Some(first) {
        TabMove::WrapToLast
    } else if !shift && active == Some(last) {
        TabMove::WrapToFirst
    } else {
        TabMove::PassThrough
    }
}

/// Cycle `active` through `focusables` the way the trap plus native Tab order
/// would. Used to reason about trap behaviour without a browser.
pub fn next_focus<'a, T: PartialEq>(focusables: &'a [T], active: Option<&T>, shift: bool) -> Option<&'a T> {
    match trap_tab(focusables, active, shift) {
        TabMove::Suppress => None,
        TabMove::WrapToFirst => focusables.first(),
        TabMove::WrapToLast => focusables.last(),
        TabMove::PassThrough => {
            let pos = active.and_then(|a| focusables.iter().position(|f| f == a));
            match (pos, shift) {
                (Some(i), false) => focusables.get(i + 1),
                (Some(i), true) => i.checked_sub(1).and_then(|j| focusables.get(j)),
                (None, false) => focusables.first(),
                (None, true) => focusables.last(),
            }
        }
    }
}
