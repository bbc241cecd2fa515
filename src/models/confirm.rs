use std::fmt;

/// Text of the confirmation dialog shown while an intent is pending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub title: &'static str,
    pub message: &'static str,
    pub confirm_label: &'static str,
}

/// A mutation that must be confirmed before it is applied.
pub trait Intent {
    fn prompt(&self) -> Prompt;
}

/// Returned when a second intent is requested while one is still pending.
/// The pending intent is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateBusy;

impl fmt::Display for GateBusy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Another change is awaiting confirmation")
    }
}

impl std::error::Error for GateBusy {}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum GateState<I> {
    #[default]
    Idle,
    Pending(I),
}

/// Single-slot holding area for an intent awaiting confirmation.
///
/// `Idle -> Pending(intent) -> Idle`, leaving `Pending` by either
/// [`confirm`](Self::confirm) (intent handed back for application) or
/// [`cancel`](Self::cancel) (intent dropped).
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmationGate<I> {
    state: GateState<I>,
}

impl<I> Default for ConfirmationGate<I> {
    fn default() -> Self {
        Self { state: GateState::Idle }
    }
}

impl<I> ConfirmationGate<I> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &GateState<I> {
        &self.state
    }

    pub fn pending(&self) -> Option<&I> {
        match &self.state {
            GateState::Pending(intent) => Some(intent),
            GateState::Idle => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending().is_some()
    }

    /// Park `intent`. Rejected while another intent is pending.
    pub fn request(&mut self, intent: I) -> Result<(), GateBusy> {
        if self.is_pending() {
            return Err(GateBusy);
        }
        self.state = GateState::Pending(intent);
        Ok(())
    }

    /// Leave `Pending`, returning the intent to apply. `None` when idle.
    pub fn confirm(&mut self) -> Option<I> {
        match std::mem::take(&mut self.state) {
            GateState::Pending(intent) => Some(intent),
            GateState::Idle => None,
        }
    }

    /// Leave `Pending`, discarding the intent. Returns what was dropped.
    pub fn cancel(&mut self) -> Option<I> {
        self.confirm()
    }
}

impl<I: Intent> ConfirmationGate<I> {
    /// Dialog to render for the pending intent, if any.
    pub fn prompt(&self) -> Option<Prompt> {
        self.pending().map(Intent::prompt)
    }
}
