use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Arc,
};

/// The submit button of a form. It is disabled while its attempt is in flight, so
/// a second attempt cannot start until the first one settles.
#[derive(Debug, Clone, Default)]
pub struct SubmitControl {
    state: Arc<ControlState>,
}

#[derive(Debug, Default)]
struct ControlState {
    disabled: AtomicBool,
    activations: AtomicUsize,
}

impl SubmitControl {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !self.state.disabled.load(Ordering::SeqCst)
    }

    /// Number of attempts that have disabled the control so far.
    #[must_use]
    pub fn activations(&self) -> usize {
        self.state.activations.load(Ordering::SeqCst)
    }

    /// Disables the control until the returned guard is dropped. Returns `None`
    /// when an attempt is already in flight.
    #[must_use]
    pub fn disable(&self) -> Option<ControlGuard> {
        self.state
            .disabled
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()?;
        self.state.activations.fetch_add(1, Ordering::SeqCst);

        Some(ControlGuard {
            control: self.clone(),
        })
    }
}

/// Re-enables its control when dropped, whatever the outcome of the attempt.
#[derive(Debug)]
pub struct ControlGuard {
    control: SubmitControl,
}

impl Drop for ControlGuard {
    fn drop(&mut self) {
        self.control.state.disabled.store(false, Ordering::SeqCst);
    }
}
