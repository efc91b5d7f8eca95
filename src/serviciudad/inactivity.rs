use std::{pin::Pin, str::FromStr, time::Duration};
use tokio::time::{sleep, Instant, Sleep};

/// User interactions that count as activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    MouseDown,
    KeyDown,
    Scroll,
    TouchStart,
}

impl FromStr for Interaction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mousedown" => Ok(Self::MouseDown),
            "keydown" => Ok(Self::KeyDown),
            "scroll" => Ok(Self::Scroll),
            "touchstart" => Ok(Self::TouchStart),
            _ => Err(()),
        }
    }
}

/// Resettable countdown that fires after a period without interactions.
#[derive(Debug)]
pub struct InactivityTimer {
    timeout: Duration,
    sleep: Pin<Box<Sleep>>,
}

impl InactivityTimer {
    /// Arms the countdown starting now.
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            sleep: Box::pin(sleep(timeout)),
        }
    }

    pub fn reset(&mut self) {
        let deadline = Instant::now() + self.timeout;
        self.sleep.as_mut().reset(deadline);
    }

    /// Resets the countdown if `event` is a qualifying interaction.
    pub fn record(&mut self, event: &str) -> bool {
        if event.parse::<Interaction>().is_ok() {
            self.reset();
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn deadline(&self) -> Instant {
        self.sleep.deadline()
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.deadline()
    }

    /// Completes once the countdown runs out.
    pub async fn expired(&mut self) {
        self.sleep.as_mut().await;
    }
}
