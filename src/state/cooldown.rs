//! OTP resend cooldown.
//!
//! Purely client-side UX: the server's code expiry is independent and
//! authoritative. The browser drives `tick` once per second.

#[cfg(test)]
#[path = "cooldown_test.rs"]
mod cooldown_test;

pub const RESEND_COOLDOWN_SECS: u32 = 60;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResendCooldown {
    remaining: u32,
}

impl ResendCooldown {
    /// Restart the countdown at [`RESEND_COOLDOWN_SECS`].
    pub fn start(&mut self) {
        self.remaining = RESEND_COOLDOWN_SECS;
    }

    /// Advance one second. Returns whether the cooldown is still running.
    pub fn tick(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.is_active()
    }

    pub fn reset(&mut self) {
        self.remaining = 0;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.remaining > 0
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Resend button caption.
    #[must_use]
    pub fn label(&self) -> String {
        if self.is_active() {
            format!("Resend code in {}s", self.remaining)
        } else {
            "Resend code".to_owned()
        }
    }
}
