//! Six single-digit OTP cells.
//!
//! The component only moves DOM focus to [`OtpCells::focus`] after each
//! edit; cell contents and focus rules live here.

#[cfg(test)]
#[path = "otp_test.rs"]
mod otp_test;

use super::validation::OTP_LEN;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OtpCells {
    digits: [Option<char>; OTP_LEN],
    focus: usize,
}

impl OtpCells {
    /// Apply the raw value of cell `index`. A digit fills the cell and
    /// advances focus; anything else clears it. Returns the new focus.
    pub fn input(&mut self, index: usize, raw: &str) -> usize {
        if index >= OTP_LEN {
            return self.focus;
        }
        match raw.chars().rev().find(char::is_ascii_digit) {
            Some(digit) => {
                self.digits[index] = Some(digit);
                self.focus = (index + 1).min(OTP_LEN - 1);
            }
            None => {
                self.digits[index] = None;
                self.focus = index;
            }
        }
        self.focus
    }

    /// Backspace in cell `index`: clears a filled cell, or retreats to the
    /// previous cell when already empty.
    pub fn backspace(&mut self, index: usize) -> usize {
        if index >= OTP_LEN {
            return self.focus;
        }
        if self.digits[index].is_some() {
            self.digits[index] = None;
            self.focus = index;
        } else {
            self.focus = index.saturating_sub(1);
        }
        self.focus
    }

    /// Fill from the first cell with the digits found in `text`.
    pub fn paste(&mut self, text: &str) -> usize {
        let digits: Vec<char> = text.chars().filter(char::is_ascii_digit).take(OTP_LEN).collect();
        if digits.is_empty() {
            return self.focus;
        }
        self.digits = [None; OTP_LEN];
        for (cell, digit) in self.digits.iter_mut().zip(&digits) {
            *cell = Some(*digit);
        }
        self.focus = digits.len().min(OTP_LEN - 1);
        self.focus
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Cell contents for rendering.
    #[must_use]
    pub fn digit(&self, index: usize) -> String {
        self.digits.get(index).copied().flatten().map(String::from).unwrap_or_default()
    }

    #[must_use]
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Filled digits in order; gaps are skipped so a partial code stays short.
    #[must_use]
    pub fn value(&self) -> String {
        self.digits.iter().flatten().collect()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.digits.iter().all(Option::is_some)
    }
}
