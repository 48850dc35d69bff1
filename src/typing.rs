//! Looping type/delete animation over a fixed phrase list.
//!
//! The machine is a plain value: each `tick` returns the text to render and
//! the delay to schedule the next tick with, so the driver owns all timing
//! and cancellation and tests never wait on a clock.

#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

pub const TYPE_DELAY_MS: u32 = 150;
pub const DELETE_DELAY_MS: u32 = 100;
pub const HOLD_DELAY_MS: u32 = 2_000;
pub const ADVANCE_DELAY_MS: u32 = 500;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Phase {
    Typing,
    Deleting,
}

/// One rendered step: the text to show and the pause before the next step.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Frame {
    pub text: String,
    pub delay_ms: u32,
}

pub struct TypingAnimation {
    words: Vec<String>,
    word_index: usize,
    char_index: usize,
    phase: Phase,
}

impl TypingAnimation {
    /// Returns `None` for an empty phrase list.
    pub fn new<I, S>(words: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.is_empty() {
            return None;
        }

        Some(Self {
            words,
            word_index: 0,
            char_index: 0,
            phase: Phase::Typing,
        })
    }

    /// Advances the animation by one frame.
    ///
    /// While typing the cursor index grows one character per tick; once the
    /// full word is shown the frame holds for `HOLD_DELAY_MS` and the phase
    /// flips to deleting. Deleting shrinks back to the empty string, then the
    /// next word is selected (wrapping) with an `ADVANCE_DELAY_MS` pause.
    /// Index arithmetic clamps to `[0, word length]` in chars, so a
    /// zero-length phrase passes straight through the hold-then-delete step.
    pub fn tick(&mut self) -> Frame {
        let word = &self.words[self.word_index];
        let word_len = word.chars().count();
        let was_deleting = self.phase == Phase::Deleting;

        let mut delay_ms = if was_deleting {
            self.char_index = self.char_index.saturating_sub(1);
            DELETE_DELAY_MS
        } else {
            self.char_index = (self.char_index + 1).min(word_len);
            TYPE_DELAY_MS
        };
        let text: String = word.chars().take(self.char_index).collect();

        if !was_deleting && self.char_index == word_len {
            delay_ms = HOLD_DELAY_MS;
            self.phase = Phase::Deleting;
        } else if was_deleting && self.char_index == 0 {
            self.phase = Phase::Typing;
            self.word_index = (self.word_index + 1) % self.words.len();
            delay_ms = ADVANCE_DELAY_MS;
        }

        Frame { text, delay_ms }
    }
}
