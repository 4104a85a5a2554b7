use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Which part of the quiz lifecycle the session is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingGuess,
    GameOver,
}

/// Success/failure style indicator for the feedback area. The presentation
/// layer owns the actual strings and colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Cleared,
    Correct,
    Incorrect,
}

/// Display commands emitted by session operations for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A new question is active; show this country's flag.
    ShowFlag { country: String },
    /// The pool is exhausted; show the terminal placeholder and disable input.
    ShowGameOver,
    /// Restyle the feedback area.
    Feedback { feedback: Feedback },
    /// Re-render the score display.
    ScoreChanged { score: u32 },
    /// Re-render the elapsed-time display.
    ClockUpdated { total: Duration },
}

/// Quiz session state machine.
///
/// Owns the remaining-country pool, the active question, the score, and the
/// per-question timing bookkeeping. Operations are pure in-memory state
/// manipulation; callers inject `now` so the clock is controllable in tests,
/// and the RNG is seeded so question order is replayable.
#[derive(Debug)]
pub struct Session {
    /// Countries not yet answered. Shrinks monotonically, never grows.
    remaining: Vec<String>,
    catalog_size: usize,
    current_target: Option<String>,
    score: u32,
    /// Total time spent on questions that have been answered.
    elapsed_accumulated: Duration,
    /// When the active question was drawn; `None` outside AwaitingGuess.
    question_start: Option<Instant>,
    phase: Phase,
    rng: StdRng,
}

impl Session {
    /// Create a session over the given question pool. Duplicate names are
    /// collapsed. Equal seeds replay the same question order.
    pub fn new(countries: impl IntoIterator<Item = String>, seed: u64) -> Self {
        let remaining: Vec<String> = countries
            .into_iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        Self {
            catalog_size: remaining.len(),
            remaining,
            current_target: None,
            score: 0,
            elapsed_accumulated: Duration::ZERO,
            question_start: None,
            phase: Phase::AwaitingGuess,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Size of the pool the session started with.
    pub fn catalog_size(&self) -> usize {
        self.catalog_size
    }

    pub fn current_target(&self) -> Option<&str> {
        self.current_target.as_deref()
    }

    pub fn remaining_countries(&self) -> &[String] {
        &self.remaining
    }

    /// Total quiz time: answered-question time plus the active question so far.
    pub fn total_elapsed(&self, now: Instant) -> Duration {
        match self.question_start {
            Some(start) => self.elapsed_accumulated + now.saturating_duration_since(start),
            None => self.elapsed_accumulated,
        }
    }

    /// Draw the next question uniformly at random, or transition to game
    /// over when the pool is exhausted. Returns the display commands for the
    /// presentation layer.
    pub fn start_new_question(&mut self, now: Instant) -> Vec<SessionEvent> {
        if self.remaining.is_empty() {
            self.phase = Phase::GameOver;
            self.current_target = None;
            self.question_start = None;
            tracing::debug!(score = self.score, "question pool exhausted");
            return vec![SessionEvent::ShowGameOver];
        }

        let index = self.rng.random_range(0..self.remaining.len());
        let country = self.remaining[index].clone();
        tracing::debug!(country = %country, remaining = self.remaining.len(), "drew next question");
        self.current_target = Some(country.clone());
        self.question_start = Some(now);
        vec![
            SessionEvent::ShowFlag { country },
            SessionEvent::Feedback {
                feedback: Feedback::Cleared,
            },
        ]
    }

    /// Check a submitted guess against the active question.
    ///
    /// Comparison trims surrounding whitespace and is case-insensitive. A
    /// miss leaves the session untouched; retries are unlimited. A hit
    /// retires the country, banks the question time, bumps the score, and
    /// chains straight into the next question (or game over).
    pub fn submit_guess(&mut self, raw_text: &str, now: Instant) -> Vec<SessionEvent> {
        let Some(target) = self.current_target.clone() else {
            // No active question: before the first draw, or game over.
            return Vec::new();
        };

        if raw_text.trim().to_lowercase() != target.to_lowercase() {
            return vec![SessionEvent::Feedback {
                feedback: Feedback::Incorrect,
            }];
        }

        self.remaining.retain(|country| country != &target);
        self.score += 1;
        if let Some(start) = self.question_start.take() {
            self.elapsed_accumulated += now.saturating_duration_since(start);
        }

        let mut events = vec![
            SessionEvent::Feedback {
                feedback: Feedback::Correct,
            },
            SessionEvent::ScoreChanged { score: self.score },
            SessionEvent::ClockUpdated {
                total: self.elapsed_accumulated,
            },
        ];
        events.extend(self.start_new_question(now));
        events
    }

    /// Periodic clock refresh for the elapsed-time display. Has no effect on
    /// score or question state. Returns `None` once there is no active
    /// question to measure against; the periodic driver stops rescheduling
    /// on `None`.
    pub fn tick(&self, now: Instant) -> Option<SessionEvent> {
        let start = self.question_start?;
        Some(SessionEvent::ClockUpdated {
            total: self.elapsed_accumulated + now.saturating_duration_since(start),
        })
    }
}
