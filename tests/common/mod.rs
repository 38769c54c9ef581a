//! Shared test utilities for the screen workflow integration tests.
//!
//! Provides a `RecordingSink` that stays inspectable after a screen takes
//! ownership of a clone, plus key-event helpers.

#![allow(dead_code)]

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use std::cell::RefCell;
use std::rc::Rc;
use tidepool::forms::{SignInSubmission, SignUpSubmission, SubmissionSink};

#[derive(Debug, Default)]
struct Record {
    sign_ins: Vec<SignInSubmission>,
    sign_ups: Vec<SignUpSubmission>,
}

/// Sink that records every payload it receives, in order. Clones share
/// the same record, so one half can live inside a screen while the test
/// keeps the other.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    record: Rc<RefCell<Record>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sign_ins(&self) -> Vec<SignInSubmission> {
        self.record.borrow().sign_ins.clone()
    }

    pub fn sign_ups(&self) -> Vec<SignUpSubmission> {
        self.record.borrow().sign_ups.clone()
    }
}

impl SubmissionSink for RecordingSink {
    fn sign_in(&mut self, submission: SignInSubmission) {
        self.record.borrow_mut().sign_ins.push(submission);
    }

    fn sign_up(&mut self, submission: SignUpSubmission) {
        self.record.borrow_mut().sign_ups.push(submission);
    }
}

/// Key press without modifiers.
pub fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

/// Key press with modifiers.
pub fn key_with(code: KeyCode, modifiers: KeyModifiers) -> Event {
    Event::Key(KeyEvent::new(code, modifiers))
}
