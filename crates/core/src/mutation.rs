// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Optimistic mutation tracking.
//!
//! A [`Mutation`] mirrors one server-owned field while a change to it is in
//! flight:
//!
//! ```text
//! Idle --request--> Pending(requested) --settle(server)--> Settled(server)
//!                          |
//!                          +--fail(message)--> Failed (confirmed value kept)
//! ```
//!
//! Settling always adopts the server's value, even if it differs from what
//! was requested. Failing never commits the requested value.

use crate::error::{Error, Result};

/// Where a tracked field is in its request cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationState<T> {
    Idle,
    Pending(T),
    Settled(T),
    Failed(String),
}

/// A server-owned value with an optional change in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mutation<T> {
    confirmed: T,
    state: MutationState<T>,
    action: &'static str,
}

impl<T: Clone + PartialEq> Mutation<T> {
    /// Tracks `value`, naming the action for in-flight errors.
    pub fn new(action: &'static str, value: T) -> Self {
        Mutation {
            confirmed: value,
            state: MutationState::Idle,
            action,
        }
    }

    /// The value to show: the requested one while pending, else the confirmed one.
    pub fn value(&self) -> &T {
        match &self.state {
            MutationState::Pending(requested) => requested,
            _ => &self.confirmed,
        }
    }

    /// The last value the server confirmed.
    pub fn confirmed(&self) -> &T {
        &self.confirmed
    }

    pub fn state(&self) -> &MutationState<T> {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, MutationState::Pending(_))
    }

    /// Message of the last failure, if the last request failed.
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            MutationState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Starts a change. Returns `Ok(false)` if `requested` equals the current
    /// value, and an error if another change is still pending.
    pub fn request(&mut self, requested: T) -> Result<bool> {
        if self.is_pending() {
            return Err(Error::ActionInFlight(self.action));
        }
        if requested == self.confirmed {
            return Ok(false);
        }
        self.state = MutationState::Pending(requested);
        Ok(true)
    }

    /// Adopts the server's value verbatim.
    pub fn settle(&mut self, server: T) {
        self.confirmed = server.clone();
        self.state = MutationState::Settled(server);
    }

    /// Drops the pending value and records the failure.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.state = MutationState::Failed(message.into());
    }

    /// Replaces the confirmed value from outside (e.g. a reselection) and
    /// forgets any request state.
    pub fn reset(&mut self, value: T) {
        self.confirmed = value;
        self.state = MutationState::Idle;
    }
}

/// A one-shot in-flight flag for actions that carry no value (e.g. delete).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InFlight {
    busy: bool,
}

impl InFlight {
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Marks the action as started. Fails if it already is.
    pub fn begin(&mut self, action: &'static str) -> Result<()> {
        if self.busy {
            return Err(Error::ActionInFlight(action));
        }
        self.busy = true;
        Ok(())
    }

    pub fn finish(&mut self) {
        self.busy = false;
    }
}

#[cfg(test)]
#[path = "mutation_tests.rs"]
mod tests;
