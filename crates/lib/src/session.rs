//! # Forecast Session
//!
//! Holds the user's current selection and drives one resolution cycle per
//! selection change:
//!
//! ```text
//! Idle -> Resolving -> Resolved | FallbackComputed
//!      \-> Unsupported (ineligible selections, no network call)
//! ```
//!
//! Every change takes a ticket with a fresh sequence number. A cycle's outcome
//! is applied only if its ticket is still the latest one, so a slow response
//! for an older selection can never overwrite the result of a newer one.

use crate::{
    eligibility::is_eligible,
    projector::{project, ViewModel},
    resolver::{Resolution, ScenarioResolver},
    types::{PredictionResult, SelectionTuple},
};
use serde::Serialize;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::{sync::watch, task::JoinHandle};
use tracing::{debug, info};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Idle,
    Resolving,
    Resolved,
    FallbackComputed,
    Unsupported,
}

impl Phase {
    /// `true` once the current cycle can no longer change.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Phase::Resolved | Phase::FallbackComputed | Phase::Unsupported
        )
    }
}

/// Identifies one resolution cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ticket {
    pub sequence: u64,
    pub selection: SelectionTuple,
    pub eligible: bool,
}

/// A point-in-time copy of the session, as published to subscribers.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    pub sequence: u64,
    pub selection: SelectionTuple,
    pub phase: Phase,
    pub result: Option<PredictionResult>,
    pub view: ViewModel,
}

/// The pure state machine behind a session.
#[derive(Clone, Debug)]
pub struct ResolutionState {
    sequence: u64,
    selection: SelectionTuple,
    eligible: bool,
    phase: Phase,
    result: Option<PredictionResult>,
}

impl ResolutionState {
    pub fn new(initial: SelectionTuple) -> Self {
        Self {
            sequence: 0,
            eligible: is_eligible(&initial),
            selection: initial,
            phase: Phase::Idle,
            result: None,
        }
    }

    /// Starts a cycle for `selection`, superseding any cycle in flight.
    ///
    /// Ineligible selections finish immediately in `Unsupported`. For eligible
    /// ones the previous result is kept so it can stay on screen while the new
    /// one is computed.
    pub fn begin(&mut self, selection: SelectionTuple) -> Ticket {
        self.sequence += 1;
        self.eligible = is_eligible(&selection);
        self.selection = selection;
        if self.eligible {
            self.phase = Phase::Resolving;
        } else {
            self.phase = Phase::Unsupported;
            self.result = None;
        }
        Ticket {
            sequence: self.sequence,
            selection: self.selection.clone(),
            eligible: self.eligible,
        }
    }

    /// Applies the outcome of a cycle.
    ///
    /// Returns `false` and leaves the state untouched if the ticket is stale.
    pub fn complete(&mut self, ticket: &Ticket, resolution: Resolution) -> bool {
        if ticket.sequence != self.sequence || !ticket.eligible {
            return false;
        }
        self.phase = if resolution.result.is_fallback {
            Phase::FallbackComputed
        } else {
            Phase::Resolved
        };
        self.result = Some(resolution.result);
        true
    }

    pub fn is_current(&self, ticket: &Ticket) -> bool {
        ticket.sequence == self.sequence
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn selection(&self) -> &SelectionTuple {
        &self.selection
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        self.result.as_ref()
    }

    pub fn view(&self) -> ViewModel {
        project(
            &self.selection,
            self.eligible,
            self.result.as_ref(),
            self.phase == Phase::Resolving,
        )
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            sequence: self.sequence,
            selection: self.selection.clone(),
            phase: self.phase,
            result: self.result,
            view: self.view(),
        }
    }
}

struct Shared {
    state: Mutex<ResolutionState>,
    updates: watch::Sender<Snapshot>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, ResolutionState> {
        // `begin` and `complete` never leave the state half-written.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn publish(&self, state: &ResolutionState) {
        self.updates.send_replace(state.snapshot());
    }
}

/// An event-driven owner of the current selection.
///
/// Cloning a session yields another handle to the same state.
#[derive(Clone)]
pub struct ForecastSession {
    resolver: Arc<ScenarioResolver>,
    shared: Arc<Shared>,
}

impl ForecastSession {
    /// Creates a session in `Idle` holding `initial`. Call [`select`](Self::select)
    /// with it to resolve the initial selection.
    pub fn new(resolver: ScenarioResolver, initial: SelectionTuple) -> Self {
        let state = ResolutionState::new(initial);
        let (updates, _) = watch::channel(state.snapshot());
        Self {
            resolver: Arc::new(resolver),
            shared: Arc::new(Shared {
                state: Mutex::new(state),
                updates,
            }),
        }
    }

    /// Receives a snapshot after every state transition.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.shared.updates.subscribe()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.shared.lock().snapshot()
    }

    /// Records a selection change and returns the future that resolves it.
    ///
    /// The ticket is taken before this function returns, so the order of
    /// `select` calls decides which result wins, not the order in which the
    /// returned futures complete. The future yields the snapshot after its
    /// cycle ends; for a stale cycle that is the newer cycle's snapshot.
    pub fn select(
        &self,
        selection: SelectionTuple,
    ) -> impl Future<Output = Snapshot> + Send + 'static {
        let ticket = {
            let mut state = self.shared.lock();
            let ticket = state.begin(selection);
            self.shared.publish(&state);
            ticket
        };
        debug!(
            "[session] #{} {} eligible={}",
            ticket.sequence, ticket.selection, ticket.eligible
        );

        let resolver = Arc::clone(&self.resolver);
        let shared = Arc::clone(&self.shared);
        async move {
            if !ticket.eligible {
                return shared.lock().snapshot();
            }

            let resolution = resolver.resolve_or_estimate(&ticket.selection).await;

            let mut state = shared.lock();
            if state.complete(&ticket, resolution) {
                shared.publish(&state);
            } else {
                info!(
                    "[session] Discarding stale result for #{} {}",
                    ticket.sequence, ticket.selection
                );
            }
            state.snapshot()
        }
    }

    /// Like [`select`](Self::select), but runs the cycle on the tokio runtime.
    pub fn spawn_select(&self, selection: SelectionTuple) -> JoinHandle<Snapshot> {
        tokio::spawn(self.select(selection))
    }
}
