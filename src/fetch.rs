// SPDX-License-Identifier: MIT
// Copyright 2026 The FitTracker Authors

//! Fetch lifecycle shared by the list and detail views.
//!
//! Every view that loads data goes through `Idle -> Loading -> Ready |
//! Failed`. Each activation (mount or change of the identifying parameter)
//! gets a sequence number; a result is only applied if it belongs to the
//! latest activation, so a slow stale response can never overwrite a newer
//! view.

use crate::error::Result;
use std::future::Future;
use tokio::sync::watch;

/// Observable state of one view's data request.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Ready(T),
    /// User-facing message
    Failed(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Idle
    }
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            FetchState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Token for one activation; results must be handed back with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Activation(u64);

impl Activation {
    pub fn seq(&self) -> u64 {
        self.0
    }
}

/// Fetch state plus the sequence number of the latest activation.
#[derive(Debug, Clone)]
pub struct FetchLifecycle<T> {
    seq: u64,
    state: FetchState<T>,
}

impl<T> Default for FetchLifecycle<T> {
    fn default() -> Self {
        Self {
            seq: 0,
            state: FetchState::Idle,
        }
    }
}

impl<T> FetchLifecycle<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    /// Number of activations so far.
    pub fn activations(&self) -> u64 {
        self.seq
    }

    pub fn is_current(&self, activation: Activation) -> bool {
        activation.0 == self.seq
    }

    /// Discard whatever state there was and enter `Loading`.
    pub fn activate(&mut self) -> Activation {
        self.seq += 1;
        self.state = FetchState::Loading;
        Activation(self.seq)
    }

    /// Apply the result of `activation`'s request.
    ///
    /// Returns `false` (and leaves the state untouched) when the activation
    /// has been superseded or was already resolved.
    pub fn resolve(&mut self, activation: Activation, result: Result<T>) -> bool {
        if !self.is_current(activation) {
            tracing::debug!(
                stale_seq = activation.0,
                current_seq = self.seq,
                "Discarding result of superseded activation"
            );
            return false;
        }
        if !self.state.is_loading() {
            return false;
        }

        self.state = match result {
            Ok(data) => FetchState::Ready(data),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    kind = ?e.kind(),
                    seq = activation.0,
                    "Fetch failed"
                );
                FetchState::Failed(e.user_message())
            }
        };
        true
    }
}

/// Async driver around a [`FetchLifecycle`] that publishes every
/// transition to subscribers.
pub struct Loader<T> {
    tx: watch::Sender<FetchLifecycle<T>>,
}

impl<T> Default for Loader<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Loader<T> {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(FetchLifecycle::new());
        Self { tx }
    }

    /// Receiver that is notified on every state transition.
    pub fn subscribe(&self) -> watch::Receiver<FetchLifecycle<T>> {
        self.tx.subscribe()
    }

    pub fn snapshot(&self) -> FetchState<T>
    where
        T: Clone,
    {
        self.tx.borrow().state().clone()
    }

    pub fn activations(&self) -> u64 {
        self.tx.borrow().activations()
    }

    /// Start a new activation. Takes effect immediately, before any request
    /// is polled.
    pub fn begin(&self) -> Activation {
        let mut activation = Activation(0);
        self.tx.send_modify(|lifecycle| activation = lifecycle.activate());
        activation
    }

    /// Hand back the result of `activation`. Returns whether it was applied.
    pub fn complete(&self, activation: Activation, result: Result<T>) -> bool {
        self.tx
            .send_if_modified(|lifecycle| lifecycle.resolve(activation, result))
    }

    /// Begin an activation now and resolve it with `request` once awaited.
    pub fn load<'a, F>(&'a self, request: F) -> impl Future<Output = bool> + 'a
    where
        F: Future<Output = Result<T>> + 'a,
    {
        let activation = self.begin();
        async move {
            let result = request.await;
            self.complete(activation, result)
        }
    }
}
