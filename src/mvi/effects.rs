//! Effects trait and the dispatch handle effects emit through.

use tokio::sync::mpsc;

use super::action::Action;

/// Fire-and-forget entry point into the action pipeline.
pub struct Dispatcher<A: Action> {
    tx: mpsc::UnboundedSender<A>,
}

impl<A: Action> Dispatcher<A> {
    pub fn new(tx: mpsc::UnboundedSender<A>) -> Self {
        Self { tx }
    }

    /// Queue an action for the reducer and effects.
    ///
    /// Actions dispatched after the pipeline stopped are dropped.
    pub fn dispatch(&self, action: A) {
        if let Err(err) = self.tx.send(action) {
            tracing::debug!(action = ?err.0, "Pipeline closed, action dropped");
        }
    }
}

impl<A: Action> Clone for Dispatcher<A> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

/// Asynchronous handlers triggered by matching actions.
///
/// `handle` runs on the pipeline loop for every action after the reducer
/// has folded it. It must not block; long-running work is spawned and
/// reports back by dispatching follow-up actions.
pub trait Effects: Send + 'static {
    type Action: Action;

    fn handle(&mut self, action: &Self::Action, dispatcher: &Dispatcher<Self::Action>);
}
