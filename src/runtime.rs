//! The action pipeline: one loop that folds actions through the reducer,
//! publishes state and hands every action to the effects.

use std::marker::PhantomData;

use tokio::sync::{broadcast, mpsc, watch};
use tokio::task::JoinHandle;

use crate::mvi::{Dispatcher, Effects, Reducer};
use crate::shutdown::ShutdownHandle;

const ACTION_TAP_CAPACITY: usize = 256;

/// Running store: dispatch in, state and actions out.
pub struct Store<R: Reducer> {
    dispatcher: Dispatcher<R::Action>,
    state: watch::Receiver<R::State>,
    actions: broadcast::Receiver<R::Action>,
    task: JoinHandle<()>,
    _reducer: PhantomData<fn() -> R>,
}

impl<R> Store<R>
where
    R: Reducer + 'static,
{
    /// Spawn the pipeline loop. It runs until `shutdown` is signalled.
    pub fn spawn<E>(effects: E, shutdown: ShutdownHandle) -> Self
    where
        E: Effects<Action = R::Action>,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        let dispatcher = Dispatcher::new(tx);
        let (state_tx, state) = watch::channel(R::State::default());
        let (actions_tx, actions) = broadcast::channel(ACTION_TAP_CAPACITY);

        let task = tokio::spawn(run_loop::<R, E>(
            rx,
            dispatcher.clone(),
            state_tx,
            actions_tx,
            effects,
            shutdown,
        ));

        Self {
            dispatcher,
            state,
            actions,
            task,
            _reducer: PhantomData,
        }
    }

    /// Fire-and-forget dispatch.
    pub fn dispatch(&self, action: R::Action) {
        self.dispatcher.dispatch(action);
    }

    pub fn dispatcher(&self) -> Dispatcher<R::Action> {
        self.dispatcher.clone()
    }

    /// Current state snapshot.
    pub fn state(&self) -> R::State {
        self.state.borrow().clone()
    }

    /// Observe state changes. The receiver starts at the current state.
    pub fn subscribe(&self) -> watch::Receiver<R::State> {
        self.state.clone()
    }

    /// Observe every action after the reducer has folded it, so the state
    /// read on receipt already reflects the action. Closes when the loop exits.
    pub fn actions(&self) -> broadcast::Receiver<R::Action> {
        self.actions.resubscribe()
    }

    /// Wait for the loop to exit after shutdown.
    pub async fn stopped(self) {
        if let Err(err) = self.task.await {
            if err.is_panic() {
                tracing::error!(error = %err, "Store loop panicked");
            }
        }
    }
}

async fn run_loop<R, E>(
    mut rx: mpsc::UnboundedReceiver<R::Action>,
    dispatcher: Dispatcher<R::Action>,
    state_tx: watch::Sender<R::State>,
    actions: broadcast::Sender<R::Action>,
    mut effects: E,
    shutdown: ShutdownHandle,
) where
    R: Reducer,
    E: Effects<Action = R::Action>,
{
    let mut state = R::State::default();
    tracing::debug!("Store loop started");

    loop {
        let action = tokio::select! {
            _ = shutdown.wait() => break,
            action = rx.recv() => match action {
                Some(action) => action,
                None => break,
            },
        };
        tracing::debug!(?action, "Dispatch");

        state = R::reduce(state, action.clone());
        state_tx.send_if_modified(|current| {
            if *current == state {
                return false;
            }
            *current = state.clone();
            true
        });

        // No subscribers is fine.
        let _ = actions.send(action.clone());

        effects.handle(&action, &dispatcher);
    }

    tracing::debug!("Store loop stopped");
}
