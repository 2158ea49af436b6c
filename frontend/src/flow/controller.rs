use super::{
    state::{FlowDefinition, FlowState, Rejection},
    token::Token,
};
use crate::api::ApiError;
use leptos::*;
use std::future::Future;

/// Reactive handle on one running flow.
///
/// `build` turns the raw input (plus the page token) into a request payload or
/// a [`Rejection`]; `send` performs the single HTTP call. The state signal is
/// written from inside the action so it stays correct without effects.
pub struct FlowController<I: 'static> {
    pub definition: &'static FlowDefinition,
    pub state: RwSignal<FlowState>,
    action: Action<I, ()>,
}

impl<I: 'static> Clone for FlowController<I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I: 'static> Copy for FlowController<I> {}

impl<I: 'static> FlowController<I> {
    pub fn new<P, B, S, Fut>(
        definition: &'static FlowDefinition,
        token: Option<Token>,
        build: B,
        send: S,
    ) -> Self
    where
        P: 'static,
        B: Fn(&I, Option<&Token>) -> Result<P, Rejection> + 'static,
        S: Fn(P) -> Fut + 'static,
        Fut: Future<Output = Result<(), ApiError>> + 'static,
    {
        let state = create_rw_signal(definition.initial_state(token.as_ref()));

        let action = create_action(move |input: &I| {
            let request = match build(input, token.as_ref()) {
                Ok(payload) => {
                    state.set(FlowState::Submitting);
                    Some(send(payload))
                }
                Err(rejection) => {
                    log::debug!("{}: rejected locally ({:?})", definition.name, rejection);
                    state.set(definition.rejected(rejection));
                    None
                }
            };
            async move {
                if let Some(request) = request {
                    let next = definition.classify(request.await);
                    log::info!("{}: {:?}", definition.name, next.error_kind());
                    state.set(next);
                }
            }
        });

        Self {
            definition,
            state,
            action,
        }
    }

    /// Starts a submission unless one is already in flight.
    pub fn submit(&self, input: I) {
        if self.action.pending().get_untracked() {
            log::debug!("{}: submit ignored, request in flight", self.definition.name);
            return;
        }
        self.action.dispatch(input);
    }

    pub fn pending(&self) -> Signal<bool> {
        self.action.pending().into()
    }

    /// Manual recovery: back to the input form.
    pub fn reset(&self) {
        self.state.set(FlowState::collecting());
    }
}
