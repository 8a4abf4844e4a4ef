//! Failure boundary around the selected root view.
//!
//! Views report failures from their async work through [`BoundaryHandle`];
//! once a failure is reported the boundary renders its fallback until the
//! query string moves away from the one the failure was reported under.

use crate::api::ApiError;
use crate::hooks::{use_query_params, use_url_change};
use checkout_core::QueryParams;
use std::rc::Rc;
use thiserror::Error;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("api client unavailable: {0}")]
    ClientUnavailable(String),
    #[error("{view} failed to load: {reason}")]
    Load { view: &'static str, reason: String },
    #[error("{0} was not found")]
    NotFound(&'static str),
}

impl ViewError {
    #[must_use]
    pub fn load(view: &'static str, err: &ApiError) -> Self {
        Self::Load {
            view,
            reason: err.to_string(),
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct BoundaryHandle {
    report: Callback<ViewError>,
}

impl BoundaryHandle {
    pub fn report(&self, err: ViewError) {
        self.report.emit(err);
    }
}

/// Handle of the nearest boundary; outside one, failures are only logged.
#[hook]
pub fn use_boundary() -> BoundaryHandle {
    use_context::<BoundaryHandle>().unwrap_or_else(|| BoundaryHandle {
        report: Callback::from(|err: ViewError| log::error!("unhandled view failure: {err}")),
    })
}

/// Failure recorded by a boundary, tied to the query it happened under.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundaryState {
    failure: Option<(QueryParams, Rc<ViewError>)>,
}

pub enum BoundaryAction {
    Failed(QueryParams, ViewError),
    UrlChanged(QueryParams),
}

impl BoundaryState {
    #[must_use]
    pub fn failure(&self) -> Option<&ViewError> {
        self.failure.as_ref().map(|(_, err)| err.as_ref())
    }
}

impl Reducible for BoundaryState {
    type Action = BoundaryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            BoundaryAction::Failed(query, err) => Rc::new(Self {
                failure: Some((query, Rc::new(err))),
            }),
            BoundaryAction::UrlChanged(query) => match &self.failure {
                Some((failed_at, _)) if *failed_at != query => Rc::new(Self::default()),
                _ => self,
            },
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorBoundaryProps {
    pub fallback: Html,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ErrorBoundary)]
pub fn error_boundary(props: &ErrorBoundaryProps) -> Html {
    let state = use_reducer_eq(BoundaryState::default);
    let query = use_query_params();

    {
        let dispatcher = state.dispatcher();
        use_url_change(move |query| {
            dispatcher.dispatch(BoundaryAction::UrlChanged(query.clone()));
        });
    }

    let report = {
        let dispatcher = state.dispatcher();
        use_callback(query, move |err: ViewError, query| {
            log::error!("view failed, showing fallback: {err}");
            dispatcher.dispatch(BoundaryAction::Failed((**query).clone(), err));
        })
    };

    if state.failure().is_some() {
        return props.fallback.clone();
    }

    html! {
        <ContextProvider<BoundaryHandle> context={BoundaryHandle { report }}>
            { for props.children.iter() }
        </ContextProvider<BoundaryHandle>>
    }
}
