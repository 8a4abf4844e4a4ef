//! Global alert surface: views dispatch messages through [`AlertsHandle`] and
//! the provider renders them as toasts that close on their own.

use crate::components::daisy_ui::{DaisyColor, Toast, ToastItem};
use crate::i18n::use_i18n;
use std::rc::Rc;
use yew::prelude::*;

pub const ALERT_AUTO_CLOSE_MS: i32 = 4_000;
const MAX_VISIBLE_ALERTS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertPlacement {
    TopEnd,
    BottomEnd,
}

impl AlertPlacement {
    const fn classes(self) -> [&'static str; 2] {
        match self {
            Self::TopEnd => ["toast-top", "toast-end"],
            Self::BottomEnd => ["toast-bottom", "toast-end"],
        }
    }
}

/// Fixed presentation of the alert container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlertsContainerProps {
    pub placement: AlertPlacement,
    pub auto_close_ms: Option<i32>,
    pub close_on_click: bool,
    pub max_visible: usize,
}

#[must_use]
pub const fn alerts_container_props() -> AlertsContainerProps {
    AlertsContainerProps {
        placement: AlertPlacement::TopEnd,
        auto_close_ms: Some(ALERT_AUTO_CLOSE_MS),
        close_on_click: true,
        max_visible: MAX_VISIBLE_ALERTS,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Error,
    Success,
    Info,
}

impl AlertKind {
    const fn color(self) -> DaisyColor {
        match self {
            Self::Error => DaisyColor::Error,
            Self::Success => DaisyColor::Success,
            Self::Info => DaisyColor::Info,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AlertMessage {
    pub id: u32,
    pub kind: AlertKind,
    pub text: AttrValue,
}

#[derive(Clone, Debug, PartialEq)]
pub enum AlertAction {
    Show(AlertKind, AttrValue),
    Dismiss(u32),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AlertsState {
    next_id: u32,
    pub items: Vec<AlertMessage>,
}

impl AlertsState {
    /// Id the next shown alert will get.
    #[must_use]
    pub const fn next_id(&self) -> u32 {
        self.next_id
    }

    /// Visible alerts shown at or after `scheduled_through` that still need a close timer.
    #[must_use]
    pub fn unscheduled_ids(&self, scheduled_through: u32) -> Vec<u32> {
        self.items
            .iter()
            .map(|item| item.id)
            .filter(|id| *id >= scheduled_through)
            .collect()
    }
}

impl Reducible for AlertsState {
    type Action = AlertAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            AlertAction::Show(kind, text) => {
                next.items.push(AlertMessage {
                    id: next.next_id,
                    kind,
                    text,
                });
                next.next_id = next.next_id.wrapping_add(1);
                let overflow = next
                    .items
                    .len()
                    .saturating_sub(alerts_container_props().max_visible);
                next.items.drain(..overflow);
            }
            AlertAction::Dismiss(id) => next.items.retain(|item| item.id != id),
        }
        Rc::new(next)
    }
}

/// Dispatcher handed to views through context.
#[derive(Clone, PartialEq)]
pub struct AlertsHandle {
    dispatch: Callback<AlertAction>,
}

impl AlertsHandle {
    #[must_use]
    pub const fn new(dispatch: Callback<AlertAction>) -> Self {
        Self { dispatch }
    }

    /// Handle used when no container is mounted; alerts only reach the log.
    #[must_use]
    pub fn detached() -> Self {
        Self::new(Callback::from(|action: AlertAction| {
            if let AlertAction::Show(kind, text) = action {
                log::info!("alert without container ({kind:?}): {text}");
            }
        }))
    }

    pub fn show(&self, kind: AlertKind, text: impl Into<AttrValue>) {
        self.dispatch.emit(AlertAction::Show(kind, text.into()));
    }

    pub fn show_error(&self, text: impl Into<AttrValue>) {
        self.show(AlertKind::Error, text);
    }

    pub fn show_success(&self, text: impl Into<AttrValue>) {
        self.show(AlertKind::Success, text);
    }

    pub fn dismiss(&self, id: u32) {
        self.dispatch.emit(AlertAction::Dismiss(id));
    }
}

#[hook]
pub fn use_alerts() -> AlertsHandle {
    use_context::<AlertsHandle>().unwrap_or_else(AlertsHandle::detached)
}

#[derive(Properties, PartialEq)]
pub struct AlertsProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AlertsProvider)]
pub fn alerts_provider(props: &AlertsProviderProps) -> Html {
    let i18n = use_i18n();
    let state = use_reducer(AlertsState::default);
    let container = alerts_container_props();
    let handle = {
        let dispatcher = state.dispatcher();
        use_memo((), move |_| {
            AlertsHandle::new(Callback::from(move |action: AlertAction| {
                dispatcher.dispatch(action);
            }))
        })
    };

    let scheduled_through = use_mut_ref(|| 0_u32);
    {
        let handle = (*handle).clone();
        let pending = state.unscheduled_ids(*scheduled_through.borrow());
        let next_id = state.next_id();
        use_effect_with(pending, move |pending| {
            if let Some(delay) = container.auto_close_ms {
                for &id in pending {
                    schedule_dismiss(handle.clone(), id, delay);
                }
            }
            *scheduled_through.borrow_mut() = next_id;
            || ()
        });
    }

    let on_dismiss = container.close_on_click.then(|| {
        let handle = (*handle).clone();
        Callback::from(move |id: AttrValue| {
            if let Ok(id) = id.parse::<u32>() {
                handle.dismiss(id);
            }
        })
    });
    let toasts = state
        .items
        .iter()
        .map(|item| ToastItem {
            id: AttrValue::from(item.id.to_string()),
            variant: item.kind.color(),
            content: html! { <span>{ item.text.clone() }</span> },
        })
        .collect::<Vec<_>>();
    let [vertical, horizontal] = container.placement.classes();

    html! {
        <ContextProvider<AlertsHandle> context={(*handle).clone()}>
            { for props.children.iter() }
            <Toast
                class={classes!(vertical, horizontal, "z-50")}
                toasts={toasts}
                dismiss_label={AttrValue::from(i18n.t("alerts.dismiss"))}
                on_dismiss={on_dismiss}
            />
        </ContextProvider<AlertsHandle>>
    }
}

#[cfg(target_arch = "wasm32")]
fn schedule_dismiss(handle: AlertsHandle, id: u32, delay_ms: i32) {
    wasm_bindgen_futures::spawn_local(async move {
        if crate::dom::sleep_ms(delay_ms).await.is_ok() {
            handle.dismiss(id);
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn schedule_dismiss(_handle: AlertsHandle, _id: u32, _delay_ms: i32) {}
