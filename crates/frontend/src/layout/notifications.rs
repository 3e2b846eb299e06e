//! Notificações "one-shot": aparecem uma vez e somem sozinhas.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::config::config;
use crate::shared::icons::icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    fn class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "toast toast--success",
            NotificationKind::Error => "toast toast--error",
            NotificationKind::Info => "toast toast--info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}

/// Serviço de notificações disponível via contexto
#[derive(Clone, Copy)]
pub struct Notifier {
    items: RwSignal<Vec<Notification>>,
    next_id: StoredValue<u64>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(NotificationKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(NotificationKind::Error, message.into());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(NotificationKind::Info, message.into());
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|n| n.id != id));
    }

    fn push(&self, kind: NotificationKind, message: String) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.items.update(|items| items.push(Notification { id, kind, message }));

        let this = *self;
        Timeout::new(config().notificacoes.duracao_ms, move || this.dismiss(id)).forget();
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().expect("Notifier not provided in context")
}

#[component]
pub fn NotificationHost() -> impl IntoView {
    let notifier = use_notifier();

    view! {
        <div class="toast-host">
            <For
                each=move || notifier.items.get()
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    view! {
                        <div class=n.kind.class()>
                            <span class="toast__message">{n.message.clone()}</span>
                            <button class="toast__close" on:click=move |_| notifier.dismiss(id)>
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
