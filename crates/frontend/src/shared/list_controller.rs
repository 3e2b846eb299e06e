//! Ligação entre o redutor de lista e a tela: o estado fica num `RwSignal`,
//! a visão derivada num `Memo`, e as chamadas à API passam pela sessão atual.

use std::future::Future;

use contracts::shared::list_response::MutationResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::http::ApiResult;
use super::list_pipeline::{FieldDef, Searchable};
use super::list_state::{ListEvent, ListView, ListViewState};
use super::selection::Identified;
use crate::config::config;
use crate::layout::notifications::{use_notifier, Notifier};
use crate::system::auth::context::{use_auth, AuthContext, AuthSession};

pub struct ListController<T: Send + Sync + 'static> {
    pub state: RwSignal<ListViewState<T>>,
    pub view: Memo<ListView<T>>,
    auth: AuthContext,
    notifier: Notifier,
}

impl<T: Send + Sync + 'static> Clone for ListController<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListController<T> {}

impl<T> ListController<T>
where
    T: Searchable + Identified + Clone + PartialEq + Send + Sync + 'static,
{
    /// Deve ser criado dentro do componente (lê auth e notificações do contexto)
    pub fn new(fields: &'static [FieldDef<T>]) -> Self {
        let state = RwSignal::new(ListViewState::new(fields, config().lista.page_size));
        let view = Memo::new(move |_| state.with(|s| s.derive()));
        Self {
            state,
            view,
            auth: use_auth(),
            notifier: use_notifier(),
        }
    }

    pub fn dispatch(&self, event: ListEvent<T>) {
        self.state.update(|s| s.apply(event));
    }

    pub fn with<R>(&self, f: impl FnOnce(&ListViewState<T>) -> R) -> R {
        self.state.with(f)
    }

    pub fn with_untracked<R>(&self, f: impl FnOnce(&ListViewState<T>) -> R) -> R {
        self.state.with_untracked(f)
    }

    pub fn auth(&self) -> AuthContext {
        self.auth
    }

    pub fn notifier(&self) -> Notifier {
        self.notifier
    }

    /// Busca a coleção inteira. Em falha mantém os dados anteriores.
    pub fn load<F, Fut>(&self, fetch: F)
    where
        F: FnOnce(AuthSession) -> Fut + 'static,
        Fut: Future<Output = ApiResult<Vec<T>>> + 'static,
    {
        let this = *self;
        this.dispatch(ListEvent::LoadStarted);
        let session = this.auth.session_untracked();
        spawn_local(async move {
            match fetch(session).await {
                Ok(rows) => {
                    log::debug!("{} registros carregados", rows.len());
                    this.dispatch(ListEvent::Loaded(rows));
                }
                Err(e) => {
                    log::error!("Falha ao carregar lista: {}", e);
                    let message = e.to_string();
                    this.notifier.error(message.clone());
                    this.auth.handle_error(&e);
                    this.dispatch(ListEvent::LoadFailed(message));
                }
            }
        });
    }

    /// Página atual com ids e estado do checkbox do cabeçalho
    pub fn header_checkbox(&self) -> (Signal<bool>, Signal<bool>) {
        let state = self.state;
        (
            Signal::derive(move || state.with(|s| s.selection.all_selected)),
            Signal::derive(move || state.with(|s| s.selection.is_partial(&s.page_ids()))),
        )
    }

    pub fn is_selected(&self, id: String) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.selection.is_selected(&id)))
    }
}

/// Executa uma escrita na API: notifica o resultado e, em sucesso, chama
/// `on_success` (que normalmente recarrega a coleção).
pub fn run_mutation<F, Fut>(
    auth: AuthContext,
    notifier: Notifier,
    call: F,
    success_message: impl Into<String>,
    on_success: impl FnOnce() + 'static,
) where
    F: FnOnce(AuthSession) -> Fut + 'static,
    Fut: Future<Output = ApiResult<MutationResponse>> + 'static,
{
    let session = auth.session_untracked();
    let success_message = success_message.into();
    spawn_local(async move {
        match call(session).await {
            Ok(response) => {
                notifier.success(response.message.unwrap_or(success_message));
                on_success();
            }
            Err(e) => {
                log::error!("Falha na operação: {}", e);
                notifier.error(e.to_string());
                auth.handle_error(&e);
            }
        }
    });
}

/// Confirmação nativa do navegador
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
