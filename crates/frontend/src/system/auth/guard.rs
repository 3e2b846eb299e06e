use leptos::prelude::*;

use super::context::use_auth;
use crate::system::pages::login::LoginPage;

/// Renderiza os filhos só com sessão ativa; senão a tela de login
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show when=move || auth.is_authenticated() fallback=|| view! { <LoginPage /> }>
            {children()}
        </Show>
    }
}
