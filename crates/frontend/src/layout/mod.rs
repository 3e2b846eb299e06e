pub mod left;
pub mod notifications;

use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              Top bar                      |
/// +------------------------------------------+
/// |  Sidebar  |          Content              |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let auth = use_auth();

    view! {
        <div class="app-layout">
            <header class="top-header">
                <span class="top-header__title">"Férias & Afastamentos"</span>
                <div class="top-header__right">
                    <span class="top-header__user">{move || auth.session().display_name()}</span>
                    <button
                        class="top-header__logout"
                        title="Sair"
                        on:click=move |_| auth.sign_out()
                    >
                        {icon("log-out")}
                    </button>
                </div>
            </header>
            <div class="app-body">
                <left::sidebar::Sidebar />
                <main class="app-main">
                    {children()}
                </main>
            </div>
        </div>
    }
}
