use crate::layout::notifications::{NotificationHost, Notifier};
use crate::routes::routes::AppRoutes;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Notificações (toasts) para toda a aplicação
    provide_context(Notifier::new());

    view! {
        <AuthProvider>
            <AppRoutes />
            <NotificationHost />
        </AuthProvider>
    }
}
