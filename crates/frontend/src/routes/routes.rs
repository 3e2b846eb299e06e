use crate::domain::a001_funcionario::ui::list::FuncionarioList;
use crate::domain::a002_ferias::ui::list::FeriasList;
use crate::domain::a003_afastamento::ui::list::AfastamentoList;
use crate::domain::a004_planejamento::ui::versoes::PlanejamentoVersoes;
use crate::domain::a004_planejamento::ui::visao_geral::VisaoGeral;
use crate::layout::Shell;
use crate::system::auth::guard::RequireAuth;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <div class="alert alert--warning">"Página não encontrada"</div>
        </div>
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=|| view! { <Redirect path="/ferias" /> } />
                    <Route path=path!("/funcionarios") view=FuncionarioList />
                    <Route path=path!("/ferias") view=FeriasList />
                    <Route path=path!("/afastamentos") view=AfastamentoList />
                    <Route path=path!("/visao-geral") view=VisaoGeral />
                    <Route path=path!("/planejamentos") view=PlanejamentoVersoes />
                </Routes>
            </Shell>
        </Router>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <RequireAuth>
            <MainLayout />
        </RequireAuth>
    }
}
