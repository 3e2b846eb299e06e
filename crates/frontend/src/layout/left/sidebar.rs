//! Sidebar com os itens de navegação do painel

use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

/// (href, label, icon)
const MENU_ITEMS: &[(&str, &str, &str)] = &[
    ("/funcionarios", "Funcionários", "users"),
    ("/ferias", "Planejamento de férias", "calendar"),
    ("/afastamentos", "Afastamentos", "clipboard"),
    ("/visao-geral", "Visão geral", "bar-chart"),
    ("/planejamentos", "Versões do planejamento", "archive"),
];

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="sidebar">
            <ul class="sidebar__list">
                {MENU_ITEMS
                    .iter()
                    .map(|&(href, label, icon_name)| {
                        view! {
                            <li class="sidebar__item">
                                <A href=href attr:class="sidebar__link">
                                    {icon(icon_name)}
                                    <span>{label}</span>
                                </A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
