mod state;

use contracts::domain::a004_planejamento::aggregate::Planejamento;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a004_planejamento::api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::year_selector::{current_year, YearSelector};
use crate::shared::icons::icon;
use crate::shared::list_controller::{confirm, run_mutation, ListController};
use crate::shared::list_state::ListEvent;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use state::{acao_disponivel, criado_em, AcaoVersao, FIELDS};

fn situacao_class(p: &Planejamento) -> &'static str {
    if p.arquivado {
        "badge badge--neutral"
    } else if p.ativo {
        "badge badge--success"
    } else {
        "badge badge--info"
    }
}

/// Versões do planejamento de férias do ano
#[component]
pub fn PlanejamentoVersoes() -> impl IntoView {
    let ctl = ListController::new(FIELDS);
    let ano = RwSignal::new(current_year());

    let load = move || {
        let year = ano.get_untracked();
        ctl.load(move |session| async move { api::fetch_planejamentos(&session, year).await });
    };

    Effect::new(move |_| {
        ano.track();
        load();
    });

    let executar = move |p: Planejamento, acao: AcaoVersao| {
        let nome = p.descricao.clone().unwrap_or_else(|| format!("#{}", p.id));
        let id = p.id;
        match acao {
            AcaoVersao::Arquivar => {
                if !confirm(&format!("Arquivar a versão {}?", nome)) {
                    return;
                }
                run_mutation(
                    ctl.auth(),
                    ctl.notifier(),
                    move |session| async move { api::arquivar(&session, id).await },
                    "Versão arquivada",
                    load,
                );
            }
            AcaoVersao::Restaurar => {
                if !confirm(&format!(
                    "Restaurar a versão {}? Ela passará a ser o planejamento ativo de {}.",
                    nome, p.ano
                )) {
                    return;
                }
                run_mutation(
                    ctl.auth(),
                    ctl.notifier(),
                    move |session| async move { api::restaurar(&session, id).await },
                    "Versão restaurada",
                    load,
                );
            }
        }
    };

    let loading = Signal::derive(move || ctl.with(|s| s.loading));
    let sort = Signal::derive(move || ctl.with(|s| s.sort));
    let on_sort = Callback::new(move |key| ctl.dispatch(ListEvent::SortToggled(key)));

    view! {
        <PageFrame page_id="a004_planejamento--system" category=PAGE_CAT_SYSTEM>
            <PageHeader
                title="Versões do planejamento"
                count=Signal::derive(move || Some(ctl.view.with(|v| v.page.total_items)))
            >
                <YearSelector value=ano on_change=Callback::new(move |y| ano.set(y)) />
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load()
                    disabled=loading
                >
                    {icon("refresh")}
                    {move || if loading.get() { " Carregando..." } else { " Atualizar" }}
                </Button>
            </PageHeader>

            <div class="page__content">
                {move || ctl.with(|s| s.error.clone()).map(|e| view! {
                    <div class="alert alert--error">
                        {e}
                        <button class="alert__close" on:click=move |_| ctl.dispatch(ListEvent::ErrorDismissed)>
                            {icon("x")}
                        </button>
                    </div>
                })}

                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::End>
                    <SearchInput
                        value=Signal::derive(move || ctl.with(|s| s.search.clone()))
                        on_change=Callback::new(move |s| ctl.dispatch(ListEvent::SearchChanged(s)))
                        placeholder="Buscar descrição..."
                    />
                    <PaginationControls
                        current_page=Signal::derive(move || ctl.view.with(|v| v.page.current_page))
                        total_pages=Signal::derive(move || ctl.view.with(|v| v.page.total_pages))
                        total_count=Signal::derive(move || ctl.view.with(|v| v.page.total_items))
                        page_size=Signal::derive(move || ctl.with(|s| s.page_size))
                        on_page_change=Callback::new(move |p| ctl.dispatch(ListEvent::PageRequested(p)))
                        on_page_size_change=Callback::new(move |n| ctl.dispatch(ListEvent::PageSizeChanged(n)))
                    />
                </Flex>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Versão" sort_key="id" sort=sort on_sort=on_sort min_width=80.0 />
                                <SortableHeaderCell label="Descrição" sort_key="descricao" sort=sort on_sort=on_sort min_width=220.0 />
                                <SortableHeaderCell label="Situação" sort_key="situacao" sort=sort on_sort=on_sort min_width=100.0 />
                                <SortableHeaderCell label="Férias" sort_key="total_ferias" sort=sort on_sort=on_sort min_width=80.0 />
                                <SortableHeaderCell label="Criado em" sort_key="criado_em" sort=sort on_sort=on_sort min_width=140.0 />
                                <TableHeaderCell resizable=false min_width=120.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            {move || ctl.view.with(|v| {
                                v.page.items.iter().cloned().map(|p| {
                                    let acao = acao_disponivel(&p);
                                    let class = situacao_class(&p);
                                    let criado = criado_em(&p);
                                    let id = format!("#{}", p.id);
                                    let descricao = p.descricao.clone().unwrap_or_default();
                                    let situacao = p.situacao();
                                    let total_ferias = p.total_ferias.map(|n| n.to_string()).unwrap_or_default();
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout>{id}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{descricao}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout><span class=class>{situacao}</span></TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{total_ferias}</TableCellLayout>
                                            </TableCell>
                                            <TableCell><TableCellLayout>{criado}</TableCellLayout></TableCell>
                                            <TableCell>
                                                {acao.map(|acao| {
                                                    let (icone, texto) = match acao {
                                                        AcaoVersao::Arquivar => ("archive", " Arquivar"),
                                                        AcaoVersao::Restaurar => ("restore", " Restaurar"),
                                                    };
                                                    let p = p.clone();
                                                    view! {
                                                        <Button
                                                            appearance=ButtonAppearance::Subtle
                                                            on_click=move |_| executar(p.clone(), acao)
                                                        >
                                                            {icon(icone)}
                                                            {texto}
                                                        </Button>
                                                    }
                                                })}
                                            </TableCell>
                                        </TableRow>
                                    }
                                }).collect_view()
                            })}
                        </TableBody>
                    </Table>

                    {move || {
                        let empty = ctl.with(|s| s.loaded && !s.loading) && ctl.view.with(|v| v.page.items.is_empty());
                        empty.then(|| view! { <div class="table__empty">"Nenhuma versão para o ano"</div> })
                    }}
                </div>
            </div>
        </PageFrame>
    }
}
