//! Visão geral do ano: férias do planejamento ativo e afastamentos numa só
//! tabela, com contadores e resumo por mês.
//!
//! Contadores e resumo refletem os filtros aplicados, não a coleção inteira.

mod state;

use contracts::domain::a004_planejamento::aggregate::TipoEvento;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a004_planejamento::api;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::filter_select::FilterSelect;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::year_selector::{current_year, YearSelector};
use crate::shared::date_utils::format_naive;
use crate::shared::export::export_to_excel;
use crate::shared::icons::icon;
use crate::shared::list_controller::ListController;
use crate::shared::list_state::ListEvent;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use state::{contar, funcionarios_distintos, mes_de_pico, resumo_mensal, FIELDS, SELECT_FILTERS};

const TABLE_ID: &str = "a004-visao-geral-table";

fn tipo_class(tipo: TipoEvento) -> &'static str {
    match tipo {
        TipoEvento::Ferias => "badge badge--info",
        TipoEvento::Afastamento => "badge badge--warning",
    }
}

#[component]
pub fn VisaoGeral() -> impl IntoView {
    let ctl = ListController::new(FIELDS);
    let ano = RwSignal::new(current_year());
    let filters_expanded = RwSignal::new(false);

    let load = move || {
        let year = ano.get_untracked();
        ctl.load(move |session| async move { api::fetch_visao_geral(&session, year).await });
    };

    Effect::new(move |_| {
        ano.track();
        load();
    });

    let filtrados = Memo::new(move |_| ctl.with(|s| s.filtered()));
    let resumo = Memo::new(move |_| filtrados.with(|rows| resumo_mensal(rows, ano.get())));

    let total_ferias = Signal::derive(move || filtrados.with(|rows| contar(rows, TipoEvento::Ferias)));
    let total_afastamentos =
        Signal::derive(move || filtrados.with(|rows| contar(rows, TipoEvento::Afastamento)));
    let total_funcionarios = Signal::derive(move || filtrados.with(|rows| funcionarios_distintos(rows)));
    let pico = Signal::derive(move || {
        resumo.with(|r| mes_de_pico(r).map(|m| format!("Pico em {}", m.nome())))
    });

    let export = move || {
        let year = ano.get_untracked();
        if let Err(e) = filtrados.with_untracked(|rows| export_to_excel(rows, &format!("visao_geral_{}.csv", year))) {
            ctl.notifier().error(e.to_string());
        }
    };

    let loading = Signal::derive(move || ctl.with(|s| s.loading));
    let active_filters = Signal::derive(move || {
        ctl.with(|s| s.filters.len() + usize::from(!s.search.trim().is_empty()))
    });
    let sort = Signal::derive(move || ctl.with(|s| s.sort));
    let on_sort = Callback::new(move |key| ctl.dispatch(ListEvent::SortToggled(key)));

    view! {
        <PageFrame page_id="a004_planejamento--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader
                title="Visão geral"
                subtitle=Signal::derive(move || Some(format!("Férias e afastamentos de {}", ano.get())))
            >
                <YearSelector value=ano on_change=Callback::new(move |y| ano.set(y)) />
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| export()>
                    {icon("download")}
                    " Exportar"
                </Button>
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

                <div class="stat-grid">
                    <StatCard label="Férias" icon_name="calendar" value=total_ferias tone=StatTone::Info subtitle=pico />
                    <StatCard label="Afastamentos" icon_name="clipboard" value=total_afastamentos tone=StatTone::Warning />
                    <StatCard label="Funcionários envolvidos" icon_name="users" value=total_funcionarios />
                </div>

                <div class="table-wrapper">
                    <Table class="resumo-mensal">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Mês"</TableHeaderCell>
                                <TableHeaderCell>"Férias"</TableHeaderCell>
                                <TableHeaderCell>"Afastamentos"</TableHeaderCell>
                                <TableHeaderCell>"Total"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || resumo.with(|linhas| {
                                linhas.iter().map(|r| {
                                    let class = if r.total() == 0 { "resumo-mensal__row--vazio" } else { "" };
                                    let nome = r.nome();
                                    let ferias = r.ferias;
                                    let afastamentos = r.afastamentos;
                                    let total = r.total();
                                    view! {
                                        <TableRow class=class>
                                            <TableCell><TableCellLayout>{nome}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{ferias}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{afastamentos}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span style="font-weight: 600;">{total}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }).collect_view()
                            })}
                        </TableBody>
                    </Table>
                </div>

                <FilterPanel
                    is_expanded=filters_expanded
                    active_filters_count=active_filters
                    on_clear=Callback::new(move |_| ctl.dispatch(ListEvent::FiltersCleared))
                    pagination_controls=move || view! {
                        <PaginationControls
                            current_page=Signal::derive(move || ctl.view.with(|v| v.page.current_page))
                            total_pages=Signal::derive(move || ctl.view.with(|v| v.page.total_pages))
                            total_count=Signal::derive(move || ctl.view.with(|v| v.page.total_items))
                            page_size=Signal::derive(move || ctl.with(|s| s.page_size))
                            on_page_change=Callback::new(move |p| ctl.dispatch(ListEvent::PageRequested(p)))
                            on_page_size_change=Callback::new(move |n| ctl.dispatch(ListEvent::PageSizeChanged(n)))
                        />
                    }
                    filter_content=move || view! {
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <SearchInput
                                value=Signal::derive(move || ctl.with(|s| s.search.clone()))
                                on_change=Callback::new(move |s| ctl.dispatch(ListEvent::SearchChanged(s)))
                            />
                            {SELECT_FILTERS
                                .into_iter()
                                .map(|key| {
                                    let label = FIELDS
                                        .iter()
                                        .find(|f| f.key == key)
                                        .map(|f| f.label)
                                        .unwrap_or(key);
                                    view! {
                                        <FilterSelect
                                            label=label
                                            value=Signal::derive(move || ctl.with(|s| s.filter_value(key)))
                                            options=Signal::derive(move || {
                                                ctl.view.with(|v| v.options.get(key).cloned().unwrap_or_default())
                                            })
                                            on_change=Callback::new(move |value| {
                                                ctl.dispatch(ListEvent::FilterChanged { key: key.to_string(), value })
                                            })
                                        />
                                    }
                                })
                                .collect_view()}
                        </Flex>
                    }
                />

                <div class="table-wrapper">
                    <Table attr:id=TABLE_ID attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Tipo" sort_key="tipo" sort=sort on_sort=on_sort min_width=110.0 />
                                <SortableHeaderCell label="Matrícula" sort_key="matricula" sort=sort on_sort=on_sort min_width=100.0 />
                                <SortableHeaderCell label="Funcionário" sort_key="nome" sort=sort on_sort=on_sort min_width=200.0 />
                                <SortableHeaderCell label="Setor" sort_key="setor" sort=sort on_sort=on_sort />
                                <SortableHeaderCell label="Início" sort_key="data_inicio" sort=sort on_sort=on_sort min_width=110.0 />
                                <SortableHeaderCell label="Fim" sort_key="data_fim" sort=sort on_sort=on_sort min_width=110.0 />
                                <SortableHeaderCell label="Situação / motivo" sort_key="descricao" sort=sort on_sort=on_sort min_width=160.0 />
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            {move || ctl.view.with(|v| {
                                v.page.items.iter().map(|e| {
                                    let tipo = e.tipo;
                                    let matricula = e.matricula.clone();
                                    let nome = e.nome_funcionario().unwrap_or("-").to_string();
                                    let setor = e.funcionario.as_ref().and_then(|f| f.setor.clone()).unwrap_or_default();
                                    let inicio = format_naive(e.data_inicio);
                                    let fim = format_naive(e.data_fim);
                                    let descricao = e.descricao();
                                    view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span class=tipo_class(tipo)>{tipo.label()}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell><TableCellLayout>{matricula}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {nome}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {setor}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell><TableCellLayout>{inicio}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{fim}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout truncate=true>{descricao}</TableCellLayout></TableCell>
                                    </TableRow>
                                    }
                                }).collect_view()
                            })}
                        </TableBody>
                    </Table>

                    {move || {
                        let empty = ctl.with(|s| s.loaded && !s.loading) && ctl.view.with(|v| v.page.items.is_empty());
                        empty.then(|| view! { <div class="table__empty">"Nenhum evento no período"</div> })
                    }}
                </div>
            </div>
        </PageFrame>
    }
}
