mod state;

use contracts::domain::a002_ferias::aggregate::{Ferias, FeriasStatus};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a002_ferias::api;
use crate::domain::a002_ferias::ui::details::FeriasEdit;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::filter_select::FilterSelect;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::table::{SortableHeaderCell, TableCellCheckbox, TableHeaderCheckbox};
use crate::shared::components::year_selector::{current_year, YearSelector};
use crate::shared::date_utils::format_naive;
use crate::shared::export::export_to_excel;
use crate::shared::icons::icon;
use crate::shared::list_controller::{confirm, run_mutation, ListController};
use crate::shared::list_state::ListEvent;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::selection::Identified;
use state::{selected_ids, FIELDS, SELECT_FILTERS};

const TABLE_ID: &str = "a002-ferias-table";

fn status_class(status: FeriasStatus) -> &'static str {
    match status {
        FeriasStatus::Planejada => "badge badge--neutral",
        FeriasStatus::Confirmada => "badge badge--success",
        FeriasStatus::EmAndamento => "badge badge--warning",
    }
}

/// Planejamento de férias do ano selecionado
#[component]
pub fn FeriasList() -> impl IntoView {
    let ctl = ListController::new(FIELDS);
    let ano = RwSignal::new(current_year());
    let editing: RwSignal<Option<Ferias>> = RwSignal::new(None);
    let filters_expanded = RwSignal::new(true);

    let load = move || {
        let year = ano.get_untracked();
        ctl.load(move |session| async move { api::fetch_planejamento_ativo(&session, year).await });
    };

    // troca de ano: nova coleção, seleção zerada
    Effect::new(move |_| {
        ano.track();
        ctl.dispatch(ListEvent::SelectionCleared);
        load();
    });

    let distribuir = move || {
        let year = ano.get_untracked();
        if !confirm(&format!(
            "Distribuir automaticamente as férias de {}? Períodos planejados poderão ser alterados.",
            year
        )) {
            return;
        }
        run_mutation(
            ctl.auth(),
            ctl.notifier(),
            move |session| async move { api::distribuir(&session, year).await },
            format!("Férias de {} distribuídas", year),
            load,
        );
    };

    let redistribuir = move || {
        let year = ano.get_untracked();
        let ids = ctl.with_untracked(|s| selected_ids(&s.selection));
        if ids.is_empty() {
            return;
        }
        let count = ids.len();
        run_mutation(
            ctl.auth(),
            ctl.notifier(),
            move |session| async move { api::redistribuir_selecionados(&session, year, ids).await },
            format!("{} período(s) redistribuído(s)", count),
            move || {
                ctl.dispatch(ListEvent::SelectionCleared);
                load();
            },
        );
    };

    let excluir_selecionados = move || {
        let ids = ctl.with_untracked(|s| selected_ids(&s.selection));
        if ids.is_empty() || !confirm(&format!("Excluir {} período(s) de férias?", ids.len())) {
            return;
        }
        let count = ids.len();
        run_mutation(
            ctl.auth(),
            ctl.notifier(),
            move |session| async move { api::delete_batch(&session, ids).await },
            format!("{} período(s) excluído(s)", count),
            move || {
                ctl.dispatch(ListEvent::SelectionCleared);
                load();
            },
        );
    };

    let excluir = move |f: Ferias| {
        let nome = f.nome_funcionario().unwrap_or(f.matricula.as_str()).to_string();
        if !confirm(&format!("Excluir as férias de {} ({})?", nome, format_naive(f.data_inicio))) {
            return;
        }
        run_mutation(
            ctl.auth(),
            ctl.notifier(),
            move |session| async move { api::delete(&session, f.id).await },
            "Férias excluídas",
            load,
        );
    };

    let export = move || {
        let rows = ctl.with_untracked(|s| s.filtered());
        let filename = format!("ferias_{}.csv", ano.get_untracked());
        if let Err(e) = export_to_excel(&rows, &filename) {
            ctl.notifier().error(e.to_string());
        }
    };

    let loading = Signal::derive(move || ctl.with(|s| s.loading));
    let selected_count = Signal::derive(move || ctl.with(|s| s.selection.len()));
    let nothing_selected = Signal::derive(move || selected_count.get() == 0);
    let active_filters = Signal::derive(move || {
        ctl.with(|s| s.filters.len() + usize::from(!s.search.trim().is_empty()))
    });
    let sort = Signal::derive(move || ctl.with(|s| s.sort));
    let on_sort = Callback::new(move |key| ctl.dispatch(ListEvent::SortToggled(key)));
    let (all_checked, partial) = ctl.header_checkbox();

    view! {
        <PageFrame page_id="a002_ferias--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Planejamento de férias"</h1>
                    <Badge>{move || ctl.view.with(|v| v.page.total_items.to_string())}</Badge>
                    <YearSelector value=ano on_change=Callback::new(move |y| ano.set(y)) />
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| distribuir()
                        disabled=loading
                    >
                        {icon("play")}
                        " Distribuir"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| redistribuir()
                        disabled=nothing_selected
                    >
                        {icon("shuffle")}
                        {move || format!(" Redistribuir selecionados ({})", selected_count.get())}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| excluir_selecionados()
                        disabled=nothing_selected
                    >
                        {icon("trash")}
                        " Excluir selecionados"
                    </Button>
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
                </div>
            </div>

            <div class="page__content">
                {move || ctl.with(|s| s.error.clone()).map(|e| view! {
                    <div class="alert alert--error">
                        {e}
                        <button class="alert__close" on:click=move |_| ctl.dispatch(ListEvent::ErrorDismissed)>
                            {icon("x")}
                        </button>
                    </div>
                })}

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
                                <TableHeaderCheckbox
                                    checked=all_checked
                                    partial=partial
                                    on_change=Callback::new(move |all| ctl.dispatch(ListEvent::ToggleAll(all)))
                                />
                                <SortableHeaderCell label="Matrícula" sort_key="matricula" sort=sort on_sort=on_sort min_width=100.0 />
                                <SortableHeaderCell label="Funcionário" sort_key="nome" sort=sort on_sort=on_sort min_width=200.0 />
                                <SortableHeaderCell label="Setor" sort_key="setor" sort=sort on_sort=on_sort />
                                <SortableHeaderCell label="Início" sort_key="data_inicio" sort=sort on_sort=on_sort min_width=110.0 />
                                <TableHeaderCell resizable=false min_width=110.0>"Fim"</TableHeaderCell>
                                <SortableHeaderCell label="Dias" sort_key="dias" sort=sort on_sort=on_sort min_width=70.0 />
                                <SortableHeaderCell label="Status" sort_key="status" sort=sort on_sort=on_sort min_width=110.0 />
                                <TableHeaderCell resizable=false min_width=90.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            {move || ctl.view.with(|v| {
                                v.page.items.iter().cloned().map(|f| {
                                    let row_id = f.row_id();
                                    let for_edit = f.clone();
                                    let for_delete = f.clone();
                                    let matricula = f.matricula.clone();
                                    let nome = f.nome_funcionario().unwrap_or("-").to_string();
                                    let setor = f.funcionario.as_ref().and_then(|x| x.setor.clone()).unwrap_or_default();
                                    let inicio = format_naive(f.data_inicio);
                                    let fim = format_naive(f.data_fim_efetiva());
                                    let dias = f.dias;
                                    let status = f.status;
                                    view! {
                                        <TableRow>
                                            <TableCellCheckbox
                                                item_id=row_id.clone()
                                                checked=ctl.is_selected(row_id)
                                                on_change=Callback::new(move |(id, checked)| {
                                                    ctl.dispatch(ListEvent::ToggleOne { id, checked })
                                                })
                                            />
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
                                            <TableCell><TableCellLayout>{dias}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class=status_class(status)>{status.label()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| editing.set(Some(for_edit.clone()))
                                                    attr:title="Editar"
                                                >
                                                    {icon("edit")}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| excluir(for_delete.clone())
                                                    attr:title="Excluir"
                                                >
                                                    {icon("trash")}
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }).collect_view()
                            })}
                        </TableBody>
                    </Table>

                    {move || {
                        let empty = ctl.with(|s| s.loaded && !s.loading) && ctl.view.with(|v| v.page.items.is_empty());
                        empty.then(|| view! {
                            <div class="table__empty">
                                "Nenhum período de férias para o ano. Use \"Distribuir\" para gerar o planejamento."
                            </div>
                        })
                    }}
                </div>

                {move || editing.get().map(|ferias| view! {
                    <FeriasEdit
                        ferias=ferias
                        on_saved=Callback::new(move |_| {
                            editing.set(None);
                            load();
                        })
                        on_cancel=Callback::new(move |_| editing.set(None))
                    />
                })}
            </div>
        </PageFrame>
    }
}
