mod state;

use contracts::domain::a003_afastamento::aggregate::{Afastamento, AfastamentoQuery};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a003_afastamento::api;
use crate::domain::a003_afastamento::ui::details::AfastamentoDetails;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::filter_select::FilterSelect;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::date_utils::format_naive;
use crate::shared::export::export_to_excel;
use crate::shared::icons::icon;
use crate::shared::list_controller::{confirm, run_mutation, ListController};
use crate::shared::list_state::ListEvent;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use state::{sim_nao, FIELDS, SELECT_FILTERS};

const TABLE_ID: &str = "a003-afastamento-table";

/// Painel de afastamentos
#[component]
pub fn AfastamentoList() -> impl IntoView {
    let ctl = ListController::new(FIELDS);
    // `Some(None)` = novo
    let editing: RwSignal<Option<Option<Afastamento>>> = RwSignal::new(None);
    let filters_expanded = RwSignal::new(true);
    let apenas_ativos = RwSignal::new(false);

    let load = move || {
        let query = AfastamentoQuery {
            ativos: apenas_ativos.get_untracked().then_some(true),
            matricula: None,
        };
        ctl.load(move |session| async move { api::fetch_afastamentos(&session, &query).await });
    };

    Effect::new(move |_| {
        apenas_ativos.track();
        load();
    });

    let excluir = move |a: Afastamento| {
        let nome = a.nome_funcionario().unwrap_or(a.matricula.as_str()).to_string();
        if !confirm(&format!("Excluir o afastamento de {} ({})?", nome, a.motivo)) {
            return;
        }
        run_mutation(
            ctl.auth(),
            ctl.notifier(),
            move |session| async move { api::delete(&session, a.id).await },
            "Afastamento excluído",
            load,
        );
    };

    let export = move || {
        let rows = ctl.with_untracked(|s| s.filtered());
        if let Err(e) = export_to_excel(&rows, "afastamentos.csv") {
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
        <PageFrame page_id="a003_afastamento--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Afastamentos"</h1>
                    <Badge>{move || ctl.view.with(|v| v.page.total_items.to_string())}</Badge>
                </div>
                <div class="page__header-right">
                    <Checkbox checked=apenas_ativos label="Apenas em curso" />
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| editing.set(Some(None))
                    >
                        {icon("plus")}
                        " Novo"
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
                                <SortableHeaderCell label="Matrícula" sort_key="matricula" sort=sort on_sort=on_sort min_width=100.0 />
                                <SortableHeaderCell label="Funcionário" sort_key="nome" sort=sort on_sort=on_sort min_width=200.0 />
                                <SortableHeaderCell label="Motivo" sort_key="motivo" sort=sort on_sort=on_sort min_width=160.0 />
                                <SortableHeaderCell label="Início" sort_key="data_inicio" sort=sort on_sort=on_sort min_width=110.0 />
                                <SortableHeaderCell label="Fim" sort_key="data_fim" sort=sort on_sort=on_sort min_width=110.0 />
                                <SortableHeaderCell label="Dias" sort_key="dias" sort=sort on_sort=on_sort min_width=70.0 />
                                <SortableHeaderCell label="Impacta férias" sort_key="impacta_ferias" sort=sort on_sort=on_sort />
                                <TableHeaderCell resizable=false min_width=90.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            {move || ctl.view.with(|v| {
                                v.page.items.iter().cloned().map(|a| {
                                    let for_edit = a.clone();
                                    let for_delete = a.clone();
                                    let impacto_class = if a.impacta_ferias { "badge badge--warning" } else { "badge badge--neutral" };
                                    let matricula = a.matricula.clone();
                                    let nome = a.nome_funcionario().unwrap_or("-").to_string();
                                    let observacao = a.observacao.clone().unwrap_or_default();
                                    let motivo = a.motivo.clone();
                                    let inicio = format_naive(a.data_inicio);
                                    let fim = format_naive(a.data_fim);
                                    let dias = a.dias();
                                    let impacta_ferias = a.impacta_ferias;
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout>{matricula}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {nome}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true attr:title=observacao>
                                                    {motivo}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell><TableCellLayout>{inicio}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{fim}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{dias}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class=impacto_class>{sim_nao(impacta_ferias)}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| editing.set(Some(Some(for_edit.clone())))
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
                        empty.then(|| view! { <div class="table__empty">"Nenhum afastamento encontrado"</div> })
                    }}
                </div>

                {move || editing.get().map(|afastamento| view! {
                    <AfastamentoDetails
                        afastamento=afastamento
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
