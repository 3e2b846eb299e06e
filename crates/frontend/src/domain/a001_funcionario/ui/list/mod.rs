mod state;

use contracts::domain::a001_funcionario::aggregate::{Funcionario, FuncionarioQuery};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a001_funcionario::api;
use crate::domain::a001_funcionario::ui::details::FuncionarioDetails;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::filter_select::FilterSelect;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::table::{SortableHeaderCell, TableCellCheckbox, TableHeaderCheckbox};
use crate::shared::date_utils::format_naive;
use crate::shared::export::export_to_excel;
use crate::shared::icons::icon;
use crate::shared::list_controller::{confirm, run_mutation, ListController};
use crate::shared::list_state::ListEvent;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::selection::Identified;
use state::{FIELDS, SELECT_FILTERS};

const TABLE_ID: &str = "a001-funcionario-table";

/// Linha em edição no modal: `Some(None)` = novo funcionário
type Editing = Option<Option<Funcionario>>;

#[component]
pub fn FuncionarioList() -> impl IntoView {
    let ctl = ListController::new(FIELDS);
    let editing: RwSignal<Editing> = RwSignal::new(None);
    let filters_expanded = RwSignal::new(true);
    let cargo_filter = RwSignal::new(String::new());

    let load = move || {
        ctl.load(|session| async move {
            api::fetch_funcionarios(&session, &FuncionarioQuery::default()).await
        });
    };
    load();

    // o filtro de cargo é texto livre
    Effect::new(move |_| {
        let value = cargo_filter.get();
        ctl.dispatch(ListEvent::FilterChanged {
            key: "cargo".to_string(),
            value,
        });
    });

    let set_filter = move |key: &'static str| {
        Callback::new(move |value: String| {
            ctl.dispatch(ListEvent::FilterChanged {
                key: key.to_string(),
                value,
            })
        })
    };

    let delete_one = move |f: Funcionario| {
        if !confirm(&format!("Excluir o funcionário {} - {}?", f.matricula, f.nome)) {
            return;
        }
        run_mutation(
            ctl.auth(),
            ctl.notifier(),
            move |session| async move { api::delete(&session, &f.matricula).await },
            "Funcionário excluído",
            load,
        );
    };

    let delete_selected = move || {
        let ids = ctl.with_untracked(|s| s.selection.sorted_ids());
        if ids.is_empty() || !confirm(&format!("Excluir {} funcionário(s) selecionado(s)?", ids.len())) {
            return;
        }
        let count = ids.len();
        run_mutation(
            ctl.auth(),
            ctl.notifier(),
            move |session| async move { api::delete_batch(&session, ids).await },
            format!("{} funcionário(s) excluído(s)", count),
            move || {
                ctl.dispatch(ListEvent::SelectionCleared);
                load();
            },
        );
    };

    let export = move || {
        let rows = ctl.with_untracked(|s| s.filtered());
        if let Err(e) = export_to_excel(&rows, "funcionarios.csv") {
            ctl.notifier().error(e.to_string());
        }
    };

    let loading = Signal::derive(move || ctl.with(|s| s.loading));
    let selected_count = Signal::derive(move || ctl.with(|s| s.selection.len()));
    let active_filters = Signal::derive(move || {
        ctl.with(|s| s.filters.len() + usize::from(!s.search.trim().is_empty()))
    });
    let sort = Signal::derive(move || ctl.with(|s| s.sort));
    let on_sort = Callback::new(move |key| ctl.dispatch(ListEvent::SortToggled(key)));
    let (all_checked, partial) = ctl.header_checkbox();

    view! {
        <PageFrame page_id="a001_funcionario--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Funcionários"</h1>
                    <Badge>{move || ctl.view.with(|v| v.page.total_items.to_string())}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| editing.set(Some(None))
                    >
                        {icon("plus")}
                        " Novo"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| delete_selected()
                        disabled=Signal::derive(move || selected_count.get() == 0)
                    >
                        {icon("trash")}
                        {move || format!(" Excluir selecionados ({})", selected_count.get())}
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
                    on_clear=Callback::new(move |_| {
                        cargo_filter.set(String::new());
                        ctl.dispatch(ListEvent::FiltersCleared);
                    })
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
                                            on_change=set_filter(key)
                                        />
                                    }
                                })
                                .collect_view()}
                            <div class="filter-select">
                                <Label>"Cargo"</Label>
                                <Input value=cargo_filter placeholder="Contém..." />
                            </div>
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
                                <SortableHeaderCell label="Nome" sort_key="nome" sort=sort on_sort=on_sort min_width=200.0 />
                                <SortableHeaderCell label="Cargo" sort_key="cargo" sort=sort on_sort=on_sort />
                                <SortableHeaderCell label="Categoria" sort_key="categoria" sort=sort on_sort=on_sort />
                                <SortableHeaderCell label="Setor" sort_key="setor" sort=sort on_sort=on_sort />
                                <SortableHeaderCell label="Status" sort_key="status" sort=sort on_sort=on_sort min_width=90.0 />
                                <SortableHeaderCell label="Admissão" sort_key="data_admissao" sort=sort on_sort=on_sort min_width=110.0 />
                                <TableHeaderCell resizable=false min_width=90.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            {move || ctl.view.with(|v| {
                                v.page.items.iter().cloned().map(|f| {
                                    let row_id = f.row_id();
                                    let for_edit = f.clone();
                                    let for_delete = f.clone();
                                    let status_class = if f.is_ativo() { "badge badge--success" } else { "badge badge--neutral" };
                                    view! {
                                        <TableRow>
                                            <TableCellCheckbox
                                                item_id=row_id.clone()
                                                checked=ctl.is_selected(row_id)
                                                on_change=Callback::new(move |(id, checked)| {
                                                    ctl.dispatch(ListEvent::ToggleOne { id, checked })
                                                })
                                            />
                                            <TableCell><TableCellLayout>{f.matricula.clone()}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{f.nome.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell><TableCellLayout truncate=true>{f.cargo.clone().unwrap_or_default()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{f.categoria.clone().unwrap_or_default()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{f.setor.clone().unwrap_or_default()}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class=status_class>{f.status.clone().unwrap_or_else(|| "-".into())}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{f.data_admissao.map(format_naive).unwrap_or_default()}</TableCellLayout>
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
                                                    on_click=move |_| delete_one(for_delete.clone())
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
                        empty.then(|| view! { <div class="table__empty">"Nenhum funcionário encontrado"</div> })
                    }}
                </div>

                {move || editing.get().map(|funcionario| view! {
                    <FuncionarioDetails
                        funcionario=funcionario
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
