use contracts::domain::a001_funcionario::aggregate::{Funcionario, STATUS_ATIVO, STATUS_INATIVO};
use leptos::prelude::*;
use thaw::*;

use super::view_model::FuncionarioDetailsViewModel;
use crate::shared::icons::icon;

#[component]
pub fn FuncionarioDetails(
    /// `None` abre o formulário vazio
    funcionario: Option<Funcionario>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = FuncionarioDetailsViewModel::new(funcionario.as_ref());
    let busy = Signal::derive(move || vm.saving.get());

    view! {
        <div class="modal-overlay" on:click=move |_| on_cancel.run(())>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{vm.title()}</h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_cancel.run(())>
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                    <div class="form__group">
                        <label for="matricula">"Matrícula"</label>
                        <input
                            id="matricula"
                            type="text"
                            disabled=vm.is_edit_mode()
                            prop:value=move || vm.form.with(|f| f.matricula.clone())
                            on:input=move |ev| vm.set(|f| f.matricula = event_target_value(&ev))
                        />
                    </div>

                    <div class="form__group">
                        <label for="nome">"Nome"</label>
                        <input
                            id="nome"
                            type="text"
                            prop:value=move || vm.form.with(|f| f.nome.clone())
                            on:input=move |ev| vm.set(|f| f.nome = event_target_value(&ev))
                        />
                    </div>

                    <div class="form__row">
                        <div class="form__group">
                            <label for="cargo">"Cargo"</label>
                            <input
                                id="cargo"
                                type="text"
                                prop:value=move || vm.form.with(|f| f.cargo.clone())
                                on:input=move |ev| vm.set(|f| f.cargo = event_target_value(&ev))
                            />
                        </div>
                        <div class="form__group">
                            <label for="categoria">"Categoria"</label>
                            <input
                                id="categoria"
                                type="text"
                                prop:value=move || vm.form.with(|f| f.categoria.clone())
                                on:input=move |ev| vm.set(|f| f.categoria = event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <div class="form__row">
                        <div class="form__group">
                            <label for="setor">"Setor"</label>
                            <input
                                id="setor"
                                type="text"
                                prop:value=move || vm.form.with(|f| f.setor.clone())
                                on:input=move |ev| vm.set(|f| f.setor = event_target_value(&ev))
                            />
                        </div>
                        <div class="form__group">
                            <label for="status">"Status"</label>
                            <select
                                id="status"
                                prop:value=move || vm.form.with(|f| f.status.clone())
                                on:change=move |ev| vm.set(|f| f.status = event_target_value(&ev))
                            >
                                <option value=STATUS_ATIVO>{STATUS_ATIVO}</option>
                                <option value=STATUS_INATIVO>{STATUS_INATIVO}</option>
                            </select>
                        </div>
                    </div>

                    <div class="form__row">
                        <div class="form__group">
                            <label for="data_admissao">"Admissão"</label>
                            <input
                                id="data_admissao"
                                type="date"
                                prop:value=move || vm.form.with(|f| f.data_admissao.clone())
                                on:input=move |ev| vm.set(|f| f.data_admissao = event_target_value(&ev))
                            />
                        </div>
                        <div class="form__group">
                            <label for="email">"E-mail"</label>
                            <input
                                id="email"
                                type="email"
                                prop:value=move || vm.form.with(|f| f.email.clone())
                                on:input=move |ev| vm.set(|f| f.email = event_target_value(&ev))
                            />
                        </div>
                    </div>
                </div>

                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_cancel.run(())
                        disabled=busy
                    >
                        "Cancelar"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| vm.save_command(on_saved)
                        disabled=busy
                    >
                        {move || if vm.saving.get() { "Salvando..." } else { "Salvar" }}
                    </Button>
                </div>
            </div>
        </div>
    }
}
