use contracts::domain::a001_funcionario::aggregate::Funcionario;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::model::{self, FuncionarioForm};
use crate::layout::notifications::{use_notifier, Notifier};
use crate::system::auth::context::{use_auth, AuthContext};

#[derive(Clone, Copy)]
pub struct FuncionarioDetailsViewModel {
    pub form: RwSignal<FuncionarioForm>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    /// Matrícula do registro em edição
    original: StoredValue<Option<String>>,
    auth: AuthContext,
    notifier: Notifier,
}

impl FuncionarioDetailsViewModel {
    pub fn new(funcionario: Option<&Funcionario>) -> Self {
        Self {
            form: RwSignal::new(funcionario.map(FuncionarioForm::from).unwrap_or_default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            original: StoredValue::new(funcionario.map(|f| f.matricula.clone())),
            auth: use_auth(),
            notifier: use_notifier(),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.original.with_value(Option::is_some)
    }

    pub fn title(&self) -> String {
        match self.original.get_value() {
            Some(matricula) => format!("Editar funcionário {}", matricula),
            None => "Novo funcionário".to_string(),
        }
    }

    /// Atualiza um campo do formulário
    pub fn set(&self, update: impl FnOnce(&mut FuncionarioForm)) {
        self.form.update(update);
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let dto = match self.form.get_untracked().into_dto() {
            Ok(dto) => dto,
            Err(e) => {
                self.error.set(Some(e.to_string()));
                return;
            }
        };

        let vm = *self;
        let session = vm.auth.session_untracked();
        let original = vm.original.get_value();
        vm.saving.set(true);
        vm.error.set(None);

        spawn_local(async move {
            let result = model::save(&session, original.as_deref(), &dto).await;
            vm.saving.set(false);
            match result {
                Ok(response) => {
                    vm.notifier.success(
                        response
                            .message
                            .unwrap_or_else(|| format!("Funcionário {} salvo", dto.nome)),
                    );
                    on_saved.run(());
                }
                Err(e) => {
                    vm.auth.handle_error(&e);
                    vm.error.set(Some(e.to_string()));
                }
            }
        });
    }
}
