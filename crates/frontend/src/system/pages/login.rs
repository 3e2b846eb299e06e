use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::system::auth::{api, context::use_auth};

/// Credenciais aparadas, ou a mensagem do primeiro campo vazio
pub fn validar_credenciais(usuario: &str, senha: &str) -> Result<(String, String), &'static str> {
    let usuario = usuario.trim();
    if usuario.is_empty() {
        return Err("Informe o usuário");
    }
    if senha.is_empty() {
        return Err("Informe a senha");
    }
    Ok((usuario.to_string(), senha.to_string()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let usuario = RwSignal::new(String::new());
    let senha = RwSignal::new(String::new());
    let erro = RwSignal::new(Option::<String>::None);
    let entrando = RwSignal::new(false);

    let entrar = move || {
        if entrando.get_untracked() {
            return;
        }
        let (u, s) = match validar_credenciais(&usuario.get_untracked(), &senha.get_untracked()) {
            Ok(creds) => creds,
            Err(msg) => {
                erro.set(Some(msg.to_string()));
                return;
            }
        };
        entrando.set(true);
        erro.set(None);
        spawn_local(async move {
            match api::login(u, s).await {
                // o guard troca para o layout principal
                Ok(response) => auth.sign_in(response),
                Err(e) => {
                    log::warn!("Login falhou: {}", e);
                    senha.set(String::new());
                    erro.set(Some(e.to_string()));
                }
            }
            entrando.set(false);
        });
    };

    view! {
        <div class="login-container">
            <form
                class="login-box"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    entrar();
                }
            >
                <h1>"Férias & Afastamentos"</h1>
                <p class="login-box__subtitle">"Acesso ao painel de RH"</p>

                {move || erro.get().map(|msg| view! { <div class="alert alert--error">{msg}</div> })}

                <div class="form-group">
                    <Label>"Usuário"</Label>
                    <Input value=usuario disabled=entrando attr:autocomplete="username" />
                </div>
                <div class="form-group">
                    <Label>"Senha"</Label>
                    <Input
                        value=senha
                        input_type=InputType::Password
                        disabled=entrando
                        attr:autocomplete="current-password"
                    />
                </div>

                <Button
                    appearance=ButtonAppearance::Primary
                    button_type=ButtonType::Submit
                    loading=entrando
                    block=true
                >
                    {move || if entrando.get() { "Entrando..." } else { "Entrar" }}
                </Button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_user_and_keeps_password() {
        assert_eq!(
            validar_credenciais("  rh.admin ", " s3nha "),
            Ok(("rh.admin".to_string(), " s3nha ".to_string()))
        );
    }

    #[test]
    fn reports_first_missing_field() {
        assert_eq!(validar_credenciais("   ", ""), Err("Informe o usuário"));
        assert_eq!(validar_credenciais("rh", ""), Err("Informe a senha"));
    }
}
