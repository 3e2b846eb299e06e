//! Formulário de funcionário (criação e edição)
//!
//! - model.rs: campos do formulário, validação e chamadas de gravação
//! - view_model.rs: estado e comandos
//! - view.rs: componente Leptos

mod model;
mod view;
mod view_model;

pub use view::FuncionarioDetails;
