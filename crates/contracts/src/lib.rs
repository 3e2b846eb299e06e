//! Contratos: DTOs trafegados entre o painel e a API de férias.
//!
//! Todos os tipos aqui são simples estruturas serde; nenhuma regra de negócio
//! vive neste crate.

pub mod domain;
pub mod shared;
pub mod system;
