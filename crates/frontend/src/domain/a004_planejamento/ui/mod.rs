pub mod versoes;
pub mod visao_geral;
