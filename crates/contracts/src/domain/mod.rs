pub mod a001_funcionario;
pub mod a002_ferias;
pub mod a003_afastamento;
pub mod a004_planejamento;
