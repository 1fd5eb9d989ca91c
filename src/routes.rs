pub mod alunos;
pub mod index;
pub mod profiles;
