use serde::Deserialize;

pub mod aluno;

#[derive(Deserialize)]
pub struct IdForm {
    pub id: String,
}
