/// The labels offered by the sex selector. Nothing enforces them server-side.
pub const SEXO_OPTIONS: [&str; 2] = ["Masculino", "Feminino"];

/// The four user-editable fields of a student record, kept separate from the
/// id because the id is store-assigned and never edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlunoFields {
    pub first_name: String,
    pub last_name: String,
    /// ISO date string, passed through verbatim.
    pub birth_date: String,
    pub sex: String,
}

/// One student record as mirrored from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aluno {
    pub id: String,
    pub fields: AlunoFields,
}
