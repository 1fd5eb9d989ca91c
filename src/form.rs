use crate::data::aluno::{Aluno, AlunoFields};

/// One editable field of the staged record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    FirstName,
    LastName,
    BirthDate,
    Sex,
}

/// Single-slot staging area for the record currently being edited. Empty
/// fields and no selected id until a row's "Editar" action loads one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditForm {
    fields: AlunoFields,
    selected_id: Option<String>,
}

impl EditForm {
    /// Copy a record's four fields into the form and stage its id for the
    /// next update. No store side effect.
    pub fn load_from_record(&mut self, aluno: &Aluno) {
        self.fields = aluno.fields.clone();
        self.selected_id = Some(aluno.id.clone());
    }

    /// Overwrite exactly one field. Synchronous, no validation.
    pub fn set_field(&mut self, field: FormField, value: String) {
        match field {
            FormField::FirstName => self.fields.first_name = value,
            FormField::LastName => self.fields.last_name = value,
            FormField::BirthDate => self.fields.birth_date = value,
            FormField::Sex => self.fields.sex = value,
        }
    }

    /// Back to all-empty and nothing selected.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn fields(&self) -> &AlunoFields {
        &self.fields
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }
}
