use crate::{
    data::aluno::Aluno, form::EditForm, notify::Notifier, roster::Roster, store::RecordStore,
};
use std::sync::Arc;

pub const DELETE_PROMPT: &str = "Tem certeza que deseja deletar?";

/// Yes/no gate asked before any delete reaches the store. In the browser the
/// dialog has already happened client-side by the time the request arrives.
pub trait ConfirmDelete: Send + Sync {
    fn confirm(&self, prompt: &str) -> bool;
}

/// The `hx-confirm` dialog gated the request before it was sent.
pub struct AlreadyConfirmed;

impl ConfirmDelete for AlreadyConfirmed {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

/// Everything bound to the roster screen's submit and row actions.
pub struct MutationController {
    store: Arc<dyn RecordStore>,
}

impl MutationController {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Overwrite the staged record with the form's current fields. Guarded on
    /// a staged id only; no check that the record still exists (a concurrent
    /// delete surfaces as a store failure and is logged like any other).
    pub async fn submit_update(
        &self,
        form: &mut EditForm,
        roster: &mut Roster,
        notifier: &dyn Notifier,
    ) {
        let Some(id) = form.selected_id() else {
            error!("update submitted with no aluno selected");
            return;
        };

        match self.store.overwrite(id, form.fields()).await {
            Ok(()) => {
                notifier.success("Aluno atualizado com sucesso");
                roster.refresh().await;
                form.reset();
            }
            Err(e) => error!(?e, "unable to update aluno"),
        }
    }

    /// Pure UI: stage a row's record in the form. No store access.
    pub fn select_for_edit(&self, form: &mut EditForm, aluno: &Aluno) {
        form.load_from_record(aluno);
    }

    /// Delete one record, behind the confirmation gate. Declined means
    /// nothing is sent anywhere.
    pub async fn delete_record(
        &self,
        id: &str,
        roster: &mut Roster,
        confirm: &dyn ConfirmDelete,
        notifier: &dyn Notifier,
    ) {
        if !confirm.confirm(DELETE_PROMPT) {
            return;
        }

        match self.store.delete(id).await {
            Ok(()) => {
                notifier.success("Aluno deletado com sucesso");
                roster.refresh().await;
            }
            Err(e) => {
                error!(?e, "unable to delete aluno");
                notifier.failure("Erro ao deletar aluno. Verifique os logs para mais detalhes.");
            }
        }
    }
}
