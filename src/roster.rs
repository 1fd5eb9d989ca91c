use crate::{data::aluno::Aluno, store::RecordStore};
use std::sync::Arc;

/// In-memory mirror of the `alunos` collection, in whatever order the store
/// returns it.
pub struct Roster {
    store: Arc<dyn RecordStore>,
    records: Vec<Aluno>,
}

impl Roster {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            records: Vec::new(),
        }
    }

    /// Fetch everything and replace the mirror wholesale. On failure the
    /// previous sequence stays visible, the error is only logged.
    pub async fn refresh(&mut self) {
        match self.store.fetch_all().await {
            Ok(records) => self.records = records,
            Err(e) => error!(?e, "unable to fetch alunos, keeping stale roster"),
        }
    }

    pub fn records(&self) -> &[Aluno] {
        &self.records
    }

    pub fn find(&self, id: &str) -> Option<&Aluno> {
        self.records.iter().find(|aluno| aluno.id == id)
    }
}
