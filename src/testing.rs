//! Fakes shared by the unit tests: an in-memory store that records every
//! call, and a scripted stand-in for the delete confirmation dialog.

use crate::{
    controller::ConfirmDelete,
    data::aluno::{Aluno, AlunoFields},
    error::{ChamadaResult, DeleteAlunoSnafu, FetchAlunosSnafu, OverwriteAlunoSnafu},
    store::RecordStore,
};
use async_trait::async_trait;
use snafu::IntoError;
use std::sync::{
    Mutex,
    atomic::{AtomicBool, Ordering},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    FetchAll,
    Overwrite { id: String, fields: AlunoFields },
    Delete { id: String },
}

#[derive(Default)]
pub struct MemoryStore {
    docs: Mutex<Vec<Aluno>>,
    calls: Mutex<Vec<StoreCall>>,
    fail_fetch: AtomicBool,
    fail_overwrite: AtomicBool,
    fail_delete: AtomicBool,
}

impl MemoryStore {
    pub fn with_docs(docs: Vec<Aluno>) -> Self {
        Self {
            docs: Mutex::new(docs),
            ..Self::default()
        }
    }

    pub fn doc(id: &str, first: &str, last: &str, birth: &str, sex: &str) -> Aluno {
        Aluno {
            id: id.to_string(),
            fields: AlunoFields {
                first_name: first.to_string(),
                last_name: last.to_string(),
                birth_date: birth.to_string(),
                sex: sex.to_string(),
            },
        }
    }

    pub fn find_doc(&self, id: &str) -> Option<Aluno> {
        self.docs.lock().unwrap().iter().find(|a| a.id == id).cloned()
    }

    pub fn remove_doc(&self, id: &str) {
        self.docs.lock().unwrap().retain(|a| a.id != id);
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    pub fn fail_fetches(&self) {
        self.fail_fetch.store(true, Ordering::Relaxed);
    }

    pub fn fail_overwrites(&self) {
        self.fail_overwrite.store(true, Ordering::Relaxed);
    }

    pub fn fail_deletes(&self) {
        self.fail_delete.store(true, Ordering::Relaxed);
    }

    fn record(&self, call: StoreCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn fetch_all(&self) -> ChamadaResult<Vec<Aluno>> {
        self.record(StoreCall::FetchAll);
        if self.fail_fetch.load(Ordering::Relaxed) {
            return Err(FetchAlunosSnafu.into_error(sqlx::Error::PoolClosed));
        }
        Ok(self.docs.lock().unwrap().clone())
    }

    async fn overwrite(&self, id: &str, fields: &AlunoFields) -> ChamadaResult<()> {
        self.record(StoreCall::Overwrite {
            id: id.to_string(),
            fields: fields.clone(),
        });
        if self.fail_overwrite.load(Ordering::Relaxed) {
            return Err(OverwriteAlunoSnafu { id }.into_error(sqlx::Error::PoolClosed));
        }
        let mut docs = self.docs.lock().unwrap();
        match docs.iter_mut().find(|a| a.id == id) {
            Some(doc) => {
                doc.fields = fields.clone();
                Ok(())
            }
            None => Err(OverwriteAlunoSnafu { id }.into_error(sqlx::Error::RowNotFound)),
        }
    }

    async fn delete(&self, id: &str) -> ChamadaResult<()> {
        self.record(StoreCall::Delete { id: id.to_string() });
        if self.fail_delete.load(Ordering::Relaxed) {
            return Err(DeleteAlunoSnafu { id }.into_error(sqlx::Error::PoolClosed));
        }
        self.docs.lock().unwrap().retain(|a| a.id != id);
        Ok(())
    }
}

pub struct ScriptedConfirm {
    answer: bool,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedConfirm {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl ConfirmDelete for ScriptedConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.answer
    }
}
