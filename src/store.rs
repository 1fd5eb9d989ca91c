use crate::{
    data::aluno::{Aluno, AlunoFields},
    error::ChamadaResult,
};
use async_trait::async_trait;

pub mod postgres;

/// The three capability shapes the roster screen needs from its backing
/// store: list all, overwrite by id, delete by id. Anything satisfying these
/// can sit behind the UI, which is how the tests swap in an in-memory fake.
#[async_trait]
pub trait RecordStore: Send + Sync + 'static {
    /// Fetch every document in the `alunos` collection, in store order.
    async fn fetch_all(&self) -> ChamadaResult<Vec<Aluno>>;

    /// Write all four editable fields into the document with this id. A
    /// missing document is a store-reported failure, not a silent insert.
    async fn overwrite(&self, id: &str, fields: &AlunoFields) -> ChamadaResult<()>;

    /// Delete the document with this id.
    async fn delete(&self, id: &str) -> ChamadaResult<()>;
}
