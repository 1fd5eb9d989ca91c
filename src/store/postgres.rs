use crate::{
    config::DbConfig,
    data::aluno::{Aluno, AlunoFields},
    error::{
        ChamadaResult, DeleteAlunoSnafu, FetchAlunosSnafu, MigrateSnafu, MissingAlunoSnafu,
        OpenDatabaseSnafu, OverwriteAlunoSnafu,
    },
    store::RecordStore,
};
use async_trait::async_trait;
use snafu::{ResultExt, ensure};
use sqlx::{FromRow, Pool, Postgres, postgres::PgPoolOptions};

/// Production store: one Postgres table, column names kept from the original
/// document schema.
#[derive(Clone, Debug)]
pub struct PgRecordStore {
    pool: Pool<Postgres>,
}

#[derive(FromRow)]
struct AlunoRow {
    id: String,
    nome: String,
    sobrenome: String,
    datanascimento: String,
    sexo: String,
}

impl From<AlunoRow> for Aluno {
    fn from(row: AlunoRow) -> Self {
        Self {
            id: row.id,
            fields: AlunoFields {
                first_name: row.nome,
                last_name: row.sobrenome,
                birth_date: row.datanascimento,
                sex: row.sexo,
            },
        }
    }
}

impl PgRecordStore {
    pub async fn connect(options: PgPoolOptions, config: &DbConfig) -> ChamadaResult<Self> {
        let pool = options
            .connect(&config.url())
            .await
            .context(OpenDatabaseSnafu)?;

        sqlx::migrate!().run(&pool).await.context(MigrateSnafu)?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn fetch_all(&self) -> ChamadaResult<Vec<Aluno>> {
        let rows: Vec<AlunoRow> =
            sqlx::query_as("SELECT id, nome, sobrenome, datanascimento, sexo FROM alunos")
                .fetch_all(&self.pool)
                .await
                .context(FetchAlunosSnafu)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn overwrite(&self, id: &str, fields: &AlunoFields) -> ChamadaResult<()> {
        let result = sqlx::query(
            "UPDATE alunos SET nome = $2, sobrenome = $3, datanascimento = $4, sexo = $5 WHERE id = $1",
        )
        .bind(id)
        .bind(&fields.first_name)
        .bind(&fields.last_name)
        .bind(&fields.birth_date)
        .bind(&fields.sex)
        .execute(&self.pool)
        .await
        .context(OverwriteAlunoSnafu { id })?;

        // updateDoc semantics: writing to a document that no longer exists is
        // a failure, not an upsert.
        ensure!(result.rows_affected() > 0, MissingAlunoSnafu { id });

        Ok(())
    }

    async fn delete(&self, id: &str) -> ChamadaResult<()> {
        sqlx::query("DELETE FROM alunos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .context(DeleteAlunoSnafu { id })?;

        Ok(())
    }
}
