use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use maud::html;
use snafu::Snafu;
use std::num::ParseIntError;

pub type ChamadaResult<T> = Result<T, ChamadaError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ChamadaError {
    #[snafu(display("Error opening database"))]
    OpenDatabase { source: sqlx::Error },
    #[snafu(display("Error migrating DB schema"))]
    MigrateError { source: sqlx::migrate::MigrateError },
    #[snafu(display("Error fetching alunos"))]
    FetchAlunos { source: sqlx::Error },
    #[snafu(display("Error overwriting aluno {:?}", id))]
    OverwriteAluno { source: sqlx::Error, id: String },
    #[snafu(display("Error deleting aluno {:?}", id))]
    DeleteAluno { source: sqlx::Error, id: String },
    #[snafu(display("Unable to find aluno with id: {:?}", id))]
    MissingAluno { id: String },
    #[snafu(display("Unable to retrieve env var `{}`", name))]
    BadEnvVar {
        source: dotenvy::Error,
        name: &'static str,
    },
    #[snafu(display("Unable to parse DB port"))]
    ParsePort { source: ParseIntError },
}

impl IntoResponse for ChamadaError {
    fn into_response(self) -> Response {
        let basic_error = |desc| {
            html! {
                div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded relative mb-4" role="alert" {
                    strong class="font-bold" {"Erro"}
                    span {(desc)}
                }
            }
        };

        let status_code = match &self {
            Self::MissingAluno { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        error!(?self, "Error!");
        (status_code, Html(basic_error(self.to_string()))).into_response()
    }
}
