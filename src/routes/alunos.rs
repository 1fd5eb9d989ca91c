use crate::{
    controller::{AlreadyConfirmed, DELETE_PROMPT},
    data::{IdForm, aluno::SEXO_OPTIONS},
    error::{ChamadaError, ChamadaResult},
    form::{EditForm, FormField},
    maud_conveniences::{escape, render_table, text_input},
    notify::NoticeBoard,
    roster::Roster,
    state::{ChamadaState, Ui},
};
use axum::{
    Form,
    extract::{Query, State},
};
use maud::{Markup, html};
use serde::Deserialize;

/// The CRUD screen shell; htmx pulls the live fragment in on load.
#[axum::debug_handler]
pub async fn get_listar(State(state): State<ChamadaState>) -> Markup {
    state.render(html! {
        div class="w-full max-w-4xl bg-gray-800 p-4 rounded-lg shadow-md mx-auto" {
            div id="lista_alunos" hx-get="/internal/get_alunos" hx-trigger="load" {}
        }
    })
}

pub async fn internal_get_alunos(State(state): State<ChamadaState>) -> Markup {
    let mut ui = state.ui().lock().await;
    ui.roster.refresh().await;

    alunos_fragment(&ui.form, &ui.roster, &NoticeBoard::default())
}

pub async fn internal_edit_aluno(
    State(state): State<ChamadaState>,
    Query(IdForm { id }): Query<IdForm>,
) -> ChamadaResult<Markup> {
    let mut ui = state.ui().lock().await;
    let Ui { roster, form } = &mut *ui;

    let Some(aluno) = roster.find(&id) else {
        return Err(ChamadaError::MissingAluno { id });
    };
    state.controller().select_for_edit(form, aluno);

    Ok(alunos_fragment(form, roster, &NoticeBoard::default()))
}

#[derive(Deserialize)]
pub struct UpdateAlunoForm {
    first_name: String,
    last_name: String,
    birth_date: String,
    sex: String,
}

pub async fn post_update_aluno(
    State(state): State<ChamadaState>,
    Form(posted): Form<UpdateAlunoForm>,
) -> Markup {
    let notices = NoticeBoard::default();
    let mut ui = state.ui().lock().await;
    let Ui { roster, form } = &mut *ui;

    form.set_field(FormField::FirstName, posted.first_name);
    form.set_field(FormField::LastName, posted.last_name);
    form.set_field(FormField::BirthDate, posted.birth_date);
    form.set_field(FormField::Sex, posted.sex);

    state.controller().submit_update(form, roster, &notices).await;

    alunos_fragment(form, roster, &notices)
}

pub async fn delete_aluno(
    State(state): State<ChamadaState>,
    Query(IdForm { id }): Query<IdForm>,
) -> Markup {
    let notices = NoticeBoard::default();
    let mut ui = state.ui().lock().await;
    let Ui { roster, form } = &mut *ui;

    state
        .controller()
        .delete_record(&id, roster, &AlreadyConfirmed, &notices)
        .await;

    alunos_fragment(form, roster, &notices)
}

/// The shared fragment: notices, the edit form with whatever is currently
/// staged, and one table row per roster record.
fn alunos_fragment(form: &EditForm, roster: &Roster, notices: &NoticeBoard) -> Markup {
    let fields = form.fields();

    html! {
        (notices)

        form hx-post="/alunos" hx-target="#lista_alunos" class="mb-4" {
            (text_input("first_name", "text", "Nome", &fields.first_name))
            (text_input("last_name", "text", "Sobrenome", &fields.last_name))
            (text_input("birth_date", "date", "", &fields.birth_date))
            select name="sex" id="sex" class="shadow appearance-none border rounded py-2 px-3 mr-2 leading-tight focus:outline-none focus:shadow-outline bg-gray-700 border-gray-600" {
                option value="" selected[fields.sex.is_empty()] {"Selecione Sexo"}
                @for sexo in SEXO_OPTIONS {
                    option value=(sexo) selected[fields.sex == sexo] {(sexo)}
                }
            }
            button type="submit" class="bg-blue-500 hover:bg-blue-700 font-bold py-2 px-4 rounded focus:outline-none focus:shadow-outline" {
                "Atualizar"
            }
        }

        (render_table(
            "Lista de Alunos",
            ["Nome", "Sobrenome", "Data de Nascimento", "Sexo", "Ações"],
            roster
                .records()
                .iter()
                .map(|aluno| {
                    [
                        escape(&aluno.fields.first_name),
                        escape(&aluno.fields.last_name),
                        escape(&aluno.fields.birth_date),
                        escape(&aluno.fields.sex),
                        html! {
                            button hx-get={"/internal/alunos/editar?id=" (aluno.id)} hx-target="#lista_alunos" class="bg-yellow-500 hover:bg-yellow-600 p-1 rounded mr-1" {
                                "Editar"
                            }
                            button hx-delete={"/alunos?id=" (aluno.id)} hx-confirm=(DELETE_PROMPT) hx-target="#lista_alunos" class="bg-red-500 hover:bg-red-600 p-1 rounded" {
                                "Deletar"
                            }
                        },
                    ]
                })
                .collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryStore;
    use std::sync::Arc;

    async fn roster_of(store: Arc<MemoryStore>) -> Roster {
        let mut roster = Roster::new(store);
        roster.refresh().await;
        roster
    }

    #[tokio::test]
    async fn fragment_renders_one_row_per_record_with_verbatim_fields() {
        let store = Arc::new(MemoryStore::with_docs(vec![
            MemoryStore::doc("1", "Ana", "Silva", "2010-05-01", "Feminino"),
            MemoryStore::doc("2", "Bruno", "Lima", "2009-11-23", "Masculino"),
        ]));
        let roster = roster_of(store).await;

        let rendered =
            alunos_fragment(&EditForm::default(), &roster, &NoticeBoard::default()).into_string();

        assert_eq!(rendered.matches("aluno-row").count(), 2);
        for field in ["Ana", "Silva", "2010-05-01", "Bruno", "Lima", "2009-11-23"] {
            assert!(rendered.contains(field), "missing {field}");
        }
    }

    #[tokio::test]
    async fn fragment_shows_the_staged_record_in_the_form() {
        let store = Arc::new(MemoryStore::with_docs(vec![MemoryStore::doc(
            "1",
            "Ana",
            "Silva",
            "2010-05-01",
            "Feminino",
        )]));
        let roster = roster_of(store).await;

        let mut form = EditForm::default();
        form.load_from_record(roster.find("1").unwrap());

        let rendered = alunos_fragment(&form, &roster, &NoticeBoard::default()).into_string();
        assert!(rendered.contains(r#"value="Ana""#));
        assert!(rendered.contains(r#"value="Silva""#));
        assert!(rendered.contains(r#"value="2010-05-01""#));
    }

    // the mutation handlers hold the notice board and confirm gate across
    // store awaits, so their futures must stay Send for axum to accept them
    #[tokio::test]
    async fn mutation_handlers_satisfy_the_router() {
        use axum::{Router, routing::post};

        let store = Arc::new(MemoryStore::with_docs(vec![MemoryStore::doc(
            "1",
            "Ana",
            "Silva",
            "2010-05-01",
            "Feminino",
        )]));
        let state = ChamadaState::new(store);

        let _app: Router = Router::new()
            .route("/alunos", post(post_update_aluno).delete(delete_aluno))
            .route("/internal/get_alunos", axum::routing::get(internal_get_alunos))
            .with_state(state);
    }

    #[tokio::test]
    async fn delete_buttons_carry_the_blocking_confirm_prompt() {
        let store = Arc::new(MemoryStore::with_docs(vec![MemoryStore::doc(
            "1",
            "Ana",
            "Silva",
            "2010-05-01",
            "Feminino",
        )]));
        let roster = roster_of(store).await;

        let rendered =
            alunos_fragment(&EditForm::default(), &roster, &NoticeBoard::default()).into_string();
        assert!(rendered.contains("hx-confirm"));
        assert!(rendered.contains("hx-delete=\"/alunos?id=1\""));
    }
}
