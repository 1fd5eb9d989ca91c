use crate::{controller::MutationController, form::EditForm, roster::Roster, store::RecordStore};
use maud::{DOCTYPE, Markup, html};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Everything the screens read and mutate: the roster mirror and the
/// single-slot edit form. One lock for both, so handlers run one at a time
/// like the single UI thread they stand in for.
pub struct Ui {
    pub roster: Roster,
    pub form: EditForm,
}

#[derive(Clone)]
pub struct ChamadaState {
    ui: Arc<Mutex<Ui>>,
    controller: Arc<MutationController>,
}

impl ChamadaState {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            ui: Arc::new(Mutex::new(Ui {
                roster: Roster::new(store.clone()),
                form: EditForm::default(),
            })),
            controller: Arc::new(MutationController::new(store)),
        }
    }

    pub fn ui(&self) -> &Mutex<Ui> {
        &self.ui
    }

    pub fn controller(&self) -> &MutationController {
        &self.controller
    }

    #[allow(clippy::unused_self)] //to allow direct html! usage in routes
    pub fn render(&self, markup: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html {
                head {
                    meta charset="UTF-8" {}
                    meta name="viewport" content="width=device-width, initial-scale=1.0" {}
                    script src="https://unpkg.com/htmx.org@2.0.4" integrity="sha384-HGfztofotfshcF7+8n44JQL2oJmowVChPTg48S+jvZoztPfvwD79OC/LTtG6dMp+" crossorigin="anonymous" {}
                    script src="https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4" {}
                    title { "Chamada" }
                }
                body class="bg-gray-900 min-h-screen flex flex-col items-center justify-center text-white" {
                    nav class="flex flex-row space-x-4 mb-8" {
                        a href="/" class="hover:text-blue-400 underline" {"Página Inicial"}
                        a href="/profiles" class="hover:text-blue-400 underline" {"Central do Usuário"}
                        a href="/profiles/cadastrar/listar" class="hover:text-blue-400 underline" {"Lista de Alunos"}
                    }
                    (markup)
                }
            }
        }
    }
}
