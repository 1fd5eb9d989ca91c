use crate::state::ChamadaState;
use axum::extract::State;
use maud::{Markup, html};

pub async fn get_index_route(State(state): State<ChamadaState>) -> Markup {
    state.render(html! {
        div class="flex flex-col justify-center items-center" {
            h1 class="text-xl font-bold mb-10" {"Página Inicial"}
            p class="border-2 border-blue-900 p-8 text-2xl" {"Acesso a página inicial"}
        }
    })
}
