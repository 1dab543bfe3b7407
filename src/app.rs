//! Kanban Board App
//!
//! Loads the board from storage and lays out its fixed columns.

use leptos::prelude::*;
use reactive_stores::Store;

use kanban_core::Kanban;

use crate::components::{BoardColumn, ErrorBanner, Phantom};
use crate::config::load_board_config;
use crate::context::BoardContext;
use crate::storage::LocalStorageStore;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let config = load_board_config();
    let backend = LocalStorageStore::new(config.storage_key.clone());

    let kanban = match Kanban::load(config, backend) {
        Ok(kanban) => kanban,
        Err(err) => {
            log::error!("board failed to initialize: {}", err);
            return view! {
                <div class="board-error" role="alert">
                    {format!("The board could not be initialized: {}", err)}
                </div>
            }
            .into_any();
        }
    };
    let columns = kanban.config().columns.clone();

    let store = Store::new(AppState::new(kanban));
    provide_context(BoardContext::new(store));

    view! {
        <main class="board-app">
            <ErrorBanner />
            <div class="board">
                {columns
                    .into_iter()
                    .map(|column| view! { <BoardColumn column=column /> })
                    .collect_view()}
            </div>
            <Phantom />
        </main>
    }
    .into_any()
}
