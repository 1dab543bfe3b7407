//! Board Column Component
//!
//! Column header, the cards-container and the add-card form.

use leptos::prelude::*;

use kanban_core::{ColumnConfig, ColumnEntry};

use crate::components::{CardView, NewCardForm};
use crate::context::use_board;

fn entry_key(entry: &ColumnEntry) -> String {
    match entry {
        ColumnEntry::Card { card, .. } => card.id.clone(),
        ColumnEntry::Placeholder { .. } => "placeholder".to_string(),
    }
}

#[component]
pub fn BoardColumn(column: ColumnConfig) -> impl IntoView {
    let ctx = use_board();
    let column_id = column.id.clone();
    let entries_id = column.id.clone();

    view! {
        <section class="column" id=column.id.clone()>
            <h2 class="column-title">{column.title}</h2>

            <div class="cards" data-column=column_id.clone()>
                <For
                    each=move || ctx.column_entries(&entries_id)
                    key=entry_key
                    children=move |entry| match entry {
                        ColumnEntry::Card { card, .. } => view! { <CardView card=card /> }.into_any(),
                        ColumnEntry::Placeholder { height } => view! {
                            <div class="placeholder" style=format!("height: {}px;", height)></div>
                        }.into_any(),
                    }
                />
            </div>

            <NewCardForm column_id=column_id />
        </section>
    }
}
