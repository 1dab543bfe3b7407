//! UI Components
//!
//! Leptos components rendering the board.

mod board_column;
mod card_view;
mod error_banner;
mod new_card_form;
mod phantom;

pub use board_column::BoardColumn;
pub use card_view::CardView;
pub use error_banner::ErrorBanner;
pub use new_card_form::NewCardForm;
pub use phantom::Phantom;
