//! Page Configuration
//!
//! Optional `<script id="board-config" type="application/json">` block.

use kanban_core::BoardConfig;

const CONFIG_ELEMENT_ID: &str = "board-config";

/// Read the page's board config, falling back to defaults
pub fn load_board_config() -> BoardConfig {
    let raw = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    let Some(raw) = raw else {
        return BoardConfig::default();
    };
    match BoardConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            log::error!("ignoring #{}: {}", CONFIG_ELEMENT_ID, err);
            BoardConfig::default()
        }
    }
}
