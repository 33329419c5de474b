#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI chrome state: sidebar and dark mode.
#[derive(Clone, Debug)]
pub struct UiState {
    pub dark_mode: bool,
    pub sidebar_collapsed: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            dark_mode: false,
            sidebar_collapsed: false,
        }
    }
}
