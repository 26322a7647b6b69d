//! Presenters - Format history for display

pub mod history_menu_presenter;

pub use history_menu_presenter::{
    HistoryMenuItemViewModel, HistoryMenuKind, HistoryMenuPresenter, DEFAULT_FOLDER_ICON,
};
