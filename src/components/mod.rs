//! UI Components
//!
//! Leptos components for the card, checklist, entry dialog and settings.

mod checklist_item;
mod checklist_panel;
mod delete_confirm_button;
mod entry_dialog;
mod item_card;
mod notice_bar;
mod settings_bar;

pub use checklist_item::ChecklistItem;
pub use checklist_panel::ChecklistPanel;
pub use delete_confirm_button::DeleteConfirmButton;
pub use entry_dialog::EntryDialog;
pub use item_card::ItemCard;
pub use notice_bar::NoticeBar;
pub use settings_bar::SettingsBar;
