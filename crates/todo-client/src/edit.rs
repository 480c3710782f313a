//! Edit Mode
//!
//! At most one item is editable at a time.

use crate::models::ItemId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditMode {
    #[default]
    Viewing,
    /// Item being edited and the replacement name typed so far
    Editing { id: ItemId, draft: String },
}

impl EditMode {
    /// Select `id` for editing. Re-selecting the current item keeps its draft.
    pub fn begin(&mut self, id: ItemId) {
        if !self.is_editing(&id) {
            *self = EditMode::Editing { id, draft: String::new() };
        }
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        if let EditMode::Editing { draft, .. } = self {
            *draft = text.into();
        }
    }

    pub fn close(&mut self) {
        *self = EditMode::Viewing;
    }

    /// Close only if `id` is the item being edited
    pub fn close_item(&mut self, id: &ItemId) {
        if self.is_editing(id) {
            self.close();
        }
    }

    pub fn editing_id(&self) -> Option<&ItemId> {
        match self {
            EditMode::Viewing => None,
            EditMode::Editing { id, .. } => Some(id),
        }
    }

    pub fn is_editing(&self, id: &ItemId) -> bool {
        self.editing_id() == Some(id)
    }

    pub fn draft(&self) -> &str {
        match self {
            EditMode::Viewing => "",
            EditMode::Editing { draft, .. } => draft,
        }
    }
}
