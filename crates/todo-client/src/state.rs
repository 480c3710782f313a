//! List View State
//!
//! Holds what the list view renders. The item list is only ever replaced
//! by a full server snapshot; mutations bump `revision`, and a revision
//! change is the signal to reload.

use crate::edit::EditMode;
use crate::models::{Item, ItemId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoListState {
    /// New item text
    input: String,
    items: Vec<Item>,
    /// Bumped after every successful mutation
    revision: u64,
    /// Revision the current `items` were requested at
    applied_revision: Option<u64>,
    edit: EditMode,
}

impl TodoListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Mark the local list stale
    pub fn invalidate(&mut self) {
        self.revision += 1;
    }

    /// Replace the list wholesale with a snapshot requested at `revision`.
    ///
    /// Loads can finish out of order; a snapshot older than the one already
    /// shown is dropped and `false` returned. Edit mode closes if its item
    /// is gone.
    pub fn apply_snapshot(&mut self, revision: u64, items: Vec<Item>) -> bool {
        if self.applied_revision.is_some_and(|applied| revision < applied) {
            log::debug!("dropping snapshot from revision {}", revision);
            return false;
        }
        if let Some(id) = self.edit.editing_id() {
            if !items.iter().any(|item| &item.id == id) {
                self.edit.close();
            }
        }
        self.items = items;
        self.applied_revision = Some(revision);
        true
    }

    // ========================
    // Edit Mode
    // ========================

    pub fn edit(&self) -> &EditMode {
        &self.edit
    }

    pub fn begin_edit(&mut self, id: ItemId) {
        self.edit.begin(id);
    }

    pub fn set_edit_draft(&mut self, text: impl Into<String>) {
        self.edit.set_draft(text);
    }

    pub fn close_edit(&mut self) {
        self.edit.close();
    }

    pub fn is_editing(&self, id: &ItemId) -> bool {
        self.edit.is_editing(id)
    }

    // ========================
    // Mutation Outcomes
    // ========================

    pub fn on_created(&mut self) {
        self.input.clear();
        self.invalidate();
    }

    pub fn on_updated(&mut self, id: &ItemId) {
        self.edit.close_item(id);
        self.invalidate();
    }

    pub fn on_deleted(&mut self) {
        self.invalidate();
    }
}
