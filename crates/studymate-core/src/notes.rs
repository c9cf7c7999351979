//! Note operations.
//!
//! The editor models the viewing/editing workflow explicitly: an optional
//! selected note id plus a separate draft form, instead of one slot doing
//! double duty. Saving with a blank title or content is a silent no-op;
//! the notes collection is left untouched.

use chrono::NaiveDate;

use crate::store::{now_ms, Note, NoteId, StudyStore};

/// Form state for the note being written or edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub category: String,
}

impl NoteDraft {
    fn is_blank(&self) -> bool {
        self.title.trim().is_empty() || self.content.trim().is_empty()
    }
}

/// Editing state for the notes view: which note is selected (if any) and
/// the draft being composed.
#[derive(Debug, Clone, Default)]
pub struct NoteEditor {
    selected: Option<NoteId>,
    draft: NoteDraft,
}

impl NoteEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<NoteId> {
        self.selected
    }

    pub fn draft(&self) -> &NoteDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut NoteDraft {
        &mut self.draft
    }

    /// Start composing a fresh note: empty draft, nothing selected.
    pub fn begin_new(&mut self) {
        self.selected = None;
        self.draft = NoteDraft::default();
    }

    /// Start editing an existing note: its fields become the draft.
    pub fn begin_edit(&mut self, note: &Note) {
        self.selected = Some(note.id);
        self.draft = NoteDraft {
            title: note.title.clone(),
            content: note.content.clone(),
            category: note.category.clone(),
        };
    }

    /// Abandon the draft without touching the store.
    pub fn cancel(&mut self) {
        self.selected = None;
        self.draft = NoteDraft::default();
    }

    /// Commit the draft. Blank title or content leaves the collection
    /// unchanged and the editor open.
    ///
    /// With a selection the matching note is updated in place and its date
    /// refreshed to `today`; otherwise a new note is prepended (newest
    /// first). Returns the id of the saved note.
    pub fn save(&mut self, store: &mut StudyStore, today: NaiveDate) -> Option<NoteId> {
        if self.draft.is_blank() {
            return None;
        }

        let saved_id = match self.selected {
            Some(id) => {
                let notes = store
                    .notes()
                    .iter()
                    .map(|note| {
                        if note.id == id {
                            Note {
                                id,
                                title: self.draft.title.clone(),
                                content: self.draft.content.clone(),
                                category: self.draft.category.clone(),
                                date: today,
                            }
                        } else {
                            note.clone()
                        }
                    })
                    .collect();
                store.replace_notes(notes);
                id
            }
            None => {
                let id = next_id(store.notes().iter().map(|n| n.id));
                let mut notes = Vec::with_capacity(store.notes().len() + 1);
                notes.push(Note {
                    id,
                    title: self.draft.title.clone(),
                    content: self.draft.content.clone(),
                    category: self.draft.category.clone(),
                    date: today,
                });
                notes.extend(store.notes().iter().cloned());
                store.replace_notes(notes);
                id
            }
        };

        self.selected = None;
        self.draft = NoteDraft::default();
        Some(saved_id)
    }

    /// Remove the note with the given id. Clears the selection when it
    /// pointed at the deleted note.
    pub fn delete(&mut self, store: &mut StudyStore, id: NoteId) {
        let notes = store
            .notes()
            .iter()
            .filter(|note| note.id != id)
            .cloned()
            .collect();
        store.replace_notes(notes);
        if self.selected == Some(id) {
            self.selected = None;
            self.draft = NoteDraft::default();
        }
    }
}

/// Case-insensitive substring search over title, content and category.
pub fn search<'a>(notes: &'a [Note], term: &str) -> Vec<&'a Note> {
    let term = term.to_lowercase();
    notes
        .iter()
        .filter(|note| {
            note.title.to_lowercase().contains(&term)
                || note.content.to_lowercase().contains(&term)
                || note.category.to_lowercase().contains(&term)
        })
        .collect()
}

/// Distinct categories in first-seen order.
pub fn categories(notes: &[Note]) -> Vec<&str> {
    let mut seen = Vec::new();
    for note in notes {
        let category = note.category.as_str();
        if !seen.contains(&category) {
            seen.push(category);
        }
    }
    seen
}

/// Id for a newly created record: the creation timestamp, bumped past the
/// current maximum so ids stay unique and monotonic even when two records
/// land in the same millisecond.
pub(crate) fn next_id(existing: impl Iterator<Item = u64>) -> u64 {
    let max = existing.max().unwrap_or(0);
    now_ms().max(max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 20).unwrap()
    }

    #[test]
    fn blank_title_or_content_is_a_no_op() {
        let mut store = StudyStore::seeded();
        let before = store.notes().to_vec();
        let mut editor = NoteEditor::new();

        editor.begin_new();
        editor.draft_mut().content = "body".into();
        assert!(editor.save(&mut store, today()).is_none());
        assert_eq!(store.notes(), before.as_slice());

        editor.draft_mut().title = "   ".into();
        assert!(editor.save(&mut store, today()).is_none());
        assert_eq!(store.notes(), before.as_slice());
    }

    #[test]
    fn new_notes_are_prepended() {
        let mut store = StudyStore::seeded();
        let mut editor = NoteEditor::new();
        editor.begin_new();
        editor.draft_mut().title = "Borrow checker".into();
        editor.draft_mut().content = "aliasing xor mutation".into();
        editor.draft_mut().category = "Programming".into();

        let id = editor.save(&mut store, today()).unwrap();
        assert_eq!(store.notes().len(), 3);
        assert_eq!(store.notes()[0].id, id);
        assert_eq!(store.notes()[0].title, "Borrow checker");
        assert_eq!(store.notes()[0].date, today());
        // Editor is reset after a successful save.
        assert!(editor.selected().is_none());
        assert!(editor.draft().title.is_empty());
    }

    #[test]
    fn editing_updates_in_place_and_refreshes_date() {
        let mut store = StudyStore::seeded();
        let mut editor = NoteEditor::new();
        let target = store.notes()[1].clone();

        editor.begin_edit(&target);
        editor.draft_mut().content = "Completing the square".into();
        editor.save(&mut store, today()).unwrap();

        assert_eq!(store.notes().len(), 2);
        let updated = &store.notes()[1];
        assert_eq!(updated.id, target.id);
        assert_eq!(updated.title, "Math Formulas");
        assert_eq!(updated.content, "Completing the square");
        assert_eq!(updated.date, today());
        // Position is preserved: updates do not reorder.
        assert_eq!(store.notes()[0].title, "React Hooks");
    }

    #[test]
    fn delete_removes_by_id_and_clears_matching_selection() {
        let mut store = StudyStore::seeded();
        let mut editor = NoteEditor::new();
        let target = store.notes()[0].clone();
        editor.begin_edit(&target);

        editor.delete(&mut store, target.id);
        assert_eq!(store.notes().len(), 1);
        assert!(store.notes().iter().all(|n| n.id != target.id));
        assert!(editor.selected().is_none());
    }

    #[test]
    fn delete_of_unselected_note_keeps_selection() {
        let mut store = StudyStore::seeded();
        let mut editor = NoteEditor::new();
        let kept = store.notes()[0].clone();
        editor.begin_edit(&kept);

        editor.delete(&mut store, 2);
        assert_eq!(editor.selected(), Some(kept.id));
    }

    #[test]
    fn search_matches_title_content_and_category() {
        let store = StudyStore::seeded();
        assert_eq!(search(store.notes(), "react").len(), 1);
        assert_eq!(search(store.notes(), "QUADRATIC").len(), 1);
        assert_eq!(search(store.notes(), "math").len(), 1);
        assert_eq!(search(store.notes(), "").len(), 2);
        assert!(search(store.notes(), "biology").is_empty());
    }

    #[test]
    fn categories_are_unique_in_first_seen_order() {
        let mut store = StudyStore::seeded();
        let mut notes = store.notes().to_vec();
        let mut extra = notes[0].clone();
        extra.id = 99;
        extra.title = "Iterators".into();
        notes.push(extra);
        store.replace_notes(notes);

        assert_eq!(
            categories(store.notes()),
            vec!["Programming", "Mathematics"]
        );
    }

    #[test]
    fn next_id_is_strictly_above_existing_max() {
        let huge = u64::MAX - 1;
        assert_eq!(next_id([huge].into_iter()), huge + 1);
        assert!(next_id(std::iter::empty()) > 0);
    }
}
