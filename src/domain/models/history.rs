use super::ChatEntry;

/// Session-local conversation log, newest entry first.
///
/// The only mutations are [`History::prepend`] and [`History::clear`]; entries
/// are never edited in place.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<ChatEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `entry` at the front. If its id would collide with (or predate)
    /// the current newest entry, it is moved to `newest + 1`.
    pub fn prepend(&mut self, entry: ChatEntry) -> &ChatEntry {
        let entry = match self.entries.first() {
            Some(newest) if entry.id() <= newest.id() => {
                let id = newest.id() + 1;
                entry.with_id(id)
            }
            _ => entry,
        };
        self.entries.insert(0, entry);
        &self.entries[0]
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChatEntry> {
        self.entries.iter()
    }

    pub fn newest(&self) -> Option<&ChatEntry> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Header label, e.g. `1 conversation` or `3 conversations`.
    pub fn count_label(&self) -> String {
        let noun = if self.len() == 1 {
            "conversation"
        } else {
            "conversations"
        };
        format!("{} {}", self.len(), noun)
    }
}
