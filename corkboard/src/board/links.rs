//! Adjacency index from notes to the connections that touch them.
//!
//! Lets the board cascade a note deletion in O(degree) instead of scanning
//! every connection.

use crate::database::{Connection, ConnectionId, NoteId};
use std::collections::{BTreeSet, HashMap};

#[derive(Debug, Default, Clone)]
pub struct LinkIndex {
    by_note: HashMap<NoteId, BTreeSet<ConnectionId>>,
    endpoints: HashMap<ConnectionId, (NoteId, NoteId)>,
}

impl LinkIndex {
    pub fn build(connections: &[Connection]) -> Self {
        let mut index = Self::default();
        for connection in connections {
            index.insert(connection);
        }
        index
    }

    pub fn insert(&mut self, connection: &Connection) {
        for note_id in [&connection.from, &connection.to] {
            self.by_note
                .entry(note_id.clone())
                .or_default()
                .insert(connection.id.clone());
        }
        self.endpoints.insert(
            connection.id.clone(),
            (connection.from.clone(), connection.to.clone()),
        );
    }

    pub fn remove(&mut self, connection_id: &str) {
        let Some((from, to)) = self.endpoints.remove(connection_id) else {
            return;
        };
        self.unlink(&from, connection_id);
        self.unlink(&to, connection_id);
    }

    /// Drops the note's entry and returns the ids of every connection
    /// that referenced it.
    pub fn detach_note(&mut self, note_id: &str) -> BTreeSet<ConnectionId> {
        let ids = self.by_note.remove(note_id).unwrap_or_default();
        for id in &ids {
            if let Some((from, to)) = self.endpoints.remove(id) {
                let other = if from == note_id { to } else { from };
                self.unlink(&other, id);
            }
        }
        ids
    }

    pub fn degree(&self, note_id: &str) -> usize {
        self.by_note.get(note_id).map_or(0, BTreeSet::len)
    }

    fn unlink(&mut self, note_id: &str, connection_id: &str) {
        if let Some(ids) = self.by_note.get_mut(note_id) {
            ids.remove(connection_id);
            if ids.is_empty() {
                self.by_note.remove(note_id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::ConnectionColor;

    fn link(id: &str, from: &str, to: &str) -> Connection {
        Connection {
            id: id.to_string(),
            from: from.to_string(),
            to: to.to_string(),
            color: ConnectionColor::Blue,
        }
    }

    #[test]
    fn test_degree_counts_both_endpoints() {
        let index = LinkIndex::build(&[link("ab", "a", "b"), link("bc", "b", "c")]);

        assert_eq!(index.degree("a"), 1);
        assert_eq!(index.degree("b"), 2);
        assert_eq!(index.degree("c"), 1);
        assert_eq!(index.degree("z"), 0);
    }

    #[test]
    fn test_detach_note_returns_incident_connections() {
        let mut index = LinkIndex::build(&[
            link("ab", "a", "b"),
            link("bc", "b", "c"),
            link("ac", "a", "c"),
        ]);

        let removed = index.detach_note("b");

        assert_eq!(removed.into_iter().collect::<Vec<_>>(), vec!["ab", "bc"]);
        assert_eq!(index.degree("a"), 1);
        assert_eq!(index.degree("c"), 1);
    }

    #[test]
    fn test_remove_single_connection() {
        let ab = link("ab", "a", "b");
        let mut index = LinkIndex::build(std::slice::from_ref(&ab));

        index.remove(&ab.id);

        assert_eq!(index.degree("a"), 0);
        assert_eq!(index.degree("b"), 0);
    }
}
