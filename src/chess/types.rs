use indexmap::IndexMap;

/// Tag name to tag value as raw bytes, kept in first-insertion order.
///
/// Values are not required to be UTF-8; Latin-1 exports round-trip unchanged.
pub type Tags = IndexMap<Vec<u8>, Vec<u8>>;

/// One game as read from a PGN source: its tag pairs and the raw movetext.
///
/// `movetext` holds every movetext line of the game in source order, each
/// followed by a single space. Moves are never parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameRecord {
    pub tags: Tags,
    pub movetext: Vec<u8>,
}

impl GameRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tag(&self, name: &str) -> Option<&[u8]> {
        self.tags.get(name.as_bytes()).map(Vec::as_slice)
    }

    /// Stores `value` under `name`, replacing any earlier value.
    pub fn set_tag(&mut self, name: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) {
        self.tags.insert(name.into(), value.into());
    }

    pub fn remove_tag(&mut self, name: &str) -> Option<Vec<u8>> {
        self.tags.shift_remove(name.as_bytes())
    }

    pub fn push_movetext_line(&mut self, line: &[u8]) {
        self.movetext.extend_from_slice(line);
        self.movetext.push(b' ');
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty() && self.movetext.is_empty()
    }
}
