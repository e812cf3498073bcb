//! Value-name tables for Non-Continuous features.

/// One entry of a value-name table.
///
/// The terminating sentinel entry has no name; every other entry maps a
/// single SL byte to a display string.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValueNameEntry {
    /// The SL byte value.
    pub value: u8,
    /// Display name, absent only on the sentinel.
    pub name: Option<String>,
}

/// An ordered table mapping Non-Continuous feature values to display
/// names, terminated by a sentinel entry whose name is absent.
///
/// Clones preserve entry order and the terminator.
///
/// # Examples
///
/// ```
/// use vcp_features::ValueNameTable;
///
/// let table = ValueNameTable::from_pairs(&[
///     (0x01, "DVI-1"),
///     (0x03, "DisplayPort-1"),
/// ]);
/// assert_eq!(table.lookup(0x03), Some("DisplayPort-1"));
/// assert_eq!(table.lookup(0x02), None);
/// // Two named entries plus the sentinel.
/// assert_eq!(table.entry_count(), 3);
/// assert!(table.is_terminated());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValueNameTable {
    entries: Vec<ValueNameEntry>,
}

impl ValueNameTable {
    /// Creates an empty, unterminated table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a terminated table from static (value, name) pairs,
    /// preserving their order.
    pub fn from_pairs(pairs: &[(u8, &str)]) -> Self {
        let mut table = Self {
            entries: Vec::with_capacity(pairs.len() + 1),
        };
        for (value, name) in pairs {
            table.push(*value, (*name).to_string());
        }
        table.terminate();
        table
    }

    /// Appends a named entry. Must be called before [`terminate`].
    ///
    /// [`terminate`]: ValueNameTable::terminate
    pub fn push(&mut self, value: u8, name: String) {
        debug_assert!(!self.is_terminated());
        self.entries.push(ValueNameEntry {
            value,
            name: Some(name),
        });
    }

    /// Appends the sentinel terminator if not already present.
    pub fn terminate(&mut self) {
        if !self.is_terminated() {
            self.entries.push(ValueNameEntry {
                value: 0x00,
                name: None,
            });
        }
    }

    /// True once the sentinel terminator has been appended.
    pub fn is_terminated(&self) -> bool {
        matches!(self.entries.last(), Some(entry) if entry.name.is_none())
    }

    /// All entries in order, sentinel included.
    pub fn entries(&self) -> &[ValueNameEntry] {
        &self.entries
    }

    /// Total entry count, sentinel included.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// True if the table holds no named entries.
    pub fn is_empty(&self) -> bool {
        !self.entries.iter().any(|e| e.name.is_some())
    }

    /// Looks up the display name for an SL byte.
    pub fn lookup(&self, value: u8) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.name.is_some() && e.value == value)
            .and_then(|e| e.name.as_deref())
    }

    /// Iterates the named entries in order, skipping the sentinel.
    pub fn named_entries(&self) -> impl Iterator<Item = (u8, &str)> {
        self.entries
            .iter()
            .filter_map(|e| e.name.as_deref().map(|name| (e.value, name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs_appends_sentinel() {
        let table = ValueNameTable::from_pairs(&[(0x01, "On"), (0x02, "Off")]);
        assert_eq!(table.entry_count(), 3);
        assert!(table.is_terminated());
        assert_eq!(table.entries()[2].name, None);
    }

    #[test]
    fn test_order_preserved() {
        let table = ValueNameTable::from_pairs(&[(0x05, "e"), (0x01, "a"), (0x03, "c")]);
        let order: Vec<u8> = table.named_entries().map(|(v, _)| v).collect();
        assert_eq!(order, vec![0x05, 0x01, 0x03]);
    }

    #[test]
    fn test_clone_preserves_terminator() {
        let table = ValueNameTable::from_pairs(&[(0x01, "On")]);
        let copy = table.clone();
        assert_eq!(copy, table);
        assert!(copy.is_terminated());
        assert_eq!(copy.entry_count(), 2);
    }

    #[test]
    fn test_incremental_build() {
        let mut table = ValueNameTable::new();
        assert!(table.is_empty());
        table.push(0x01, "Mute".to_string());
        table.push(0x02, "Unmute".to_string());
        assert!(!table.is_terminated());
        table.terminate();
        table.terminate(); // idempotent
        assert_eq!(table.entry_count(), 3);
        assert_eq!(table.lookup(0x01), Some("Mute"));
    }

    #[test]
    fn test_lookup_ignores_sentinel_value() {
        // The sentinel reuses byte 0x00; lookup must not match it.
        let table = ValueNameTable::from_pairs(&[(0x01, "On")]);
        assert_eq!(table.lookup(0x00), None);
    }

    #[test]
    fn test_empty_table_is_empty_even_when_terminated() {
        let mut table = ValueNameTable::new();
        table.terminate();
        assert!(table.is_empty());
        assert_eq!(table.entry_count(), 1);
    }
}
