//! Password diary - in-memory account to password mapping.

/// One saved entry. The account label is the unique key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiaryEntry {
    pub account: String,
    pub password: String,
}

/// Process-lifetime mapping from account label to password text.
///
/// Entries iterate in the order each label was first saved; overwriting an
/// existing label keeps its position. No persistence, no eviction, no size
/// bound. Constructed once per session and passed by reference to whichever
/// handler needs it.
///
/// Passwords are held and listed in plain text, matching the behavior this
/// tool reproduces.
#[derive(Debug, Default)]
pub struct PasswordDiary {
    entries: Vec<DiaryEntry>,
}

impl PasswordDiary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites the entry for `account`.
    ///
    /// Empty labels are permitted; duplicates overwrite silently and never
    /// move the entry.
    pub fn save(&mut self, account: &str, password: &str) {
        match self.entries.iter_mut().find(|e| e.account == account) {
            Some(entry) => entry.password = password.to_string(),
            None => self.entries.push(DiaryEntry {
                account: account.to_string(),
                password: password.to_string(),
            }),
        }
    }

    /// All entries, in first-insertion order.
    pub fn list_all(&self) -> &[DiaryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
