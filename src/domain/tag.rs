//! Tag type and tag-set operations for note records.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Marker that turns a tag entry into a removal.
pub const REMOVE_MARKER: char = '.';

/// A short label attached to a note record.
///
/// Tags are flat, case-sensitive strings. They are trimmed on construction.
///
/// # Validation Rules
/// - Non-empty after trimming
/// - No whitespace and no commas (commas separate tags on the command line)
/// - Must not start with `.` (reserved as the removal marker)
///
/// These rules are checked by [`Tag::new`]. Deserialized tags skip them.
///
/// # Examples
///
/// ```
/// use torgo::domain::Tag;
///
/// let tag = Tag::new(" rust ").unwrap();
/// assert_eq!(tag.as_str(), "rust");
/// assert!(Tag::new(".rust").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Tag(String);

/// Error returned when parsing an invalid tag.
#[derive(Debug, Clone)]
pub struct ParseTagError(String);

impl fmt::Display for ParseTagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseTagError {}

impl Tag {
    /// Creates a new Tag from a string.
    ///
    /// # Errors
    ///
    /// Returns `ParseTagError` if the trimmed tag is empty, contains whitespace
    /// or commas, or starts with the removal marker.
    pub fn new(s: &str) -> Result<Self, ParseTagError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ParseTagError("tag cannot be empty".to_string()));
        }

        if trimmed.starts_with(REMOVE_MARKER) {
            return Err(ParseTagError(format!(
                "invalid tag '{}': tags cannot start with '{}'",
                trimmed, REMOVE_MARKER
            )));
        }

        if trimmed.chars().any(|c| c.is_whitespace() || c == ',') {
            return Err(ParseTagError(format!(
                "invalid tag '{}': tags cannot contain whitespace or commas",
                trimmed
            )));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Returns the tag value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag(\"{}\")", self.0)
    }
}

impl FromStr for Tag {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

/// Stored tags are taken as written. Validation applies to command-line input
/// only, so a registry edited by hand still loads.
impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self)
    }
}

/// Insertion-ordered set of tags.
///
/// Membership is set-like (no duplicates) while iteration keeps the order in
/// which tags were first added, so listings stay stable between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Tag>", into = "Vec<Tag>")]
pub struct TagSet(Vec<Tag>);

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a tag. Returns false if it was already present.
    pub fn insert(&mut self, tag: Tag) -> bool {
        if self.contains(&tag) {
            return false;
        }
        self.0.push(tag);
        true
    }

    /// Removes a tag. Returns false if it was not present.
    pub fn remove(&mut self, tag: &Tag) -> bool {
        let before = self.0.len();
        self.0.retain(|t| t != tag);
        self.0.len() != before
    }

    pub fn contains(&self, tag: &Tag) -> bool {
        self.0.contains(tag)
    }

    /// Returns true if any of `tags` is in this set.
    pub fn intersects(&self, tags: &[Tag]) -> bool {
        tags.iter().any(|t| self.contains(t))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.0.iter()
    }

    /// Applies a sequence of edits in order.
    pub fn apply(&mut self, edits: &[TagEdit]) {
        for edit in edits {
            match edit {
                TagEdit::Add(tag) => {
                    self.insert(tag.clone());
                }
                TagEdit::Remove(tag) => {
                    self.remove(tag);
                }
            }
        }
    }
}

impl From<Vec<Tag>> for TagSet {
    fn from(tags: Vec<Tag>) -> Self {
        let mut set = Self::new();
        for tag in tags {
            set.insert(tag);
        }
        set
    }
}

impl From<TagSet> for Vec<Tag> {
    fn from(set: TagSet) -> Self {
        set.0
    }
}

impl<'a> IntoIterator for &'a TagSet {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A single change requested by the `tag` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagEdit {
    Add(Tag),
    Remove(Tag),
}

/// Parses a comma-separated tag parameter such as `rust,.draft,cli`.
///
/// Entries prefixed with `.` become removals. Empty entries are skipped.
///
/// # Errors
///
/// Returns `ParseTagError` for the first entry that is not a valid tag.
pub fn parse_tag_edits(param: &str) -> Result<Vec<TagEdit>, ParseTagError> {
    let mut edits = Vec::new();
    for entry in param.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        match entry.strip_prefix(REMOVE_MARKER) {
            Some(name) => edits.push(TagEdit::Remove(Tag::new(name)?)),
            None => edits.push(TagEdit::Add(Tag::new(entry)?)),
        }
    }
    Ok(edits)
}

/// Parses a comma-separated list of tags (no removal markers allowed).
///
/// # Errors
///
/// Returns `ParseTagError` for the first invalid entry.
pub fn parse_tag_list(param: &str) -> Result<Vec<Tag>, ParseTagError> {
    let mut tags: Vec<Tag> = Vec::new();
    for entry in param.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let tag = Tag::new(entry)?;
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    Ok(tags)
}
