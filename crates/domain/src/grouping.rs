// crates/domain/src/grouping.rs
use indexmap::IndexMap;

use crate::model::{FilePath, MatchStrategy};

/// Token used to cluster paths; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GroupKey {
    Directory(String),
    Name(String),
}

impl GroupKey {
    /// Derives the key `strategy` groups `path` under.
    pub fn of(strategy: MatchStrategy, path: &FilePath) -> Self {
        match strategy {
            MatchStrategy::ParentDirectory => Self::Directory(path.parent_dir().to_string()),
            MatchStrategy::NameWithoutExtension => Self::Name(path.name_without_extension().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Directory(dir) => dir,
            Self::Name(name) => name,
        }
    }
}

/// Paths clustered by [`GroupKey`], keeping keys and members in encounter order.
///
/// Duplicate paths stay separate members.
#[derive(Debug)]
pub struct GroupedPaths<'a> {
    groups: IndexMap<GroupKey, Vec<&'a FilePath>>,
}

impl<'a> GroupedPaths<'a> {
    pub fn build(strategy: MatchStrategy, paths: &'a [FilePath]) -> Self {
        let mut groups: IndexMap<GroupKey, Vec<&'a FilePath>> = IndexMap::new();
        for path in paths {
            groups.entry(GroupKey::of(strategy, path)).or_default().push(path);
        }
        Self { groups }
    }

    pub fn get(&self, key: &GroupKey) -> Option<&[&'a FilePath]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    pub fn contains(&self, key: &GroupKey) -> bool {
        self.groups.contains_key(key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&GroupKey, &[&'a FilePath])> {
        self.groups.iter().map(|(key, members)| (key, members.as_slice()))
    }
}
