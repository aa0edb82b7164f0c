use ahash::{HashSet, HashSetExt};

/// A set of tag or attribute names matched without regard to case.
///
/// Names are lower cased once when the set is built, so a lookup only has
/// to lower case the key.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct NameSet {
    names: HashSet<String>,
}

impl NameSet {
    pub(crate) fn new<S: AsRef<str>>(names: &[S]) -> Self {
        let mut set = HashSet::with_capacity(names.len());
        for name in names {
            set.insert(name.as_ref().to_lowercase());
        }
        Self { names: set }
    }

    pub(crate) fn contains(&self, name: &str) -> bool {
        // most lookups come in lower case already
        if self.names.contains(name) {
            return true;
        }
        self.names.contains(&name.to_lowercase())
    }

    pub(crate) fn len(&self) -> usize {
        self.names.len()
    }
}
