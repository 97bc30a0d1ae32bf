//! Ordered member storage with duplicate detection.

use std::collections::HashMap;

/// A named element that can be stored in a [`MemberRegistry`].
pub trait Member {
    /// The member name, unique within its registry.
    fn name(&self) -> &str;

    /// Domain equality against another member of the same kind.
    fn same_as(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

/// Outcome of comparing a probed key against the search target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    /// The key matches the target.
    Found,
    /// The target sorts before the key.
    Left,
    /// The target sorts after the key.
    Right,
}

/// Binary search over sorted keys driven by a three-way probe.
///
/// Returns the index of the key for which `probe` reported [`Probe::Found`].
pub fn probe_search<K>(keys: &[K], mut probe: impl FnMut(&K) -> Probe) -> Option<usize> {
    let (mut low, mut high) = (0, keys.len());
    while low < high {
        let mid = low + (high - low) / 2;
        match probe(&keys[mid]) {
            Probe::Found => return Some(mid),
            Probe::Left => high = mid,
            Probe::Right => low = mid + 1,
        }
    }
    None
}

/// Members kept in insertion order, rejecting duplicates.
///
/// Duplicate detection sorts the member names and binary-searches them with
/// [`Member::same_as`] as the match test.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberRegistry<T> {
    members: Vec<T>,
}

impl<T> Default for MemberRegistry<T> {
    fn default() -> Self {
        Self {
            members: Vec::new(),
        }
    }
}

impl<T: Member> MemberRegistry<T> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Find the registered member equal to `target`.
    pub fn find(&self, target: &T) -> Option<&T> {
        let by_name: HashMap<&str, &T> = self.members.iter().map(|m| (m.name(), m)).collect();
        let mut keys: Vec<&str> = by_name.keys().copied().collect();
        keys.sort_unstable();

        let index = probe_search(&keys, |key| match by_name.get(key) {
            Some(candidate) if candidate.same_as(target) => Probe::Found,
            _ if *key > target.name() => Probe::Left,
            _ => Probe::Right,
        })?;
        by_name.get(keys[index]).copied()
    }

    /// Check whether a member equal to `target` is registered.
    pub fn contains(&self, target: &T) -> bool {
        self.find(target).is_some()
    }

    /// Append a member, handing it back if it is a duplicate.
    pub fn push(&mut self, member: T) -> Result<(), T> {
        if self.contains(&member) {
            return Err(member);
        }
        self.members.push(member);
        Ok(())
    }

    /// Insert a member at the front, handing it back if it is a duplicate.
    pub fn push_front(&mut self, member: T) -> Result<(), T> {
        if self.contains(&member) {
            return Err(member);
        }
        self.members.insert(0, member);
        Ok(())
    }

    /// Look up a member by name.
    pub fn get(&self, name: &str) -> Option<&T> {
        self.members.iter().find(|m| m.name() == name)
    }

    /// Move the member called `name` to the front, keeping the relative
    /// order of the rest.
    pub(crate) fn move_to_front(&mut self, name: &str) -> Option<&mut T> {
        let index = self.members.iter().position(|m| m.name() == name)?;
        self.members[..=index].rotate_right(1);
        self.members.first_mut()
    }
}

impl<T> MemberRegistry<T> {
    /// Iterate in registry order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.members.iter()
    }

    /// Get the members as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.members
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Transform every member, keeping order.
    pub(crate) fn map<U>(&self, f: impl FnMut(&T) -> U) -> MemberRegistry<U> {
        MemberRegistry {
            members: self.members.iter().map(f).collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a MemberRegistry<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Named(&'static str);

    impl Member for Named {
        fn name(&self) -> &str {
            self.0
        }
    }

    /// Equality that ignores ASCII case, to exercise `same_as`.
    #[derive(Debug, Clone, PartialEq)]
    struct CaseInsensitive(&'static str);

    impl Member for CaseInsensitive {
        fn name(&self) -> &str {
            self.0
        }

        fn same_as(&self, other: &Self) -> bool {
            self.0.eq_ignore_ascii_case(other.0)
        }
    }

    #[test]
    fn test_probe_search() {
        let keys = [1, 3, 5, 7, 9];
        let find = |target: i32| {
            probe_search(&keys, |k| match k.cmp(&target) {
                std::cmp::Ordering::Equal => Probe::Found,
                std::cmp::Ordering::Greater => Probe::Left,
                std::cmp::Ordering::Less => Probe::Right,
            })
        };
        assert_eq!(find(1), Some(0));
        assert_eq!(find(7), Some(3));
        assert_eq!(find(9), Some(4));
        assert_eq!(find(4), None);
        assert_eq!(probe_search(&[] as &[i32], |_| Probe::Found), None);
    }

    #[test]
    fn test_push_keeps_insertion_order() {
        let mut registry = MemberRegistry::new();
        registry.push(Named("zeta")).unwrap();
        registry.push(Named("alpha")).unwrap();
        registry.push(Named("mid")).unwrap();

        let names: Vec<_> = registry.iter().map(|m| m.0).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_push_rejects_duplicate() {
        let mut registry = MemberRegistry::new();
        for name in ["d", "b", "f", "a", "c", "e"] {
            registry.push(Named(name)).unwrap();
        }
        for name in ["a", "b", "c", "d", "e", "f"] {
            assert_eq!(registry.push(Named(name)), Err(Named(name)));
        }
        assert_eq!(registry.len(), 6);
    }

    #[test]
    fn test_push_front() {
        let mut registry = MemberRegistry::new();
        registry.push(Named("foo")).unwrap();
        registry.push(Named("bar")).unwrap();
        registry.push_front(Named("__construct")).unwrap();
        assert_eq!(registry.as_slice()[0], Named("__construct"));
        assert!(registry.push_front(Named("foo")).is_err());
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_move_to_front() {
        let mut registry = MemberRegistry::new();
        for name in ["a", "b", "c", "d"] {
            registry.push(Named(name)).unwrap();
        }
        assert_eq!(registry.move_to_front("c"), Some(&mut Named("c")));
        let names: Vec<_> = registry.iter().map(|m| m.0).collect();
        assert_eq!(names, vec!["c", "a", "b", "d"]);
        assert!(registry.move_to_front("missing").is_none());
    }

    #[test]
    fn test_custom_equality_is_consulted() {
        let mut registry = MemberRegistry::new();
        registry.push(CaseInsensitive("save")).unwrap();
        assert!(registry.contains(&CaseInsensitive("save")));
        assert!(registry.push(CaseInsensitive("load")).is_ok());
        assert!(registry.push(CaseInsensitive("load")).is_err());
    }

    #[test]
    fn test_get_by_name() {
        let mut registry = MemberRegistry::new();
        registry.push(Named("a")).unwrap();
        assert_eq!(registry.get("a"), Some(&Named("a")));
        assert_eq!(registry.get("b"), None);
    }
}
