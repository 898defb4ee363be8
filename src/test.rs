//! Handles of a test run's tree: groups and the tests belonging to them.

use std::{sync::Arc, time::Duration};

use serde_json::Value;

/// Group node of a test tree.
///
/// Nodes are shared behind an [`Arc`] and linked child-to-parent, so handles
/// are cheap to [`Clone`] and stay valid for as long as any descendant does.
#[derive(Clone, Debug)]
pub struct Group(Arc<GroupInner>);

#[derive(Debug)]
struct GroupInner {
    /// Name of this group.
    name: String,

    /// Parent of this group, if it's not the root of its tree.
    parent: Option<Group>,
}

impl Group {
    /// Creates the root [`Group`] of a test tree.
    ///
    /// The root carries a name for the event source's own purposes, but is
    /// never rendered as a part of a test's parent path.
    #[must_use]
    pub fn root(name: impl Into<String>) -> Self {
        Self(Arc::new(GroupInner {
            name: name.into(),
            parent: None,
        }))
    }

    /// Creates a new [`Group`] nested under this one.
    #[must_use]
    pub fn group(&self, name: impl Into<String>) -> Self {
        Self(Arc::new(GroupInner {
            name: name.into(),
            parent: Some(self.clone()),
        }))
    }

    /// Creates a new [`Test`] belonging to this [`Group`].
    #[must_use]
    pub fn test(&self, name: impl Into<String>) -> Test {
        Test {
            name: name.into(),
            parent: Some(self.clone()),
            result: None,
            duration: None,
            data: None,
        }
    }

    /// Returns the name of this [`Group`].
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Indicates whether this [`Group`] is the root of its tree.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.parent.is_none()
    }

    fn parent(&self) -> Option<&Group> {
        self.0.parent.as_ref()
    }
}

/// Handle of a single test.
#[derive(Clone, Debug)]
pub struct Test {
    /// Name of this test.
    name: String,

    /// [`Group`] this test belongs to, if any.
    parent: Option<Group>,

    /// Result note reported by the test, if any.
    result: Option<String>,

    /// Time the test took to execute.
    duration: Option<Duration>,

    /// Context data captured by the test, reported once the run ends.
    data: Option<Value>,
}

impl Test {
    /// Creates a new standalone [`Test`] without a parent [`Group`].
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            result: None,
            duration: None,
            data: None,
        }
    }

    /// Attaches a result note to this [`Test`], rendered in brackets after
    /// its name once it passes.
    #[must_use]
    pub fn with_result(mut self, result: impl ToString) -> Self {
        self.result = Some(result.to_string());
        self
    }

    /// Records the time this [`Test`] took to execute.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Captures context `data`, to be reported once the run ends.
    #[must_use]
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Returns the name of this [`Test`].
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the result note of this [`Test`], if any.
    #[must_use]
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    /// Returns the time this [`Test`] took to execute, if measured.
    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    /// Returns the context data captured by this [`Test`], if any.
    #[must_use]
    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    /// Returns the names of this test's ancestor [`Group`]s, outermost first,
    /// excluding the root of the tree.
    #[must_use]
    pub fn parent_path(&self) -> Vec<&str> {
        let mut names = Vec::new();
        let mut current = self.parent.as_ref();
        while let Some(group) = current {
            if !group.is_root() {
                names.push(group.name());
            }
            current = group.parent();
        }
        names.reverse();
        names
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn path_excludes_root() {
        let root = Group::root("root");
        let parent = root.group("parent");
        let test = parent.test("main test 1");

        assert_eq!(test.parent_path(), vec!["parent"]);
    }

    #[test]
    fn path_is_outermost_first() {
        let root = Group::root("root");
        let level2 = root.group("level 1").group("level 2");
        let test = level2.test("deep tree");

        assert_eq!(test.parent_path(), vec!["level 1", "level 2"]);
    }

    #[test]
    fn standalone_test_has_empty_path() {
        assert_eq!(Test::new("test 1").parent_path(), Vec::<&str>::new());
    }

    #[test]
    fn test_under_root_has_empty_path() {
        let root = Group::root("root");
        assert_eq!(root.test("top").parent_path(), Vec::<&str>::new());
    }

    #[test]
    fn carries_result_duration_and_data() {
        let test = Test::new("test 1")
            .with_result(2)
            .with_duration(Duration::from_millis(15))
            .with_data(json!({ "something": "one" }));

        assert_eq!(test.result(), Some("2"));
        assert_eq!(test.duration(), Some(Duration::from_millis(15)));
        assert_eq!(test.data(), Some(&json!({ "something": "one" })));
    }
}
