//! Element identifiers

use std::fmt;
use std::sync::Arc;

/// Identifier of an element on the rendering surface
///
/// Cheap to clone; the string is shared.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(Arc<str>);

impl ElementId {
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(Arc::from(id.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Derive a child id, e.g. `work` + `card-1` -> `work/card-1`
    pub fn child(&self, suffix: impl fmt::Display) -> Self {
        Self::new(format!("{}/{}", self.0, suffix))
    }
}

impl fmt::Debug for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ElementId {
    fn from(id: String) -> Self {
        Self(Arc::from(id))
    }
}

impl From<&ElementId> for ElementId {
    fn from(id: &ElementId) -> Self {
        id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_ids() {
        let section = ElementId::new("work");
        assert_eq!(section.child("card-1").as_str(), "work/card-1");
        assert_eq!(format!("{:?}", section), "#work");
    }
}
