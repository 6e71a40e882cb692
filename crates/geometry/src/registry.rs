//! Tagged dispatch: classify shapes by a kind name looked up in a table.
//!
//! Useful when shapes arrive as loosely typed records (e.g. deserialized from a
//! level file) that only carry a kind tag. The classifier is resolved once,
//! when the shape is wrapped in [`Registered`], so an unknown kind is reported
//! before the shape ever reaches a tree.

use crate::{GeometryError, Indexable, NodeGeometry, Quadrants};
use std::collections::HashMap;
use std::fmt;
use std::ops::Deref;

/// Classification function for one shape kind.
pub type Classifier<T> = fn(&T, &NodeGeometry) -> Quadrants;

/// A shape that names its own kind.
pub trait Tagged {
    fn shape_kind(&self) -> &str;
}

/// Table of classifiers keyed by shape kind.
pub struct ShapeRegistry<T> {
    classifiers: HashMap<String, Classifier<T>>,
    /// Used for kinds without an entry. Unset by default.
    fallback: Option<Classifier<T>>,
}

impl<T> Default for ShapeRegistry<T> {
    fn default() -> Self {
        Self {
            classifiers: HashMap::new(),
            fallback: None,
        }
    }
}

impl<T> fmt::Debug for ShapeRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<_> = self.classifiers.keys().collect();
        kinds.sort();
        f.debug_struct("ShapeRegistry")
            .field("kinds", &kinds)
            .field("fallback", &self.fallback.is_some())
            .finish()
    }
}

impl<T: Tagged> ShapeRegistry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a classifier, returning the one it replaces.
    pub fn register(
        &mut self,
        kind: impl Into<String>,
        classifier: Classifier<T>,
    ) -> Option<Classifier<T>> {
        self.classifiers.insert(kind.into(), classifier)
    }

    /// Classify unknown kinds with `classifier` instead of failing.
    ///
    /// Passing a rectangle classifier reproduces the old behaviour where any
    /// untagged object was treated as a rectangle.
    pub fn with_fallback(mut self, classifier: Classifier<T>) -> Self {
        self.fallback = Some(classifier);
        self
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.classifiers.contains_key(kind)
    }

    /// Resolve the classifier for `shape`.
    pub fn classifier_for(&self, shape: &T) -> Result<Classifier<T>, GeometryError> {
        let kind = shape.shape_kind();
        self.classifiers
            .get(kind)
            .copied()
            .or(self.fallback)
            .ok_or_else(|| GeometryError::NoClassifier {
                kind: kind.to_string(),
            })
    }

    pub fn classify(&self, shape: &T, node: &NodeGeometry) -> Result<Quadrants, GeometryError> {
        let classifier = self.classifier_for(shape)?;
        Ok(classifier(shape, node))
    }
}

/// A tagged shape bound to its resolved classifier.
#[derive(Clone)]
pub struct Registered<T> {
    shape: T,
    classifier: Classifier<T>,
}

impl<T: Tagged> Registered<T> {
    /// Bind `shape` to the classifier registered for its kind.
    pub fn new(shape: T, registry: &ShapeRegistry<T>) -> Result<Self, GeometryError> {
        let classifier = registry.classifier_for(&shape)?;
        Ok(Self { shape, classifier })
    }

    pub fn into_inner(self) -> T {
        self.shape
    }
}

impl<T> Deref for Registered<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.shape
    }
}

impl<T> Indexable for Registered<T> {
    fn qt_index(&self, node: &NodeGeometry) -> Quadrants {
        (self.classifier)(&self.shape, node)
    }
}

impl<T: fmt::Debug> fmt::Debug for Registered<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Registered").field(&self.shape).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{classify, Point};

    /// A record that only knows its tag and raw numbers.
    #[derive(Debug, Clone)]
    struct Record {
        kind: String,
        values: [f64; 4],
    }

    impl Record {
        fn new(kind: &str, values: [f64; 4]) -> Self {
            Self { kind: kind.to_string(), values }
        }
    }

    impl Tagged for Record {
        fn shape_kind(&self) -> &str {
            &self.kind
        }
    }

    fn as_rect(r: &Record, node: &NodeGeometry) -> Quadrants {
        let [x, y, w, h] = r.values;
        classify::rectangle(&NodeGeometry::new(x, y, w, h), node)
    }

    fn as_circle(r: &Record, node: &NodeGeometry) -> Quadrants {
        let [x, y, radius, _] = r.values;
        classify::circle(Point::new(x, y), radius, node)
    }

    const NODE: NodeGeometry = NodeGeometry::new(0.0, 0.0, 100.0, 100.0);

    fn registry() -> ShapeRegistry<Record> {
        let mut registry = ShapeRegistry::new();
        registry.register("rect", as_rect);
        registry.register("circle", as_circle);
        registry
    }

    #[test]
    fn test_dispatch_by_kind() {
        let registry = registry();

        let rect = Record::new("rect", [75.0, 25.0, 10.0, 10.0]);
        let circle = Record::new("circle", [50.0, 50.0, 10.0, 0.0]);

        assert_eq!(registry.classify(&rect, &NODE).unwrap().to_vec(), [0]);
        assert_eq!(registry.classify(&circle, &NODE).unwrap().to_vec(), [0, 1, 2, 3]);
    }

    #[test]
    fn test_unknown_kind_fails_fast() {
        let registry = registry();
        let hex = Record::new("hexagon", [0.0; 4]);

        let err = Registered::new(hex, &registry).unwrap_err();
        assert!(matches!(err, GeometryError::NoClassifier { ref kind } if kind == "hexagon"));
        assert_eq!(err.to_string(), "No classifier available for shape kind `hexagon`");
    }

    #[test]
    fn test_rectangle_fallback() {
        let registry = registry().with_fallback(as_rect);
        let anonymous = Record::new("", [25.0, 75.0, 10.0, 10.0]);

        let shape = Registered::new(anonymous, &registry).unwrap();
        assert_eq!(shape.qt_index(&NODE).to_vec(), [2]);
        assert_eq!(shape.kind, "");
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = registry();
        assert!(registry.contains("rect"));
        assert!(registry.register("rect", as_circle).is_some());
        assert!(registry.register("line", as_rect).is_none());
    }
}
