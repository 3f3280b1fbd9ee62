//! The `Model` capability and model lists.

use serde::Serialize;

/// Marker for domain values that handlers may return as structured JSON.
///
/// Implement it for any `Serialize` struct to make it a valid single-model
/// return type; `Vec<M>` and [`Models<M>`] of such values become JSON arrays.
///
/// ```
/// use fluent_router::{Model, Models};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Tag {
///     id: u32,
///     name: String,
/// }
///
/// impl Model for Tag {}
///
/// let tags: Models<Tag> = vec![Tag { id: 1, name: "rust".into() }].into();
/// assert_eq!(serde_json::to_string(&tags).unwrap(), r#"[{"id":1,"name":"rust"}]"#);
/// ```
pub trait Model: Serialize + Send + 'static {}

/// Ordered sequence of models, encoded as one JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Models<M>(Vec<M>);

impl<M: Model> Models<M> {
    pub fn new(models: Vec<M>) -> Self {
        Self(models)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, M> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<M> {
        self.0
    }
}

impl<M: Model> Default for Models<M> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<M: Model> From<Vec<M>> for Models<M> {
    fn from(models: Vec<M>) -> Self {
        Self(models)
    }
}

impl<M: Model> FromIterator<M> for Models<M> {
    fn from_iter<I: IntoIterator<Item = M>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<M: Model> IntoIterator for Models<M> {
    type Item = M;
    type IntoIter = std::vec::IntoIter<M>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Collect any sequence of models into a [`Models`] list.
pub fn make_models<M, I>(models: I) -> Models<M>
where
    M: Model,
    I: IntoIterator<Item = M>,
{
    models.into_iter().collect()
}
