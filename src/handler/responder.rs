//! Return shapes a handler may have, and how each is turned into a result.
//!
//! # Design Decisions
//! - The set of return shapes is closed: [`Responder`] is sealed
//! - Each shape carries its [`ResponseKind`] as an associated constant, so the
//!   encoding of a route is known when it is registered
//! - Models are encoded to JSON bytes directly, keeping declared field order

use std::borrow::Cow;
use std::fmt;

use axum::body::Bytes;
use thiserror::Error;

use crate::handler::model::{Model, Models};

/// Response encoding selected for a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseKind {
    /// `text/plain` body holding the returned string.
    PlainText,
    /// JSON object for one model.
    SingleModel,
    /// JSON array for a list of models.
    ModelList,
    /// Handler writes its own response through the context.
    Raw,
}

impl ResponseKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseKind::PlainText => "text",
            ResponseKind::SingleModel => "model",
            ResponseKind::ModelList => "models",
            ResponseKind::Raw => "raw",
        }
    }
}

impl fmt::Display for ResponseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of invoking a user handler, ready for encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResult {
    PlainText(String),
    /// Encoded JSON object.
    SingleModel(Bytes),
    /// Encoded JSON array and its element count.
    ModelList { len: usize, body: Bytes },
    /// The response, if any, lives in the context.
    Raw,
}

impl HandlerResult {
    pub fn kind(&self) -> ResponseKind {
        match self {
            HandlerResult::PlainText(_) => ResponseKind::PlainText,
            HandlerResult::SingleModel(_) => ResponseKind::SingleModel,
            HandlerResult::ModelList { .. } => ResponseKind::ModelList,
            HandlerResult::Raw => ResponseKind::Raw,
        }
    }
}

/// A returned value could not be encoded.
#[derive(Debug, Error)]
#[error("Failed to serialize {kind} response: {source}")]
pub struct SerializationError {
    kind: ResponseKind,
    #[source]
    source: serde_json::Error,
}

impl SerializationError {
    pub fn new(kind: ResponseKind, source: serde_json::Error) -> Self {
        Self { kind, source }
    }

    pub fn kind(&self) -> ResponseKind {
        self.kind
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Return types a handler may declare.
///
/// Implemented for strings (plain text), any [`Model`] (single object),
/// `Vec<M>` and [`Models<M>`] (array) and `()` (raw). Other return types do
/// not satisfy the bound and are rejected when the route is registered.
pub trait Responder: sealed::Sealed {
    /// Encoding chosen for every value of this type.
    const KIND: ResponseKind;

    fn into_handler_result(self) -> Result<HandlerResult, SerializationError>;
}

impl sealed::Sealed for String {}

impl Responder for String {
    const KIND: ResponseKind = ResponseKind::PlainText;

    fn into_handler_result(self) -> Result<HandlerResult, SerializationError> {
        Ok(HandlerResult::PlainText(self))
    }
}

impl sealed::Sealed for &'static str {}

impl Responder for &'static str {
    const KIND: ResponseKind = ResponseKind::PlainText;

    fn into_handler_result(self) -> Result<HandlerResult, SerializationError> {
        Ok(HandlerResult::PlainText(self.to_owned()))
    }
}

impl sealed::Sealed for Cow<'static, str> {}

impl Responder for Cow<'static, str> {
    const KIND: ResponseKind = ResponseKind::PlainText;

    fn into_handler_result(self) -> Result<HandlerResult, SerializationError> {
        Ok(HandlerResult::PlainText(self.into_owned()))
    }
}

impl<M: Model> sealed::Sealed for M {}

impl<M: Model> Responder for M {
    const KIND: ResponseKind = ResponseKind::SingleModel;

    fn into_handler_result(self) -> Result<HandlerResult, SerializationError> {
        let body = serde_json::to_vec(&self)
            .map_err(|e| SerializationError::new(Self::KIND, e))?;
        Ok(HandlerResult::SingleModel(Bytes::from(body)))
    }
}

impl<M: Model> sealed::Sealed for Vec<M> {}

impl<M: Model> Responder for Vec<M> {
    const KIND: ResponseKind = ResponseKind::ModelList;

    fn into_handler_result(self) -> Result<HandlerResult, SerializationError> {
        Models::from(self).into_handler_result()
    }
}

impl<M: Model> sealed::Sealed for Models<M> {}

impl<M: Model> Responder for Models<M> {
    const KIND: ResponseKind = ResponseKind::ModelList;

    fn into_handler_result(self) -> Result<HandlerResult, SerializationError> {
        let len = self.len();
        let body = serde_json::to_vec(&self)
            .map_err(|e| SerializationError::new(Self::KIND, e))?;
        Ok(HandlerResult::ModelList {
            len,
            body: Bytes::from(body),
        })
    }
}

impl sealed::Sealed for () {}

impl Responder for () {
    const KIND: ResponseKind = ResponseKind::Raw;

    fn into_handler_result(self) -> Result<HandlerResult, SerializationError> {
        Ok(HandlerResult::Raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Serialize, Serializer};

    #[derive(Serialize)]
    struct Point {
        y: i32,
        x: i32,
    }

    impl Model for Point {}

    struct Unencodable;

    impl Serialize for Unencodable {
        fn serialize<S: Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(<S::Error as serde::ser::Error>::custom("refusing to encode"))
        }
    }

    impl Model for Unencodable {}

    fn kind_of<R: Responder>() -> ResponseKind {
        R::KIND
    }

    #[test]
    fn test_kind_follows_declared_type() {
        assert_eq!(kind_of::<String>(), ResponseKind::PlainText);
        assert_eq!(kind_of::<&'static str>(), ResponseKind::PlainText);
        assert_eq!(kind_of::<Point>(), ResponseKind::SingleModel);
        assert_eq!(kind_of::<Vec<Point>>(), ResponseKind::ModelList);
        assert_eq!(kind_of::<Models<Point>>(), ResponseKind::ModelList);
        assert_eq!(kind_of::<()>(), ResponseKind::Raw);
    }

    #[test]
    fn test_text_is_kept_verbatim() {
        let result = String::from("用户测试").into_handler_result().unwrap();
        assert_eq!(result, HandlerResult::PlainText("用户测试".to_string()));
    }

    #[test]
    fn test_model_keeps_field_order() {
        let result = Point { y: 2, x: 1 }.into_handler_result().unwrap();
        assert_eq!(result, HandlerResult::SingleModel(Bytes::from_static(b"{\"y\":2,\"x\":1}")));
    }

    #[test]
    fn test_empty_list_encodes_as_empty_array() {
        let result = Vec::<Point>::new().into_handler_result().unwrap();
        assert_eq!(
            result,
            HandlerResult::ModelList {
                len: 0,
                body: Bytes::from_static(b"[]"),
            }
        );
    }

    #[test]
    fn test_serialization_failure_is_reported() {
        let err = Unencodable.into_handler_result().unwrap_err();
        assert_eq!(err.kind(), ResponseKind::SingleModel);
        assert!(err.to_string().contains("refusing to encode"));

        let err = vec![Unencodable].into_handler_result().unwrap_err();
        assert_eq!(err.kind(), ResponseKind::ModelList);
    }
}
