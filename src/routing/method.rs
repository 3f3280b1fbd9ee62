//! Supported HTTP verbs.
//!
//! Registration accepts either an [`HttpMethod`] or a verb string. Strings are
//! parsed case-insensitively so `"GET"` and `"get"` name the same verb.

use std::fmt;
use std::str::FromStr;

use axum::http::Method;
use axum::routing::MethodFilter;

use crate::routing::error::ConfigurationError;

macro_rules! http_method {
    ($($variant:ident => $name:literal),* $(,)?) => {
        /// HTTP verb a route can be registered for.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum HttpMethod {
            $($variant),*
        }

        impl HttpMethod {
            /// All supported verbs, in declaration order.
            pub const ALL: &'static [HttpMethod] = &[$(HttpMethod::$variant),*];

            /// Canonical upper-case name.
            pub fn as_str(&self) -> &'static str {
                match *self {
                    $(HttpMethod::$variant => $name),*
                }
            }

            /// Parse a verb, ignoring ASCII case.
            pub fn parse(s: &str) -> Result<HttpMethod, ConfigurationError> {
                $(
                    if s.eq_ignore_ascii_case($name) {
                        return Ok(HttpMethod::$variant);
                    }
                )*
                Err(ConfigurationError::UnsupportedMethod(s.to_string()))
            }
        }
    };
}

http_method! {
    Get => "GET",
    Post => "POST",
    Put => "PUT",
    Delete => "DELETE",
    Head => "HEAD",
    Options => "OPTIONS",
    Patch => "PATCH",
    Trace => "TRACE",
    Connect => "CONNECT",
}

impl HttpMethod {
    /// Filter used when installing the route into an axum method router.
    pub fn filter(&self) -> MethodFilter {
        match self {
            HttpMethod::Get => MethodFilter::GET,
            HttpMethod::Post => MethodFilter::POST,
            HttpMethod::Put => MethodFilter::PUT,
            HttpMethod::Delete => MethodFilter::DELETE,
            HttpMethod::Head => MethodFilter::HEAD,
            HttpMethod::Options => MethodFilter::OPTIONS,
            HttpMethod::Patch => MethodFilter::PATCH,
            HttpMethod::Trace => MethodFilter::TRACE,
            HttpMethod::Connect => MethodFilter::CONNECT,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HttpMethod::parse(s)
    }
}

impl TryFrom<&str> for HttpMethod {
    type Error = ConfigurationError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        HttpMethod::parse(s)
    }
}

impl TryFrom<&Method> for HttpMethod {
    type Error = ConfigurationError;

    fn try_from(method: &Method) -> Result<Self, Self::Error> {
        HttpMethod::parse(method.as_str())
    }
}

impl TryFrom<Method> for HttpMethod {
    type Error = ConfigurationError;

    fn try_from(method: Method) -> Result<Self, Self::Error> {
        HttpMethod::try_from(&method)
    }
}

/// Anything a route verb can be given as.
///
/// Lets `handle` take `"GET"`, `HttpMethod::Get` or `Method::GET` alike.
pub trait IntoHttpMethod {
    fn into_http_method(self) -> Result<HttpMethod, ConfigurationError>;
}

impl IntoHttpMethod for HttpMethod {
    fn into_http_method(self) -> Result<HttpMethod, ConfigurationError> {
        Ok(self)
    }
}

impl IntoHttpMethod for &str {
    fn into_http_method(self) -> Result<HttpMethod, ConfigurationError> {
        HttpMethod::parse(self)
    }
}

impl IntoHttpMethod for Method {
    fn into_http_method(self) -> Result<HttpMethod, ConfigurationError> {
        HttpMethod::try_from(&self)
    }
}
