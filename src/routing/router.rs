//! Installed, read-only route tables.
//!
//! # Responsibilities
//! - Store installed routes
//! - Merge tables from several controllers, rejecting collisions
//! - Look up the route for a method and path
//!
//! # Design Decisions
//! - Immutable after construction (shared across tasks without locks)
//! - Exact path lookup only; O(n) scan is fine for controller-sized tables
//! - Explicit `None` on no match rather than a silent default

use std::sync::Arc;

use crate::routing::error::ConfigurationError;
use crate::routing::method::HttpMethod;
use crate::routing::route::Route;

/// Finalized routes, in installation order.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Arc<[Route]>,
}

impl RouteTable {
    pub(crate) fn new(routes: Vec<Route>) -> Self {
        Self {
            routes: routes.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Route> {
        self.routes.iter()
    }

    /// Route registered for exactly this method and path.
    pub fn find(&self, method: HttpMethod, path: &str) -> Option<&Route> {
        self.routes
            .iter()
            .find(|r| r.method() == method && r.path() == path)
    }

    /// Methods registered for a path, in installation order.
    pub fn methods_for(&self, path: &str) -> Vec<HttpMethod> {
        self.routes
            .iter()
            .filter(|r| r.path() == path)
            .map(Route::method)
            .collect()
    }

    /// Distinct paths, in order of first registration.
    pub fn paths(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = Vec::new();
        for route in self.routes.iter() {
            if !paths.contains(&route.path()) {
                paths.push(route.path());
            }
        }
        paths
    }

    /// Append another table's routes to this one.
    pub fn merge(&self, other: &RouteTable) -> Result<RouteTable, ConfigurationError> {
        for route in other.iter() {
            if self.find(route.method(), route.path()).is_some() {
                return Err(ConfigurationError::DuplicateRoute {
                    method: route.method(),
                    path: route.path().to_string(),
                });
            }
        }
        let routes: Vec<Route> = self.iter().chain(other.iter()).cloned().collect();
        Ok(RouteTable::new(routes))
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<'a> IntoIterator for &'a RouteTable {
    type Item = &'a Route;
    type IntoIter = std::slice::Iter<'a, Route>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::Context;
    use crate::routing::builder::RouteBuilder;

    fn table(routes: &[(&str, &'static str)]) -> RouteTable {
        let mut builder = RouteBuilder::new();
        for (method, path) in routes {
            builder.handle(*method, path, |_: &mut Context| "ok").unwrap();
        }
        builder.install().unwrap()
    }

    #[test]
    fn test_find_and_methods() {
        let table = table(&[("GET", "/user"), ("POST", "/user"), ("GET", "/test")]);
        assert!(table.find(HttpMethod::Get, "/user").is_some());
        assert!(table.find(HttpMethod::Put, "/user").is_none());
        assert!(table.find(HttpMethod::Get, "/user/").is_none());
        assert_eq!(table.methods_for("/user"), vec![HttpMethod::Get, HttpMethod::Post]);
        assert_eq!(table.paths(), vec!["/user", "/test"]);
    }

    #[test]
    fn test_merge_rejects_collisions() {
        let users = table(&[("GET", "/user")]);
        let topics = table(&[("GET", "/topic")]);
        let merged = users.merge(&topics).unwrap();
        assert_eq!(merged.len(), 2);
        assert_eq!(users.len(), 1);

        let err = merged.merge(&table(&[("GET", "/topic")])).unwrap_err();
        assert!(matches!(err, ConfigurationError::DuplicateRoute { method: HttpMethod::Get, .. }));
    }
}
