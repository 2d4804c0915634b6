//! Path routing between the list and detail views.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("Unknown route '{0}'")]
    Unknown(String),

    #[error("Invalid item id '{0}'")]
    InvalidId(String),
}

/// Routes known to the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// `/`
    #[default]
    List,
    /// `/items/:id`
    Item { id: usize },
}

impl Route {
    /// Parse a path. The leading slash and a trailing slash are optional.
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let trimmed = path.trim().trim_matches('/');
        if trimmed.is_empty() {
            return Ok(Route::List);
        }

        let mut segments = trimmed.split('/');
        match (segments.next(), segments.next(), segments.next()) {
            (Some("items"), Some(id), None) => id
                .parse::<usize>()
                .map(|id| Route::Item { id })
                .map_err(|_| RouteError::InvalidId(id.to_string())),
            _ => Err(RouteError::Unknown(path.to_string())),
        }
    }

    /// Canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::List => "/".to_string(),
            Route::Item { id } => format!("/items/{id}"),
        }
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::parse(s)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
