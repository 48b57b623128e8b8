//! Rendering of scenario models into k6 script text
//!
//! Every renderable piece of the model gets a `render` method here. Pieces
//! that need an import register a [`Capability`] into the [`Capabilities`]
//! accumulator passed down from the top-level render call.

pub mod block;
pub mod check;
pub mod literal;
pub mod options;
pub mod request;

use indexmap::IndexSet;

/// An external k6 module a rendered fragment depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// `http.request(...)`
    Http,
    /// `check(...)`
    Check,
}

impl Capability {
    /// The import statement that provides this capability
    pub fn import_line(&self) -> &'static str {
        match self {
            Capability::Http => "import http from 'k6/http';",
            Capability::Check => "import { check } from 'k6';",
        }
    }
}

/// Set of capabilities discovered while rendering one script.
///
/// Keeps discovery order so the generated import list is stable.
#[derive(Debug, Clone, Default)]
pub struct Capabilities {
    inner: IndexSet<Capability>,
}

impl Capabilities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a capability; registering twice is a no-op
    pub fn insert(&mut self, capability: Capability) {
        self.inner.insert(capability);
    }

    pub fn contains(&self, capability: Capability) -> bool {
        self.inner.contains(&capability)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Capability> + '_ {
        self.inner.iter().copied()
    }

    /// Import lines in discovery order
    pub fn import_lines(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.iter().map(|c| c.import_line())
    }
}
