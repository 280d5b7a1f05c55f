use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Token identifying one subcategory selection.
///
/// Every selection bumps the generation; results of scoped fetches carry the
/// generation they were requested under and are only applied while it is
/// still current.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Generation(u64);

impl Generation {
    pub fn next(self) -> Self {
        Generation(self.0 + 1)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Load state of one fetched collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Resource<T> {
    #[default]
    NotRequested,
    Loading {
        generation: Generation,
    },
    Loaded(T),
    Errored(String),
}

/// What the screen should show for a resource.
#[derive(Debug, PartialEq)]
pub enum ResourceView<'a, T> {
    /// Not requested yet: render nothing.
    Hidden,
    Loading,
    /// Failed, or loaded but empty: render the inline "could not fetch" text.
    Unavailable,
    Ready(&'a T),
}

impl<T> Resource<T> {
    pub fn loading(generation: Generation) -> Self {
        Resource::Loading { generation }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Resource::Loading { .. })
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Resource::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Resource::Errored(reason) => Some(reason),
            _ => None,
        }
    }

    /// True while a request for `generation` is outstanding.
    pub fn accepts(&self, generation: Generation) -> bool {
        matches!(self, Resource::Loading { generation: g } if *g == generation)
    }

    /// Apply a fetch result if it belongs to the outstanding request.
    ///
    /// Returns `false` (and leaves the resource untouched) for stale results.
    pub fn resolve(&mut self, generation: Generation, result: Result<T, String>) -> bool {
        if !self.accepts(generation) {
            return false;
        }
        *self = match result {
            Ok(value) => Resource::Loaded(value),
            Err(reason) => Resource::Errored(reason),
        };
        true
    }
}

impl<T> Resource<Vec<T>> {
    pub fn view(&self) -> ResourceView<'_, Vec<T>> {
        match self {
            Resource::NotRequested => ResourceView::Hidden,
            Resource::Loading { .. } => ResourceView::Loading,
            Resource::Errored(_) => ResourceView::Unavailable,
            Resource::Loaded(items) if items.is_empty() => ResourceView::Unavailable,
            Resource::Loaded(items) => ResourceView::Ready(items),
        }
    }

    /// Loaded and non-empty.
    pub fn ready(&self) -> Option<&[T]> {
        match self.view() {
            ResourceView::Ready(items) => Some(items.as_slice()),
            _ => None,
        }
    }
}

/// The four collections fetched per subcategory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum ResourceKind {
    #[strum(serialize = "feature types")]
    FeatureTypes,
    #[strum(serialize = "labels")]
    Labels,
    #[strum(serialize = "use cases")]
    UseCases,
    #[strum(serialize = "standards")]
    Standards,
}

impl ResourceKind {
    /// Inline text shown when the resource could not be fetched.
    pub fn unavailable_message(self) -> String {
        format!("Error fetching the {self}")
    }
}
