//! Row identity.
//!
//! The selection set stores keys, not rows. A key is either the row's source value itself or a
//! value derived from it via [`TrackBy`]. Keys are compared by value (`Eq + Hash`), so two rows
//! with equal keys are the same row as far as selection is concerned.

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

/// A row payload that can produce selection keys.
pub trait ItemSource {
    type Key: Clone + Eq + Hash + fmt::Debug;

    /// The key used when no [`TrackBy`] field or extractor is configured.
    fn identity_key(&self) -> Self::Key;

    /// The key stored under the property `name`, if the payload exposes one.
    fn field_key(&self, _name: &str) -> Option<Self::Key> {
        None
    }
}

macro_rules! impl_item_source_for_scalars {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ItemSource for $ty {
                type Key = $ty;

                fn identity_key(&self) -> Self::Key {
                    self.clone()
                }
            }
        )*
    };
}

impl_item_source_for_scalars!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, String,
    &'static str,
);

type Extractor<T> = Arc<dyn Fn(&T) -> <T as ItemSource>::Key + Send + Sync>;

/// Which key a row is tracked by.
pub enum TrackBy<T: ItemSource> {
    /// The source value's own identity key.
    Identity,
    /// A named property of the source value.
    Field(String),
    /// A caller-supplied function of the source value.
    Extractor(Extractor<T>),
}

impl<T: ItemSource> TrackBy<T> {
    /// Tracks rows by the property `name`. An empty name means [`TrackBy::Identity`].
    pub fn field(name: impl Into<String>) -> Self {
        let name = name.into();
        if name.is_empty() {
            TrackBy::Identity
        } else {
            TrackBy::Field(name)
        }
    }

    pub fn extractor(f: impl Fn(&T) -> T::Key + Send + Sync + 'static) -> Self {
        TrackBy::Extractor(Arc::new(f))
    }
}

impl<T: ItemSource> Default for TrackBy<T> {
    fn default() -> Self {
        TrackBy::Identity
    }
}

impl<T: ItemSource> Clone for TrackBy<T> {
    fn clone(&self) -> Self {
        match self {
            TrackBy::Identity => TrackBy::Identity,
            TrackBy::Field(name) => TrackBy::Field(name.clone()),
            TrackBy::Extractor(f) => TrackBy::Extractor(Arc::clone(f)),
        }
    }
}

impl<T: ItemSource> fmt::Debug for TrackBy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackBy::Identity => f.write_str("Identity"),
            TrackBy::Field(name) => f.debug_tuple("Field").field(name).finish(),
            TrackBy::Extractor(_) => f.write_str("Extractor(..)"),
        }
    }
}

impl<T: ItemSource> From<&str> for TrackBy<T> {
    fn from(name: &str) -> Self {
        TrackBy::field(name)
    }
}

impl<T: ItemSource> From<String> for TrackBy<T> {
    fn from(name: String) -> Self {
        TrackBy::field(name)
    }
}

/// Resolves the selection key of `source`.
///
/// A [`TrackBy::Field`] the source does not expose falls back to the identity key.
pub fn resolve_key<T: ItemSource>(source: &T, track_by: &TrackBy<T>) -> T::Key {
    match track_by {
        TrackBy::Identity => source.identity_key(),
        TrackBy::Field(name) => source.field_key(name).unwrap_or_else(|| {
            log::trace!("row has no field '{name}', tracking it by identity");
            source.identity_key()
        }),
        TrackBy::Extractor(f) => f(source),
    }
}
