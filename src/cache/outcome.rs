//! Operation Outcomes
//!
//! Result types returned by `get` and `set`. They serialize to the
//! `{"hit": ...}` / `{"created": true}` shapes callers log or forward.

use serde::{Serialize, Serializer};

// == Lookup ==
/// Result of a read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<V> {
    /// Key absent or stale
    Miss,
    /// Key resident and live
    Hit(V),
}

impl<V> Lookup<V> {
    pub fn is_hit(&self) -> bool {
        matches!(self, Lookup::Hit(_))
    }

    /// Converts into the hit value, if any.
    pub fn into_value(self) -> Option<V> {
        match self {
            Lookup::Hit(value) => Some(value),
            Lookup::Miss => None,
        }
    }
}

impl<V> From<Lookup<V>> for Option<V> {
    fn from(lookup: Lookup<V>) -> Self {
        lookup.into_value()
    }
}

#[derive(Serialize)]
struct LookupBody<'a, V> {
    hit: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<&'a V>,
}

impl<V: Serialize> Serialize for Lookup<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let body = match self {
            Lookup::Miss => LookupBody {
                hit: false,
                value: None,
            },
            Lookup::Hit(value) => LookupBody {
                hit: true,
                value: Some(value),
            },
        };
        body.serialize(serializer)
    }
}

// == Write Outcome ==
/// Result of a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The key was not resident; it now occupies a new or reused slot
    Created,
    /// The key was already resident (live or stale) and was overwritten
    Updated,
}

impl WriteOutcome {
    pub fn is_created(self) -> bool {
        self == WriteOutcome::Created
    }

    pub fn is_updated(self) -> bool {
        self == WriteOutcome::Updated
    }
}

#[derive(Serialize)]
#[serde(rename_all = "lowercase")]
enum WriteBody {
    Created(bool),
    Updated(bool),
}

impl Serialize for WriteOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let body = match self {
            WriteOutcome::Created => WriteBody::Created(true),
            WriteOutcome::Updated => WriteBody::Updated(true),
        };
        body.serialize(serializer)
    }
}
