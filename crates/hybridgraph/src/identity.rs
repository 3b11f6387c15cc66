//! Identity and hashing strategies for vertex and edge payloads.
//!
//! Two strategies are resolved statically through trait impls:
//!
//! - **Value types** (integers, `bool`, `char`, strings, `()`): equality and
//!   hashing use the value itself, so two equal values are one vertex.
//! - **Identity-stamped types**: any user type wrapped in [`Stamped`]. Equality,
//!   hashing and ordering use only the [`Stamp`] assigned by an
//!   [`IdentityAllocator`], so two structurally equal payloads with different
//!   stamps are two distinct vertices.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::{Hash, Hasher};
use uuid::Uuid;

/// Payload usable as a vertex or edge value.
pub trait GraphValue: Clone + Debug {
    /// True for value types, false for identity-stamped types.
    const IS_PRIMITIVE: bool;

    /// Short human-readable label used by exports and log lines.
    fn label(&self) -> String;
}

/// Capability required of vertex payloads.
///
/// `Ord` drives the per-row sort of the compacted columnar structure.
pub trait VertexKey: GraphValue + Eq + Hash + Ord {}

impl<T: GraphValue + Eq + Hash + Ord> VertexKey for T {}

/// Capability required of edge weight payloads.
///
/// `Default` synthesizes the weight of an unweighted edge.
pub trait EdgeWeight: GraphValue + Default + PartialEq {}

impl<T: GraphValue + Default + PartialEq> EdgeWeight for T {}

macro_rules! impl_value_type {
    ($($ty:ty),* $(,)?) => {
        $(
            impl GraphValue for $ty {
                const IS_PRIMITIVE: bool = true;

                fn label(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_value_type!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
    String, &'static str,
);

impl GraphValue for () {
    const IS_PRIMITIVE: bool = true;

    fn label(&self) -> String {
        "()".to_string()
    }
}

/// Engine-assigned identity of a user payload.
///
/// Ordered by `id`, then `name`. The default stamp (id 0, empty name) is the
/// unassigned stamp; allocated ids start at [`IdentityAllocator::FIRST_ID`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Stamp {
    /// Monotonic numeric identifier
    pub id: u64,
    /// Generated display name
    pub name: String,
}

impl Stamp {
    /// Whether this stamp came from an allocator.
    pub fn is_assigned(&self) -> bool {
        self.id != 0
    }
}

impl GraphValue for Stamp {
    const IS_PRIMITIVE: bool = false;

    fn label(&self) -> String {
        if self.is_assigned() {
            self.name.clone()
        } else {
            "unstamped".to_string()
        }
    }
}

/// A user payload carrying an engine-assigned [`Stamp`].
///
/// Equality, hashing and ordering ignore the payload entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stamped<T> {
    stamp: Stamp,
    payload: T,
}

impl<T> Stamped<T> {
    /// The assigned stamp.
    pub fn stamp(&self) -> &Stamp {
        &self.stamp
    }

    /// Numeric identifier of the stamp.
    pub fn id(&self) -> u64 {
        self.stamp.id
    }

    /// Generated display name of the stamp.
    pub fn name(&self) -> &str {
        &self.stamp.name
    }

    /// Borrow the payload.
    pub fn payload(&self) -> &T {
        &self.payload
    }

    /// Mutably borrow the payload. The identity is unaffected.
    pub fn payload_mut(&mut self) -> &mut T {
        &mut self.payload
    }

    /// Discard the stamp and return the payload.
    pub fn into_payload(self) -> T {
        self.payload
    }
}

impl<T: Default> Default for Stamped<T> {
    fn default() -> Self {
        Self {
            stamp: Stamp::default(),
            payload: T::default(),
        }
    }
}

impl<T> PartialEq for Stamped<T> {
    fn eq(&self, other: &Self) -> bool {
        self.stamp == other.stamp
    }
}

impl<T> Eq for Stamped<T> {}

impl<T> Hash for Stamped<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.stamp.hash(state);
    }
}

impl<T> PartialOrd for Stamped<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Stamped<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.stamp.cmp(&other.stamp)
    }
}

impl<T: Clone + Debug> GraphValue for Stamped<T> {
    const IS_PRIMITIVE: bool = false;

    fn label(&self) -> String {
        self.stamp.label()
    }
}

/// Hands out monotonically increasing stamps.
///
/// Owned by a [`GraphContext`](crate::context::GraphContext) or created
/// standalone; there is no process-wide counter.
#[derive(Debug, Clone)]
pub struct IdentityAllocator {
    next_id: u64,
}

impl IdentityAllocator {
    /// First identifier handed out by a fresh or reset allocator.
    pub const FIRST_ID: u64 = 1;

    /// Create an allocator starting at [`Self::FIRST_ID`].
    pub fn new() -> Self {
        Self {
            next_id: Self::FIRST_ID,
        }
    }

    /// Allocate the next stamp with a generated name.
    pub fn next_stamp(&mut self) -> Stamp {
        let id = self.take_id();
        Stamp {
            id,
            name: generate_name(id),
        }
    }

    /// Stamp a payload with the next identity.
    pub fn stamp<T>(&mut self, payload: T) -> Stamped<T> {
        Stamped {
            stamp: self.next_stamp(),
            payload,
        }
    }

    /// Stamp a payload with the next identifier and a caller-chosen name.
    pub fn stamp_named<T>(&mut self, payload: T, name: impl Into<String>) -> Stamped<T> {
        let id = self.take_id();
        Stamped {
            stamp: Stamp {
                id,
                name: name.into(),
            },
            payload,
        }
    }

    /// Identifier the next stamp will receive.
    pub fn peek_next_id(&self) -> u64 {
        self.next_id
    }

    /// Restart numbering at [`Self::FIRST_ID`].
    ///
    /// Stamps handed out before the reset may collide with later ones.
    pub fn reset(&mut self) {
        self.next_id = Self::FIRST_ID;
    }

    fn take_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl Default for IdentityAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// `<10 hex chars>_<id>`
fn generate_name(id: u64) -> String {
    let token = Uuid::new_v4().simple().to_string();
    format!("{}_{id}", &token[..10])
}
