/*!
# Vertex Representation

Vertices are identified by a caller-assigned [`VertexId`] and may carry a payload of any type.
A vertex without payload is simply a `Vertex<()>` (see [`TrivialVertex`]).

We choose `VertexId = i64` so that ids can be chosen freely by the caller (including negative
values) without an additional mapping layer. Algorithms internally map ids to a dense range
`0..n` (see [`VertexIndex`](crate::utils::VertexIndex)).
*/

use std::fmt::{Debug, Display};

/// Caller-assigned identifier of a vertex
pub type VertexId = i64;

/// Number of vertices stored in a graph
pub type NumVertices = usize;

/// A vertex is an immutable id together with a payload.
///
/// The payload defaults to `()` which yields an identity-only vertex. Graphs storing such
/// vertices reject payload access at compile time.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Vertex<D = ()> {
    id: VertexId,
    /// Payload attached to the vertex
    pub data: D,
}

/// A vertex without payload
pub type TrivialVertex = Vertex<()>;

impl<D> Vertex<D> {
    /// Creates a new vertex with a payload
    pub const fn with_data(id: VertexId, data: D) -> Self {
        Self { id, data }
    }

    /// Returns the id of the vertex
    #[inline]
    pub const fn id(&self) -> VertexId {
        self.id
    }

    /// Returns a reference to the payload
    #[inline]
    pub const fn data(&self) -> &D {
        &self.data
    }

    /// Splits the vertex into its id and its payload
    pub fn into_parts(self) -> (VertexId, D) {
        (self.id, self.data)
    }
}

impl Vertex<()> {
    /// Creates a vertex without payload
    pub const fn new(id: VertexId) -> Self {
        Self { id, data: () }
    }
}

impl<D> From<(VertexId, D)> for Vertex<D> {
    fn from(value: (VertexId, D)) -> Self {
        Vertex::with_data(value.0, value.1)
    }
}

impl From<VertexId> for TrivialVertex {
    fn from(id: VertexId) -> Self {
        Vertex::new(id)
    }
}

impl<D> Display for Vertex<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "vertex<{}>", self.id)
    }
}

impl<D: Debug> Debug for Vertex<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if std::mem::size_of::<D>() == 0 {
            write!(f, "vertex<{}>", self.id)
        } else {
            write!(f, "vertex<{}: {:?}>", self.id, self.data)
        }
    }
}

/// Forces a compile-time error if `D` carries no data.
///
/// Referencing [`PayloadCheck::PRESENT`] inside a generic function is evaluated once the
/// function is instantiated, so accessing the payload of a `Vertex<()>` fails to build.
pub(crate) struct PayloadCheck<D>(std::marker::PhantomData<D>);

impl<D> PayloadCheck<D> {
    pub(crate) const PRESENT: () = assert!(
        std::mem::size_of::<D>() != 0,
        "vertices without payload carry no data"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_shows_payload_only_if_present() {
        assert_eq!(format!("{:?}", Vertex::new(3)), "vertex<3>");
        assert_eq!(format!("{:?}", Vertex::with_data(3, 30)), "vertex<3: 30>");
        assert_eq!(format!("{}", Vertex::with_data(-1, "a")), "vertex<-1>");
    }

    #[test]
    fn conversions() {
        let v: Vertex<&str> = (7, "seven").into();
        assert_eq!(v.id(), 7);
        assert_eq!(*v.data(), "seven");
        assert_eq!(v.into_parts(), (7, "seven"));

        let t: TrivialVertex = 4.into();
        assert_eq!(t, Vertex::new(4));
    }
}
