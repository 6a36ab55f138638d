/// ID for vertices, which are essentially `usize`.
///
/// Ids are issued densely from zero, so for graphs grown through this
/// crate a `VertexId` doubles as a position into per-vertex tables.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

/// A factory to generate `VertexId` uniquely.
#[derive(Clone)]
pub struct VertexIdFactory(usize);

impl VertexIdFactory {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn one_more(&mut self) -> VertexId {
        let cur = self.0;
        self.0 += 1;
        VertexId(cur)
    }
}

impl Default for VertexIdFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl VertexId {
    pub fn new(x: usize) -> Self {
        Self(x)
    }

    pub fn to_raw(&self) -> usize {
        self.0
    }
}
