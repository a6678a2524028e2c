//! Store wrapper that reverses pattern iteration order
//!
//! Resolution helpers must not depend on the order in which the store yields
//! candidates. Running the same scenario against `S` and `ReversedStore<S>`
//! checks that.

use semnet_core::{ElementAddr, ElementType, GraphStore, StoreResult, Triple, TriplePattern};

#[derive(Debug, Default)]
pub struct ReversedStore<S> {
    inner: S,
}

impl<S: GraphStore> ReversedStore<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: GraphStore> GraphStore for ReversedStore<S> {
    fn is_element(&self, addr: ElementAddr) -> bool {
        self.inner.is_element(addr)
    }

    fn element_type(&self, addr: ElementAddr) -> StoreResult<ElementType> {
        self.inner.element_type(addr)
    }

    fn create_node(&self, ty: ElementType) -> StoreResult<ElementAddr> {
        self.inner.create_node(ty)
    }

    fn create_link(&self) -> StoreResult<ElementAddr> {
        self.inner.create_link()
    }

    fn create_edge(
        &self,
        ty: ElementType,
        source: ElementAddr,
        target: ElementAddr,
    ) -> StoreResult<ElementAddr> {
        self.inner.create_edge(ty, source, target)
    }

    fn erase_element(&self, addr: ElementAddr) -> StoreResult<bool> {
        self.inner.erase_element(addr)
    }

    fn edge_endpoints(&self, edge: ElementAddr) -> StoreResult<(ElementAddr, ElementAddr)> {
        self.inner.edge_endpoints(edge)
    }

    fn iter3(&self, pattern: TriplePattern) -> StoreResult<Vec<Triple>> {
        let mut triples = self.inner.iter3(pattern)?;
        triples.reverse();
        Ok(triples)
    }

    fn system_identifier(&self, addr: ElementAddr) -> StoreResult<Option<String>> {
        self.inner.system_identifier(addr)
    }

    fn set_system_identifier(&self, addr: ElementAddr, identifier: &str) -> StoreResult<()> {
        self.inner.set_system_identifier(addr, identifier)
    }

    fn find_by_system_identifier(&self, identifier: &str) -> StoreResult<Option<ElementAddr>> {
        self.inner.find_by_system_identifier(identifier)
    }
}
