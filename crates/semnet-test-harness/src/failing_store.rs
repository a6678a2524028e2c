//! Store with configurable failure injection

use semnet_core::{
    ElementAddr, ElementType, GraphStore, StoreError, StoreResult, Triple, TriplePattern,
};
use semnet_storage::MemStore;
use std::sync::atomic::{AtomicU64, Ordering};

/// Store that delegates to a `MemStore` but can inject failures
///
/// Set `*_fail_at` to a call count to trigger an I/O error on that call and
/// every later one. Set to 0 to disable failure (default). Use
/// `clear_failures()` to reset.
#[derive(Debug, Default)]
pub struct FailingStore {
    inner: MemStore,
    /// Fail create_edge on this call number (0 = never)
    pub create_edge_fail_at: AtomicU64,
    /// Fail erase_element on this call number (0 = never)
    pub erase_fail_at: AtomicU64,
    create_edge_count: AtomicU64,
    erase_count: AtomicU64,
}

impl FailingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Underlying store, for setting up fixtures without counting calls
    pub fn inner(&self) -> &MemStore {
        &self.inner
    }

    pub fn clear_failures(&self) {
        self.create_edge_fail_at.store(0, Ordering::SeqCst);
        self.erase_fail_at.store(0, Ordering::SeqCst);
    }

    fn should_fail(counter: &AtomicU64, fail_at: &AtomicU64) -> bool {
        let count = counter.fetch_add(1, Ordering::SeqCst) + 1;
        let target = fail_at.load(Ordering::SeqCst);
        target != 0 && count >= target
    }
}

impl GraphStore for FailingStore {
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
        if Self::should_fail(&self.create_edge_count, &self.create_edge_fail_at) {
            return Err(StoreError::Io {
                message: "Injected create_edge failure".into(),
            });
        }
        self.inner.create_edge(ty, source, target)
    }

    fn erase_element(&self, addr: ElementAddr) -> StoreResult<bool> {
        if Self::should_fail(&self.erase_count, &self.erase_fail_at) {
            return Err(StoreError::Io {
                message: "Injected erase_element failure".into(),
            });
        }
        self.inner.erase_element(addr)
    }

    fn edge_endpoints(&self, edge: ElementAddr) -> StoreResult<(ElementAddr, ElementAddr)> {
        self.inner.edge_endpoints(edge)
    }

    fn iter3(&self, pattern: TriplePattern) -> StoreResult<Vec<Triple>> {
        self.inner.iter3(pattern)
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
