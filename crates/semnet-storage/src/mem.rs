//! In-memory store implementation
//!
//! `MemStore` keeps the whole semantic network in process memory.
//! Perfect for testing and for embedding small knowledge bases.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use semnet_core::{
    ConfigError, ElementAddr, ElementType, GraphStore, StoreError, StoreResult, Triple,
    TriplePattern,
};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Address allocation limits for `MemStore`
///
/// Addresses are handed out segment by segment. Offsets start at 1 inside
/// every segment, so `0|0` never names a live element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemStoreConfig {
    /// Number of elements per segment
    pub segment_size: u16,
    /// Number of segments before the store reports `CapacityExceeded`
    pub max_segments: u16,
}

impl MemStoreConfig {
    pub fn new(segment_size: u16, max_segments: u16) -> Self {
        Self {
            segment_size,
            max_segments,
        }
    }

    /// Limits used by [`MemStore::new`]
    pub fn standard() -> Self {
        Self::new(4096, 256)
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.segment_size < 1 {
            return Err(ConfigError::InvalidParameter {
                name: "segment_size",
                message: "must be >= 1".into(),
            });
        }

        if self.max_segments < 1 {
            return Err(ConfigError::InvalidParameter {
                name: "max_segments",
                message: "must be >= 1".into(),
            });
        }

        Ok(())
    }

    /// Maximum number of elements ever allocated
    pub fn capacity(&self) -> usize {
        usize::from(self.segment_size) * usize::from(self.max_segments)
    }
}

/// Stored element
///
/// Adjacency lists keep the first few incident edges inline, which covers
/// most elements of a typical program without a heap allocation.
#[derive(Debug)]
struct Element {
    ty: ElementType,
    /// `Some` for edges only
    endpoints: Option<(ElementAddr, ElementAddr)>,
    incoming: SmallVec<[ElementAddr; 4]>,
    outgoing: SmallVec<[ElementAddr; 4]>,
    identifier: Option<String>,
}

impl Element {
    fn new(ty: ElementType, endpoints: Option<(ElementAddr, ElementAddr)>) -> Self {
        Self {
            ty,
            endpoints,
            incoming: SmallVec::new(),
            outgoing: SmallVec::new(),
            identifier: None,
        }
    }
}

#[derive(Debug)]
struct Inner {
    elements: FxHashMap<ElementAddr, Element>,
    identifiers: FxHashMap<String, ElementAddr>,
    next: ElementAddr,
}

impl Inner {
    fn new() -> Self {
        Self {
            elements: FxHashMap::default(),
            identifiers: FxHashMap::default(),
            next: ElementAddr::new(0, 1),
        }
    }

    /// Hand out the next address; erased addresses are not reused
    fn allocate(&mut self, config: &MemStoreConfig) -> StoreResult<ElementAddr> {
        if self.next.offset > config.segment_size || self.next.offset == 0 {
            self.next = ElementAddr::new(
                self.next.seg.checked_add(1).ok_or(StoreError::CapacityExceeded)?,
                1,
            );
        }
        if self.next.seg >= config.max_segments {
            return Err(StoreError::CapacityExceeded);
        }

        let addr = self.next;
        // wraps to 0 after u16::MAX, which forces a segment switch above
        self.next.offset = self.next.offset.wrapping_add(1);
        Ok(addr)
    }

    fn get(&self, addr: ElementAddr) -> StoreResult<&Element> {
        self.elements
            .get(&addr)
            .ok_or(StoreError::ElementNotFound { addr })
    }
}

/// In-memory store backend
///
/// Uses a single `RwLock` around all state; every trait call takes the lock
/// once, so individual calls are atomic. All data is lost when the instance
/// is dropped.
///
/// # Usage
///
/// ```
/// use semnet_storage::{GraphStore, MemStore};
/// use semnet_core::ElementType;
///
/// let store = MemStore::new();
/// let set = store.create_node(ElementType::NODE_CONST).unwrap();
/// let item = store.create_node(ElementType::NODE_CONST).unwrap();
/// store
///     .create_edge(ElementType::ARC_ACCESS_CONST_POS_PERM, set, item)
///     .unwrap();
/// assert!(store
///     .check_edge(set, item, ElementType::ARC_ACCESS)
///     .unwrap());
/// ```
#[derive(Debug)]
pub struct MemStore {
    config: MemStoreConfig,
    inner: RwLock<Inner>,
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemStore {
    /// Create a new store with [`MemStoreConfig::standard`] limits
    pub fn new() -> Self {
        Self {
            config: MemStoreConfig::standard(),
            inner: RwLock::new(Inner::new()),
        }
    }

    /// Create a store with explicit limits
    pub fn with_config(config: MemStoreConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            inner: RwLock::new(Inner::new()),
        })
    }

    pub fn config(&self) -> &MemStoreConfig {
        &self.config
    }

    /// Number of live elements of every kind
    pub fn element_count(&self) -> usize {
        self.inner.read().elements.len()
    }

    /// Number of live edges
    pub fn edge_count(&self) -> usize {
        self.inner
            .read()
            .elements
            .values()
            .filter(|e| e.endpoints.is_some())
            .count()
    }

    /// Clear all data
    ///
    /// Address allocation restarts at `0|1`.
    pub fn clear(&self) {
        *self.inner.write() = Inner::new();
    }

    fn insert(
        &self,
        ty: ElementType,
        endpoints: Option<(ElementAddr, ElementAddr)>,
    ) -> StoreResult<ElementAddr> {
        let mut inner = self.inner.write();

        if let Some((source, target)) = endpoints {
            inner.get(source)?;
            inner.get(target)?;
        }

        let addr = inner.allocate(&self.config)?;
        inner.elements.insert(addr, Element::new(ty, endpoints));

        if let Some((source, target)) = endpoints {
            if let Some(el) = inner.elements.get_mut(&source) {
                el.outgoing.push(addr);
            }
            if let Some(el) = inner.elements.get_mut(&target) {
                el.incoming.push(addr);
            }
        }

        Ok(addr)
    }
}

impl GraphStore for MemStore {
    fn is_element(&self, addr: ElementAddr) -> bool {
        self.inner.read().elements.contains_key(&addr)
    }

    fn element_type(&self, addr: ElementAddr) -> StoreResult<ElementType> {
        Ok(self.inner.read().get(addr)?.ty)
    }

    fn create_node(&self, ty: ElementType) -> StoreResult<ElementAddr> {
        if !ty.is_node() || !ty.has_single_kind() {
            return Err(StoreError::InvalidType {
                ty,
                reason: "not a node type",
            });
        }
        self.insert(ty, None)
    }

    fn create_link(&self) -> StoreResult<ElementAddr> {
        self.insert(ElementType::LINK_CONST, None)
    }

    fn create_edge(
        &self,
        ty: ElementType,
        source: ElementAddr,
        target: ElementAddr,
    ) -> StoreResult<ElementAddr> {
        if !ty.is_edge() || !ty.has_single_kind() {
            return Err(StoreError::InvalidType {
                ty,
                reason: "not an edge type",
            });
        }
        self.insert(ty, Some((source, target)))
    }

    fn erase_element(&self, addr: ElementAddr) -> StoreResult<bool> {
        let mut inner = self.inner.write();
        if !inner.elements.contains_key(&addr) {
            return Ok(false);
        }

        let mut pending = vec![addr];
        let mut erased = 0usize;

        while let Some(current) = pending.pop() {
            let Some(element) = inner.elements.remove(&current) else {
                continue;
            };
            erased += 1;

            // Edges incident to an erased element go with it
            pending.extend(element.incoming.iter().copied());
            pending.extend(element.outgoing.iter().copied());

            if let Some((source, target)) = element.endpoints {
                if let Some(el) = inner.elements.get_mut(&source) {
                    el.outgoing.retain(|e| *e != current);
                }
                if let Some(el) = inner.elements.get_mut(&target) {
                    el.incoming.retain(|e| *e != current);
                }
            }

            if let Some(identifier) = element.identifier {
                inner.identifiers.remove(&identifier);
            }
        }

        if erased > 1 {
            tracing::debug!(%addr, erased, "Erased element with incident edges");
        }
        Ok(true)
    }

    fn edge_endpoints(&self, edge: ElementAddr) -> StoreResult<(ElementAddr, ElementAddr)> {
        self.inner
            .read()
            .get(edge)?
            .endpoints
            .ok_or(StoreError::NotAnEdge { addr: edge })
    }

    fn iter3(&self, pattern: TriplePattern) -> StoreResult<Vec<Triple>> {
        let inner = self.inner.read();

        let candidates: Vec<ElementAddr> =
            match (pattern.source.as_addr(), pattern.target.as_addr()) {
                (Some(source), _) => match inner.elements.get(&source) {
                    Some(el) => el.outgoing.to_vec(),
                    None => return Ok(Vec::new()),
                },
                (None, Some(target)) => match inner.elements.get(&target) {
                    Some(el) => el.incoming.to_vec(),
                    None => return Ok(Vec::new()),
                },
                (None, None) => {
                    let mut edges: Vec<ElementAddr> = inner
                        .elements
                        .iter()
                        .filter(|(_, e)| e.endpoints.is_some())
                        .map(|(addr, _)| *addr)
                        .collect();
                    edges.sort_unstable();
                    edges
                }
            };

        let mut triples = Vec::new();
        for edge in candidates {
            let element = inner.get(edge)?;
            let Some((source, target)) = element.endpoints else {
                continue;
            };
            if !element.ty.matches(pattern.edge_type) {
                continue;
            }
            if !pattern.source.accepts(source, inner.get(source)?.ty) {
                continue;
            }
            if !pattern.target.accepts(target, inner.get(target)?.ty) {
                continue;
            }
            triples.push(Triple {
                source,
                edge,
                target,
            });
        }

        Ok(triples)
    }

    fn system_identifier(&self, addr: ElementAddr) -> StoreResult<Option<String>> {
        Ok(self.inner.read().get(addr)?.identifier.clone())
    }

    fn set_system_identifier(&self, addr: ElementAddr, identifier: &str) -> StoreResult<()> {
        let mut inner = self.inner.write();
        inner.get(addr)?;

        if let Some(owner) = inner.identifiers.get(identifier).copied() {
            if owner == addr {
                return Ok(());
            }
            return Err(StoreError::IdentifierInUse {
                identifier: identifier.to_string(),
                owner,
            });
        }

        let previous = inner
            .elements
            .get_mut(&addr)
            .and_then(|el| el.identifier.take());
        if let Some(previous) = previous {
            inner.identifiers.remove(&previous);
        }

        // An empty identifier just clears the old one
        if !identifier.is_empty() {
            inner.identifiers.insert(identifier.to_string(), addr);
            if let Some(el) = inner.elements.get_mut(&addr) {
                el.identifier = Some(identifier.to_string());
            }
        }

        Ok(())
    }

    fn find_by_system_identifier(&self, identifier: &str) -> StoreResult<Option<ElementAddr>> {
        Ok(self.inner.read().identifiers.get(identifier).copied())
    }
}
