//! Catalog of well-known elements (keynodes)
//!
//! The interpreter relies on a closed set of elements that the store's
//! bootstrap process creates: ten ordinal roles (`rrel_1` .. `rrel_10`), the
//! `order_role_relation` meta-relation and the `scp_operator_atomic_type`
//! marker. They are looked up once by system identifier when the store is
//! connected and then passed around as an immutable [`Keynodes`] handle.
//!
//! # Configuration
//!
//! [`KeynodeNames`] holds the identifiers to look up. It deserializes from
//! any serde format and must be validated before use:
//!
//! ```
//! use semnet_core::KeynodeNames;
//!
//! let names = KeynodeNames::standard();
//! assert!(names.validate().is_ok());
//! assert_eq!(names.order_roles[0], "rrel_1");
//! ```

use crate::error::{ConfigError, SemNetError, SemNetResult};
use crate::store::GraphStore;
use crate::types::addr::ElementAddr;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Number of ordinal-role keynodes
pub const ORDER_ROLE_COUNT: usize = 10;

/// System identifiers of the keynode catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeynodeNames {
    /// Identifiers of the ordinal roles, position 1 first
    pub order_roles: Vec<String>,
    /// Identifier of the meta-relation marking ordinal roles
    pub order_role_relation: String,
    /// Identifier of the marker relation for operator atomic types
    pub operator_atomic_type: String,
}

impl KeynodeNames {
    /// The identifiers used by the standard knowledge-base bootstrap
    pub fn standard() -> Self {
        Self {
            order_roles: (1..=ORDER_ROLE_COUNT)
                .map(|i| format!("rrel_{}", i))
                .collect(),
            order_role_relation: "order_role_relation".into(),
            operator_atomic_type: "scp_operator_atomic_type".into(),
        }
    }

    /// Validate configuration parameters
    ///
    /// Exactly ten ordinal roles are required, no identifier may be empty and
    /// all identifiers must be distinct.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.order_roles.is_empty() {
            return Err(ConfigError::MissingParameter {
                name: "order_roles",
            });
        }

        if self.order_roles.len() != ORDER_ROLE_COUNT {
            return Err(ConfigError::InvalidParameter {
                name: "order_roles",
                message: format!(
                    "expected {} identifiers, got {}",
                    ORDER_ROLE_COUNT,
                    self.order_roles.len()
                ),
            });
        }

        let mut seen = FxHashSet::default();
        for (name, identifier) in self.entries() {
            if identifier.trim().is_empty() {
                return Err(ConfigError::InvalidParameter {
                    name,
                    message: "identifier must not be empty".into(),
                });
            }
            if !seen.insert(identifier) {
                return Err(ConfigError::InvalidParameter {
                    name,
                    message: format!("duplicate identifier '{}'", identifier),
                });
            }
        }

        Ok(())
    }

    /// Every `(parameter, identifier)` pair in catalog order
    fn entries(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.order_roles
            .iter()
            .map(|s| ("order_roles", s.as_str()))
            .chain(std::iter::once((
                "order_role_relation",
                self.order_role_relation.as_str(),
            )))
            .chain(std::iter::once((
                "operator_atomic_type",
                self.operator_atomic_type.as_str(),
            )))
    }
}

/// Resolved keynode catalog
///
/// Cheap to copy and immutable. Build it with [`Keynodes::resolve`] against a
/// live store, or with [`Keynodes::new`] when the addresses are already known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keynodes {
    order_roles: [ElementAddr; ORDER_ROLE_COUNT],
    order_role_relation: ElementAddr,
    operator_atomic_type: ElementAddr,
}

impl Keynodes {
    pub fn new(
        order_roles: [ElementAddr; ORDER_ROLE_COUNT],
        order_role_relation: ElementAddr,
        operator_atomic_type: ElementAddr,
    ) -> Self {
        Self {
            order_roles,
            order_role_relation,
            operator_atomic_type,
        }
    }

    /// Look up every keynode by system identifier
    ///
    /// Fails with [`SemNetError::KeynodeNotFound`] on the first identifier the
    /// store does not know.
    pub fn resolve<S>(store: &S, names: &KeynodeNames) -> SemNetResult<Self>
    where
        S: GraphStore + ?Sized,
    {
        names.validate()?;

        let find = |identifier: &str| -> SemNetResult<ElementAddr> {
            store
                .find_by_system_identifier(identifier)?
                .ok_or_else(|| SemNetError::KeynodeNotFound {
                    identifier: identifier.to_string(),
                })
        };

        let mut order_roles = [ElementAddr::default(); ORDER_ROLE_COUNT];
        for (slot, identifier) in order_roles.iter_mut().zip(&names.order_roles) {
            *slot = find(identifier)?;
        }

        let keynodes = Self {
            order_roles,
            order_role_relation: find(&names.order_role_relation)?,
            operator_atomic_type: find(&names.operator_atomic_type)?,
        };

        tracing::debug!(
            order_role_relation = %keynodes.order_role_relation,
            operator_atomic_type = %keynodes.operator_atomic_type,
            "Keynode catalog resolved"
        );

        Ok(keynodes)
    }

    /// Ordinal role for argument position `order` (1-based)
    ///
    /// Returns `None` outside `1..=10`.
    pub fn order_role(&self, order: u8) -> Option<ElementAddr> {
        let index = usize::from(order).checked_sub(1)?;
        self.order_roles.get(index).copied()
    }

    /// All ordinal roles, position 1 first
    pub fn order_roles(&self) -> &[ElementAddr; ORDER_ROLE_COUNT] {
        &self.order_roles
    }

    pub fn order_role_relation(&self) -> ElementAddr {
        self.order_role_relation
    }

    pub fn operator_atomic_type(&self) -> ElementAddr {
        self.operator_atomic_type
    }
}
