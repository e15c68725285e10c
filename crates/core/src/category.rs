//! Category tree primitives: ids, id paths and nodes

use crate::error::CatalogError;
use crate::scope::StoreId;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// Identifier assigned to a category by the catalog store
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CategoryId(pub u64);

impl CategoryId {
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Big-endian key bytes (keeps sled iteration in id order)
    pub fn to_key(self) -> [u8; 8] {
        self.0.to_be_bytes()
    }

    pub fn from_key(bytes: &[u8]) -> Option<Self> {
        let bytes: [u8; 8] = bytes.try_into().ok()?;
        Some(Self(u64::from_be_bytes(bytes)))
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ancestor ids plus self, root-first (`1/2/14/37`)
///
/// Uses SmallVec since catalog trees are rarely deeper than eight levels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Vec<CategoryId>", into = "Vec<CategoryId>")]
pub struct IdPath(SmallVec<[CategoryId; 8]>);

impl IdPath {
    /// Path of a top-level node
    pub fn root(id: CategoryId) -> Self {
        let mut ids = SmallVec::new();
        ids.push(id);
        Self(ids)
    }

    pub fn from_ids(ids: impl IntoIterator<Item = CategoryId>) -> Self {
        Self(ids.into_iter().collect())
    }

    /// Path of a new child of this node
    pub fn child(&self, id: CategoryId) -> Self {
        let mut path = self.clone();
        path.push(id);
        path
    }

    pub fn push(&mut self, id: CategoryId) {
        self.0.push(id);
    }

    /// Id of the node this path leads to
    pub fn id(&self) -> Option<CategoryId> {
        self.0.last().copied()
    }

    pub fn parent_id(&self) -> Option<CategoryId> {
        let len = self.0.len();
        if len < 2 {
            return None;
        }
        Some(self.0[len - 2])
    }

    /// Depth below the global root (the global root itself is level 0)
    pub fn level(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn starts_with(&self, prefix: &IdPath) -> bool {
        self.0.starts_with(&prefix.0)
    }

    /// Ids below `ancestor`, or `None` when this path is not inside it
    pub fn strip_prefix(&self, ancestor: &IdPath) -> Option<&[CategoryId]> {
        self.0.strip_prefix(ancestor.0.as_slice())
    }

    /// Strict descendant check (a path is not its own descendant)
    pub fn is_descendant_of(&self, ancestor: &IdPath) -> bool {
        self.0.len() > ancestor.0.len() && self.starts_with(ancestor)
    }
}

impl From<Vec<CategoryId>> for IdPath {
    fn from(ids: Vec<CategoryId>) -> Self {
        Self(SmallVec::from_vec(ids))
    }
}

impl From<IdPath> for Vec<CategoryId> {
    fn from(path: IdPath) -> Self {
        path.0.into_vec()
    }
}

impl fmt::Display for IdPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, id) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            write!(f, "{}", id)?;
        }
        Ok(())
    }
}

impl FromStr for IdPath {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(CatalogError::InvalidIdPath(s.to_string()));
        }

        s.split('/')
            .map(|part| {
                part.parse::<u64>()
                    .map(CategoryId)
                    .map_err(|_| CatalogError::InvalidIdPath(s.to_string()))
            })
            .collect::<Result<SmallVec<_>, _>>()
            .map(Self)
    }
}

/// How a category page renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayMode {
    /// Product listing only
    Products,
    /// Static block only
    Page,
    /// Static block followed by the product listing
    ProductsAndPage,
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DisplayMode::Products => "PRODUCTS",
            DisplayMode::Page => "PAGE",
            DisplayMode::ProductsAndPage => "PRODUCTS_AND_PAGE",
        };
        f.write_str(label)
    }
}

/// Display and indexing attributes stored with a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryAttributes {
    pub is_active: bool,
    pub is_anchor: bool,
    pub display_mode: DisplayMode,
    pub meta_title: Option<String>,
}

impl CategoryAttributes {
    /// Defaults applied to categories created by an import
    ///
    /// Active, anchor-enabled, product listing, meta title equal to the name.
    pub fn imported(name: &str) -> Self {
        Self {
            is_active: true,
            is_anchor: true,
            display_mode: DisplayMode::Products,
            meta_title: Some(name.to_string()),
        }
    }
}

impl Default for CategoryAttributes {
    fn default() -> Self {
        Self {
            is_active: true,
            is_anchor: false,
            display_mode: DisplayMode::Products,
            meta_title: None,
        }
    }
}

/// A category as seen from one store scope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryNode {
    pub id: CategoryId,
    pub id_path: IdPath,
    /// Name resolved for the requesting store (admin scope as fallback)
    pub name: String,
}

/// Request to persist a new category
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
    /// Id path of the parent; the new id is appended by the store
    pub parent: IdPath,
    pub store: StoreId,
    pub attributes: CategoryAttributes,
}

impl NewCategory {
    /// A category created by the importer under `parent`
    pub fn imported(name: &str, parent: IdPath, store: StoreId) -> Self {
        Self {
            name: name.to_string(),
            parent,
            store,
            attributes: CategoryAttributes::imported(name),
        }
    }
}
