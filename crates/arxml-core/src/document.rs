//! Package tree, lookup and path derivation.
//!
//! A [`Document`] owns every package and element in two arenas. Objects are
//! addressed by [`PackageId`] and [`ElementId`]; parent links are arena
//! indices, so moving an object to another package only rewrites indices.
//!
//! Within one package, sub-packages and elements share a single short-name
//! namespace kept in insertion order. The reference path of an object is
//! derived from its parent chain on every call and is never stored.
//!
//! # Example
//!
//! ```
//! use arxml_core::{document::Document, unit::Unit};
//!
//! let mut document = Document::new();
//! let units = document.make_packages("/Shared/Units").unwrap();
//! let kelvin = document.append_element(units, Unit::new("Kelvin").unwrap()).unwrap();
//! assert_eq!(document.reference(kelvin).as_deref(), Some("/Shared/Units/Kelvin"));
//!
//! let other = document.make_packages("/Physics").unwrap();
//! document.move_element(kelvin, other).unwrap();
//! assert_eq!(document.reference(kelvin).as_deref(), Some("/Physics/Kelvin"));
//! ```

use indexmap::IndexMap;
use log::debug;

use crate::{
    element::Element,
    error::{ModelError, Result},
    identifiable::{Identifiable, referrable},
    reference::Reference,
};

/// Default AUTOSAR schema revision, rendered as `AUTOSAR_00051.xsd`.
pub const DEFAULT_SCHEMA_VERSION: u32 = 51;

// =============================================================================
// Handles
// =============================================================================

/// Handle of a package inside a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageId(usize);

/// Handle of an element inside a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

/// Handle of either a package or an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeId {
    Package(PackageId),
    Element(ElementId),
}

impl From<PackageId> for NodeId {
    fn from(id: PackageId) -> Self {
        Self::Package(id)
    }
}

impl From<ElementId> for NodeId {
    fn from(id: ElementId) -> Self {
        Self::Element(id)
    }
}

impl NodeId {
    pub fn as_package(self) -> Option<PackageId> {
        match self {
            Self::Package(id) => Some(id),
            Self::Element(_) => None,
        }
    }

    pub fn as_element(self) -> Option<ElementId> {
        match self {
            Self::Element(id) => Some(id),
            Self::Package(_) => None,
        }
    }
}

// =============================================================================
// Package
// =============================================================================

/// A named container of sub-packages and elements, rendered as `AR-PACKAGE`.
///
/// A package built with [`Package::new`] is detached and empty. It receives
/// children only after it is added to a [`Document`].
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    identifiable: Identifiable,
    parent: Option<PackageId>,
    items: IndexMap<String, NodeId>,
}

impl Package {
    pub fn new(short_name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            identifiable: Identifiable::new(short_name)?,
            parent: None,
            items: IndexMap::new(),
        })
    }

    /// The owning package, or `None` for a root package.
    pub fn parent(&self) -> Option<PackageId> {
        self.parent
    }

    /// Looks up a direct child by short name.
    pub fn get(&self, short_name: &str) -> Option<NodeId> {
        self.items.get(short_name).copied()
    }

    /// All children in insertion order.
    pub fn items(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.items.values().copied()
    }

    /// Child elements in insertion order, rendered under `ELEMENTS`.
    pub fn element_ids(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.items().filter_map(NodeId::as_element)
    }

    /// Child packages in insertion order, rendered under `AR-PACKAGES`.
    pub fn package_ids(&self) -> impl Iterator<Item = PackageId> + '_ {
        self.items().filter_map(NodeId::as_package)
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the package has no children.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

referrable!(Package, ArPackage);

/// Item accepted by [`Document::append`].
#[derive(Debug, Clone, PartialEq)]
pub enum PackageItem {
    Package(Package),
    Element(Element),
}

impl From<Package> for PackageItem {
    fn from(package: Package) -> Self {
        Self::Package(package)
    }
}

impl From<Element> for PackageItem {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

#[derive(Debug, Clone, PartialEq)]
struct ElementSlot {
    element: Element,
    parent: PackageId,
}

// =============================================================================
// Document
// =============================================================================

/// Owner of the package tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    schema_version: u32,
    packages: Vec<Package>,
    elements: Vec<ElementSlot>,
    roots: IndexMap<String, PackageId>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            schema_version: DEFAULT_SCHEMA_VERSION,
            packages: Vec::new(),
            elements: Vec::new(),
            roots: IndexMap::new(),
        }
    }

    pub fn with_schema_version(mut self, version: u32) -> Self {
        self.schema_version = version;
        self
    }

    pub fn schema_version(&self) -> u32 {
        self.schema_version
    }

    /// Schema file identifier used in `xsi:schemaLocation`.
    pub fn schema_file(&self) -> String {
        format!("AUTOSAR_{:05}.xsd", self.schema_version)
    }

    /// Root packages in insertion order.
    pub fn root_packages(&self) -> impl Iterator<Item = PackageId> + '_ {
        self.roots.values().copied()
    }

    pub fn package(&self, id: PackageId) -> Option<&Package> {
        self.packages.get(id.0)
    }

    pub fn package_mut(&mut self, id: PackageId) -> Option<&mut Package> {
        self.packages.get_mut(id.0)
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.0).map(|slot| &slot.element)
    }

    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(id.0).map(|slot| &mut slot.element)
    }

    /// The package owning `node`, or `None` for a root package or unknown id.
    pub fn parent(&self, node: impl Into<NodeId>) -> Option<PackageId> {
        match node.into() {
            NodeId::Package(id) => self.package(id)?.parent,
            NodeId::Element(id) => self.elements.get(id.0).map(|slot| slot.parent),
        }
    }

    /// Short name of `node`.
    pub fn short_name(&self, node: impl Into<NodeId>) -> Option<&str> {
        match node.into() {
            NodeId::Package(id) => self.package(id).map(Package::short_name),
            NodeId::Element(id) => self.element(id).map(Element::short_name),
        }
    }

    fn checked_package(&self, id: PackageId) -> Result<&Package> {
        self.package(id)
            .ok_or_else(|| ModelError::UnknownNode(format!("{id:?}")))
    }

    fn checked_package_mut(&mut self, id: PackageId) -> Result<&mut Package> {
        self.packages
            .get_mut(id.0)
            .ok_or_else(|| ModelError::UnknownNode(format!("{id:?}")))
    }

    fn ensure_free(&self, parent: Option<PackageId>, name: &str) -> Result<()> {
        let taken = match parent {
            Some(parent) => self.checked_package(parent)?.items.contains_key(name),
            None => self.roots.contains_key(name),
        };
        if taken {
            let container = parent
                .and_then(|parent| self.reference(parent))
                .unwrap_or_else(|| "/".to_string());
            return Err(ModelError::DuplicateName {
                container,
                name: name.to_string(),
            });
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Insertion
    // -------------------------------------------------------------------------

    /// Adds a root package.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DuplicateName`] if a root package with the same
    /// short name exists. The document is left unchanged.
    pub fn append_package(&mut self, package: Package) -> Result<PackageId> {
        self.insert_package(None, package)
    }

    /// Adds a package under `parent`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DuplicateName`] on a short-name collision and
    /// [`ModelError::UnknownNode`] for an unknown parent.
    pub fn append_subpackage(&mut self, parent: PackageId, package: Package) -> Result<PackageId> {
        self.insert_package(Some(parent), package)
    }

    /// Adds an element under `parent`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DuplicateName`] on a short-name collision and
    /// [`ModelError::UnknownNode`] for an unknown parent.
    pub fn append_element(
        &mut self,
        parent: PackageId,
        element: impl Into<Element>,
    ) -> Result<ElementId> {
        let element = element.into();
        let name = element.short_name().to_string();
        self.ensure_free(Some(parent), &name)?;

        let id = ElementId(self.elements.len());
        self.elements.push(ElementSlot { element, parent });
        self.checked_package_mut(parent)?
            .items
            .insert(name.clone(), NodeId::Element(id));

        debug!(name, parent = parent.0; "Element appended");
        Ok(id)
    }

    /// Adds a package or an element under `parent`.
    ///
    /// # Errors
    ///
    /// See [`append_subpackage`](Self::append_subpackage) and
    /// [`append_element`](Self::append_element).
    pub fn append(&mut self, parent: PackageId, item: impl Into<PackageItem>) -> Result<NodeId> {
        match item.into() {
            PackageItem::Package(package) => self.append_subpackage(parent, package).map(NodeId::from),
            PackageItem::Element(element) => self.append_element(parent, element).map(NodeId::from),
        }
    }

    fn insert_package(&mut self, parent: Option<PackageId>, mut package: Package) -> Result<PackageId> {
        let name = package.short_name().to_string();
        self.ensure_free(parent, &name)?;

        let id = PackageId(self.packages.len());
        package.parent = parent;
        package.items.clear();
        self.packages.push(package);
        match parent {
            Some(parent) => {
                self.checked_package_mut(parent)?
                    .items
                    .insert(name.clone(), NodeId::Package(id));
            }
            None => {
                self.roots.insert(name.clone(), id);
            }
        }

        debug!(name, parent:? = parent; "Package appended");
        Ok(id)
    }

    /// Creates or reuses the chain of packages named by `path` and returns
    /// the deepest one. A leading `/` is optional.
    ///
    /// # Errors
    ///
    /// - [`ModelError::InvalidShortName`] if `path` has no segments.
    /// - [`ModelError::NotAPackage`] if a segment names an element.
    pub fn make_packages(&mut self, path: &str) -> Result<PackageId> {
        self.make_packages_from(None, path)
    }

    /// Like [`make_packages`](Self::make_packages), relative to `parent`.
    ///
    /// # Errors
    ///
    /// See [`make_packages`](Self::make_packages).
    pub fn make_packages_in(&mut self, parent: PackageId, path: &str) -> Result<PackageId> {
        self.checked_package(parent)?;
        self.make_packages_from(Some(parent), path)
    }

    fn make_packages_from(&mut self, start: Option<PackageId>, path: &str) -> Result<PackageId> {
        let segments: Vec<&str> = split_path(path).collect();
        if segments.is_empty() {
            return Err(ModelError::InvalidShortName(path.to_string()));
        }

        let mut current = start;
        for segment in segments {
            let existing = match current {
                Some(parent) => self.checked_package(parent)?.get(segment),
                None => self.roots.get(segment).copied().map(NodeId::Package),
            };
            let next = match existing {
                Some(NodeId::Package(id)) => id,
                Some(NodeId::Element(id)) => {
                    return Err(ModelError::NotAPackage {
                        path: self.reference(id).unwrap_or_else(|| segment.to_string()),
                    });
                }
                None => self.insert_package(current, Package::new(segment)?)?,
            };
            current = Some(next);
        }

        current.ok_or_else(|| ModelError::InvalidShortName(path.to_string()))
    }

    // -------------------------------------------------------------------------
    // Lookup
    // -------------------------------------------------------------------------

    /// Resolves a path from the document root. A leading `/` is optional.
    ///
    /// Returns `None` if any segment is missing or passes through an element.
    pub fn find(&self, path: &str) -> Option<NodeId> {
        let mut segments = split_path(path);
        let first = segments.next()?;
        let root = NodeId::Package(*self.roots.get(first)?);
        self.walk(root, segments)
    }

    /// Resolves a path relative to `parent`.
    pub fn find_in(&self, parent: PackageId, path: &str) -> Option<NodeId> {
        self.package(parent)?;
        self.walk(NodeId::Package(parent), split_path(path))
    }

    fn walk<'p>(&self, start: NodeId, segments: impl Iterator<Item = &'p str>) -> Option<NodeId> {
        segments.fold(Some(start), |node, segment| {
            let package = node?.as_package()?;
            self.package(package)?.get(segment)
        })
    }

    /// Derives the reference path of `node`, e.g. `/Pkg/Sub/Name`.
    ///
    /// The path is recomputed from the current parent links on every call.
    /// Returns `None` for an unknown id.
    pub fn reference(&self, node: impl Into<NodeId>) -> Option<String> {
        let node = node.into();
        let mut names = vec![self.short_name(node)?];
        let mut parent = self.parent(node);
        while let Some(id) = parent {
            let package = self.package(id)?;
            names.push(package.short_name());
            parent = package.parent;
        }
        names.reverse();
        Some(format!("/{}", names.join("/")))
    }

    /// Creates a reference of type `R` pointing to `element`.
    ///
    /// # Errors
    ///
    /// - [`ModelError::UnknownNode`] for an unknown id.
    /// - [`ModelError::InvalidDestination`] if `R` cannot point to the
    ///   element's kind.
    pub fn make_ref<R: Reference>(&self, element: ElementId) -> Result<R> {
        let target = self
            .element(element)
            .ok_or_else(|| ModelError::UnknownNode(format!("{element:?}")))?;
        let path = self
            .reference(element)
            .ok_or_else(|| ModelError::UnknownNode(format!("{element:?}")))?;
        R::from_parts(path, target.destination_kind())
    }

    /// Resolves a reference against the current tree.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Unresolved`] if the path does not name an element
    /// of the reference's destination kind.
    pub fn resolve<R: Reference>(&self, reference: &R) -> Result<ElementId> {
        self.find(reference.path())
            .and_then(NodeId::as_element)
            .filter(|id| {
                self.element(*id)
                    .is_some_and(|element| element.destination_kind() == reference.destination())
            })
            .ok_or_else(|| ModelError::Unresolved {
                path: reference.path().to_string(),
            })
    }

    // -------------------------------------------------------------------------
    // Re-parenting
    // -------------------------------------------------------------------------

    /// Moves an element to another package.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DuplicateName`] if `target` already holds the
    /// name and [`ModelError::UnknownNode`] for unknown ids. Nothing is
    /// changed on error.
    pub fn move_element(&mut self, element: ElementId, target: PackageId) -> Result<()> {
        let slot = self
            .elements
            .get(element.0)
            .ok_or_else(|| ModelError::UnknownNode(format!("{element:?}")))?;
        let source = slot.parent;
        if source == target {
            return Ok(());
        }
        let name = slot.element.short_name().to_string();
        self.ensure_free(Some(target), &name)?;

        self.checked_package_mut(source)?.items.shift_remove(&name);
        self.checked_package_mut(target)?
            .items
            .insert(name.clone(), NodeId::Element(element));
        if let Some(slot) = self.elements.get_mut(element.0) {
            slot.parent = target;
        }

        debug!(name, from = source.0, to = target.0; "Element moved");
        Ok(())
    }

    /// Moves a package under `target`, or to the root for `None`.
    ///
    /// # Errors
    ///
    /// - [`ModelError::InvalidMove`] if `target` is the package itself or one
    ///   of its descendants.
    /// - [`ModelError::DuplicateName`] if the destination holds the name.
    /// - [`ModelError::UnknownNode`] for unknown ids.
    pub fn move_package(&mut self, package: PackageId, target: Option<PackageId>) -> Result<()> {
        let current = self.checked_package(package)?;
        let source = current.parent;
        let name = current.short_name().to_string();
        if source == target {
            return Ok(());
        }

        if let Some(target) = target {
            self.checked_package(target)?;
            if self.is_same_or_descendant(target, package) {
                return Err(ModelError::InvalidMove {
                    package: self.reference(package).unwrap_or_default(),
                    target: self.reference(target).unwrap_or_default(),
                });
            }
        }
        self.ensure_free(target, &name)?;

        match source {
            Some(source) => {
                self.checked_package_mut(source)?.items.shift_remove(&name);
            }
            None => {
                self.roots.shift_remove(&name);
            }
        }
        match target {
            Some(target) => {
                self.checked_package_mut(target)?
                    .items
                    .insert(name.clone(), NodeId::Package(package));
            }
            None => {
                self.roots.insert(name.clone(), package);
            }
        }
        self.checked_package_mut(package)?.parent = target;

        debug!(name, to:? = target; "Package moved");
        Ok(())
    }

    fn is_same_or_descendant(&self, candidate: PackageId, ancestor: PackageId) -> bool {
        let mut current = Some(candidate);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.package(id).and_then(Package::parent);
        }
        false
    }
}

fn split_path(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        compu::CompuMethod,
        enumeration::DestinationKind,
        reference::{CompuMethodRef, UnitRef},
        unit::Unit,
    };

    #[test]
    fn test_make_packages_is_idempotent() {
        let mut document = Document::new();
        let first = document.make_packages("/A/B").unwrap();
        let second = document.make_packages("A/B").unwrap();
        assert_eq!(first, second);
        assert_eq!(document.root_packages().count(), 1);

        let deeper = document.make_packages("/A/B/C").unwrap();
        assert_eq!(document.parent(deeper), Some(first));
        assert_eq!(document.reference(deeper).as_deref(), Some("/A/B/C"));
    }

    #[test]
    fn test_make_packages_in() {
        let mut document = Document::new();
        let base = document.make_packages("/Root").unwrap();
        let leaf = document.make_packages_in(base, "X/Y").unwrap();
        assert_eq!(document.reference(leaf).as_deref(), Some("/Root/X/Y"));
        assert!(matches!(
            document.make_packages(""),
            Err(ModelError::InvalidShortName(_))
        ));
    }

    #[test]
    fn test_make_packages_through_element_fails() {
        let mut document = Document::new();
        let package = document.make_packages("/Pkg").unwrap();
        document
            .append_element(package, CompuMethod::new("CM").unwrap())
            .unwrap();
        assert_eq!(
            document.make_packages("/Pkg/CM/Sub"),
            Err(ModelError::NotAPackage {
                path: "/Pkg/CM".to_string()
            })
        );
    }

    #[test]
    fn test_duplicate_names_are_rejected_without_mutation() {
        let mut document = Document::new();
        let package = document.make_packages("/Pkg").unwrap();
        document
            .append_element(package, CompuMethod::new("X").unwrap())
            .unwrap();
        let before = document.clone();

        let result = document.append_element(package, Unit::new("X").unwrap());
        assert_eq!(
            result,
            Err(ModelError::DuplicateName {
                container: "/Pkg".to_string(),
                name: "X".to_string(),
            })
        );
        assert!(document.append_subpackage(package, Package::new("X").unwrap()).is_err());
        assert!(document.append_package(Package::new("Pkg").unwrap()).is_err());
        assert_eq!(document, before);
    }

    #[test]
    fn test_append_dispatches_on_item_kind() {
        let mut document = Document::new();
        let package = document.append_package(Package::new("Pkg").unwrap()).unwrap();

        let sub = document.append(package, Package::new("Sub").unwrap()).unwrap();
        let element = document
            .append(package, Element::from(Unit::new("U").unwrap()))
            .unwrap();

        assert!(matches!(sub, NodeId::Package(_)));
        assert!(matches!(element, NodeId::Element(_)));
        let package = document.package(package).unwrap();
        assert_eq!(package.element_ids().count(), 1);
        assert_eq!(package.package_ids().count(), 1);
    }

    #[test]
    fn test_find() {
        let mut document = Document::new();
        let package = document.make_packages("/A/B").unwrap();
        let element = document
            .append_element(package, Unit::new("C").unwrap())
            .unwrap();

        assert_eq!(document.find("/A/B/C"), Some(NodeId::Element(element)));
        assert_eq!(document.find("A/B"), Some(NodeId::Package(package)));
        assert_eq!(document.find("/A/X/C"), None);
        assert_eq!(document.find("/A/B/C/D"), None);
        assert_eq!(document.find(""), None);

        let a = document.find("/A").and_then(NodeId::as_package).unwrap();
        assert_eq!(document.find_in(a, "B/C"), Some(NodeId::Element(element)));
    }

    #[test]
    fn test_reference_follows_moves() {
        let mut document = Document::new();
        let b = document.make_packages("/A/B").unwrap();
        let c = document.append_element(b, Unit::new("C").unwrap()).unwrap();
        assert_eq!(document.reference(c).as_deref(), Some("/A/B/C"));

        let other = document.make_packages("/Other").unwrap();
        document.move_element(c, other).unwrap();
        assert_eq!(document.reference(c).as_deref(), Some("/Other/C"));
        assert_eq!(document.find("/A/B/C"), None);
        assert_eq!(document.package(b).unwrap().len(), 0);

        let a = document.find("/A").and_then(NodeId::as_package).unwrap();
        document.move_package(other, Some(a)).unwrap();
        assert_eq!(document.reference(c).as_deref(), Some("/A/Other/C"));
        assert_eq!(document.root_packages().count(), 1);
    }

    #[test]
    fn test_move_package_rejects_cycles() {
        let mut document = Document::new();
        let b = document.make_packages("/A/B").unwrap();
        let a = document.parent(b).unwrap();

        assert!(matches!(
            document.move_package(a, Some(b)),
            Err(ModelError::InvalidMove { .. })
        ));
        assert!(matches!(
            document.move_package(a, Some(a)),
            Err(ModelError::InvalidMove { .. })
        ));

        document.move_package(b, None).unwrap();
        assert_eq!(document.reference(b).as_deref(), Some("/B"));
        assert_eq!(document.root_packages().count(), 2);
    }

    #[test]
    fn test_move_element_rejects_duplicates() {
        let mut document = Document::new();
        let first = document.make_packages("/P1").unwrap();
        let second = document.make_packages("/P2").unwrap();
        let x1 = document.append_element(first, Unit::new("X").unwrap()).unwrap();
        document.append_element(second, Unit::new("X").unwrap()).unwrap();

        assert!(matches!(
            document.move_element(x1, second),
            Err(ModelError::DuplicateName { .. })
        ));
        assert_eq!(document.reference(x1).as_deref(), Some("/P1/X"));
    }

    #[test]
    fn test_make_ref_and_resolve() {
        let mut document = Document::new();
        let package = document.make_packages("/Pkg").unwrap();
        let method = document
            .append_element(package, CompuMethod::new("CM").unwrap())
            .unwrap();

        let reference: CompuMethodRef = document.make_ref(method).unwrap();
        assert_eq!(reference.to_string(), "/Pkg/CM");
        assert_eq!(reference.destination(), DestinationKind::CompuMethod);
        assert_eq!(document.resolve(&reference), Ok(method));

        assert!(matches!(
            document.make_ref::<UnitRef>(method),
            Err(ModelError::InvalidDestination { .. })
        ));
        assert_eq!(
            document.resolve(&UnitRef::from_path("/Pkg/CM")),
            Err(ModelError::Unresolved {
                path: "/Pkg/CM".to_string()
            })
        );
    }

    #[test]
    fn test_schema_file() {
        assert_eq!(Document::new().schema_file(), "AUTOSAR_00051.xsd");
        assert_eq!(
            Document::new().with_schema_version(46).schema_file(),
            "AUTOSAR_00046.xsd"
        );
    }
}
