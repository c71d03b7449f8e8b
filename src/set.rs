//! Mock set: everything accumulated across one traversal.
//!
//! A [`MockSet`] is the value the orchestration layer owns while a frontend
//! walks a translation unit: the classes keyed by simple name, the include
//! paths the emitted mocks need, and a running member count. The frontend
//! calls [`MockSet::register_class`] once per class and
//! [`MockSet::add_member`] per discovered member, in any interleaving; an
//! out-of-process frontend can instead hand over a serialized
//! [`DeclBatch`](crate::decl::DeclBatch) and replay it with
//! [`MockSet::from_batch`].
//!
//! Nothing here is global: the set is a plain value passed by the caller.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::class::MockClass;
use crate::decl::{ClassDecl, DeclBatch, MemberDecl};
use crate::member::MockMember;

/// Accumulated mock classes and include paths for one translation unit.
///
/// Classes are keyed by simple name in a `BTreeMap`, so iteration and
/// rendering order are deterministic. Include paths live in a `BTreeSet`:
/// ordered, unique, and populated entirely by the caller — the set never
/// derives include paths itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockSet {
    /// Mock classes keyed by simple name.
    classes: BTreeMap<String, MockClass>,
    /// Include paths needed to compile the emitted mocks.
    includes: BTreeSet<String>,
    /// Total members appended, duplicates included.
    member_count: usize,
}

impl MockSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a class's identity under its simple name.
    ///
    /// Members that arrived before registration are kept: they live in a
    /// sentinel entry that this call fills in. The first registration wins;
    /// registering the same name again changes nothing.
    pub fn register_class(&mut self, decl: &ClassDecl) {
        trace!("registering class {}", decl.name);
        self.classes
            .entry(decl.name.clone())
            .or_default()
            .register(decl);
    }

    /// Append a member to the class with the given simple name.
    ///
    /// A class that was never registered gets a sentinel entry, so no member
    /// is lost to call ordering. Sentinels that never receive an identity
    /// render to nothing.
    pub fn add_member(&mut self, class_name: &str, decl: &MemberDecl) {
        trace!("adding member {} to class {}", decl.name, class_name);
        self.classes
            .entry(class_name.to_string())
            .or_default()
            .push_member(MockMember::from_decl(decl));
        self.member_count += 1;
    }

    /// Record an include path the emitted mocks need.
    pub fn add_include(&mut self, path: impl Into<String>) {
        self.includes.insert(path.into());
    }

    /// Look up a class by simple name.
    pub fn get(&self, name: &str) -> Option<&MockClass> {
        self.classes.get(name)
    }

    /// Iterate over all classes in name order.
    pub fn classes(&self) -> impl Iterator<Item = &MockClass> {
        self.classes.values()
    }

    /// Iterate over the include paths, sorted and unique.
    pub fn includes(&self) -> impl Iterator<Item = &str> {
        self.includes.iter().map(String::as_str)
    }

    /// Total members appended across all classes, duplicates included.
    pub fn member_count(&self) -> usize {
        self.member_count
    }

    /// Number of classes, sentinels included.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Returns true if no class was ever touched.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Render every class to its mock block, in class-name order.
    ///
    /// Sentinel entries render to the empty string and are dropped, so the
    /// result holds exactly one block per matched class.
    pub fn render_blocks(&self) -> Vec<String> {
        debug!(
            "rendering {} classes ({} members)",
            self.classes.len(),
            self.member_count
        );
        self.classes
            .values()
            .map(MockClass::render)
            .filter(|block| !block.is_empty())
            .collect()
    }

    /// Replay a serialized traversal.
    ///
    /// Produces the same set as the equivalent sequence of
    /// [`register_class`](Self::register_class),
    /// [`add_member`](Self::add_member), and
    /// [`add_include`](Self::add_include) calls.
    pub fn from_batch(batch: &DeclBatch) -> Self {
        let mut set = MockSet::new();
        for include in &batch.includes {
            set.add_include(include.clone());
        }
        for record in &batch.classes {
            set.register_class(&record.decl);
            for member in &record.members {
                set.add_member(&record.decl.name, member);
            }
        }
        set
    }
}
