//! Class descriptor: a mock class and its accumulated members.
//!
//! A [`MockClass`] collects the [`MockMember`]s discovered for one class
//! while a frontend walks a translation unit, then renders the complete
//! `class Mock<Name> : public <QualifiedName>` block. Member order in the
//! block is fixed at render time (sort, dedup, reverse over the rendered
//! strings), so the output never depends on traversal order.

use serde::{Deserialize, Serialize};

use crate::decl::ClassDecl;
use crate::member::MockMember;
use crate::text;

/// A class selected for mocking, with every member discovered for it.
///
/// The `Default` value (all fields empty) is the sentinel for a class that
/// was touched during traversal but never matched a real declaration; it
/// renders to the empty string. Members may be appended to a sentinel before
/// its identity arrives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockClass {
    /// Simple class name; empty for the sentinel.
    pub display_name: String,
    /// Namespaces joined with `::` plus the display name. Equals
    /// `display_name` when the class has no enclosing namespace.
    pub qualified_name: String,
    /// Rendered `template<...>` prefix including its trailing separator, or
    /// empty for non-template classes.
    pub template_header: String,
    /// Accumulated members in discovery order.
    pub members: Vec<MockMember>,
}

impl MockClass {
    /// Build a descriptor from class declaration facts.
    pub fn from_decl(decl: &ClassDecl) -> Self {
        let mut class = MockClass::default();
        class.register(decl);
        class
    }

    /// Fill in the identity of a class known so far only as a sentinel.
    ///
    /// Members appended before registration are kept. A class that already
    /// has an identity is left untouched, so the first registration wins and
    /// repeated registrations are no-ops.
    pub fn register(&mut self, decl: &ClassDecl) {
        if !self.display_name.is_empty() {
            return;
        }
        self.display_name = decl.name.clone();
        self.qualified_name = text::qualify(&decl.namespaces, &decl.name);
        self.template_header = text::template_header(&decl.template_params);
    }

    /// Append a member. Duplicates are accepted here and filtered at render
    /// time, so revisiting a declaration never changes the final output.
    pub fn push_member(&mut self, member: MockMember) {
        self.members.push(member);
    }

    /// Render the complete mock class block, or the empty string for the
    /// sentinel.
    ///
    /// Members render individually, then the rendered strings are sorted,
    /// deduplicated by exact text, and reversed. Text-level deduplication
    /// means plain methods differing only in parameter names collapse to one
    /// entry, while constructors differing only in parameter names stay
    /// distinct (their renderings spell the names out).
    pub fn render(&self) -> String {
        if self.display_name.is_empty() {
            return String::new();
        }

        let rendered = self.members.iter().map(MockMember::render).collect();
        let ordered = text::sorted_unique_desc(rendered);

        format!(
            "    {}class Mock{} : public {}\n    {{\n      public:\n        {}\n    }};\n",
            self.template_header,
            self.display_name,
            self.qualified_name,
            ordered.join("\n        ")
        )
    }
}

impl std::fmt::Display for MockClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}
