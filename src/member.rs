//! Member descriptor: one mocked constructor or method.
//!
//! A [`MockMember`] captures a single member signature and renders it as one
//! entry of a mock class body. Three shapes exist:
//!
//! - **Constructor**: a forwarding constructor that calls the real base
//!   constructor with the same arguments by name
//! - **Operator**: a `MOCK_METHODn` declaration under a surrogate name plus a
//!   concrete override of the operator that forwards to the surrogate
//! - **Plain method**: a `MOCK_METHODn` declaration under the member's own
//!   name
//!
//! Rendering is total and deterministic; equal signatures always produce
//! equal text, which is what class-level deduplication relies on.

use serde::{Deserialize, Serialize};

use crate::decl::MemberDecl;
use crate::naming;

/// One constructor or method of a mocked class.
///
/// Built once from a [`MemberDecl`] and immutable after; owned by exactly
/// one [`MockClass`](crate::class::MockClass). The three argument vectors
/// are aligned by position: `arg_types[i]`, `typed_args[i]`, and
/// `untyped_args[i]` all describe parameter `i`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockMember {
    /// Whether this member is a constructor.
    pub is_constructor: bool,
    /// Return-type spelling; empty for constructors.
    pub return_type: String,
    /// Declaration name as spelled (may contain `operator`).
    pub name: String,
    /// Type spelling per parameter.
    pub arg_types: Vec<String>,
    /// `<type> <name>` per parameter; bare type for unnamed parameters.
    pub typed_args: Vec<String>,
    /// Parameter names only, used for call forwarding.
    pub untyped_args: Vec<String>,
}

impl MockMember {
    /// Build a descriptor from declaration facts.
    ///
    /// Spellings are taken verbatim; a constructor's return type is never
    /// kept even if the frontend filled one in. Unnamed parameters get a
    /// bare-type `typed_args` entry and an empty `untyped_args` entry.
    pub fn from_decl(decl: &MemberDecl) -> Self {
        let mut arg_types = Vec::with_capacity(decl.params.len());
        let mut typed_args = Vec::with_capacity(decl.params.len());
        let mut untyped_args = Vec::with_capacity(decl.params.len());

        for param in &decl.params {
            arg_types.push(param.ty.clone());
            typed_args.push(if param.name.is_empty() {
                param.ty.clone()
            } else {
                format!("{} {}", param.ty, param.name)
            });
            untyped_args.push(param.name.clone());
        }

        MockMember {
            is_constructor: decl.is_constructor,
            return_type: if decl.is_constructor {
                String::new()
            } else {
                decl.return_type.clone()
            },
            name: decl.name.clone(),
            arg_types,
            typed_args,
            untyped_args,
        }
    }

    /// Render this member as one entry of a mock class body.
    ///
    /// Constructors render as a forwarding constructor:
    ///
    /// ```text
    /// MockFoo(int x, int y) : Foo(x, y) {}
    /// ```
    ///
    /// Operators render as a surrogate mock plus a forwarding override, the
    /// two lines joined at the class body's member indentation:
    ///
    /// ```text
    /// MOCK_METHOD1(Operator1466947384, Foo(int));
    ///         virtual Foo operator+(int rhs) { return Operator1466947384(rhs); }
    /// ```
    ///
    /// Everything else renders as a plain mock-method declaration, arity in
    /// the macro name and argument types only (no names) in the signature:
    ///
    /// ```text
    /// MOCK_METHOD2(compute, double(int, float));
    /// ```
    pub fn render(&self) -> String {
        debug_assert!(
            self.arg_types.len() == self.typed_args.len()
                && self.typed_args.len() == self.untyped_args.len(),
            "argument vectors must stay aligned"
        );

        if self.is_constructor {
            return format!(
                "Mock{0}({1}) : {0}({2}) {{}}",
                self.name,
                self.typed_args.join(", "),
                self.untyped_args.join(", ")
            );
        }

        // Overloaded operators cannot be mocked under their own names, so
        // the mock lives under a surrogate and a real override forwards the
        // operator call to it.
        if naming::is_operator(&self.name) {
            let surrogate =
                naming::operator_surrogate(&self.name, &self.return_type, &self.arg_types);
            return format!(
                "MOCK_METHOD{0}({1}, {2}({3}));\n        virtual {2} {4}({5}) {{ return {1}({6}); }}",
                self.typed_args.len(),
                surrogate,
                self.return_type,
                self.arg_types.join(", "),
                self.name,
                self.typed_args.join(", "),
                self.untyped_args.join(", ")
            );
        }

        format!(
            "MOCK_METHOD{}({}, {}({}));",
            self.typed_args.len(),
            self.name,
            self.return_type,
            self.arg_types.join(", ")
        )
    }
}

impl std::fmt::Display for MockMember {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}
