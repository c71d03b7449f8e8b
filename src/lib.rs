//! Mock-class synthesis from parsed C++ declaration facts.
//!
//! `mocksmith` turns structured facts about C++ classes (names, template
//! parameters, constructor and method signatures) into Google-Mock mock
//! class definitions ready for test code. A frontend (typically a libclang
//! traversal, not part of this crate) classifies each relevant declaration
//! and hands over plain spellings; this crate handles the parts that make
//! the emitted text compile:
//!
//! - Constructor forwarding to the real base constructor
//! - `MOCK_METHODn` declarations with the GMock arity tag
//! - Surrogate naming for operator overloads, which GMock cannot mock
//!   under their own names
//! - Text-level deduplication and deterministic member ordering
//! - Template-parameter propagation and namespace qualification
//!
//! # Quick Start
//!
//! ```
//! use mocksmith::{ClassDecl, MemberDecl, MockSet};
//!
//! let mut set = MockSet::new();
//! set.register_class(&ClassDecl::new("Widget").with_namespace("app"));
//! set.add_member(
//!     "Widget",
//!     &MemberDecl::constructor("Widget").with_param("int", "id"),
//! );
//! set.add_member(
//!     "Widget",
//!     &MemberDecl::method("resize", "void")
//!         .with_param("int", "w")
//!         .with_param("int", "h"),
//! );
//!
//! let blocks = set.render_blocks();
//! assert!(blocks[0].contains("class MockWidget : public app::Widget"));
//! assert!(blocks[0].contains("MockWidget(int id) : Widget(id) {}"));
//! assert!(blocks[0].contains("MOCK_METHOD2(resize, void(int, int));"));
//! ```
//!
//! # Feeding the synthesizer
//!
//! In-process frontends call [`MockSet::register_class`] and
//! [`MockSet::add_member`] as they walk the AST. Out-of-process frontends
//! serialize a [`DeclBatch`] to JSON instead and the consumer replays it
//! with [`MockSet::from_batch`]; both routes produce identical output.

pub mod class;
pub mod decl;
pub mod member;
pub mod naming;
pub mod set;
pub mod text;

pub use class::MockClass;
pub use decl::{ClassDecl, ClassRecord, DeclBatch, DeclError, MemberDecl, ParamDecl};
pub use member::MockMember;
pub use set::MockSet;
