//! Declaration facts handed to the synthesizer by a frontend.
//!
//! A frontend (typically a libclang traversal) walks a translation unit and
//! reduces every relevant declaration to the plain facts in this module:
//! spelled names, return-type spellings, and ordered parameter type/name
//! pairs. The synthesizer never sees an AST.
//!
//! Batches serialize to JSON so an out-of-process frontend can hand work
//! over as a file:
//!
//! ```json
//! {
//!   "includes": ["gmock/gmock.h", "widget.h"],
//!   "classes": [
//!     {
//!       "class": { "name": "Widget", "namespaces": ["app"] },
//!       "members": [
//!         { "is_constructor": true, "name": "Widget",
//!           "params": [{ "type": "int", "name": "id" }] },
//!         { "name": "resize", "return_type": "void",
//!           "params": [{ "type": "int", "name": "w" }] }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! All fields besides names are defaulted, so hand-written batches stay
//! terse. Unnamed parameters carry an empty `name`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for declaration batch decoding.
#[derive(Debug, Error)]
pub enum DeclError {
    /// The batch was not valid JSON for the declaration schema.
    #[error("invalid declaration JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// One parameter of a constructor or method, as spelled in source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamDecl {
    /// Type spelling, taken verbatim from the frontend.
    #[serde(rename = "type")]
    pub ty: String,
    /// Parameter name; empty for unnamed parameters.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
}

impl ParamDecl {
    /// Create a named parameter.
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        ParamDecl {
            ty: ty.into(),
            name: name.into(),
        }
    }

    /// Create an unnamed parameter.
    pub fn unnamed(ty: impl Into<String>) -> Self {
        Self::new(ty, "")
    }
}

/// A constructor or method declaration of a mocked class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberDecl {
    /// Whether this member is a constructor.
    #[serde(skip_serializing_if = "std::ops::Not::not", default)]
    pub is_constructor: bool,
    /// Declaration name as spelled (`resize`, `operator+`, or the class
    /// name for constructors).
    pub name: String,
    /// Return-type spelling; ignored for constructors.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub return_type: String,
    /// Parameters in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<ParamDecl>,
}

impl MemberDecl {
    /// Create a constructor declaration for a class of the given name.
    pub fn constructor(name: impl Into<String>) -> Self {
        MemberDecl {
            is_constructor: true,
            name: name.into(),
            return_type: String::new(),
            params: vec![],
        }
    }

    /// Create a method declaration.
    pub fn method(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        MemberDecl {
            is_constructor: false,
            name: name.into(),
            return_type: return_type.into(),
            params: vec![],
        }
    }

    /// Append a named parameter.
    pub fn with_param(mut self, ty: impl Into<String>, name: impl Into<String>) -> Self {
        self.params.push(ParamDecl::new(ty, name));
        self
    }

    /// Append an unnamed parameter.
    pub fn with_unnamed_param(mut self, ty: impl Into<String>) -> Self {
        self.params.push(ParamDecl::unnamed(ty));
        self
    }
}

/// Identity of a class selected for mocking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDecl {
    /// Simple class name.
    pub name: String,
    /// Enclosing namespaces, outermost first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub namespaces: Vec<String>,
    /// Template parameter spellings (`"typename T"`, `"int N"`), in order.
    /// Empty for non-template classes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub template_params: Vec<String>,
}

impl ClassDecl {
    /// Create a class declaration with no namespaces or template parameters.
    pub fn new(name: impl Into<String>) -> Self {
        ClassDecl {
            name: name.into(),
            namespaces: vec![],
            template_params: vec![],
        }
    }

    /// Append an enclosing namespace (call outermost first).
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespaces.push(namespace.into());
        self
    }

    /// Append a template parameter spelling.
    pub fn with_template_param(mut self, param: impl Into<String>) -> Self {
        self.template_params.push(param.into());
        self
    }
}

/// A class together with the members discovered for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRecord {
    /// The class identity.
    #[serde(rename = "class")]
    pub decl: ClassDecl,
    /// Members in discovery order. Order carries no meaning; rendering
    /// fixes the final order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<MemberDecl>,
}

impl ClassRecord {
    /// Create a record with no members yet.
    pub fn new(decl: ClassDecl) -> Self {
        ClassRecord {
            decl,
            members: vec![],
        }
    }

    /// Append a member declaration.
    pub fn with_member(mut self, member: MemberDecl) -> Self {
        self.members.push(member);
        self
    }
}

/// Everything a frontend hands over for one translation unit.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeclBatch {
    /// Include paths the emitted mocks need, in discovery order.
    /// Deduplication and ordering happen on the consumer side.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub includes: Vec<String>,
    /// Mocked classes with their members.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<ClassRecord>,
}

impl DeclBatch {
    /// Create an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a batch from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, DeclError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode the batch as JSON.
    pub fn to_json(&self) -> Result<String, DeclError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod builders {
        use super::*;

        #[test]
        fn constructor_has_no_return_type() {
            let decl = MemberDecl::constructor("Widget").with_param("int", "id");
            assert!(decl.is_constructor);
            assert_eq!(decl.name, "Widget");
            assert_eq!(decl.return_type, "");
            assert_eq!(decl.params, vec![ParamDecl::new("int", "id")]);
        }

        #[test]
        fn method_keeps_return_type() {
            let decl = MemberDecl::method("resize", "void")
                .with_param("int", "w")
                .with_unnamed_param("int");
            assert!(!decl.is_constructor);
            assert_eq!(decl.return_type, "void");
            assert_eq!(decl.params.len(), 2);
            assert_eq!(decl.params[1].name, "");
        }

        #[test]
        fn class_builder_orders_namespaces() {
            let decl = ClassDecl::new("Widget")
                .with_namespace("app")
                .with_namespace("ui");
            assert_eq!(decl.namespaces, vec!["app", "ui"]);
        }
    }

    mod json {
        use super::*;

        #[test]
        fn terse_input_fills_defaults() {
            let json = r#"{
                "classes": [
                    {
                        "class": { "name": "Widget" },
                        "members": [
                            { "name": "close", "return_type": "void" }
                        ]
                    }
                ]
            }"#;
            let batch = DeclBatch::from_json(json).unwrap();
            assert!(batch.includes.is_empty());
            let record = &batch.classes[0];
            assert!(record.decl.namespaces.is_empty());
            assert!(record.decl.template_params.is_empty());
            let member = &record.members[0];
            assert!(!member.is_constructor);
            assert!(member.params.is_empty());
        }

        #[test]
        fn param_type_field_is_named_type() {
            let json = serde_json::to_string(&ParamDecl::new("int", "id")).unwrap();
            assert!(json.contains("\"type\":\"int\""));
            assert!(!json.contains("\"ty\""));
        }

        #[test]
        fn empty_fields_are_skipped() {
            let batch = DeclBatch {
                includes: vec![],
                classes: vec![ClassRecord::new(ClassDecl::new("Widget"))
                    .with_member(MemberDecl::method("close", "void"))],
            };
            let json = batch.to_json().unwrap();
            assert!(!json.contains("includes"));
            assert!(!json.contains("namespaces"));
            assert!(!json.contains("is_constructor"));
            assert!(!json.contains("params"));
        }

        #[test]
        fn roundtrip_preserves_batch() {
            let batch = DeclBatch {
                includes: vec!["widget.h".to_string()],
                classes: vec![ClassRecord::new(
                    ClassDecl::new("Grid")
                        .with_namespace("app")
                        .with_template_param("typename T"),
                )
                .with_member(MemberDecl::constructor("Grid").with_param("int", "size"))
                .with_member(MemberDecl::method("operator[]", "T&").with_param("int", "i"))],
            };
            let json = batch.to_json().unwrap();
            let decoded = DeclBatch::from_json(&json).unwrap();
            assert_eq!(decoded, batch);
        }

        #[test]
        fn invalid_json_reports_decl_error() {
            let err = DeclBatch::from_json("{ not json").unwrap_err();
            assert!(err.to_string().starts_with("invalid declaration JSON"));
        }
    }
}
