//! Text assembly utilities shared by the rendering pipeline.
//!
//! Two small families:
//!
//! - **Name assembly**: qualified-name and template-header formatting
//! - **Deterministic ordering**: the sort/dedup/reverse pass applied to
//!   rendered member strings before they are joined into a class body

// ============================================================================
// Name Assembly
// ============================================================================

/// Join namespace components and a class name with `::`.
///
/// Namespaces are given outermost first. With no namespaces the result is
/// the bare name; there is never a leading `::`.
pub fn qualify(namespaces: &[String], name: &str) -> String {
    if namespaces.is_empty() {
        name.to_string()
    } else {
        format!("{}::{}", namespaces.join("::"), name)
    }
}

/// Format a template header for a class with the given template parameters.
///
/// Parameters are full spellings (`"typename T"`, `"int N"`). The result is
/// empty for an empty list; otherwise it is `template<...>` followed by a
/// newline and four spaces, so it can be spliced directly in front of the
/// `class` keyword at block indentation.
pub fn template_header(params: &[String]) -> String {
    if params.is_empty() {
        String::new()
    } else {
        format!("template<{}>\n    ", params.join(", "))
    }
}

// ============================================================================
// Deterministic Ordering
// ============================================================================

/// Sort strings lexicographically, drop exact duplicates, and reverse.
///
/// This is the canonical member order: it depends only on the rendered
/// strings, never on traversal order, so repeated renders and revisited
/// declarations produce identical output. Duplicates must be adjacent to
/// collapse, which the sort guarantees.
pub fn sorted_unique_desc(mut items: Vec<String>) -> Vec<String> {
    items.sort();
    items.dedup();
    items.reverse();
    items
}

// ============================================================================
// Tests
// ============================================================================
