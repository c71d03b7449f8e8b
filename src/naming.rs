//! Operator detection and surrogate-name synthesis.
//!
//! GMock's `MOCK_METHODn` macros paste the member name into generated
//! identifiers, so operator spellings like `operator+` cannot be mocked
//! under their own names. Members whose name contains `operator` are
//! instead mocked under a synthesized surrogate (`Operator<digits>`) and
//! forwarded to it from a real override of the operator.
//!
//! Surrogates are derived by hashing the member signature, never drawn
//! from a random or stateful source: the same declaration always yields
//! the same surrogate (so revisited declarations deduplicate), and
//! distinct operators yield distinct surrogates with overwhelming
//! probability.

use sha2::{Digest, Sha256};

/// Whether a member name must be mocked through a surrogate.
///
/// The test is a literal substring match, so every C++ operator spelling
/// (`operator+`, `operator()`, `operator bool`) qualifies. An ordinary
/// method that happens to contain the substring takes the surrogate path
/// too; the forwarding override keeps the emitted mock correct either way.
pub fn is_operator(name: &str) -> bool {
    name.contains("operator")
}

/// Synthesize the surrogate method name for an operator member.
///
/// The name, return type, and argument type spellings are hashed with
/// SHA-256 and the first four digest bytes become a decimal tag, giving
/// names of the shape `Operator3735928559`. The member name participates
/// so that two operators with identical signatures (say `operator+` and
/// `operator-`) still get distinct surrogates.
pub fn operator_surrogate(name: &str, return_type: &str, arg_types: &[String]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(name.as_bytes());
    // NUL separators keep field boundaries unambiguous.
    hasher.update([0u8]);
    hasher.update(return_type.as_bytes());
    for ty in arg_types {
        hasher.update([0u8]);
        hasher.update(ty.as_bytes());
    }
    let digest = hasher.finalize();
    let tag = u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]);
    format!("Operator{}", tag)
}
