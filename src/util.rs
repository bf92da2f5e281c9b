/// Source text helpers.
///
/// This module provides the structural, character-level scans that run before
/// any tokenizing: stripping line comments, splitting a program into
/// statements at brace depth zero, and matching bracket pairs.
///
/// All offsets are byte offsets into the scanned text.
pub mod source;
