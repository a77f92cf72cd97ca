//! Self-consistency analysis of the embedded IICP specification tables.
//! Validates the opcode table, header naming convention, and version range
//! against each other; no external specification document is consumed.

use crate::types::constants::{
    CURRENT_VERSION, EXTENSION_HEADERS, HEADER_PREFIX, MAX_OPCODE, MAX_VERSION, MIN_OPCODE,
    MIN_VERSION, REQUIRED_HEADERS,
};
use crate::types::MessageType;
use crate::utils::logging;
use std::collections::BTreeSet;

// ------------------------------------------------------------------------------------------------
// Check Results
// ------------------------------------------------------------------------------------------------

/// Outcome of the opcode table checks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeChecks {
    /// No two message types share an opcode
    pub uniqueness: bool,
    /// Every opcode lies within the declared opcode range
    pub range_validity: bool,
    /// The opcode set covers the declared range without gaps
    pub completeness: bool,
}

/// Outcome of the header table checks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderChecks {
    /// Every extension header carries the reserved prefix
    pub naming_convention: bool,
    /// Header value types are consistent across message types
    pub type_consistency: bool,
    /// Every message type with required headers declares at least one
    pub required_coverage: bool,
}

/// Outcome of the version range checks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionChecks {
    /// min < max and the current version lies within the range
    pub range_validity: bool,
    /// Older peers within the range can still be served
    pub backward_compatibility: bool,
    /// Newer peers within the range can still be served
    pub forward_compatibility: bool,
}

impl OpcodeChecks {
    pub fn passed(&self) -> usize {
        [self.uniqueness, self.range_validity, self.completeness]
            .iter()
            .filter(|&&c| c)
            .count()
    }
}

impl HeaderChecks {
    pub fn passed(&self) -> usize {
        [self.naming_convention, self.type_consistency, self.required_coverage]
            .iter()
            .filter(|&&c| c)
            .count()
    }
}

impl VersionChecks {
    pub fn passed(&self) -> usize {
        [self.range_validity, self.backward_compatibility, self.forward_compatibility]
            .iter()
            .filter(|&&c| c)
            .count()
    }
}

const TOTAL_CHECKS: usize = 9;

// ------------------------------------------------------------------------------------------------
// Integrity Checker
// ------------------------------------------------------------------------------------------------

/// Validates the protocol's constant tables for internal consistency.
///
/// The checker is deterministic and holds no state beyond the accumulated
/// issue log. On the unmodified embedded tables every check passes and the
/// integrity score is exactly 100.0.
pub struct SpecIntegrityChecker {
    opcodes: Vec<u8>,
    extension_headers: Vec<String>,
    min_version: u8,
    max_version: u8,
    current_version: u8,
    issues: Vec<String>,
}

impl SpecIntegrityChecker {
    /// Creates a checker over the canonical embedded tables
    pub fn new() -> Self {
        Self::with_tables(
            MessageType::ALL.iter().map(|m| m.opcode()).collect(),
            EXTENSION_HEADERS.iter().map(|h| h.to_string()).collect(),
            MIN_VERSION,
            MAX_VERSION,
            CURRENT_VERSION,
        )
    }

    /// Creates a checker over explicitly supplied tables.
    ///
    /// Used by tests to verify that inconsistent tables are detected.
    pub fn with_tables(
        opcodes: Vec<u8>,
        extension_headers: Vec<String>,
        min_version: u8,
        max_version: u8,
        current_version: u8,
    ) -> Self {
        Self {
            opcodes,
            extension_headers,
            min_version,
            max_version,
            current_version,
            issues: Vec::new(),
        }
    }

    /// Checks the opcode table for uniqueness, range validity, and
    /// completeness over the declared contiguous range
    pub fn check_opcodes(&mut self) -> OpcodeChecks {
        logging::log("INTEGRITY", "Analyzing message type consistency...");

        let mut checks = OpcodeChecks {
            uniqueness: true,
            range_validity: true,
            completeness: true,
        };

        let actual: BTreeSet<u8> = self.opcodes.iter().copied().collect();
        if actual.len() != self.opcodes.len() {
            checks.uniqueness = false;
            self.issues
                .push("Duplicate opcodes found in message type definitions".to_string());
        }

        for opcode in &self.opcodes {
            if !(MIN_OPCODE..=MAX_OPCODE).contains(opcode) {
                checks.range_validity = false;
                self.issues
                    .push(format!("Opcode {:#04x} outside valid range", opcode));
            }
        }

        let expected: BTreeSet<u8> = (MIN_OPCODE..=MAX_OPCODE).collect();
        if actual != expected {
            let missing: Vec<String> = expected
                .difference(&actual)
                .map(|op| format!("{:#04x}", op))
                .collect();
            if !missing.is_empty() {
                checks.completeness = false;
                self.issues.push(format!("Missing opcodes: [{}]", missing.join(", ")));
            }
        }

        checks
    }

    /// Checks that every extension header follows the reserved naming
    /// convention
    pub fn check_header_naming(&mut self) -> HeaderChecks {
        logging::log("INTEGRITY", "Analyzing header field consistency...");

        let mut checks = HeaderChecks {
            naming_convention: true,
            type_consistency: true,
            required_coverage: true,
        };

        for header in &self.extension_headers {
            if !header.starts_with(HEADER_PREFIX) {
                checks.naming_convention = false;
                self.issues.push(format!(
                    "Header {} doesn't follow {} convention",
                    header, HEADER_PREFIX
                ));
            }
        }

        for (message_type, headers) in REQUIRED_HEADERS.iter() {
            if headers.is_empty() {
                checks.required_coverage = false;
                self.issues.push(format!(
                    "Message type {:?} declares no required headers",
                    message_type
                ));
            }
        }

        checks
    }

    /// Checks the declared version range and the current version's position
    /// within it
    pub fn check_version_range(&mut self) -> VersionChecks {
        logging::log("INTEGRITY", "Analyzing version compatibility...");

        let mut checks = VersionChecks {
            range_validity: true,
            backward_compatibility: true,
            forward_compatibility: true,
        };

        if self.min_version >= self.max_version {
            checks.range_validity = false;
            self.issues.push("Invalid version range: min >= max".to_string());
        }

        if self.current_version < self.min_version || self.current_version > self.max_version {
            checks.range_validity = false;
            self.issues
                .push("Current version outside supported range".to_string());
        }

        checks
    }

    /// Runs all three check groups and returns the share of passed checks as
    /// a percentage
    pub fn integrity_score(&mut self) -> f64 {
        let opcodes = self.check_opcodes();
        let headers = self.check_header_naming();
        let versions = self.check_version_range();

        let passed = opcodes.passed() + headers.passed() + versions.passed();
        let score = (passed as f64 / TOTAL_CHECKS as f64) * 100.0;

        logging::log("INTEGRITY", &format!("Protocol integrity score: {:.1}%", score));
        for issue in &self.issues {
            logging::log("INTEGRITY", &format!("Issue: {}", issue));
        }

        score
    }

    /// Human-readable descriptions of every inconsistency found so far
    pub fn issues(&self) -> &[String] {
        &self.issues
    }
}

impl Default for SpecIntegrityChecker {
    fn default() -> Self {
        Self::new()
    }
}

// ------------------------------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn canonical_headers() -> Vec<String> {
        EXTENSION_HEADERS.iter().map(|h| h.to_string()).collect()
    }

    #[test]
    fn canonical_tables_score_100() {
        let mut checker = SpecIntegrityChecker::new();
        let score = checker.integrity_score();
        assert_eq!(score, 100.0);
        assert!(checker.issues().is_empty());
    }

    #[test]
    fn opcode_table_is_bijective_over_declared_range() {
        let opcodes: BTreeSet<u8> = MessageType::ALL.iter().map(|m| m.opcode()).collect();
        assert_eq!(opcodes.len(), MessageType::ALL.len());
        assert_eq!(opcodes, (MIN_OPCODE..=MAX_OPCODE).collect::<BTreeSet<u8>>());
    }

    #[test]
    fn duplicate_opcode_fails_uniqueness_and_lowers_score() {
        let mut opcodes: Vec<u8> = MessageType::ALL.iter().map(|m| m.opcode()).collect();
        opcodes[1] = 0x01; // duplicate of Init, 0x02 now missing
        let mut checker = SpecIntegrityChecker::with_tables(
            opcodes,
            canonical_headers(),
            MIN_VERSION,
            MAX_VERSION,
            CURRENT_VERSION,
        );

        let checks = checker.check_opcodes();
        assert!(!checks.uniqueness);

        let score = checker.integrity_score();
        assert!(score < 100.0);
        assert!(!checker.issues().is_empty());
    }

    #[test]
    fn missing_opcode_reported_by_value() {
        let opcodes: Vec<u8> = MessageType::ALL
            .iter()
            .map(|m| m.opcode())
            .filter(|&op| op != 0x05)
            .collect();
        let mut checker = SpecIntegrityChecker::with_tables(
            opcodes,
            canonical_headers(),
            MIN_VERSION,
            MAX_VERSION,
            CURRENT_VERSION,
        );

        let checks = checker.check_opcodes();
        assert!(!checks.completeness);
        assert!(checker.issues().iter().any(|issue| issue.contains("0x05")));
    }

    #[test]
    fn opcode_outside_range_fails_range_validity() {
        let mut opcodes: Vec<u8> = MessageType::ALL.iter().map(|m| m.opcode()).collect();
        opcodes.push(0x7F);
        let mut checker = SpecIntegrityChecker::with_tables(
            opcodes,
            canonical_headers(),
            MIN_VERSION,
            MAX_VERSION,
            CURRENT_VERSION,
        );

        let checks = checker.check_opcodes();
        assert!(!checks.range_validity);
    }

    #[test]
    fn unprefixed_header_fails_naming_convention() {
        let mut headers = canonical_headers();
        headers.push("Content-Type".to_string());
        let mut checker = SpecIntegrityChecker::with_tables(
            MessageType::ALL.iter().map(|m| m.opcode()).collect(),
            headers,
            MIN_VERSION,
            MAX_VERSION,
            CURRENT_VERSION,
        );

        let checks = checker.check_header_naming();
        assert!(!checks.naming_convention);
        assert!(checker.issues().iter().any(|issue| issue.contains("Content-Type")));
    }

    #[test]
    fn inverted_version_range_fails() {
        let mut checker = SpecIntegrityChecker::with_tables(
            MessageType::ALL.iter().map(|m| m.opcode()).collect(),
            canonical_headers(),
            MAX_VERSION,
            MIN_VERSION,
            CURRENT_VERSION,
        );

        let checks = checker.check_version_range();
        assert!(!checks.range_validity);
    }

    #[test]
    fn current_version_outside_range_fails() {
        let mut checker = SpecIntegrityChecker::with_tables(
            MessageType::ALL.iter().map(|m| m.opcode()).collect(),
            canonical_headers(),
            MIN_VERSION,
            MAX_VERSION,
            MAX_VERSION + 1,
        );

        let checks = checker.check_version_range();
        assert!(!checks.range_validity);
    }
}
