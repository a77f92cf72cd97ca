//! Constant tables of the IICP/SYNAPSE v1.4.2 specification.
//! These are the embedded tables the integrity checker validates for
//! self-consistency; nothing here is loaded from an external document.

use crate::types::MessageType;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Human-readable protocol version string
pub const PROTOCOL_VERSION: &str = "1.4.2";

/// Lowest protocol version this release interoperates with
pub const MIN_VERSION: u8 = 0x09;

/// Highest protocol version this release interoperates with
pub const MAX_VERSION: u8 = 0x0E;

/// Wire version of this release (v1.4.2 maps to 14)
pub const CURRENT_VERSION: u8 = 0x0E;

/// Lower bound of the opcode table
pub const MIN_OPCODE: u8 = 0x01;

/// Upper bound of the opcode table
pub const MAX_OPCODE: u8 = 0x0E;

/// Reserved prefix every protocol extension header must carry
pub const HEADER_PREFIX: &str = "X-IICP-";

/// The protocol extension headers defined by the specification
pub const EXTENSION_HEADERS: [&str; 9] = [
    "X-IICP-TTL",
    "X-IICP-Hash",
    "X-IICP-Lock",
    "X-IICP-Transport-Hint",
    "X-IICP-Trace-Hash",
    "X-IICP-Auth-Method",
    "X-IICP-Retry-Policy",
    "X-IICP-Routing-Hint",
    "X-IICP-Scheduling-Hint",
];

/// Intent URNs agents can advertise support for
pub const INTENT_TYPES: [&str; 5] = [
    "urn:iicp:intent:code:lint:v1.4.2",
    "urn:iicp:intent:doc:summarize:v1.0",
    "urn:iicp:intent:fraud:detect:v1.0",
    "urn:iicp:intent:build:rust:v2.1",
    "urn:iicp:intent:build:python:v3.2",
];

/// Headers each message type must carry
pub static REQUIRED_HEADERS: Lazy<HashMap<MessageType, Vec<&'static str>>> = Lazy::new(|| {
    let mut headers = HashMap::new();
    headers.insert(
        MessageType::Init,
        vec!["agent_id", "intent", "transport_pref", "min_version", "max_version"],
    );
    headers.insert(MessageType::Call, vec!["intent", "trace_id", "X-IICP-Auth-Method"]);
    headers.insert(MessageType::Response, vec!["code", "trace_id"]);
    headers.insert(MessageType::Ping, vec!["intent", "trace_id", "X-IICP-TTL"]);
    headers.insert(MessageType::Pong, vec!["intent", "trace_id", "X-IICP-TTL"]);
    headers
});
