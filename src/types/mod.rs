use serde::{Deserialize, Serialize};

pub mod constants;

mod message;
pub use message::MessageType;

/// Quality-of-service class of an agent, determining the base latency
/// expectation for a simulated message.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QoSClass {
    Realtime,
    Interactive,
    Batch,
}

impl QoSClass {
    /// All QoS classes in declaration order
    pub const ALL: [QoSClass; 3] = [QoSClass::Realtime, QoSClass::Interactive, QoSClass::Batch];

    /// Base latency in milliseconds for a message of this class
    pub fn base_latency_ms(self) -> f64 {
        match self {
            QoSClass::Realtime => 50.0,
            QoSClass::Interactive => 150.0,
            QoSClass::Batch => 500.0,
        }
    }

    /// Priority weight used as a feature in latency scoring
    pub fn priority_weight(self) -> f64 {
        match self {
            QoSClass::Realtime => 1.0,
            QoSClass::Interactive => 0.6,
            QoSClass::Batch => 0.3,
        }
    }
}

/// Transport an agent prefers for message delivery
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportHint {
    Quic,
    Qudag,
    Dual,
}

impl TransportHint {
    /// All transport hints in declaration order
    pub const ALL: [TransportHint; 3] =
        [TransportHint::Quic, TransportHint::Qudag, TransportHint::Dual];
}

/// A simulated protocol participant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    /// Unique identifier for this agent, e.g. `llm://agent-us-east-1-0042`
    pub agent_id: String,
    /// Region the agent is deployed in
    pub region: String,
    /// Intent URNs this agent advertises support for
    pub supported_intents: Vec<String>,
    /// QoS class the agent operates under
    pub qos_class: QoSClass,
    /// Preferred transport for message delivery
    pub transport_pref: TransportHint,
    /// Current load fraction, always within [0, 1]
    pub load_factor: f64,
    /// Unix timestamp of the last heartbeat
    pub last_heartbeat: u64,
}

/// A simulated routing intermediary.
///
/// The counters are initialized at population setup but are not exercised by
/// the latency or success computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Router {
    /// Unique identifier for this router, e.g. `router-007`
    pub router_id: String,
    /// Region the router is deployed in
    pub region: String,
    /// Number of messages currently queued
    pub queue_depth: u64,
    /// Total messages processed
    pub processed_messages: u64,
    /// Total processing errors
    pub error_count: u64,
    /// Utilization fraction at setup time
    pub utilization: f64,
}

/// Aggregate performance metrics produced by one simulation scenario.
///
/// The cpu and memory fields are synthetic fillers, not measured quantities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    /// Representative latency in milliseconds (p95 for the large-scale
    /// scenario, median for the build pipeline)
    pub latency_ms: f64,
    /// Share of successful messages as a percentage
    pub success_rate: f64,
    /// Messages processed per second of wall-clock run time
    pub throughput_msg_per_sec: f64,
    /// Number of failed messages
    pub error_count: u64,
    /// Synthetic CPU utilization percentage
    pub cpu_utilization: f64,
    /// Synthetic memory usage in megabytes
    pub memory_usage_mb: f64,
}
