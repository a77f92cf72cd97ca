use serde::{Deserialize, Serialize};

/// Protocol message type, tagged with its wire opcode.
///
/// The discriminants are the opcodes themselves, so the opcode table is fixed
/// at compile time and `MessageType::ALL` is the canonical enumeration the
/// integrity checker validates against.
#[repr(u8)]
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum MessageType {
    Init = 0x01,
    Ack = 0x02,
    Discover = 0x03,
    SubProtocol = 0x04,
    Call = 0x05,
    Response = 0x06,
    Close = 0x07,
    Feedback = 0x08,
    Ping = 0x09,
    Pong = 0x0A,
    Control = 0x0B,
    Advertise = 0x0C,
    Observe = 0x0D,
    Telemetry = 0x0E,
}

impl MessageType {
    /// Every message type, in opcode order
    pub const ALL: [MessageType; 14] = [
        MessageType::Init,
        MessageType::Ack,
        MessageType::Discover,
        MessageType::SubProtocol,
        MessageType::Call,
        MessageType::Response,
        MessageType::Close,
        MessageType::Feedback,
        MessageType::Ping,
        MessageType::Pong,
        MessageType::Control,
        MessageType::Advertise,
        MessageType::Observe,
        MessageType::Telemetry,
    ];

    /// The wire opcode for this message type
    pub fn opcode(self) -> u8 {
        self as u8
    }
}
