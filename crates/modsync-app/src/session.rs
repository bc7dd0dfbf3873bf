use std::fmt;

/// Opaque handle the transport layer uses for one peer connection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ConnectionId(pub u64);

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Categorical reason handed to the host when a peer is removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum KickReason {
    /// The peer's mod list failed at least one rule.
    IncompatibleMods,
}

impl KickReason {
    pub fn as_str(self) -> &'static str {
        match self {
            KickReason::IncompatibleMods => "incompatible mods",
        }
    }
}

/// The host's participant-removal primitive.
pub trait SessionControl {
    fn disconnect(&mut self, connection: ConnectionId, reason: KickReason);
}
