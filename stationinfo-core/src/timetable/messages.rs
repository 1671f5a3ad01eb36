//! Message catalog
//!
//! Status texts and train names shown on the board. Departures refer to
//! them by [`MessageId`]; ids outside the table show [`UNKNOWN_MESSAGE`].

/// Longest message that fits a departure row next to time and platform
pub const MAX_MESSAGE_LEN: usize = 19;

/// Shown for ids missing from the catalog
pub const UNKNOWN_MESSAGE: &str = "???";

/// Index into the message catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MessageId(pub u8);

impl MessageId {
    /// Screen header: "Departures"
    pub const HEADER: Self = Self(0);
    /// Status: no delays
    pub const NO_DELAYS: Self = Self(1);
    /// Status: train delays
    pub const DELAYS: Self = Self(2);
    /// Out of service
    pub const NO_SERVICE: Self = Self(3);
    /// Do not board
    pub const NO_BOARD: Self = Self(4);
    pub const IC35: Self = Self(5);
    pub const IC34: Self = Self(6);
    pub const RE23: Self = Self(7);
    pub const RE22: Self = Self(8);
    pub const RB89: Self = Self(9);
    pub const RB88: Self = Self(10);
    pub const RB11: Self = Self(11);
    pub const RB12: Self = Self(12);

    /// Catalog text for this id
    pub fn text(self) -> &'static str {
        message_text(self)
    }

    /// Whether this is a service notice rather than a train name
    pub fn is_notice(self) -> bool {
        matches!(self, Self::DELAYS | Self::NO_SERVICE | Self::NO_BOARD)
    }
}

const MESSAGE_TABLE: [&str; 13] = [
    "Abfahrt",
    "Keine Verspatungen",
    "Zugverspatungen!",
    "ausser betrieb",
    "nicht einsteigen",
    "IC35 Bonn, Hanover",
    "IC34 Stuttgart",
    "RE23 Trier",
    "RE22 Koln",
    "RB89 Aachen",
    "RB88 Bonn",
    "RB11 Dortmund",
    "RB12 Koln",
];

const _: () = {
    let mut i = 0;
    while i < MESSAGE_TABLE.len() {
        assert!(MESSAGE_TABLE[i].len() <= MAX_MESSAGE_LEN, "message too long");
        i += 1;
    }
};

/// Look up a message, falling back to [`UNKNOWN_MESSAGE`]
pub fn message_text(id: MessageId) -> &'static str {
    MESSAGE_TABLE
        .get(id.0 as usize)
        .copied()
        .unwrap_or(UNKNOWN_MESSAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_messages() {
        assert_eq!(MessageId::HEADER.text(), "Abfahrt");
        assert_eq!(MessageId::NO_DELAYS.text(), "Keine Verspatungen");
        assert_eq!(MessageId::RB88.text(), "RB88 Bonn");
        assert_eq!(message_text(MessageId::RB12), "RB12 Koln");
    }

    #[test]
    fn test_unknown_message_falls_back() {
        assert_eq!(message_text(MessageId(13)), UNKNOWN_MESSAGE);
        assert_eq!(message_text(MessageId(255)), UNKNOWN_MESSAGE);
    }

    #[test]
    fn test_notices() {
        assert!(MessageId::NO_BOARD.is_notice());
        assert!(MessageId::NO_SERVICE.is_notice());
        assert!(!MessageId::IC35.is_notice());
        assert!(!MessageId::HEADER.is_notice());
    }
}
