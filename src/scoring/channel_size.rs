// Channel size classification: six fixed tiers by subscriber count.
//
// Tiers are half-open intervals with an inclusive lower bound, so every
// subscriber count lands in exactly one tier.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Channel size tier, ordered from smallest to largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChannelSize {
    /// Fewer than 1,000 subscribers
    Emerging,
    /// 1,000 to 9,999
    Small,
    /// 10,000 to 99,999
    Growing,
    /// 100,000 to 499,999
    MidSize,
    /// 500,000 to 999,999
    Large,
    /// 1,000,000 and up
    Mega,
}

impl ChannelSize {
    /// Every tier, smallest first.
    pub const ALL: [ChannelSize; 6] = [
        ChannelSize::Emerging,
        ChannelSize::Small,
        ChannelSize::Growing,
        ChannelSize::MidSize,
        ChannelSize::Large,
        ChannelSize::Mega,
    ];

    /// Classify a channel by its subscriber count. Total over all inputs.
    pub fn classify(subscriber_count: u64) -> Self {
        match subscriber_count {
            0..=999 => ChannelSize::Emerging,
            1_000..=9_999 => ChannelSize::Small,
            10_000..=99_999 => ChannelSize::Growing,
            100_000..=499_999 => ChannelSize::MidSize,
            500_000..=999_999 => ChannelSize::Large,
            _ => ChannelSize::Mega,
        }
    }

    /// 1-based tier index (1 = Emerging, 6 = Mega).
    pub fn tier(&self) -> u8 {
        match self {
            ChannelSize::Emerging => 1,
            ChannelSize::Small => 2,
            ChannelSize::Growing => 3,
            ChannelSize::MidSize => 4,
            ChannelSize::Large => 5,
            ChannelSize::Mega => 6,
        }
    }

    /// Inclusive lower bound of the tier's subscriber range.
    pub fn min_subscribers(&self) -> u64 {
        match self {
            ChannelSize::Emerging => 0,
            ChannelSize::Small => 1_000,
            ChannelSize::Growing => 10_000,
            ChannelSize::MidSize => 100_000,
            ChannelSize::Large => 500_000,
            ChannelSize::Mega => 1_000_000,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChannelSize::Emerging => "Emerging channel",
            ChannelSize::Small => "Small channel",
            ChannelSize::Growing => "Growing channel",
            ChannelSize::MidSize => "Mid-size channel",
            ChannelSize::Large => "Large channel",
            ChannelSize::Mega => "Mega channel",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ChannelSize::Emerging => "Early growth stage",
            ChannelSize::Small => "Actively growing",
            ChannelSize::Growing => "Steady growth stage",
            ChannelSize::MidSize => "Maturing stage",
            ChannelSize::Large => "Successfully established",
            ChannelSize::Mega => "Top-tier channel",
        }
    }
}

impl std::fmt::Display for ChannelSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// Serialized as `{ "category": ..., "description": ... }` for API clients.
impl Serialize for ChannelSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ChannelSize", 2)?;
        state.serialize_field("category", self.label())?;
        state.serialize_field("description", self.description())?;
        state.end()
    }
}
