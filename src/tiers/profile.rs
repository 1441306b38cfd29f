//! Per-tier provider stack
//!
//! Each tier runs a fixed speech-to-text, LLM and text-to-speech stack.
//! Premium replaces the three-stage pipeline with a single realtime
//! speech-to-speech session.

use serde::Serialize;
use utoipa::ToSchema;

use super::types::Tier;

/// A provider and the model it is asked to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct ProviderModel {
    pub provider: &'static str,
    pub model: &'static str,
}

/// Static description of what a tier runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct TierProfile {
    pub tier: Tier,
    pub label: &'static str,
    pub description: &'static str,
    pub stt: ProviderModel,
    pub llm: ProviderModel,
    pub tts: ProviderModel,
    /// Whether agents on this tier can open realtime sessions
    pub supports_realtime: bool,
    /// Voice used when the agent does not pick one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_voice: Option<&'static str>,
}

const REALTIME: ProviderModel = ProviderModel {
    provider: "openai",
    model: "gpt-4o-realtime-preview-2025-06-03",
};

const BUDGET: TierProfile = TierProfile {
    tier: Tier::Budget,
    label: "Budget",
    description: "Lowest cost per minute for high-volume calling",
    stt: ProviderModel {
        provider: "deepgram",
        model: "nova-2",
    },
    llm: ProviderModel {
        provider: "openai",
        model: "gpt-4o-mini",
    },
    tts: ProviderModel {
        provider: "deepgram",
        model: "aura-2",
    },
    supports_realtime: false,
    default_voice: None,
};

const BALANCED: TierProfile = TierProfile {
    tier: Tier::Balanced,
    label: "Balanced",
    description: "Natural voices and wider language coverage",
    stt: ProviderModel {
        provider: "deepgram",
        model: "nova-3",
    },
    llm: ProviderModel {
        provider: "openai",
        model: "gpt-4o",
    },
    tts: ProviderModel {
        provider: "elevenlabs",
        model: "eleven_flash_v2_5",
    },
    supports_realtime: false,
    default_voice: None,
};

const PREMIUM: TierProfile = TierProfile {
    tier: Tier::Premium,
    label: "Premium",
    description: "Realtime speech-to-speech with the lowest latency",
    stt: REALTIME,
    llm: REALTIME,
    tts: REALTIME,
    supports_realtime: true,
    default_voice: Some("shimmer"),
};

impl Tier {
    /// Provider stack for this tier
    pub fn profile(&self) -> &'static TierProfile {
        match self {
            Tier::Budget => &BUDGET,
            Tier::Balanced => &BALANCED,
            Tier::Premium => &PREMIUM,
        }
    }

    /// Only premium agents may open realtime sessions
    pub fn supports_realtime(&self) -> bool {
        self.profile().supports_realtime
    }
}
