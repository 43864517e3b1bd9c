use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use serde::{Deserialize, Serialize};

/// Selectable voices exposed to callers.
///
/// The labels follow the Kokoro naming scheme: the first letter is the
/// accent (`a` American, `b` British), the second the gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Voice {
    AfHeart,
    AfAlloy,
    AfAoede,
    AfBella,
    AfJessica,
    AfKore,
    AfNicole,
    AfNova,
    AfRiver,
    AfSarah,
    AfSky,
    AmAdam,
    AmEcho,
    AmEric,
    AmFenrir,
    AmLiam,
    AmMichael,
    AmOnyx,
    AmPuck,
    AmSanta,
    BfEmma,
    BfIsabella,
    BmGeorge,
    BmLewis,
    BfAlice,
    BfLily,
    BmDaniel,
    BmFable,
}

impl Voice {
    /// Every voice, in declaration order.
    pub const ALL: [Voice; 28] = [
        Voice::AfHeart,
        Voice::AfAlloy,
        Voice::AfAoede,
        Voice::AfBella,
        Voice::AfJessica,
        Voice::AfKore,
        Voice::AfNicole,
        Voice::AfNova,
        Voice::AfRiver,
        Voice::AfSarah,
        Voice::AfSky,
        Voice::AmAdam,
        Voice::AmEcho,
        Voice::AmEric,
        Voice::AmFenrir,
        Voice::AmLiam,
        Voice::AmMichael,
        Voice::AmOnyx,
        Voice::AmPuck,
        Voice::AmSanta,
        Voice::BfEmma,
        Voice::BfIsabella,
        Voice::BmGeorge,
        Voice::BmLewis,
        Voice::BfAlice,
        Voice::BfLily,
        Voice::BmDaniel,
        Voice::BmFable,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Voice::AfHeart => "af_heart",
            Voice::AfAlloy => "af_alloy",
            Voice::AfAoede => "af_aoede",
            Voice::AfBella => "af_bella",
            Voice::AfJessica => "af_jessica",
            Voice::AfKore => "af_kore",
            Voice::AfNicole => "af_nicole",
            Voice::AfNova => "af_nova",
            Voice::AfRiver => "af_river",
            Voice::AfSarah => "af_sarah",
            Voice::AfSky => "af_sky",
            Voice::AmAdam => "am_adam",
            Voice::AmEcho => "am_echo",
            Voice::AmEric => "am_eric",
            Voice::AmFenrir => "am_fenrir",
            Voice::AmLiam => "am_liam",
            Voice::AmMichael => "am_michael",
            Voice::AmOnyx => "am_onyx",
            Voice::AmPuck => "am_puck",
            Voice::AmSanta => "am_santa",
            Voice::BfEmma => "bf_emma",
            Voice::BfIsabella => "bf_isabella",
            Voice::BmGeorge => "bm_george",
            Voice::BmLewis => "bm_lewis",
            Voice::BfAlice => "bf_alice",
            Voice::BfLily => "bf_lily",
            Voice::BmDaniel => "bm_daniel",
            Voice::BmFable => "bm_fable",
        }
    }

    /// The provider voice this voice is rendered with.
    pub fn provider_voice(&self) -> ProviderVoice {
        use ProviderVoice::*;
        match self {
            Voice::AfHeart | Voice::AfAlloy | Voice::AmAdam => Alloy,
            Voice::AfAoede | Voice::AmEcho | Voice::AmEric | Voice::AmPuck => Echo,
            Voice::AfBella | Voice::BmFable => Fable,
            Voice::AfJessica
            | Voice::AfNicole
            | Voice::AfNova
            | Voice::BfEmma
            | Voice::BfIsabella
            | Voice::BfAlice
            | Voice::BfLily => Nova,
            Voice::AfKore
            | Voice::AfRiver
            | Voice::AmFenrir
            | Voice::AmLiam
            | Voice::AmMichael
            | Voice::AmOnyx
            | Voice::AmSanta
            | Voice::BmGeorge
            | Voice::BmLewis
            | Voice::BmDaniel => Onyx,
            Voice::AfSarah | Voice::AfSky => Shimmer,
        }
    }
}

impl fmt::Display for Voice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Voice {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Voice::ALL
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| anyhow!("unknown voice: {}", s))
    }
}

/// Voice names understood by the speech endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderVoice {
    #[default]
    Alloy,
    Echo,
    Fable,
    Nova,
    Onyx,
    Shimmer,
}

impl ProviderVoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderVoice::Alloy => "alloy",
            ProviderVoice::Echo => "echo",
            ProviderVoice::Fable => "fable",
            ProviderVoice::Nova => "nova",
            ProviderVoice::Onyx => "onyx",
            ProviderVoice::Shimmer => "shimmer",
        }
    }
}

impl fmt::Display for ProviderVoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a voice label to a provider voice.
///
/// Labels that are not a known [`Voice`] fall back to
/// [`ProviderVoice::default`] instead of failing.
pub fn resolve_provider_voice(voice: &str) -> ProviderVoice {
    voice
        .parse::<Voice>()
        .map(|v| v.provider_voice())
        .unwrap_or_default()
}

/// Precision of the local model this adapter used to load. Accepted for
/// compatibility and otherwise unused.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelPrecision {
    #[default]
    Fp32,
    Fp16,
    Q8,
    Q4,
    Q4f16,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn identifiers_round_trip_through_from_str() {
        for voice in Voice::ALL {
            assert_eq!(voice.as_str().parse::<Voice>().unwrap(), voice);
        }
    }

    #[test]
    fn identifiers_are_unique() {
        let names: HashSet<_> = Voice::ALL.iter().map(Voice::as_str).collect();
        assert_eq!(names.len(), Voice::ALL.len());
    }

    #[test]
    fn serde_names_match_identifiers() {
        assert_eq!(
            serde_json::to_string(&Voice::BfIsabella).unwrap(),
            "\"bf_isabella\""
        );
        assert_eq!(
            serde_json::to_string(&ProviderVoice::Shimmer).unwrap(),
            "\"shimmer\""
        );
    }

    #[test]
    fn resolves_known_voices() {
        assert_eq!(resolve_provider_voice("af_bella"), ProviderVoice::Fable);
        assert_eq!(resolve_provider_voice("am_puck"), ProviderVoice::Echo);
        assert_eq!(resolve_provider_voice("bm_george"), ProviderVoice::Onyx);
        assert_eq!(resolve_provider_voice("af_sky"), ProviderVoice::Shimmer);
        assert_eq!(resolve_provider_voice("bf_lily"), ProviderVoice::Nova);
    }

    #[test]
    fn unknown_voice_falls_back_to_alloy() {
        assert_eq!(resolve_provider_voice("zz_nobody"), ProviderVoice::Alloy);
        assert_eq!(resolve_provider_voice(""), ProviderVoice::Alloy);
        assert_eq!(resolve_provider_voice("AF_BELLA"), ProviderVoice::Alloy);
    }
}
