//! Game editions and their data keys

use serde::{Deserialize, Serialize};
use std::fmt;

/// A game edition (version group). Learnsets differ between editions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Edition {
    RedBlue,
    Yellow,
    GoldSilver,
    Crystal,
    RubySapphire,
    FireRedLeafGreen,
    Emerald,
    DiamondPearl,
    Platinum,
    HeartGoldSoulSilver,
    BlackWhite,
    Black2White2,
    XY,
    Colosseum,
    XD,
    OmegaRubyAlphaSapphire,
    SunMoon,
    UltraSunUltraMoon,
    LetsGo,
    SwordShield,
    IsleOfArmor,
    CrownTundra,
    BrilliantDiamondShiningPearl,
    LegendsArceus,
    ScarletViolet,
    TealMask,
    IndigoDisk,
    RedGreenJapan,
    BlueJapan,
}

impl Edition {
    pub const ALL: [Edition; 29] = [
        Edition::RedBlue,
        Edition::Yellow,
        Edition::GoldSilver,
        Edition::Crystal,
        Edition::RubySapphire,
        Edition::FireRedLeafGreen,
        Edition::Emerald,
        Edition::DiamondPearl,
        Edition::Platinum,
        Edition::HeartGoldSoulSilver,
        Edition::BlackWhite,
        Edition::Black2White2,
        Edition::XY,
        Edition::Colosseum,
        Edition::XD,
        Edition::OmegaRubyAlphaSapphire,
        Edition::SunMoon,
        Edition::UltraSunUltraMoon,
        Edition::LetsGo,
        Edition::SwordShield,
        Edition::IsleOfArmor,
        Edition::CrownTundra,
        Edition::BrilliantDiamondShiningPearl,
        Edition::LegendsArceus,
        Edition::ScarletViolet,
        Edition::TealMask,
        Edition::IndigoDisk,
        Edition::RedGreenJapan,
        Edition::BlueJapan,
    ];

    /// Key used for this edition in the learnset data
    pub fn key(&self) -> &'static str {
        match self {
            Edition::RedBlue => "red-blue",
            Edition::Yellow => "yellow",
            Edition::GoldSilver => "gold-silver",
            Edition::Crystal => "crystal",
            Edition::RubySapphire => "ruby-sapphire",
            Edition::FireRedLeafGreen => "firered-leafgreen",
            Edition::Emerald => "emerald",
            Edition::DiamondPearl => "diamond-pearl",
            Edition::Platinum => "platinum",
            Edition::HeartGoldSoulSilver => "heartgold-soulsilver",
            Edition::BlackWhite => "black-white",
            Edition::Black2White2 => "black-2-white-2",
            Edition::XY => "x-y",
            Edition::Colosseum => "colosseum",
            Edition::XD => "xd",
            Edition::OmegaRubyAlphaSapphire => "omega-ruby-alpha-sapphire",
            Edition::SunMoon => "sun-moon",
            Edition::UltraSunUltraMoon => "ultra-sun-ultra-moon",
            // Misspelled in the upstream data; must match it exactly.
            Edition::LetsGo => "lets-go-pikachu-lets-go-evee",
            Edition::SwordShield => "sword-shield",
            Edition::IsleOfArmor => "the-isle-of-armor",
            Edition::CrownTundra => "the-crown-tundra",
            Edition::BrilliantDiamondShiningPearl => "brilliant-diamond-shining-pearl",
            Edition::LegendsArceus => "legends-arceus",
            Edition::ScarletViolet => "scarlet-violet",
            Edition::TealMask => "the-teal-mask",
            Edition::IndigoDisk => "the-indigo-disk",
            Edition::RedGreenJapan => "red-green-japan",
            Edition::BlueJapan => "blue-japan",
        }
    }

    /// Look up an edition by its data key (case-insensitive)
    pub fn from_key(key: &str) -> Option<Edition> {
        let key = key.trim().to_lowercase();
        Edition::ALL.iter().copied().find(|e| e.key() == key)
    }

    /// Generation directory used for version-specific sprites
    ///
    /// `None` for editions whose sprites are not split by version.
    pub fn generation(&self) -> Option<&'static str> {
        match self {
            Edition::RedBlue | Edition::Yellow | Edition::BlueJapan | Edition::RedGreenJapan => {
                Some("generation-i")
            }
            Edition::GoldSilver | Edition::Crystal => Some("generation-ii"),
            Edition::RubySapphire
            | Edition::FireRedLeafGreen
            | Edition::Emerald
            | Edition::Colosseum
            | Edition::XD => Some("generation-iii"),
            Edition::DiamondPearl | Edition::Platinum | Edition::HeartGoldSoulSilver => {
                Some("generation-iv")
            }
            Edition::BlackWhite | Edition::Black2White2 => Some("generation-v"),
            Edition::XY | Edition::OmegaRubyAlphaSapphire => Some("generation-vi"),
            _ => None,
        }
    }
}

impl fmt::Display for Edition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip_through_lookup() {
        for edition in Edition::ALL {
            assert_eq!(Edition::from_key(edition.key()), Some(edition));
        }
    }

    #[test]
    fn test_lookup_ignores_case_and_whitespace() {
        assert_eq!(Edition::from_key("  Gold-Silver "), Some(Edition::GoldSilver));
        assert_eq!(Edition::from_key("stadium"), None);
    }

    #[test]
    fn test_generation_directories() {
        assert_eq!(Edition::Yellow.generation(), Some("generation-i"));
        assert_eq!(Edition::XD.generation(), Some("generation-iii"));
        assert_eq!(Edition::ScarletViolet.generation(), None);
    }
}
