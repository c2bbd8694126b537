//! Personality profiles for the reference roster.
//!
//! Read-only data for the presentation layer. Profiles never affect draws
//! or progression; a name missing from this table still plays normally.

use serde::Serialize;

use crate::core::rarity::Rarity;

/// Shown for names without a profile.
pub const UNKNOWN_DESCRIPTION: &str = "A mysterious idol with an unknown background.";

/// Flavor data for one idol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct IdolProfile {
    pub name: &'static str,
    pub rarity: Rarity,
    pub mood: &'static str,
    pub color: &'static str,
    pub hobby: &'static str,
    pub description: &'static str,
}

impl IdolProfile {
    /// Single-line summary: `Luna - Elegant | Moonlight Silver | Playing harp`.
    #[must_use]
    pub fn compact(&self) -> String {
        format!("{} - {} | {} | {}", self.name, self.mood, self.color, self.hobby)
    }
}

static PROFILES: [IdolProfile; 26] = [
    IdolProfile {
        name: "Amy",
        rarity: Rarity::Common,
        mood: "Bubbly",
        color: "Pastel Peach",
        hobby: "Baking cupcakes",
        description: "A sweet girl who loves sharing homemade treats with everyone.",
    },
    IdolProfile {
        name: "Ella",
        rarity: Rarity::Common,
        mood: "Lively",
        color: "Sunny Yellow",
        hobby: "Playing guitar",
        description: "An upbeat performer who brings sunshine wherever she goes.",
    },
    IdolProfile {
        name: "Emma",
        rarity: Rarity::Common,
        mood: "Gentle",
        color: "Lavender",
        hobby: "Reading novels",
        description: "A quiet bookworm who expresses herself through music.",
    },
    IdolProfile {
        name: "Mira",
        rarity: Rarity::Common,
        mood: "Dreamy",
        color: "Sky Blue",
        hobby: "Cloud watching",
        description: "A thoughtful girl who finds inspiration in the sky above.",
    },
    IdolProfile {
        name: "Coco",
        rarity: Rarity::Common,
        mood: "Warm",
        color: "Chocolate Brown",
        hobby: "Making desserts",
        description: "A dessert enthusiast who believes sweetness makes the world better.",
    },
    IdolProfile {
        name: "Nana",
        rarity: Rarity::Common,
        mood: "Playful",
        color: "Peach Orange",
        hobby: "Dancing freestyle",
        description: "A fun-loving dancer who never takes life too seriously.",
    },
    IdolProfile {
        name: "Suki",
        rarity: Rarity::Common,
        mood: "Sweet",
        color: "Soft Pink",
        hobby: "Drinking bubble tea",
        description: "A gentle girl with long pink hair who's always seen with her favorite bubble tea.",
    },
    IdolProfile {
        name: "Kira",
        rarity: Rarity::Common,
        mood: "Bright",
        color: "Pearl White",
        hobby: "Photography",
        description: "A creative soul who captures beautiful moments through her lens.",
    },
    IdolProfile {
        name: "Bella",
        rarity: Rarity::Common,
        mood: "Confident",
        color: "Rose Red",
        hobby: "Fashion design",
        description: "A style icon who loves experimenting with bold outfits.",
    },
    IdolProfile {
        name: "Mila",
        rarity: Rarity::Common,
        mood: "Poetic",
        color: "Deep Purple",
        hobby: "Writing poetry",
        description: "A poetic soul who expresses her feelings through verses.",
    },
    IdolProfile {
        name: "Luna",
        rarity: Rarity::Rare,
        mood: "Elegant",
        color: "Moonlight Silver",
        hobby: "Playing harp",
        description: "A graceful musician who enchants audiences with ethereal harp melodies under the moonlight.",
    },
    IdolProfile {
        name: "Mina",
        rarity: Rarity::Rare,
        mood: "Cute",
        color: "Bubblegum Pink",
        hobby: "Playing with cats",
        description: "An adorable idol who can't resist cute animals and fluffy things.",
    },
    IdolProfile {
        name: "Lena",
        rarity: Rarity::Rare,
        mood: "Sophisticated",
        color: "Royal Gold",
        hobby: "Classical piano",
        description: "A refined musician with a passion for timeless elegance.",
    },
    IdolProfile {
        name: "Rosa",
        rarity: Rarity::Rare,
        mood: "Cheerful",
        color: "Lavender Purple",
        hobby: "Singing on stage",
        description: "An adorable idol with cat ears and purple hair who brings joy to every performance.",
    },
    IdolProfile {
        name: "Ruby",
        rarity: Rarity::Rare,
        mood: "Passionate",
        color: "Ruby Red",
        hobby: "Jewelry making",
        description: "A fiery performer who shines bright like a precious gem.",
    },
    IdolProfile {
        name: "Nora",
        rarity: Rarity::Rare,
        mood: "Mysterious",
        color: "Starlight Blonde",
        hobby: "Stargazing",
        description: "A celestial dreamer with golden hair who maps the constellations and finds wonder in the night sky.",
    },
    IdolProfile {
        name: "Sara",
        rarity: Rarity::Rare,
        mood: "Free-spirited",
        color: "Ocean Teal",
        hobby: "Surfing",
        description: "A free spirit who loves riding the waves and chasing thrills.",
    },
    IdolProfile {
        name: "Hana",
        rarity: Rarity::Rare,
        mood: "Traditional",
        color: "Cherry Blossom",
        hobby: "Tea ceremony",
        description: "A graceful idol who honors tradition while embracing modern music.",
    },
    IdolProfile {
        name: "Stella",
        rarity: Rarity::Epic,
        mood: "Focused",
        color: "Starlight Gold",
        hobby: "Astronomy",
        description: "A brilliant performer who channels cosmic energy through her music.",
    },
    IdolProfile {
        name: "Nova",
        rarity: Rarity::Epic,
        mood: "Explosive",
        color: "Galaxy Purple",
        hobby: "DJ mixing",
        description: "A high-energy idol who creates explosive beats from another dimension.",
    },
    IdolProfile {
        name: "Aria",
        rarity: Rarity::Epic,
        mood: "Artistic",
        color: "Rainbow Prism",
        hobby: "Opera singing",
        description: "A virtuoso vocalist whose voice can move hearts and shake stages.",
    },
    IdolProfile {
        name: "Iris",
        rarity: Rarity::Epic,
        mood: "Magical",
        color: "Blonde Gold",
        hobby: "Collecting crystals",
        description: "A magical girl with blonde hair who loves collecting purple crystals.",
    },
    IdolProfile {
        name: "Elsa",
        rarity: Rarity::Epic,
        mood: "Cool",
        color: "Ice Blue",
        hobby: "Ice skating",
        description: "A graceful ice queen who performs with elegant precision and cool confidence.",
    },
    IdolProfile {
        name: "Anna",
        rarity: Rarity::Legendary,
        mood: "Energetic",
        color: "Bright Orange",
        hobby: "Performing on stage",
        description: "The top idol everyone adores, with bright orange twin-tails and unstoppable energy on stage.",
    },
    IdolProfile {
        name: "Belle",
        rarity: Rarity::Legendary,
        mood: "Enchanting",
        color: "Golden Rose",
        hobby: "Reading magical books",
        description: "A beauty with brains who believes true magic lies in kindness and knowledge.",
    },
    IdolProfile {
        name: "Jasmine",
        rarity: Rarity::Legendary,
        mood: "Adventurous",
        color: "Desert Gold",
        hobby: "Exploring new worlds",
        description: "A fearless adventurer who brings exotic charm and unlimited courage to the stage.",
    },
];

/// All profiles, grouped by tier in ascending scarcity.
#[must_use]
pub fn all() -> &'static [IdolProfile] {
    &PROFILES
}

/// Profile for a name, if it is part of the reference roster.
#[must_use]
pub fn profile(name: &str) -> Option<&'static IdolProfile> {
    PROFILES.iter().find(|p| p.name == name)
}

/// Description for a name, or [`UNKNOWN_DESCRIPTION`].
#[must_use]
pub fn description(name: &str) -> &'static str {
    profile(name).map_or(UNKNOWN_DESCRIPTION, |p| p.description)
}

/// Profiles of one tier.
pub fn profiles_by_rarity(rarity: Rarity) -> impl Iterator<Item = &'static IdolProfile> {
    PROFILES.iter().filter(move |p| p.rarity == rarity)
}
