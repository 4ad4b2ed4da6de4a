use std::fmt;

use rand::distributions::{Distribution, Standard};
use rand::Rng;
use strum::FromRepr;

/// Whimsical prefix for every spliced species name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr)]
#[repr(u8)]
pub enum Adjective {
    Giggly, Sneaky, Glittery, Turbo, Cosmic,
    Whimsical, Neon, Electric, Dizzy, Galactic,
}

/// Flavor line printed on the fallback poster's caption panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr)]
#[repr(u8)]
pub enum Punchline {
    CertifiedChaos, ZooTalentShow, GourmetSnacks, PicnicBlanket, AwkwardHighFives,
    PartTimeLifeguard, QuestionableSuperpowers, InventedJazz, Playlists, SoundEffects,
}

impl Adjective {
    const fn variant_count() -> usize { 10 }

    pub const fn description(&self) -> &'static str {
        match self {
            Self::Giggly => "Giggly", Self::Sneaky => "Sneaky", Self::Glittery => "Glittery",
            Self::Turbo => "Turbo", Self::Cosmic => "Cosmic", Self::Whimsical => "Whimsical",
            Self::Neon => "Neon", Self::Electric => "Electric", Self::Dizzy => "Dizzy",
            Self::Galactic => "Galactic",
        }
    }

    pub const ALL: [Adjective; 10] = [
        Self::Giggly, Self::Sneaky, Self::Glittery, Self::Turbo, Self::Cosmic,
        Self::Whimsical, Self::Neon, Self::Electric, Self::Dizzy, Self::Galactic,
    ];
}

impl Punchline {
    const fn variant_count() -> usize { 10 }

    pub const fn description(&self) -> &'static str {
        match self {
            Self::CertifiedChaos => "Certified chaos on paws",
            Self::ZooTalentShow => "Banned from every zoo talent show",
            Self::GourmetSnacks => "Eats only gourmet snacks and compliments",
            Self::PicnicBlanket => "Can and will steal your picnic blanket",
            Self::AwkwardHighFives => "World champion of awkward high-fives",
            Self::PartTimeLifeguard => "Part-time lifeguard, full-time menace",
            Self::QuestionableSuperpowers => "Possesses questionable superpowers",
            Self::InventedJazz => "Believes it invented jazz",
            Self::Playlists => "Won't share its playlists",
            Self::SoundEffects => "Makes its own sound effects",
        }
    }
}

macro_rules! impl_display {
    ($type:ty) => {
        impl fmt::Display for $type {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.description())
            }
        }
    };
}

impl_display!(Adjective);
impl_display!(Punchline);

macro_rules! impl_distribution {
    ($type:ty) => {
        impl Distribution<$type> for Standard {
            fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> $type {
                let variant_count = <$type>::variant_count();
                <$type>::from_repr(rng.gen_range(0..variant_count) as u8)
                    .unwrap_or_else(|| <$type>::from_repr(0).expect("variant 0 exists"))
            }
        }
    };
}

impl_distribution!(Adjective);
impl_distribution!(Punchline);

/// Prompt sent to the image model for one splice.
pub fn painting_prompt(animal_a: &str, animal_b: &str, species_name: &str) -> String {
    format!(
        "Create a bright, imaginative poster illustration of a fictional animal that \
         combines a {animal_a} and a {animal_b}. Focus on a friendly, whimsical style with \
         bold colors, studio lighting, and a simple background. Include a small caption of \
         the name '{species_name}' in the lower area."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_names_both_donors_and_the_species() {
        let prompt = painting_prompt("Lion", "Otter", "Turbo LioTer");
        assert!(prompt.contains("a Lion and a Otter"));
        assert!(prompt.contains("'Turbo LioTer'"));
    }

    #[test]
    fn sampled_adjectives_come_from_the_fixed_set() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let adjective: Adjective = rng.gen();
            assert!(Adjective::ALL.contains(&adjective));
        }
    }
}
