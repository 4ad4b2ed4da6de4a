use std::fmt;

use rand::distributions::{Distribution, Standard};
use rand::Rng;
use strum::FromRepr;

/// The fixed roster of splice donors. The backend samples spin outcomes
/// from it; the frontend only uses the names as reel filler while a spin
/// is pending. Never transmitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr)]
#[repr(u8)]
pub enum Animal {
    Lion, Elephant, Penguin, Kangaroo, Giraffe,
    Panda, Koala, Falcon, Octopus, Dolphin,
    Crocodile, Armadillo, Rabbit, Hedgehog, Otter,
    Zebra, Hippo, Parrot, Cheetah, Meerkat,
    Chameleon, Wolf, FennecFox, Capybara, Moose,
}

impl Animal {
    pub const fn variant_count() -> usize { 25 }

    pub const ALL: [Animal; 25] = [
        Self::Lion, Self::Elephant, Self::Penguin, Self::Kangaroo, Self::Giraffe,
        Self::Panda, Self::Koala, Self::Falcon, Self::Octopus, Self::Dolphin,
        Self::Crocodile, Self::Armadillo, Self::Rabbit, Self::Hedgehog, Self::Otter,
        Self::Zebra, Self::Hippo, Self::Parrot, Self::Cheetah, Self::Meerkat,
        Self::Chameleon, Self::Wolf, Self::FennecFox, Self::Capybara, Self::Moose,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Lion => "Lion", Self::Elephant => "Elephant", Self::Penguin => "Penguin",
            Self::Kangaroo => "Kangaroo", Self::Giraffe => "Giraffe", Self::Panda => "Panda",
            Self::Koala => "Koala", Self::Falcon => "Falcon", Self::Octopus => "Octopus",
            Self::Dolphin => "Dolphin", Self::Crocodile => "Crocodile", Self::Armadillo => "Armadillo",
            Self::Rabbit => "Rabbit", Self::Hedgehog => "Hedgehog", Self::Otter => "Otter",
            Self::Zebra => "Zebra", Self::Hippo => "Hippo", Self::Parrot => "Parrot",
            Self::Cheetah => "Cheetah", Self::Meerkat => "Meerkat", Self::Chameleon => "Chameleon",
            Self::Wolf => "Wolf", Self::FennecFox => "Fennec Fox", Self::Capybara => "Capybara",
            Self::Moose => "Moose",
        }
    }
}

impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Distribution<Animal> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Animal {
        Animal::from_repr(rng.gen_range(0..Animal::variant_count()) as u8).unwrap_or(Animal::Lion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn roster_holds_twenty_five_unique_names() {
        assert_eq!(Animal::ALL.len(), Animal::variant_count());
        let names: HashSet<&str> = Animal::ALL.iter().map(|a| a.name()).collect();
        assert_eq!(names.len(), Animal::ALL.len());
        assert!(names.iter().all(|name| !name.is_empty()));
    }

    #[test]
    fn sampling_stays_on_the_roster() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let animal: Animal = rng.gen();
            assert!(Animal::ALL.contains(&animal));
        }
    }

    #[test]
    fn two_word_names_keep_their_space() {
        assert_eq!(Animal::FennecFox.name(), "Fennec Fox");
    }
}
