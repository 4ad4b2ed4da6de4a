use rand::Rng;

use super::prompts::Adjective;

/// Fuse two donor names into a species name: first three letters of the
/// first donor, last three of the second, each capitalized, under a
/// random whimsical adjective.
pub fn splice_name<R: Rng + ?Sized>(rng: &mut R, animal_a: &str, animal_b: &str) -> String {
    let adjective: Adjective = rng.gen();
    format!("{} {}{}", adjective, head(animal_a), tail(animal_b))
}

fn head(name: &str) -> String {
    let start: String = name.chars().take(3).collect();
    capitalize(start.trim_end())
}

fn tail(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let end: String = chars[chars.len().saturating_sub(3)..].iter().collect();
    capitalize(end.trim_start())
}

// Python-style capitalize: first character upper, the rest lower.
fn capitalize(fragment: &str) -> String {
    let mut chars = fragment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn fuses_head_of_first_with_tail_of_second() {
        let mut rng = StdRng::seed_from_u64(7);
        let name = splice_name(&mut rng, "Lion", "Otter");
        assert!(name.ends_with("LioTer"), "unexpected species name: {}", name);
    }

    #[test]
    fn leads_with_an_adjective_from_the_fixed_set() {
        let mut rng = StdRng::seed_from_u64(42);
        let name = splice_name(&mut rng, "Capybara", "Moose");
        let lead = name.split(' ').next().unwrap_or_default();
        assert!(Adjective::ALL.iter().any(|a| a.description() == lead));
        assert!(name.ends_with("CapOse"), "unexpected species name: {}", name);
    }

    #[test]
    fn two_word_donors_trim_stray_spaces() {
        let mut rng = StdRng::seed_from_u64(1);
        // "Fox" tail from "Fennec Fox", "Fen" head into the mix
        let name = splice_name(&mut rng, "Fennec Fox", "Fennec Fox");
        assert!(name.ends_with("FenFox"), "unexpected species name: {}", name);
    }
}
