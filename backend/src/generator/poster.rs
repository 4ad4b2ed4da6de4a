use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::prompts::Punchline;

const WIDTH: u32 = 900;
const HEIGHT: u32 = 500;

/// Illustrated poster used whenever the AI painter is unavailable or
/// fails. Returns a base64 `data:image/svg+xml` URI.
pub fn fallback_poster<R: Rng + ?Sized>(
    rng: &mut R,
    animal_a: &str,
    animal_b: &str,
    species_name: &str,
) -> String {
    let left = donor_palette(animal_a);
    let right = donor_palette(animal_b);
    let punchline: Punchline = rng.gen();

    let svg = format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" role="img" aria-label="Mashup of {animal_a} and {animal_b}">
  <defs>
    <linearGradient id="bg" x1="0" y1="0" x2="1" y2="0">
      <stop offset="0%" stop-color="rgba({lr},{lg},{lb},0.9)" />
      <stop offset="100%" stop-color="rgba({rr},{rg},{rb},0.9)" />
    </linearGradient>
    <filter id="grain"><feTurbulence type="fractalNoise" baseFrequency="0.8" numOctaves="2" stitchTiles="stitch"/><feColorMatrix type="saturate" values="0.2"/><feComponentTransfer><feFuncR type="linear" slope="0.4"/><feFuncG type="linear" slope="0.4"/><feFuncB type="linear" slope="0.4"/></feComponentTransfer><feBlend in="SourceGraphic" mode="overlay"/></filter>
  </defs>
  <rect width="100%" height="100%" fill="url(#bg)" />
  <g filter="url(#grain)">{left_block}{right_block}</g>
  <g transform="translate(40,300)">
    <rect width="820" height="160" rx="26" fill="rgba(12, 15, 35, 0.62)" stroke="rgba(15,15,25,0.8)" stroke-width="6"/>
    <text x="26" y="70" font-size="54" fill="#e5e7eb" font-weight="800" font-family="'Inter','Segoe UI',system-ui,sans-serif">{species_name}</text>
    <text x="26" y="116" font-size="24" fill="#cbd5e1" font-family="'Inter','Segoe UI',system-ui,sans-serif">{punchline}</text>
  </g>
</svg>"##,
        w = WIDTH,
        h = HEIGHT,
        lr = left.0, lg = left.1, lb = left.2,
        rr = right.0, rg = right.1, rb = right.2,
        left_block = donor_block(40, 300, animal_a, left),
        right_block = donor_block(560, 300, animal_b, right),
    );

    format!("data:image/svg+xml;base64,{}", BASE64.encode(svg))
}

/// Stable per-donor color so the same animal always paints the same way.
fn donor_palette(animal: &str) -> (u8, u8, u8) {
    let mut hasher = DefaultHasher::new();
    animal.hash(&mut hasher);
    let mut rng = StdRng::seed_from_u64(hasher.finish() & 0xFFFF_FFFF);
    (
        rng.gen_range(70..=230),
        rng.gen_range(60..=210),
        rng.gen_range(80..=240),
    )
}

fn donor_block(x: u32, width: u32, animal: &str, (r, g, b): (u8, u8, u8)) -> String {
    let label: String = animal.chars().take(8).collect();
    format!(
        r##"<g transform="translate({x},0)">
      <rect x="0" y="0" width="{width}" height="220" rx="22" fill="rgba({r},{g},{b},0.82)" stroke="rgba(10,10,16,0.4)" stroke-width="6"/>
      <text x="{half}" y="120" font-size="52" fill="#f8fafc" font-weight="800" text-anchor="middle" font-family="'Inter','Segoe UI',system-ui,sans-serif">{label}</text>
      <text x="{half}" y="160" font-size="22" fill="#cbd5e1" text-anchor="middle" font-family="'Inter','Segoe UI',system-ui,sans-serif">DNA donor</text>
    </g>"##,
        half = width / 2,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const DATA_URI_PREFIX: &str = "data:image/svg+xml;base64,";

    fn decode(uri: &str) -> String {
        let encoded = uri.strip_prefix(DATA_URI_PREFIX).expect("svg data URI");
        String::from_utf8(BASE64.decode(encoded).expect("valid base64")).expect("utf-8 svg")
    }

    #[test]
    fn poster_is_a_base64_svg_data_uri() {
        let mut rng = StdRng::seed_from_u64(3);
        let uri = fallback_poster(&mut rng, "Lion", "Otter", "Turbo LioTer");
        assert!(uri.starts_with(DATA_URI_PREFIX));
        let svg = decode(&uri);
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("Turbo LioTer"));
        assert!(svg.contains(">Lion<") && svg.contains(">Otter<"));
    }

    #[test]
    fn donor_labels_are_clipped_to_eight_chars() {
        let mut rng = StdRng::seed_from_u64(3);
        let svg = decode(&fallback_poster(&mut rng, "Armadillo", "Chameleon", "Neon ArmEon"));
        assert!(svg.contains(">Armadill<"));
        assert!(svg.contains(">Chameleo<"));
    }

    #[test]
    fn donor_palette_is_deterministic_and_in_range() {
        let first = donor_palette("Capybara");
        let second = donor_palette("Capybara");
        assert_eq!(first, second);
        assert_ne!(donor_palette("Lion"), donor_palette("Moose"));

        for animal in ["Lion", "Otter", "Fennec Fox", "Moose"] {
            let (r, g, b) = donor_palette(animal);
            assert!((70..=230).contains(&r));
            assert!((60..=210).contains(&g));
            assert!((80..=240).contains(&b));
        }
    }
}
