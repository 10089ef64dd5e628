//! Pronounceable random player names.

use rand::seq::IndexedRandom;
use rand::Rng;

const VOWELS: [&str; 8] = ["a", "e", "o", "a", "e", "o", "i", "u"];
const CONSONANTS: [&str; 16] = [
    "b", "d", "f", "g", "h", "k", "l", "m", "n", "p", "qu", "r", "s", "t", "v", "y",
];
const SUFFIXES: [&str; 5] = ["d", "h", "l", "n", "s"];

fn pick<R: Rng + ?Sized>(rng: &mut R, options: &[&'static str]) -> &'static str {
    // Tables are non-empty constants.
    options.choose(rng).copied().unwrap_or("a")
}

/// Generate a name from 2-3 consonant+vowel syllables, with an optional
/// leading vowel and an optional trailing consonant. First letter uppercase.
pub fn generate_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let syllables = rng.random_range(2..=3);
    let mut name = String::new();

    if rng.random_bool(0.5) {
        name.push_str(pick(rng, &VOWELS));
    }
    for _ in 0..syllables {
        name.push_str(pick(rng, &CONSONANTS));
        name.push_str(pick(rng, &VOWELS));
    }
    if rng.random_bool(0.5) {
        name.push_str(pick(rng, &SUFFIXES));
    }

    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => name,
    }
}
