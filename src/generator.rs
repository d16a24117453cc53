//! Password generator - uniform sampling from a fixed 70-symbol alphabet.

use rand::Rng;

/// Generated password length when the caller does not pick one.
pub const DEFAULT_LENGTH: usize = 12;

/// The generation universe: ASCII letters, digits and the accepted special
/// characters. 70 symbols in total.
const ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*";

/// Generates a random password of `length` characters.
///
/// Each position is sampled independently, uniformly and with replacement
/// from the alphabet, so the output is not guaranteed to cover every
/// character class (though for length >= 8 it almost always scores strong).
/// Uses the thread-local CSPRNG.
pub fn generate(length: usize) -> String {
    generate_with(&mut rand::thread_rng(), length)
}

/// Generates a random password from a caller-supplied random source.
///
/// Same sampling model as [`generate`]; tests use a seeded RNG here to get
/// reproducible output.
pub fn generate_with<R: Rng>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}
