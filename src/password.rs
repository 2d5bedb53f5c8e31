// Copyright (c) 2024 PostFinance AG
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use log::trace;
use rand::Rng;

pub(crate) const MIN_LENGTH: usize = 8;
pub(crate) const MAX_LENGTH: usize = 28;

const LETTERS_AND_DIGITS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+[]{}|;:,.<>?";

/// The personal fields a password is derived from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Identity {
    pub(crate) username: String,
    pub(crate) phone_number: String,
    /// Expected as `YYYY-MM-DD`, but never validated.
    pub(crate) birthdate: String,
}

impl Identity {
    pub(crate) fn is_empty(&self) -> bool {
        self.username.is_empty() && self.phone_number.is_empty() && self.birthdate.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Options {
    pub(crate) length: usize,
    pub(crate) include_symbols: bool,
}

impl Options {
    /// Builds options with `length` clamped into the supported range.
    pub(crate) fn new(length: usize, include_symbols: bool) -> Self {
        Options {
            length: length.clamp(MIN_LENGTH, MAX_LENGTH),
            include_symbols,
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Options::new(MIN_LENGTH, true)
    }
}

/// Characters the random padding is drawn from.
pub(crate) fn alphabet(include_symbols: bool) -> Vec<char> {
    let mut characters: Vec<char> = LETTERS_AND_DIGITS.chars().collect();
    if include_symbols {
        characters.extend(SYMBOLS.chars());
    }
    characters
}

/// First three characters of the username, last three of the phone number
/// and the birthdate without dashes.
pub(crate) fn build_seed(identity: &Identity) -> String {
    let mut seed: String = identity.username.chars().take(3).collect();

    let phone_length = identity.phone_number.chars().count();
    seed.extend(
        identity
            .phone_number
            .chars()
            .skip(phone_length.saturating_sub(3)),
    );

    seed.extend(identity.birthdate.chars().filter(|c| *c != '-'));
    seed
}

/// Derives a password of exactly `options.length` characters, or an empty
/// string when every identity field is empty.
///
/// The seed is padded from `rng` until it reaches the target length and then
/// truncated; a seed that is already longer loses its trailing characters.
pub(crate) fn derive<R: Rng + ?Sized>(
    identity: &Identity,
    options: &Options,
    rng: &mut R,
) -> String {
    if identity.is_empty() {
        trace!("No identity input given, skipping derivation");
        return String::new();
    }

    trace!("Deriving password of length {}", options.length);

    let characters = alphabet(options.include_symbols);
    let mut password: Vec<char> = build_seed(identity).chars().collect();

    while password.len() < options.length {
        let index = rng.random_range(0..characters.len());
        password.push(characters[index]);
    }

    password.into_iter().take(options.length).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn identity(username: &str, phone_number: &str, birthdate: &str) -> Identity {
        Identity {
            username: username.to_string(),
            phone_number: phone_number.to_string(),
            birthdate: birthdate.to_string(),
        }
    }

    #[test]
    fn alphabet_size() {
        assert_eq!(alphabet(false).len(), 62);
        assert_eq!(alphabet(true).len(), 86);
        assert!(alphabet(false).iter().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn seed_from_all_fields() {
        let seed = build_seed(&identity("alice", "5551234567", "1990-05-20"));
        assert_eq!(seed, "ali56719900520");
    }

    #[test]
    fn seed_from_short_fields() {
        assert_eq!(build_seed(&identity("al", "12", "")), "al12");
        assert_eq!(build_seed(&identity("", "", "not-a-date")), "notadate");
    }

    #[test]
    fn seed_counts_characters_not_bytes() {
        assert_eq!(build_seed(&identity("Jürgen", "+41 79 äöü", "")), "Jüräöü");
    }

    #[test]
    fn empty_identity_yields_empty_password() {
        let mut rng = StdRng::seed_from_u64(7);
        let password = derive(&Identity::default(), &Options::new(16, true), &mut rng);
        assert_eq!(password, "");
    }

    #[test]
    fn long_seed_is_truncated() {
        let mut rng = StdRng::seed_from_u64(7);
        let password = derive(
            &identity("alice", "5551234567", "1990-05-20"),
            &Options::new(12, false),
            &mut rng,
        );
        assert_eq!(password, "ali567199005");
    }

    #[test]
    fn password_length() {
        let mut rng = StdRng::seed_from_u64(1);
        for length in MIN_LENGTH..=MAX_LENGTH {
            for include_symbols in [false, true] {
                let password = derive(
                    &identity("bob", "", ""),
                    &Options::new(length, include_symbols),
                    &mut rng,
                );
                assert_eq!(password.chars().count(), length);
                assert!(password.starts_with("bob"));
            }
        }
    }

    #[test]
    fn padding_stays_within_alphabet() {
        let mut rng = StdRng::seed_from_u64(3);
        let password = derive(&identity("x", "", ""), &Options::new(28, false), &mut rng);
        assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));

        let symbols = alphabet(true);
        let password = derive(&identity("x", "", ""), &Options::new(28, true), &mut rng);
        assert!(password.chars().all(|c| symbols.contains(&c)));
    }

    #[test]
    fn same_rng_seed_same_password() {
        let input = identity("carol", "", "2001-01-01");
        let options = Options::new(28, true);
        let first = derive(&input, &options, &mut StdRng::seed_from_u64(42));
        let second = derive(&input, &options, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn prefix_is_stable_across_calls() {
        let input = identity("dave", "0791234567", "1985-12-31");
        let options = Options::new(28, true);
        let mut rng = rand::rng();
        let first = derive(&input, &options, &mut rng);
        let second = derive(&input, &options, &mut rng);
        assert_eq!(&first[..14], "dav56719851231");
        assert_eq!(&second[..14], "dav56719851231");
        assert_eq!(first.len(), second.len());
    }

    #[test]
    fn options_clamp_length() {
        assert_eq!(Options::new(3, true).length, MIN_LENGTH);
        assert_eq!(Options::new(100, true).length, MAX_LENGTH);
        assert_eq!(Options::new(17, false).length, 17);
        assert_eq!(Options::default(), Options::new(8, true));
    }
}
