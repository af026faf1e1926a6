//! Password generation from configurable character classes
//!
//! The alphabet is the concatenation, in canonical order, of every enabled
//! class. Each output character is an independent, uniform draw from that
//! alphabet using the OS CSPRNG. No per-class presence is guaranteed.

use rand::rngs::OsRng;
use rand::{CryptoRng, Rng};

use crate::error::GenerationError;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

pub const DEFAULT_LENGTH: usize = 16;
pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 128;

/// A character category that can be toggled on or off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digits,
    Symbols,
}

impl CharClass {
    /// All classes in canonical alphabet order
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Digits,
        CharClass::Symbols,
    ];

    pub fn alphabet(&self) -> &'static str {
        match self {
            CharClass::Lowercase => LOWERCASE,
            CharClass::Uppercase => UPPERCASE,
            CharClass::Digits => DIGITS,
            CharClass::Symbols => SYMBOLS,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CharClass::Lowercase => "Lowercase (a-z)",
            CharClass::Uppercase => "Uppercase (A-Z)",
            CharClass::Digits => "Numbers (0-9)",
            CharClass::Symbols => "Symbols (!@#...)",
        }
    }

    /// Class at a settings-form row index (0..=3)
    pub fn from_index(index: usize) -> Option<CharClass> {
        Self::ALL.get(index).copied()
    }
}

/// Length and character-class selection for one generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationSettings {
    pub length: usize,
    pub include_lower: bool,
    pub include_upper: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            include_lower: true,
            include_upper: true,
            include_numbers: true,
            include_symbols: true,
        }
    }
}

impl GenerationSettings {
    pub fn is_enabled(&self, class: CharClass) -> bool {
        match class {
            CharClass::Lowercase => self.include_lower,
            CharClass::Uppercase => self.include_upper,
            CharClass::Digits => self.include_numbers,
            CharClass::Symbols => self.include_symbols,
        }
    }

    pub fn toggle(&mut self, class: CharClass) {
        let flag = match class {
            CharClass::Lowercase => &mut self.include_lower,
            CharClass::Uppercase => &mut self.include_upper,
            CharClass::Digits => &mut self.include_numbers,
            CharClass::Symbols => &mut self.include_symbols,
        };
        *flag = !*flag;
    }

    pub fn enabled_classes(&self) -> impl Iterator<Item = CharClass> + '_ {
        CharClass::ALL
            .into_iter()
            .filter(move |class| self.is_enabled(*class))
    }

    /// Concatenated alphabet of every enabled class, in canonical order
    pub fn alphabet(&self) -> Vec<char> {
        self.enabled_classes()
            .flat_map(|class| class.alphabet().chars())
            .collect()
    }

    pub fn length_in_range(length: usize) -> bool {
        (MIN_LENGTH..=MAX_LENGTH).contains(&length)
    }
}

/// Generate a password using the operating system's secure random source
pub fn generate(settings: &GenerationSettings) -> Result<String, GenerationError> {
    generate_with(settings, &mut OsRng)
}

/// Generate a password drawing from the supplied cryptographic RNG
///
/// Checks the alphabet before the length, so an empty selection reports
/// `EmptyAlphabet` for any length.
pub fn generate_with<R>(settings: &GenerationSettings, rng: &mut R) -> Result<String, GenerationError>
where
    R: Rng + CryptoRng,
{
    let alphabet = settings.alphabet();
    if alphabet.is_empty() {
        return Err(GenerationError::EmptyAlphabet);
    }
    if !GenerationSettings::length_in_range(settings.length) {
        return Err(GenerationError::LengthOutOfRange {
            length: settings.length,
        });
    }

    // gen_range samples uniformly without modulo bias
    Ok((0..settings.length)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect())
}
