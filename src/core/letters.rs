//! Letter sets and letter bitmasks
//!
//! A puzzle board is seven distinct lowercase letters: one center letter that
//! every answer must contain, plus six outside letters.

use std::fmt;

/// The lowercase ASCII alphabet
pub const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Number of outside letters on a board
pub const OUTSIDE_LETTERS: usize = 6;

/// Total number of letters on a board
pub const BOARD_LETTERS: usize = OUTSIDE_LETTERS + 1;

/// Set of lowercase letters packed into the low 26 bits of a `u32`
///
/// Bit 0 is `a`, bit 25 is `z`. Subset tests and intersections are a single
/// bitwise operation, which keeps the dictionary scan cheap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterMask(u32);

impl LetterMask {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    #[inline]
    const fn bit(letter: u8) -> u32 {
        1 << (letter - b'a')
    }

    /// Mask of the distinct letters in `word`
    ///
    /// Returns `None` if the word contains anything other than `a..=z`.
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::core::LetterMask;
    ///
    /// let mask = LetterMask::of_word("gate").unwrap();
    /// assert_eq!(mask.len(), 4);
    /// assert!(LetterMask::of_word("Gate").is_none());
    /// ```
    #[must_use]
    pub fn of_word(word: &str) -> Option<Self> {
        word.bytes()
            .try_fold(0u32, |acc, b| b.is_ascii_lowercase().then(|| acc | Self::bit(b)))
            .map(Self)
    }

    /// Mask of the lowercase letters in `word`, ignoring any other characters
    #[must_use]
    pub fn covering(word: &str) -> Self {
        Self::from_letters(word.bytes())
    }

    /// Mask of an iterator of letters, skipping anything outside `a..=z`
    #[must_use]
    pub fn from_letters(letters: impl IntoIterator<Item = u8>) -> Self {
        Self(
            letters
                .into_iter()
                .filter(u8::is_ascii_lowercase)
                .fold(0, |acc, b| acc | Self::bit(b)),
        )
    }

    #[inline]
    #[must_use]
    pub fn contains(self, letter: u8) -> bool {
        letter.is_ascii_lowercase() && self.0 & Self::bit(letter) != 0
    }

    #[inline]
    pub fn insert(&mut self, letter: u8) {
        if letter.is_ascii_lowercase() {
            self.0 |= Self::bit(letter);
        }
    }

    /// Number of letters in the set
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if every letter of `other` is also in `self`
    #[inline]
    #[must_use]
    pub const fn is_superset_of(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Number of letters present in both sets
    #[inline]
    #[must_use]
    pub const fn shared_with(self, other: Self) -> usize {
        self.intersection(other).len()
    }

    /// Letters of the set in alphabetical order
    pub fn letters(self) -> impl Iterator<Item = u8> {
        ALPHABET.iter().copied().filter(move |&b| self.contains(b))
    }
}

impl fmt::Display for LetterMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.letters() {
            write!(f, "{}", char::from(letter))?;
        }
        Ok(())
    }
}

/// Error type for invalid letter sets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LetterSetError {
    WrongOutsideCount(usize),
    InvalidLetter(char),
    DuplicateLetter(char),
}

impl fmt::Display for LetterSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongOutsideCount(count) => {
                write!(f, "Expected {OUTSIDE_LETTERS} outside letters, got {count}")
            }
            Self::InvalidLetter(letter) => {
                write!(f, "Letter '{letter}' is not a lowercase ASCII letter")
            }
            Self::DuplicateLetter(letter) => write!(f, "Letter '{letter}' appears more than once"),
        }
    }
}

impl std::error::Error for LetterSetError {}

/// Seven distinct letters: a center letter plus six outside letters
///
/// Outside letters are kept sorted so two sets with the same letters and
/// center compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterSet {
    center: u8,
    outside: [u8; OUTSIDE_LETTERS],
    mask: LetterMask,
}

impl LetterSet {
    /// Create a letter set, validating that all seven letters are distinct
    /// lowercase ASCII letters
    ///
    /// # Errors
    /// Returns `LetterSetError` if a letter is outside `a..=z` or repeated.
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::core::LetterSet;
    ///
    /// let set = LetterSet::new(b'a', *b"tedfgl").unwrap();
    /// assert_eq!(set.center(), b'a');
    /// assert!(LetterSet::new(b'a', *b"tedfga").is_err());
    /// ```
    pub fn new(center: u8, outside: [u8; OUTSIDE_LETTERS]) -> Result<Self, LetterSetError> {
        let mut mask = LetterMask::EMPTY;
        for letter in std::iter::once(center).chain(outside) {
            if !letter.is_ascii_lowercase() {
                return Err(LetterSetError::InvalidLetter(char::from(letter)));
            }
            if mask.contains(letter) {
                return Err(LetterSetError::DuplicateLetter(char::from(letter)));
            }
            mask.insert(letter);
        }
        Ok(Self::from_distinct(center, outside))
    }

    /// Create a letter set from characters, lowercasing them first
    ///
    /// # Errors
    /// Returns `LetterSetError` if there are not exactly six outside letters,
    /// or if any letter is invalid or repeated.
    pub fn from_chars(center: char, outside: &[char]) -> Result<Self, LetterSetError> {
        let to_byte = |c: char| {
            let lower = c.to_ascii_lowercase();
            if lower.is_ascii_lowercase() {
                Ok(lower as u8)
            } else {
                Err(LetterSetError::InvalidLetter(c))
            }
        };

        if outside.len() != OUTSIDE_LETTERS {
            return Err(LetterSetError::WrongOutsideCount(outside.len()));
        }

        let mut bytes = [0u8; OUTSIDE_LETTERS];
        for (slot, &c) in bytes.iter_mut().zip(outside) {
            *slot = to_byte(c)?;
        }
        Self::new(to_byte(center)?, bytes)
    }

    /// Build from letters already known to be distinct and lowercase
    pub(crate) fn from_distinct(center: u8, mut outside: [u8; OUTSIDE_LETTERS]) -> Self {
        outside.sort_unstable();
        let mask = LetterMask::from_letters(std::iter::once(center).chain(outside));
        debug_assert_eq!(mask.len(), BOARD_LETTERS);
        Self {
            center,
            outside,
            mask,
        }
    }

    #[inline]
    #[must_use]
    pub const fn center(&self) -> u8 {
        self.center
    }

    #[inline]
    #[must_use]
    pub const fn outside(&self) -> &[u8; OUTSIDE_LETTERS] {
        &self.outside
    }

    /// Mask of all seven letters
    #[inline]
    #[must_use]
    pub const fn mask(&self) -> LetterMask {
        self.mask
    }

    #[must_use]
    pub fn center_char(&self) -> char {
        char::from(self.center)
    }

    #[must_use]
    pub fn outside_chars(&self) -> Vec<char> {
        self.outside.iter().copied().map(char::from).collect()
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] ", self.center_char())?;
        for &letter in &self.outside {
            write!(f, "{}", char::from(letter))?;
        }
        Ok(())
    }
}
