//! Character classification for the Uyghur Arabic script

/// First code point of the Arabic block.
pub const ARABIC_START: u32 = 0x0600;
/// End of the Arabic block (exclusive).
pub const ARABIC_END: u32 = 0x06FF;

/// Hamza carrier (ئ), written before a vowel that starts a syllable.
pub const CARRIER: char = '\u{0626}';

/// The eight Uyghur vowel letters: ا ە ې ى و ۇ ۆ ۈ
pub const VOWELS: [char; 8] = [
    '\u{0627}', // f
    '\u{06D5}', // g
    '\u{06D0}', // e
    '\u{0649}', // h
    '\u{0648}', // o
    '\u{06C7}', // u
    '\u{06C6}', // K
    '\u{06C8}', // v
];

/// Arabic punctuation living inside the Arabic block: ؛ ؟ ،
pub const PUNCTUATION_EXCEPTIONS: [char; 3] = ['\u{061B}', '\u{061F}', '\u{060C}'];

/// Classification of a single character relative to the target script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterClass {
    /// Consonant or any other non-vowel letter of the block
    Letter,
    /// One of [`VOWELS`]
    Vowel,
    /// Arabic punctuation mapped into the block
    Punctuation,
    /// Anything outside the block
    NonLetter,
}

/// Check whether `ch` is a letter of the Arabic block (punctuation excluded).
pub fn is_target_letter(ch: char) -> bool {
    (ARABIC_START..ARABIC_END).contains(&(ch as u32)) && !PUNCTUATION_EXCEPTIONS.contains(&ch)
}

/// Check whether `ch` is a Uyghur vowel letter.
pub fn is_vowel(ch: char) -> bool {
    is_target_letter(ch) && VOWELS.contains(&ch)
}

pub fn classify(ch: char) -> LetterClass {
    if PUNCTUATION_EXCEPTIONS.contains(&ch) {
        LetterClass::Punctuation
    } else if is_vowel(ch) {
        LetterClass::Vowel
    } else if is_target_letter(ch) {
        LetterClass::Letter
    } else {
        LetterClass::NonLetter
    }
}
