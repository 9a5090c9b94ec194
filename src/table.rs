/// Letters that open a vowel-table entry. A word starting with one of these
/// was built vowel-first.
pub const VOWEL_LETTERS: [char; 6] = ['a', 'e', 'i', 'o', 'u', 'y'];

const VOWELS: [&str; 10] = ["ou", "a", "e", "i", "o", "u", "y", "ee", "ei", "oo"];

const CONSONANTS: [&str; 10] = ["th", "b", "d", "f", "g", "l", "m", "n", "p", "r"];

/// The order in which digits are tried when reading letters back. The
/// multi-letter entries sit at 0 and the high digits, so they must be tried
/// before any single letter that could be their prefix.
pub const CANDIDATE_ORDER: [u8; 10] = [0, 9, 8, 7, 6, 5, 4, 3, 2, 1];

/// One of the two digit-to-letter tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Vowel,
    Consonant,
}

impl Table {
    /// The table a word starts from, judged by its first letter.
    pub fn for_initial(initial: char) -> Self {
        if VOWEL_LETTERS.contains(&initial.to_ascii_lowercase()) {
            Table::Vowel
        } else {
            Table::Consonant
        }
    }

    /// The other table.
    pub fn toggle(self) -> Self {
        match self {
            Table::Vowel => Table::Consonant,
            Table::Consonant => Table::Vowel,
        }
    }

    /// All ten entries, indexed by digit.
    pub fn entries(self) -> &'static [&'static str; 10] {
        match self {
            Table::Vowel => &VOWELS,
            Table::Consonant => &CONSONANTS,
        }
    }

    /// The letters for a single digit, 0 through 9.
    pub fn letter(self, digit: u8) -> &'static str {
        self.entries()[usize::from(digit)]
    }

    /// The marker placed after the first vowel-table letter of a negative
    /// coordinate, in a word that starts from this table.
    pub fn sign_marker(self) -> char {
        match self {
            Table::Vowel => 's',
            Table::Consonant => 'v',
        }
    }

    /// Entries paired with their digits, in longest-match-first order.
    pub fn candidates(self) -> impl Iterator<Item = (u8, &'static str)> {
        CANDIDATE_ORDER
            .iter()
            .map(move |&digit| (digit, self.letter(digit)))
    }

    /// Find the entry the given text starts with.
    pub fn match_prefix(self, text: &str) -> Option<(u8, &'static str)> {
        self.candidates()
            .find(|(_, letters)| text.starts_with(*letters))
    }
}

/// True for either table's sign-marker letter.
pub fn is_sign_marker(c: char) -> bool {
    c == Table::Vowel.sign_marker() || c == Table::Consonant.sign_marker()
}
