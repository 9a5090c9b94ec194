use crate::coordinate::{Axis, Hemisphere, MAX_DEGREES};
use crate::error::ErrorKind;
use crate::table::{Table, is_sign_marker};
use log::{debug, trace};
use std::cmp::Ordering;
use std::fmt;

/// Errors that can occur while reading a name back into coordinates
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Expected a latitude word and a longitude word in {name:?}, found {count} words")]
    WordCount { name: String, count: usize },

    #[error("Empty word")]
    EmptyWord,

    #[error("No digit is spelled by {remaining:?} at position {position} of {word:?}")]
    UnknownLetters {
        word: String,
        position: usize,
        remaining: String,
    },

    #[error("Sign marker {marker:?} at position {position} of {word:?} is out of place")]
    MisplacedSignMarker {
        word: String,
        position: usize,
        marker: char,
    },
}

impl DecodeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DecodeError::MisplacedSignMarker { .. } => ErrorKind::Validation,
            DecodeError::WordCount { .. }
            | DecodeError::EmptyWord
            | DecodeError::UnknownLetters { .. } => ErrorKind::Format,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenEvent {
    /// A table entry was read, spelling this digit.
    Digit(u8),
    /// The word's sign marker was read: the coordinate is negative.
    SignMarker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SignCheck {
    /// No vowel-table entry has been read yet.
    Waiting,
    /// The next letter may be the sign marker.
    Pending,
    /// The marker's one chance has passed.
    Closed,
}

/// Reads a lowercase word back into digits, one table entry at a time.
///
/// The first table is chosen from the word's first letter and the tables
/// then alternate. Right after the first vowel-table entry the word's sign
/// marker may appear once; it takes a consonant's place, so the vowel table
/// is read again after it.
pub struct Tokenizer<'w> {
    word: &'w str,
    position: usize,
    table: Table,
    marker: char,
    sign: SignCheck,
    failed: bool,
}

impl<'w> Tokenizer<'w> {
    pub fn new(word: &'w str) -> Self {
        let start = word.chars().next().map_or(Table::Consonant, Table::for_initial);
        Self {
            word,
            position: 0,
            table: start,
            marker: start.sign_marker(),
            sign: SignCheck::Waiting,
            failed: false,
        }
    }

    /// Byte offset of the next unread letter.
    pub fn position(&self) -> usize {
        self.position
    }

    fn unmatched(&self, remaining: &str) -> DecodeError {
        match remaining.chars().next() {
            Some(marker) if is_sign_marker(marker) => DecodeError::MisplacedSignMarker {
                word: self.word.to_owned(),
                position: self.position,
                marker,
            },
            _ => DecodeError::UnknownLetters {
                word: self.word.to_owned(),
                position: self.position,
                remaining: remaining.to_owned(),
            },
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<TokenEvent, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let word = self.word;
        let remaining = &word[self.position..];
        if remaining.is_empty() {
            return None;
        }

        if self.sign == SignCheck::Pending {
            self.sign = SignCheck::Closed;
            if remaining.starts_with(self.marker) {
                trace!("sign marker at {}", self.position);
                self.position += self.marker.len_utf8();
                self.table = Table::Vowel;
                return Some(Ok(TokenEvent::SignMarker));
            }
        }

        match self.table.match_prefix(remaining) {
            Some((digit, letters)) => {
                trace!("{letters:?} -> {digit} ({:?}) at {}", self.table, self.position);
                self.position += letters.len();
                if self.table == Table::Vowel && self.sign == SignCheck::Waiting {
                    self.sign = SignCheck::Pending;
                }
                self.table = self.table.toggle();
                Some(Ok(TokenEvent::Digit(digit)))
            }
            None => {
                self.failed = true;
                Some(Err(self.unmatched(remaining)))
            }
        }
    }
}

/// Put the decimal point back into a recovered digit string.
///
/// Three or more digits are read as hundredths, with the point then moved
/// further left until the value is at most 180. Fewer digits are hundredths
/// outright. Fractional digits are kept as found.
pub fn place_decimal(digits: &str) -> String {
    let (mut whole, mut fraction) = if digits.len() < 3 {
        (String::new(), format!("{digits:0>2}"))
    } else {
        let (whole, fraction) = digits.split_at(digits.len() - 2);
        (whole.to_owned(), fraction.to_owned())
    };

    while exceeds_max_degrees(&whole, &fraction) {
        if let Some(digit) = whole.pop() {
            fraction.insert(0, digit);
        }
        trace!("shifted decimal point: {whole}.{fraction}");
    }

    match whole.trim_start_matches('0') {
        "" => format!("0.{fraction}"),
        whole => format!("{whole}.{fraction}"),
    }
}

fn exceeds_max_degrees(whole: &str, fraction: &str) -> bool {
    let whole = whole.trim_start_matches('0');
    match whole.len().cmp(&3) {
        Ordering::Greater => true,
        Ordering::Less => false,
        Ordering::Equal => {
            whole > "180" || (whole == "180" && fraction.bytes().any(|b| b != b'0'))
        }
    }
}

/// How decoded coordinates are presented.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Signed numbers instead of numerals with a hemisphere letter.
    pub signed: bool,
}

impl DecodeOptions {
    pub fn signed() -> Self {
        Self { signed: true }
    }
}

/// One decoded coordinate, in the form the caller asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum CoordinateValue {
    Signed(f64),
    Hemispheric(String),
}

impl fmt::Display for CoordinateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateValue::Signed(value) => write!(f, "{value}"),
            CoordinateValue::Hemispheric(text) => f.write_str(text),
        }
    }
}

/// A coordinate read back from one word.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedCoordinate {
    magnitude: String,
    value: f64,
    negative: bool,
    axis: Axis,
}

impl DecodedCoordinate {
    /// The unsigned numeral, with as many fractional digits as the word held.
    pub fn magnitude(&self) -> &str {
        &self.magnitude
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn signed(&self) -> f64 {
        if self.negative { -self.value } else { self.value }
    }

    pub fn hemisphere(&self) -> Hemisphere {
        self.axis.hemisphere(self.negative)
    }

    pub fn to_value(&self, options: DecodeOptions) -> CoordinateValue {
        if options.signed {
            CoordinateValue::Signed(self.signed())
        } else {
            CoordinateValue::Hemispheric(self.to_string())
        }
    }
}

impl fmt::Display for DecodedCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.magnitude, self.hemisphere())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DecodedPosition {
    pub latitude: DecodedCoordinate,
    pub longitude: DecodedCoordinate,
}

/// Read one word as a coordinate on the given axis. Case is ignored.
pub fn decode_word(word: &str, axis: Axis) -> Result<DecodedCoordinate, DecodeError> {
    let word = word.to_ascii_lowercase();
    if word.is_empty() {
        return Err(DecodeError::EmptyWord);
    }

    let mut digits = String::with_capacity(word.len());
    let mut negative = false;
    for event in Tokenizer::new(&word) {
        match event? {
            TokenEvent::Digit(digit) => digits.push(char::from(b'0' + digit)),
            TokenEvent::SignMarker => negative = true,
        }
    }

    // place_decimal always yields a plain numeral of at most 180
    let magnitude = place_decimal(&digits);
    let parsed = magnitude.parse::<f64>();
    debug_assert!(matches!(parsed, Ok(value) if value <= MAX_DEGREES), "{magnitude}");
    let value = parsed.unwrap_or_default();

    Ok(DecodedCoordinate {
        magnitude,
        value,
        negative,
        axis,
    })
}

/// Read a two-word name, latitude word first.
///
/// Each word picks its own starting table, so either of the two names
/// `encode` produces is accepted.
pub fn decode_name(name: &str) -> Result<DecodedPosition, DecodeError> {
    let words: Vec<&str> = name.split_whitespace().collect();
    let [latitude, longitude] = words.as_slice() else {
        return Err(DecodeError::WordCount {
            name: name.to_owned(),
            count: words.len(),
        });
    };

    let position = DecodedPosition {
        latitude: decode_word(latitude, Axis::Latitude)?,
        longitude: decode_word(longitude, Axis::Longitude)?,
    };
    debug!(
        "decoded {name:?} as ({}, {})",
        position.latitude, position.longitude
    );
    Ok(position)
}

/// Read a two-word name into a latitude and a longitude.
///
/// ```
/// use whitwell::{CoordinateValue, DecodeOptions, decode};
///
/// let (latitude, longitude) = decode("Feira Neevouf", DecodeOptions::default()).unwrap();
/// assert_eq!(latitude.to_string(), "38.91N");
/// assert_eq!(longitude.to_string(), "77.03W");
///
/// let (_, longitude) = decode("Feira Neevouf", DecodeOptions::signed()).unwrap();
/// assert_eq!(longitude, CoordinateValue::Signed(-77.03));
/// ```
pub fn decode(
    name: &str,
    options: DecodeOptions,
) -> Result<(CoordinateValue, CoordinateValue), DecodeError> {
    let position = decode_name(name)?;
    Ok((
        position.latitude.to_value(options),
        position.longitude.to_value(options),
    ))
}
