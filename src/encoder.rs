use crate::coordinate::{Axis, Coordinate, CoordinateError, IntoCoordinate};
use crate::table::Table;
use log::{debug, trace};
use std::fmt;

/// A latitude word and a longitude word, which together name a position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WhitwellName {
    pub latitude: String,
    pub longitude: String,
}

impl fmt::Display for WhitwellName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.latitude, self.longitude)
    }
}

// Word construction
//
// table = start, marked = (coordinate >= 0)
// for each digit d of the numeral:
//     emit letter(table, d)
//     if table is the vowel table and not marked:
//         emit the start table's sign marker, marked = true
//         (the marker fills the consonant slot, so table stays on vowels)
//     else:
//         table = other table
// capitalize the first letter
/// Spell one coordinate as a single capitalized word, beginning with the
/// given table.
pub fn encode_word(coordinate: &Coordinate, start: Table) -> String {
    let marker = start.sign_marker();
    let mut table = start;
    let mut marked = !coordinate.is_negative();
    let mut word = String::new();

    for digit in coordinate.digits() {
        let letters = table.letter(digit);
        trace!("{digit} -> {letters:?} ({table:?})");
        word.push_str(letters);

        if table == Table::Vowel && !marked {
            word.push(marker);
            marked = true;
        } else {
            table = table.toggle();
        }
    }

    capitalize(&word)
}

/// Both names for a pair of already-read coordinates: latitude vowel-first
/// with longitude consonant-first, then the reverse.
pub fn encode_coordinates(
    latitude: &Coordinate,
    longitude: &Coordinate,
) -> (WhitwellName, WhitwellName) {
    let vowel_first = WhitwellName {
        latitude: encode_word(latitude, Table::Vowel),
        longitude: encode_word(longitude, Table::Consonant),
    };
    let consonant_first = WhitwellName {
        latitude: encode_word(latitude, Table::Consonant),
        longitude: encode_word(longitude, Table::Vowel),
    };
    (vowel_first, consonant_first)
}

/// Name a position.
///
/// Each coordinate may be a signed number or text with a hemisphere letter.
/// Both valid names are returned, the vowel-first latitude first.
///
/// ```
/// let (first, second) = whitwell::encode(37.37, "122.03W").unwrap();
/// assert_eq!(first.to_string(), "Inin Bevethi");
/// assert_eq!(second.to_string(), "Feefee Asedouf");
/// ```
pub fn encode<A, B>(
    latitude: A,
    longitude: B,
) -> Result<(WhitwellName, WhitwellName), CoordinateError>
where
    A: IntoCoordinate,
    B: IntoCoordinate,
{
    let latitude = latitude.into_coordinate(Axis::Latitude)?;
    let longitude = longitude.into_coordinate(Axis::Longitude)?;
    let names = encode_coordinates(&latitude, &longitude);
    debug!("encoded ({latitude}, {longitude}) as {} / {}", names.0, names.1);
    Ok(names)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
