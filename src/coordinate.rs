use crate::error::ErrorKind;
use std::fmt;

/// The largest magnitude a coordinate may have, in degrees.
pub const MAX_DEGREES: f64 = 180.0;

/// Errors that can occur while reading a coordinate for encoding
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CoordinateError {
    #[error("Coordinate {input:?} is outside -180 to 180")]
    OutOfRange { input: String },

    #[error("Coordinate {input:?} is not a number")]
    InvalidNumber { input: String },

    #[error("Coordinate {input:?} has more than one hemisphere letter")]
    MultipleHemispheres { input: String },

    #[error("Coordinate {input:?} has both a hemisphere letter and a numeric sign")]
    ConflictingSign { input: String },

    #[error("Hemisphere {hemisphere} in {input:?} does not apply to a {axis}")]
    WrongAxis {
        input: String,
        hemisphere: Hemisphere,
        axis: Axis,
    },
}

impl CoordinateError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoordinateError::OutOfRange { .. } => ErrorKind::Range,
            CoordinateError::InvalidNumber { .. } => ErrorKind::Format,
            CoordinateError::MultipleHemispheres { .. }
            | CoordinateError::ConflictingSign { .. }
            | CoordinateError::WrongAxis { .. } => ErrorKind::Validation,
        }
    }
}

/// Which half of a position a coordinate describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// The hemisphere a coordinate on this axis lies in.
    pub fn hemisphere(self, negative: bool) -> Hemisphere {
        match (self, negative) {
            (Axis::Latitude, false) => Hemisphere::North,
            (Axis::Latitude, true) => Hemisphere::South,
            (Axis::Longitude, false) => Hemisphere::East,
            (Axis::Longitude, true) => Hemisphere::West,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => f.write_str("latitude"),
            Axis::Longitude => f.write_str("longitude"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    /// Read a hemisphere letter, in either case.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'N' => Some(Hemisphere::North),
            'S' => Some(Hemisphere::South),
            'E' => Some(Hemisphere::East),
            'W' => Some(Hemisphere::West),
            _ => None,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Hemisphere::North => 'N',
            Hemisphere::South => 'S',
            Hemisphere::East => 'E',
            Hemisphere::West => 'W',
        }
    }

    /// South and west are the negative hemispheres.
    pub fn is_negative(self) -> bool {
        matches!(self, Hemisphere::South | Hemisphere::West)
    }

    pub fn axis(self) -> Axis {
        match self {
            Hemisphere::North | Hemisphere::South => Axis::Latitude,
            Hemisphere::East | Hemisphere::West => Axis::Longitude,
        }
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A coordinate ready for encoding: its magnitude as a canonical numeral with
/// two fractional digits, and its sign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinate {
    numeral: String,
    negative: bool,
}

impl Coordinate {
    /// Build a coordinate from signed decimal degrees.
    pub fn from_degrees(degrees: f64) -> Result<Self, CoordinateError> {
        if !degrees.is_finite() {
            return Err(CoordinateError::InvalidNumber {
                input: degrees.to_string(),
            });
        }
        if degrees.abs() > MAX_DEGREES {
            return Err(CoordinateError::OutOfRange {
                input: degrees.to_string(),
            });
        }

        Ok(Self {
            numeral: normalize(&degrees.abs().to_string())?,
            negative: degrees < 0.0,
        })
    }

    /// Parse text such as `"37.37"`, `"-122.03"` or `"33.87S"`.
    ///
    /// The sign may be given by a leading `-`/`+` or by one hemisphere letter
    /// for the given axis, but not both. Without either the coordinate is
    /// north or east.
    pub fn parse(input: &str, axis: Axis) -> Result<Self, CoordinateError> {
        let mut hemisphere = None;
        let mut residual = String::with_capacity(input.len());
        for c in input.chars() {
            match Hemisphere::from_letter(c) {
                Some(found) => {
                    if hemisphere.replace(found).is_some() {
                        return Err(CoordinateError::MultipleHemispheres {
                            input: input.to_owned(),
                        });
                    }
                }
                None => residual.push(c),
            }
        }

        let residual = residual.trim();
        let (explicit_sign, magnitude) = if let Some(rest) = residual.strip_prefix('-') {
            (Some(true), rest)
        } else if let Some(rest) = residual.strip_prefix('+') {
            (Some(false), rest)
        } else {
            (None, residual)
        };

        if !is_plain_numeral(magnitude) {
            return Err(CoordinateError::InvalidNumber {
                input: input.to_owned(),
            });
        }

        let negative = match (hemisphere, explicit_sign) {
            (Some(_), Some(_)) => {
                return Err(CoordinateError::ConflictingSign {
                    input: input.to_owned(),
                });
            }
            (Some(hemisphere), None) => {
                if hemisphere.axis() != axis {
                    return Err(CoordinateError::WrongAxis {
                        input: input.to_owned(),
                        hemisphere,
                        axis,
                    });
                }
                hemisphere.is_negative()
            }
            (None, sign) => sign.unwrap_or(false),
        };

        Ok(Self {
            numeral: normalize(input)?,
            negative,
        })
    }

    /// The canonical unsigned numeral, e.g. `"37.37"` or `".05"`.
    pub fn numeral(&self) -> &str {
        &self.numeral
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// The digits of the numeral in order, without the decimal point.
    pub fn digits(&self) -> impl Iterator<Item = u8> + '_ {
        self.numeral
            .bytes()
            .filter(u8::is_ascii_digit)
            .map(|b| b - b'0')
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-{}", self.numeral)
        } else {
            f.write_str(&self.numeral)
        }
    }
}

/// Anything that can stand in for one coordinate of a position.
pub trait IntoCoordinate {
    fn into_coordinate(self, axis: Axis) -> Result<Coordinate, CoordinateError>;
}

impl IntoCoordinate for Coordinate {
    fn into_coordinate(self, _axis: Axis) -> Result<Coordinate, CoordinateError> {
        Ok(self)
    }
}

impl IntoCoordinate for f64 {
    fn into_coordinate(self, _axis: Axis) -> Result<Coordinate, CoordinateError> {
        Coordinate::from_degrees(self)
    }
}

impl IntoCoordinate for f32 {
    fn into_coordinate(self, _axis: Axis) -> Result<Coordinate, CoordinateError> {
        Coordinate::from_degrees(f64::from(self))
    }
}

impl IntoCoordinate for i32 {
    fn into_coordinate(self, _axis: Axis) -> Result<Coordinate, CoordinateError> {
        Coordinate::from_degrees(f64::from(self))
    }
}

impl IntoCoordinate for &str {
    fn into_coordinate(self, axis: Axis) -> Result<Coordinate, CoordinateError> {
        Coordinate::parse(self, axis)
    }
}

impl IntoCoordinate for &String {
    fn into_coordinate(self, axis: Axis) -> Result<Coordinate, CoordinateError> {
        Coordinate::parse(self, axis)
    }
}

impl IntoCoordinate for String {
    fn into_coordinate(self, axis: Axis) -> Result<Coordinate, CoordinateError> {
        Coordinate::parse(&self, axis)
    }
}

/// Digits with at most one decimal point, and at least one digit.
fn is_plain_numeral(text: &str) -> bool {
    text.bytes().any(|b| b.is_ascii_digit())
        && text.bytes().all(|b| b.is_ascii_digit() || b == b'.')
        && text.bytes().filter(|&b| b == b'.').count() <= 1
}

/// Reduce a coordinate to its canonical unsigned numeral.
///
/// Everything but digits and the decimal point is dropped, along with leading
/// zeros; a numeral with no nonzero digit becomes `"0"`. The result keeps at
/// most three whole digits and exactly two fractional digits. Extra fractional
/// digits are truncated, never rounded: `"37.379"` becomes `"37.37"`.
pub fn normalize(input: &str) -> Result<String, CoordinateError> {
    let stripped: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    let numeral = if stripped.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        stripped.trim_start_matches('0')
    } else {
        "0"
    };

    let value: f64 = numeral
        .parse()
        .map_err(|_| CoordinateError::InvalidNumber {
            input: input.to_owned(),
        })?;
    if value > MAX_DEGREES {
        return Err(CoordinateError::OutOfRange {
            input: input.to_owned(),
        });
    }

    let (whole, fraction) = numeral.split_once('.').unwrap_or((numeral, ""));
    let whole = &whole[..whole.len().min(3)];
    let fraction = format!("{fraction}00");
    Ok(format!("{whole}.{}", &fraction[..2]))
}
