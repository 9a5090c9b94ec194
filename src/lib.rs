//! Pronounceable two-word names for latitude/longitude pairs.
//!
//! Each digit of a coordinate is spelled with a letter from one of two
//! ten-entry tables, alternating between a vowel table and a consonant
//! table. A negative coordinate carries a sign marker after its first vowel.
//! Every position has two names, one whose latitude word starts from the
//! vowel table and one whose latitude word starts from the consonant table;
//! [`decode`] accepts either.
//!
//! ```
//! use whitwell::{DecodeOptions, decode, encode};
//!
//! let (name, _) = encode(38.91, -77.03).unwrap();
//! assert_eq!(name.to_string(), "Ipoob Neevouf");
//!
//! let (latitude, longitude) = decode("Ipoob Neevouf", DecodeOptions::default()).unwrap();
//! assert_eq!(latitude.to_string(), "38.91N");
//! assert_eq!(longitude.to_string(), "77.03W");
//! ```

pub mod coordinate;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod table;

pub use coordinate::{Axis, Coordinate, CoordinateError, Hemisphere, IntoCoordinate};
pub use decoder::{
    CoordinateValue, DecodeError, DecodeOptions, DecodedCoordinate, DecodedPosition, decode,
    decode_name, decode_word,
};
pub use encoder::{WhitwellName, encode};
pub use error::ErrorKind;
