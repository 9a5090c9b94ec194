use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use rand::Rng;
use whitwell::{CoordinateValue, DecodeOptions, ErrorKind, decode, decode_name, encode};

/// A coordinate held as whole hundredths of a degree, so every value has an
/// exact two-decimal form.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Hundredths(i32);

impl Hundredths {
    const LIMIT: i32 = 18_000;

    fn random() -> Self {
        Hundredths(rand::rng().random_range(-Self::LIMIT..=Self::LIMIT))
    }

    fn degrees(self) -> f64 {
        f64::from(self.0) / 100.0
    }

    fn magnitude(self) -> String {
        let abs = self.0.unsigned_abs();
        format!("{}.{:02}", abs / 100, abs % 100)
    }

    /// e.g. "33.87S"
    fn with_hemisphere(self, negative: char, positive: char) -> String {
        let letter = if self.0 < 0 { negative } else { positive };
        format!("{}{letter}", self.magnitude())
    }
}

impl Arbitrary for Hundredths {
    fn arbitrary(g: &mut Gen) -> Self {
        Hundredths(i32::arbitrary(g).rem_euclid(2 * Self::LIMIT + 1) - Self::LIMIT)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(Hundredths))
    }
}

#[derive(Debug, Clone, Copy)]
struct Position {
    latitude: Hundredths,
    longitude: Hundredths,
}

impl Position {
    fn random() -> Self {
        Position {
            latitude: Hundredths::random(),
            longitude: Hundredths::random(),
        }
    }
}

impl Arbitrary for Position {
    fn arbitrary(g: &mut Gen) -> Self {
        Position {
            latitude: Hundredths::arbitrary(g),
            longitude: Hundredths::arbitrary(g),
        }
    }
}

fn signed_pair(name: &str) -> (CoordinateValue, CoordinateValue) {
    decode(name, DecodeOptions::signed()).expect("Decoding failed")
}

/// Property test verifying that both names for a position decode back to
/// that position.
#[quickcheck]
fn encoder_and_decoder_cancel(position: Position) -> bool {
    let Position {
        latitude,
        longitude,
    } = position;
    let expected = (
        CoordinateValue::Signed(latitude.degrees()),
        CoordinateValue::Signed(longitude.degrees()),
    );

    let (first, second) =
        encode(latitude.degrees(), longitude.degrees()).expect("Encoding failed");

    signed_pair(&first.to_string()) == expected && signed_pair(&second.to_string()) == expected
}

/// Hemisphere output spells the same numeral the position was written with.
#[quickcheck]
fn hemisphere_output_matches_input(position: Position) -> bool {
    let latitude = position.latitude.with_hemisphere('S', 'N');
    let longitude = position.longitude.with_hemisphere('W', 'E');

    let (first, second) = encode(latitude.as_str(), longitude.as_str()).expect("Encoding failed");

    [first, second].iter().all(|name| {
        let decoded = decode_name(&name.to_string()).expect("Decoding failed");
        decoded.latitude.to_string() == latitude && decoded.longitude.to_string() == longitude
    })
}

/// Text with a hemisphere letter names the same place as a signed number.
#[quickcheck]
fn text_and_numbers_agree(position: Position) -> bool {
    let from_text = encode(
        position.latitude.with_hemisphere('S', 'N'),
        position.longitude.with_hemisphere('W', 'E'),
    );
    let from_numbers = encode(position.latitude.degrees(), position.longitude.degrees());
    from_text == from_numbers
}

#[test]
fn random_positions_round_trip() {
    for _ in 0..500 {
        let position = Position::random();
        let (first, second) = encode(position.latitude.degrees(), position.longitude.degrees())
            .expect("Encoding failed");

        for name in [first, second] {
            let decoded = decode_name(&name.to_string()).expect("Decoding failed");
            assert_eq!(decoded.latitude.signed(), position.latitude.degrees(), "{name}");
            assert_eq!(decoded.longitude.signed(), position.longitude.degrees(), "{name}");
        }
    }
}

#[test]
fn both_names_differ() {
    let (first, second) = encode(37.37, -122.03).unwrap();
    assert_ne!(first, second);
    assert_eq!(decode_name(&first.to_string()), decode_name(&second.to_string()));
}

#[test]
fn mcmurdo_has_two_names() {
    let (first, second) = encode("77.85S", "166.67E").unwrap();
    assert_eq!(first.to_string(), "Eeseepu Bymyn");
    assert_eq!(second.to_string(), "Neeveil Amymee");

    for name in ["Eeseepu Bymyn", "Neeveil Amymee"] {
        assert_eq!(
            signed_pair(name),
            (CoordinateValue::Signed(-77.85), CoordinateValue::Signed(166.67))
        );
    }
}

#[test]
fn published_names_land_near_their_places() {
    let close = |name: &str, latitude: f64, longitude: f64| {
        let position = decode_name(name).expect("Decoding failed");
        (position.latitude.signed() - latitude).abs() < 0.5
            && (position.longitude.signed() - longitude).abs() < 0.5
    };

    assert!(close("Eeseepu Bymeem", -77.85, 166.67));
    assert!(close("Neeveil Amyny", -77.85, 166.67));
    assert!(close("Isilu Buban", -33.87, 151.21));
    assert_eq!(
        signed_pair("Eeseepu Bymeem"),
        signed_pair("Neeveil Amyny")
    );
}

#[test]
fn range_errors() {
    assert_eq!(encode(181, 0).unwrap_err().kind(), ErrorKind::Range);
    assert_eq!(encode(0, -200).unwrap_err().kind(), ErrorKind::Range);
    assert_eq!(encode(180, -180).map(|_| ()), Ok(()));
}

#[test]
fn conflicting_sign_errors() {
    assert!(encode("37.37N", "122.03").is_ok());
    assert_eq!(
        encode("-37.37N", "122.03").unwrap_err().kind(),
        ErrorKind::Validation
    );
}

#[test]
fn decode_errors() {
    assert_eq!(
        decode("Inin", DecodeOptions::default()).unwrap_err().kind(),
        ErrorKind::Format
    );
    assert_eq!(
        decode("Imqm Bevethi", DecodeOptions::default()).unwrap_err().kind(),
        ErrorKind::Format
    );
    assert_eq!(
        decode("Inin Bevethiv", DecodeOptions::default()).unwrap_err().kind(),
        ErrorKind::Validation
    );
}
