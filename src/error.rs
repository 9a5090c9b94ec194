/// The broad class of a failure, shared by encoding and decoding errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A coordinate's magnitude exceeds 180.
    Range,
    /// Input that is not a number, or letters that do not spell any digits.
    Format,
    /// Sign indicators that conflict, repeat, or appear out of place.
    Validation,
}
