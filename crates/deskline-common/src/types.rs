/// Request and response pagination state
pub mod cursor;
/// Closed, discriminated unions decoded from heterogeneous JSON arrays
pub mod union;
