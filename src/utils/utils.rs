// Start of file: src/utils/utils.rs

use serde::ser::Error as _;
use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Serializer};

/*
    * Convert any `Serialize` type into a two-space-indented JSON string.
*/
pub fn to_two_space_indented_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    let mut writer: Vec<u8> = Vec::new();

    let formatter: PrettyFormatter<'_> = PrettyFormatter::with_indent(b"  ");

    let mut ser: Serializer<&mut Vec<u8>, PrettyFormatter<'_>> =
        Serializer::with_formatter(&mut writer, formatter);

    value.serialize(&mut ser)?;

    String::from_utf8(writer).map_err(serde_json::Error::custom)
}

/*
    * Turns a status into its upper snake-case reason ("Not Found" -> "NOT_FOUND").
*/
pub fn status_reason(status: axum::http::StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("UNKNOWN STATUS")
        .to_uppercase()
        .replace(' ', "_")
}


// End of file: src/utils/utils.rs
