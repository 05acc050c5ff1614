//! Field name case conversion
//!
//! JSON:API documents conventionally use camelCase member names while Rust
//! models declare snake_case fields; this module provides the conversion
//! applied to every attribute key at render time.

/// Convert a snake_case name into camelCase.
///
/// The first segment is kept as-is and every following segment is
/// capitalized (first character uppercased, the remainder lowercased).
/// Separators never survive into the output, so consecutive, leading, and
/// trailing underscores collapse.
///
/// # Examples
///
/// ```
/// use grappelli::convert::snake_to_camel_case;
///
/// assert_eq!(snake_to_camel_case("first_name"), "firstName");
/// assert_eq!(snake_to_camel_case("name"), "name");
/// assert_eq!(snake_to_camel_case("a__b"), "aB");
/// ```
pub fn snake_to_camel_case(name: &str) -> String {
	let mut segments = name.split('_');
	let mut converted = String::with_capacity(name.len());

	if let Some(first) = segments.next() {
		converted.push_str(first);
	}
	for segment in segments {
		let mut chars = segment.chars();
		if let Some(first) = chars.next() {
			converted.extend(first.to_uppercase());
			converted.extend(chars.flat_map(char::to_lowercase));
		}
	}
	converted
}
