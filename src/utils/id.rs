/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::constants::ID_LENGTH;

const ALPHABET: [char; 36] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
];

/// Generates a random lowercase alphanumeric identifier with `prefix`
///
/// # Examples
/// ```
/// use analytics_probe::utils::id::prefixed_id;
/// let id = prefixed_id("pres");
/// assert!(id.starts_with("pres-"));
/// ```
pub fn prefixed_id(prefix: &str) -> String {
    format!("{}-{}", prefix, nanoid::nanoid!(ID_LENGTH, &ALPHABET))
}

/// Generates a presentation identifier
pub fn presentation_id() -> String {
    prefixed_id("pres")
}

/// Generates a slide identifier
pub fn slide_id() -> String {
    prefixed_id("slide")
}
