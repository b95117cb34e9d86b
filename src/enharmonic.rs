//! Enharmonic spellings of song keys.
//!
//! Keys with an accidental are written in a canonical `"X#/Yb"` form so that
//! a chart tagged `Ab` and one tagged `G#` end up with the same keyword.

/// Keys accepted by the `--key` option.
pub static USER_KEYS: &[&str] = &[
    "Ab", "A", "Bb", "B", "C", "C#", "Db", "D", "Eb", "E", "F", "F#", "G", "G#",
];

static ENHARMONICS: &[(&str, &str)] = &[
    ("Ab", "G#/Ab"),
    ("G#", "G#/Ab"),
    ("A#", "A#/Bb"),
    ("Bb", "A#/Bb"),
    ("C#", "C#/Db"),
    ("Db", "C#/Db"),
    ("D#", "D#/Eb"),
    ("Eb", "D#/Eb"),
];

/// Returns the canonical spelling of `key`.
///
/// Keys without an entry in the table are returned unchanged.
pub fn normalize_key(key: &str) -> &str {
    ENHARMONICS
        .iter()
        .find(|(spelling, _)| *spelling == key)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(key)
}
