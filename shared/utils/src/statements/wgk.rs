//! WGK Matcher
//!
//! Reads the German water-hazard class from normalized sheet text. Sheets
//! state it either as the abbreviation (`WGK 1`, `WGKWGK 1 schwach
//! wassergefährdend`) or spelled out (`Wassergefährdungsklasse: 2`).

use hazcode_models::WgkClass;
use regex::Regex;
use std::sync::LazyLock;

static ABBREVIATION_CUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"WGK.*?[0-3]").expect("WGK cue pattern is valid"));

static FULL_TERM_CUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[Ww]assergefährdungsklasse.*?[0-3]").expect("WGK term pattern is valid")
});

/// Find the WGK digit.
///
/// Matches of the abbreviation cue are listed before matches of the full term
/// and the class is the last character of the first listed match. Any
/// abbreviation match therefore takes precedence over the full term, even
/// when the full term appears earlier in the text.
pub fn match_wgk(text: &str) -> Option<WgkClass> {
    let first = ABBREVIATION_CUE
        .find_iter(text)
        .chain(FULL_TERM_CUE.find_iter(text))
        .next()?;

    first.as_str().chars().last().and_then(WgkClass::from_digit)
}
