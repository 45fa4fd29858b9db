//! Built-in suspect starting tiles on the reference board.

use crate::core::location::Location;

const STARTS: [(&str, Location); 6] = [
    ("Mrs. White", Location::new(0, 9)),
    ("Mr. Green", Location::new(0, 14)),
    ("Miss Scarlet", Location::new(24, 8)),
    ("Professor Plum", Location::new(19, 23)),
    ("Colonel Mustard", Location::new(17, 0)),
    ("Ms. Peacock", Location::new(6, 23)),
];

/// Starting tile of a suspect, matched case-insensitively.
pub fn by_name(name: &str) -> Option<Location> {
    let name = name.trim();
    STARTS
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|&(_, loc)| loc)
}

static NAMES: [&str; STARTS.len()] = {
    let mut names = [""; STARTS.len()];
    let mut i = 0;
    while i < STARTS.len() {
        names[i] = STARTS[i].0;
        i += 1;
    }
    names
};

/// Names of all built-in suspects, in registry order.
pub fn names() -> &'static [&'static str] {
    &NAMES
}
