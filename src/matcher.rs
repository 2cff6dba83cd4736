use crate::model::{Coordinate, Pattern};

const SEPARATOR: char = ':';
const WILDCARD: &str = "*";

/// Whether `coordinate` satisfies `pattern`.
///
/// The pattern is split into at most three segments. A segment that is `*` or
/// missing matches anything, any other segment must equal the coordinate's
/// segment exactly.
pub fn matches(coordinate: &Coordinate, pattern: &Pattern) -> bool {
    let mut segments = pattern.as_str().splitn(3, SEPARATOR);
    [
        &coordinate.group,
        &coordinate.artifact,
        &coordinate.version,
    ]
    .into_iter()
    .all(|value| match segments.next() {
        None | Some(WILDCARD) => true,
        Some(segment) => segment == value.as_str(),
    })
}

pub fn matches_any(coordinate: &Coordinate, patterns: &[Pattern]) -> bool {
    patterns.iter().any(|pattern| matches(coordinate, pattern))
}
