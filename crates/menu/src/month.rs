/// Month keys used by the data file, indexed 0 (janeiro) to 11 (dezembro).
pub const MONTH_NAMES: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Looks up a month key case-insensitively.
fn lookup(name: &str) -> Option<u8> {
    let name = name.to_lowercase();

    MONTH_NAMES
        .iter()
        .position(|candidate| *candidate == name)
        .map(|index| index as u8)
}

/// Sort and visibility index of a month key.
///
/// Names outside the table fall back to 0, the same slot as janeiro, which
/// also hides them. Kept as is until product owners decide otherwise.
pub fn month_index(name: &str) -> u8 {
    match lookup(name) {
        Some(index) => index,
        None => {
            tracing::warn!(month = name, "unknown month name, treating as janeiro");
            0
        }
    }
}
