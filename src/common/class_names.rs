/// Joins class fragments into a single `class` attribute value.
///
/// Absent and blank fragments are skipped, so callers can pass conditional
/// classes as `Option`s without special-casing.
pub fn class_names<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut out = String::new();
    for part in parts.into_iter().flatten() {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(part);
    }
    out
}
