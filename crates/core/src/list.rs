//! Exact token membership in delimiter-joined lists

/// Whether `token` appears as a whole entry of the `delimiter`-joined `list`.
///
/// Both sides are padded with the delimiter before a substring search, so
/// `"a"` does not match inside `"ab cd"`. A token that itself contains the
/// delimiter can still match across entries.
pub fn list_contains(list: &str, token: &str, delimiter: &str) -> bool {
    let padded_list = [delimiter, list, delimiter].concat();
    let padded_token = [delimiter, token, delimiter].concat();
    padded_list.contains(&padded_token)
}
