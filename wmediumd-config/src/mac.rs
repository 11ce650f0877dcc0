use wmediumd_util::Address;

/// Parses a `"42:00:00:00:01:00"`-style MAC address string.
///
/// Returns `None` on any malformed input: wrong number of groups, a group
/// that isn't exactly two hex digits, or a non-hex digit.
pub fn parse_mac(text: &str) -> Option<Address> {
    let groups: Vec<&str> = text.split(':').collect();
    if groups.len() != 6 {
        return None;
    }

    let mut bytes = [0u8; 6];
    for (i, group) in groups.iter().enumerate() {
        if group.len() != 2 {
            return None;
        }
        bytes[i] = u8::from_str_radix(group, 16).ok()?;
    }
    Some(Address::new(bytes))
}
