/// Weight applied to roles outside the closed `Member | PM | PL` set.
pub const DEFAULT_ROLE_WEIGHT: u32 = 1;

/// Role weight lookup: PL=3, PM=2, Member=1, anything else falls back to
/// `DEFAULT_ROLE_WEIGHT`. Role validation happens at the data-entry boundary.
pub fn role_weight(role: &str) -> u32 {
    match role {
        "PL" => 3,
        "PM" => 2,
        "Member" => 1,
        _ => DEFAULT_ROLE_WEIGHT,
    }
}
