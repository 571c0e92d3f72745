//! The timezones offered by the zone menu.

/// A selectable zone: the name shown on the display and its IANA identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zone {
    pub label: &'static str,
    pub id: &'static str,
}

/// Menu order.
pub const ZONES: [Zone; 7] = [
    Zone {
        label: "Eastern",
        id: "America/New_York",
    },
    Zone {
        label: "Central",
        id: "America/Chicago",
    },
    Zone {
        label: "Mountain",
        id: "America/Denver",
    },
    Zone {
        label: "Pacific",
        id: "America/Los_Angeles",
    },
    Zone {
        label: "Alaska",
        id: "America/Anchorage",
    },
    Zone {
        label: "Hawaii",
        id: "America/Honolulu",
    },
    Zone { label: "UTC", id: "UTC" },
];

/// Index of the UTC entry, used when the stored zone is not in the list.
pub const UTC_INDEX: usize = ZONES.len() - 1;

/// Position of `id` in [`ZONES`].
#[must_use]
pub fn position(id: &str) -> Option<usize> {
    ZONES.iter().position(|zone| zone.id == id)
}

/// The zone at `index`, or UTC if out of range.
#[must_use]
pub fn zone(index: usize) -> Zone {
    ZONES.get(index).copied().unwrap_or(ZONES[UTC_INDEX])
}
