//! Per-species tooth layout registry.

use crate::models::{Species, ToothLayout};

static DOG_LAYOUT: ToothLayout = ToothLayout {
    upper_right: &["101", "102", "103", "104", "105", "106", "107", "108", "109", "110"],
    upper_left: &["201", "202", "203", "204", "205", "206", "207", "208", "209", "210", "211"],
    lower_left: &["301", "302", "303", "304", "305", "306", "307", "308", "309", "310", "311"],
    lower_right: &["401", "402", "403", "404", "405", "406", "407", "408", "409", "410", "411"],
};

static CAT_LAYOUT: ToothLayout = ToothLayout {
    upper_right: &["101", "102", "103", "104", "105", "106", "107", "108"],
    upper_left: &["201", "202", "203", "204", "205", "206", "207", "208"],
    lower_left: &["301", "302", "303", "304", "305", "306", "307"],
    lower_right: &["401", "402", "403", "404", "405", "406", "407"],
};

/// Layout for a species identifier.
///
/// Matching is case-sensitive. Anything other than `"dog"` or `"cat"` gets
/// the dog layout; callers cannot tell a defaulted species from `"dog"`.
pub fn layout_for(species: &str) -> &'static ToothLayout {
    species_layout(Species::resolve(species))
}

/// Layout for an already-parsed species.
pub fn species_layout(species: Species) -> &'static ToothLayout {
    match species {
        Species::Dog => &DOG_LAYOUT,
        Species::Cat => &CAT_LAYOUT,
    }
}
