//! Built-in era themes.

use once_cell::sync::Lazy;

use super::model::EraTheme;

/// Era assigned to freshly created profiles and used for unknown ids.
pub const DEFAULT_ERA_ID: &str = "midnights";

static ERA_THEMES: Lazy<Vec<EraTheme>> = Lazy::new(|| {
    vec![
        EraTheme::new(
            "fearless",
            "Fearless",
            ["#FFD700", "#FFA500", "#FFFF00", "from-yellow-400 to-amber-500"],
            "Dancing Script",
            "Golden curls and country dreams",
        ),
        EraTheme::new(
            "red",
            "Red",
            ["#DC143C", "#8B0000", "#FF6347", "from-red-500 to-red-700"],
            "Playfair Display",
            "Passionate autumn romance",
        ),
        EraTheme::new(
            "1989",
            "1989",
            ["#87CEEB", "#4169E1", "#ADD8E6", "from-sky-400 to-blue-600"],
            "Montserrat",
            "Polaroid pop perfection",
        ),
        EraTheme::new(
            "reputation",
            "Reputation",
            ["#2F2F2F", "#000000", "#696969", "from-gray-800 to-black"],
            "Bebas Neue",
            "Dark and unapologetic",
        ),
        EraTheme::new(
            "lover",
            "Lover",
            ["#FFB6C1", "#DA70D6", "#FFE4E1", "from-pink-300 to-purple-400"],
            "Pacifico",
            "Pastel rainbow dreams",
        ),
        EraTheme::new(
            "folklore",
            "Folklore",
            ["#708090", "#2F4F4F", "#D3D3D3", "from-gray-400 to-gray-600"],
            "Crimson Text",
            "Cozy indie storytelling",
        ),
        EraTheme::new(
            "evermore",
            "Evermore",
            ["#A0522D", "#8B4513", "#CD853F", "from-amber-600 to-orange-800"],
            "Merriweather",
            "Sister album autumn",
        ),
        EraTheme::new(
            "midnights",
            "Midnights",
            ["#191970", "#4B0082", "#663399", "from-indigo-900 to-purple-900"],
            "Space Grotesk",
            "Lavender haze nights",
        ),
        EraTheme::new(
            "tortured-poets",
            "TTPD",
            ["#696969", "#2F2F2F", "#A9A9A9", "from-stone-600 to-slate-800"],
            "EB Garamond",
            "Gothic poetry depths",
        ),
    ]
});

/// All era themes in display order.
pub fn era_themes() -> &'static [EraTheme] {
    &ERA_THEMES
}

/// Looks up an era by id (case-insensitive).
pub fn find_era(id: &str) -> Option<&'static EraTheme> {
    ERA_THEMES.iter().find(|t| t.id.eq_ignore_ascii_case(id))
}

/// Looks up an era, falling back to the default era for unknown ids.
pub fn era_or_default(id: &str) -> &'static EraTheme {
    find_era(id).unwrap_or_else(default_era)
}

pub fn default_era() -> &'static EraTheme {
    ERA_THEMES
        .iter()
        .find(|t| t.id == DEFAULT_ERA_ID)
        .unwrap_or(&ERA_THEMES[0])
}
