//! System-name generation for the category form.
//!
//! The category form derives the system name (`name`) from the display name
//! as the admin types, until the admin edits the system name by hand.

use regex::Regex;
use std::sync::OnceLock;

fn patterns() -> &'static [(Regex, &'static str); 4] {
    static PATTERNS: OnceLock<[(Regex, &'static str); 4]> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        let re = |p: &str| Regex::new(p).expect("slug patterns are literals");
        [
            (re(r"[^a-z0-9\s]"), ""),
            (re(r"\s+"), "_"),
            (re(r"_{2,}"), "_"),
            (re(r"^_|_$"), ""),
        ]
    })
}

/// `"Gas & Groceries!"` -> `"gas_groceries"`.
pub fn slugify(display_name: &str) -> String {
    let mut slug = display_name.to_lowercase();
    for (pattern, replacement) in patterns() {
        slug = pattern.replace_all(&slug, *replacement).into_owned();
    }
    slug
}

/// Tracks whether the system-name input still holds a generated value.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SlugSync {
    generated: Option<String>,
}

impl SlugSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called on every display-name input. Returns the value to write into
    /// the system-name input, or `None` when the admin has typed their own.
    pub fn on_display_input(&mut self, display_name: &str, current_name: &str) -> Option<String> {
        let untouched = current_name.is_empty() || self.generated.as_deref() == Some(current_name);
        if !untouched {
            return None;
        }
        let slug = slugify(display_name);
        self.generated = Some(slug.clone());
        Some(slug)
    }
}
