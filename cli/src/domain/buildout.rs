//! Default Buildout configuration.

/// Lines of the `buildout.cfg` written when none exists yet.
pub const DEFAULT_BUILDOUT_CFG: &[&str] = &[
    "[buildout]",
    "parts = default",
    "",
    "[default]",
    "recipe = zc.recipe.egg",
    "eggs = zc.recipe.egg",
    "interpreter = python",
];

/// Render the default configuration, one newline-terminated line per entry.
#[must_use]
pub fn default_buildout_cfg() -> String {
    DEFAULT_BUILDOUT_CFG
        .iter()
        .map(|line| format!("{line}\n"))
        .collect()
}
