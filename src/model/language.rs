//! Language slug <-> file extension tables.

/// Extension used for slugs missing from [`LANGUAGES`].
pub const UNKNOWN_EXT: &str = "txt";

/// `(slug, extension)` pairs for every language with a known extension.
pub const LANGUAGES: &[(&str, &str)] = &[
    ("cpp", "cpp"),
    ("java", "java"),
    ("python", "py"),
    ("python3", "py3"),
    ("c", "c"),
    ("csharp", "cs"),
    ("javascript", "js"),
    ("ruby", "rb"),
    ("swift", "swift"),
    ("golang", "go"),
    ("scala", "scala"),
    ("kotlin", "kt"),
    ("rust", "rs"),
    ("php", "php"),
    ("typescript", "ts"),
];

pub fn extension_for_slug(slug: &str) -> &'static str {
    LANGUAGES
        .iter()
        .find(|(s, _)| *s == slug)
        .map(|(_, ext)| *ext)
        .unwrap_or(UNKNOWN_EXT)
}

/// Accepts the extension with or without its leading dot.
pub fn slug_for_extension(ext: &str) -> Option<&'static str> {
    let ext = ext.strip_prefix('.').unwrap_or(ext);
    LANGUAGES
        .iter()
        .find(|(_, e)| *e == ext)
        .map(|(slug, _)| *slug)
}
