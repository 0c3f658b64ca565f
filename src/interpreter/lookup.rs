use thiserror::Error;

/// Known language names, in detection priority order.
pub(crate) const LANGUAGES: &[&str] = &[
    "javascript",
    "typescript",
    "python",
    "java",
    "c#",
    "c++",
    "rust",
    "go",
    "ruby",
    "php",
    "swift",
    "kotlin",
    "scala",
    "dart",
];

/// Known framework names. Disjoint from [`LANGUAGES`] and [`PLATFORMS`].
pub(crate) const FRAMEWORKS: &[&str] = &[
    "react",
    "angular",
    "vue",
    "svelte",
    "next.js",
    "express",
    "django",
    "flask",
    "fastapi",
    "spring",
    "rails",
    "laravel",
    "flutter",
];

/// Known platform names. Disjoint from the other two tables.
pub(crate) const PLATFORMS: &[&str] = &[
    "web",
    "mobile",
    "desktop",
    "ios",
    "android",
    "windows",
    "linux",
    "macos",
    "cloud",
    "aws",
    "azure",
    "gcp",
];

#[derive(Error, Debug)]
pub enum TableError {
    #[error("lookup table '{0}' is empty")]
    Empty(&'static str),

    #[error("'{value}' appears in both the {first} and {second} lookup tables")]
    Overlap {
        value: String,
        first: &'static str,
        second: &'static str,
    },
}

/// Fail fast on a malformed table set. The three category tables must be
/// non-empty and pairwise disjoint, otherwise detection could double-count
/// a technology.
pub(crate) fn check_tables() -> Result<(), TableError> {
    let tables: [(&'static str, &[&str]); 3] = [
        ("languages", LANGUAGES),
        ("frameworks", FRAMEWORKS),
        ("platforms", PLATFORMS),
    ];

    for (name, table) in &tables {
        if table.is_empty() {
            return Err(TableError::Empty(name));
        }
    }
    for i in 0..tables.len() {
        for j in (i + 1)..tables.len() {
            let (first_name, first) = tables[i];
            let (second_name, second) = tables[j];
            for value in first {
                if second.iter().any(|v| v.eq_ignore_ascii_case(value)) {
                    return Err(TableError::Overlap {
                        value: (*value).to_string(),
                        first: first_name,
                        second: second_name,
                    });
                }
            }
        }
    }
    Ok(())
}

/// First technology entity (in entity order) present in `table`, lower-cased.
pub(crate) fn first_match(technologies: &[String], table: &[&str]) -> Option<String> {
    technologies
        .iter()
        .find(|tech| table.iter().any(|known| known.eq_ignore_ascii_case(tech)))
        .map(|tech| tech.to_lowercase())
}

/// Whether `value` equals any known language name.
pub(crate) fn is_language(value: &str) -> bool {
    LANGUAGES.iter().any(|known| known.eq_ignore_ascii_case(value))
}
