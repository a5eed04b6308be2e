/// Style identifier for a repository's language badge.
///
/// Only identifiers from this table ever reach a `class` attribute, so the
/// language string reported by the API is never used as a selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageBadge {
    Known(&'static str),
    Other,
    Unknown,
}

const KNOWN_LANGUAGES: &[(&str, &str)] = &[
    ("C", "c"),
    ("C#", "csharp"),
    ("C++", "cpp"),
    ("CSS", "css"),
    ("Clojure", "clojure"),
    ("CoffeeScript", "coffeescript"),
    ("Dart", "dart"),
    ("Elixir", "elixir"),
    ("Go", "go"),
    ("Groovy", "groovy"),
    ("HTML", "html"),
    ("Haskell", "haskell"),
    ("Java", "java"),
    ("JavaScript", "javascript"),
    ("Jupyter Notebook", "jupyter-notebook"),
    ("Kotlin", "kotlin"),
    ("Lua", "lua"),
    ("Objective-C", "objective-c"),
    ("PHP", "php"),
    ("Perl", "perl"),
    ("PowerShell", "powershell"),
    ("Python", "python"),
    ("R", "r"),
    ("Ruby", "ruby"),
    ("Rust", "rust"),
    ("Scala", "scala"),
    ("Shell", "shell"),
    ("Swift", "swift"),
    ("TypeScript", "typescript"),
    ("Vim script", "vim-script"),
];

impl LanguageBadge {
    pub fn for_language(language: Option<&str>) -> Self {
        match language {
            None => Self::Unknown,
            Some(language) if language.trim().is_empty() => Self::Unknown,
            Some(language) => KNOWN_LANGUAGES
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(language.trim()))
                .map_or(Self::Other, |&(_, class)| Self::Known(class)),
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Known(class) => class,
            Self::Other => "other",
            Self::Unknown => "unknown",
        }
    }
}
