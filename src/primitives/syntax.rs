//! Language rule table used by the highlight scanner.
//!
//! The table is static and immutable; a rule is looked up once when a
//! filename becomes known and then cached on the buffer.

use std::path::Path;

/// Priority class of a keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordClass {
    /// Control flow and declarations
    Primary,
    /// Type names
    Secondary,
}

/// A single keyword entry of a language rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keyword {
    pub word: &'static str,
    pub class: KeywordClass,
}

impl Keyword {
    pub const fn primary(word: &'static str) -> Self {
        Self {
            word,
            class: KeywordClass::Primary,
        }
    }

    pub const fn secondary(word: &'static str) -> Self {
        Self {
            word,
            class: KeywordClass::Secondary,
        }
    }
}

/// Highlighting rules for one language
#[derive(Debug, PartialEq, Eq)]
pub struct LanguageRule {
    /// Name shown in the status bar
    pub file_type: &'static str,
    /// Patterns starting with `.` match the extension exactly; any other
    /// pattern matches when it occurs anywhere in the file name.
    pub file_match: &'static [&'static str],
    pub keywords: &'static [Keyword],
    pub single_line_comment: Option<&'static str>,
    /// Block comment start and end markers
    pub block_comment: Option<(&'static str, &'static str)>,
    pub highlight_numbers: bool,
    pub highlight_strings: bool,
    /// Bytes that open and close a string literal
    pub string_quotes: &'static [u8],
}

impl LanguageRule {
    /// Whether this rule applies to `file_name`
    pub fn matches(&self, file_name: &str) -> bool {
        let extension = file_name.rfind('.').map(|dot| &file_name[dot..]);
        self.file_match.iter().any(|pattern| {
            if pattern.starts_with('.') {
                extension == Some(*pattern)
            } else {
                file_name.contains(pattern)
            }
        })
    }
}

const C_KEYWORDS: &[Keyword] = &[
    Keyword::primary("switch"),
    Keyword::primary("if"),
    Keyword::primary("while"),
    Keyword::primary("for"),
    Keyword::primary("break"),
    Keyword::primary("continue"),
    Keyword::primary("return"),
    Keyword::primary("else"),
    Keyword::primary("struct"),
    Keyword::primary("union"),
    Keyword::primary("typedef"),
    Keyword::primary("static"),
    Keyword::primary("enum"),
    Keyword::primary("class"),
    Keyword::primary("case"),
    Keyword::secondary("int"),
    Keyword::secondary("long"),
    Keyword::secondary("double"),
    Keyword::secondary("float"),
    Keyword::secondary("char"),
    Keyword::secondary("unsigned"),
    Keyword::secondary("signed"),
    Keyword::secondary("void"),
];

const RUST_KEYWORDS: &[Keyword] = &[
    Keyword::primary("fn"),
    Keyword::primary("let"),
    Keyword::primary("mut"),
    Keyword::primary("if"),
    Keyword::primary("else"),
    Keyword::primary("match"),
    Keyword::primary("while"),
    Keyword::primary("loop"),
    Keyword::primary("for"),
    Keyword::primary("in"),
    Keyword::primary("break"),
    Keyword::primary("continue"),
    Keyword::primary("return"),
    Keyword::primary("struct"),
    Keyword::primary("enum"),
    Keyword::primary("impl"),
    Keyword::primary("trait"),
    Keyword::primary("pub"),
    Keyword::primary("use"),
    Keyword::primary("mod"),
    Keyword::primary("const"),
    Keyword::primary("static"),
    Keyword::secondary("i32"),
    Keyword::secondary("i64"),
    Keyword::secondary("u8"),
    Keyword::secondary("u32"),
    Keyword::secondary("u64"),
    Keyword::secondary("usize"),
    Keyword::secondary("f64"),
    Keyword::secondary("bool"),
    Keyword::secondary("char"),
    Keyword::secondary("str"),
    Keyword::secondary("String"),
    Keyword::secondary("Self"),
];

const PYTHON_KEYWORDS: &[Keyword] = &[
    Keyword::primary("def"),
    Keyword::primary("class"),
    Keyword::primary("if"),
    Keyword::primary("elif"),
    Keyword::primary("else"),
    Keyword::primary("for"),
    Keyword::primary("while"),
    Keyword::primary("in"),
    Keyword::primary("return"),
    Keyword::primary("import"),
    Keyword::primary("from"),
    Keyword::primary("with"),
    Keyword::primary("as"),
    Keyword::primary("pass"),
    Keyword::primary("lambda"),
    Keyword::secondary("int"),
    Keyword::secondary("float"),
    Keyword::secondary("str"),
    Keyword::secondary("list"),
    Keyword::secondary("dict"),
    Keyword::secondary("None"),
    Keyword::secondary("True"),
    Keyword::secondary("False"),
];

/// Built-in language rules, searched in order
pub static LANGUAGES: &[LanguageRule] = &[
    LanguageRule {
        file_type: "c",
        file_match: &[".c", ".h", ".cpp"],
        keywords: C_KEYWORDS,
        single_line_comment: Some("//"),
        block_comment: Some(("/*", "*/")),
        highlight_numbers: true,
        highlight_strings: true,
        string_quotes: b"\"'",
    },
    LanguageRule {
        file_type: "rust",
        file_match: &[".rs"],
        keywords: RUST_KEYWORDS,
        single_line_comment: Some("//"),
        block_comment: Some(("/*", "*/")),
        highlight_numbers: true,
        highlight_strings: true,
        string_quotes: b"\"",
    },
    LanguageRule {
        file_type: "python",
        file_match: &[".py"],
        keywords: PYTHON_KEYWORDS,
        single_line_comment: Some("#"),
        block_comment: None,
        highlight_numbers: true,
        highlight_strings: true,
        string_quotes: b"\"'",
    },
];

/// Find the first rule matching the file name of `path`
pub fn detect(path: &Path) -> Option<&'static LanguageRule> {
    let file_name = path.file_name()?.to_string_lossy();
    let rule = LANGUAGES.iter().find(|rule| rule.matches(&file_name));
    tracing::debug!(
        "Language detection for {:?}: {}",
        path,
        rule.map_or("none", |r| r.file_type)
    );
    rule
}
