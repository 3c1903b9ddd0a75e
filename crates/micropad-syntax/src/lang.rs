//! Static per-language lexing tables.
//!
//! Each language is a table of word lists plus a handful of switches for the
//! comment and string syntax the shared code lexer understands. Markup
//! languages (HTML/XML) use a dedicated lexer and have no entry here.

/// Lexing configuration for one code language.
pub(crate) struct LangConfig {
    pub keywords: &'static [&'static str],
    pub builtins: &'static [&'static str],
    pub constants: &'static [&'static str],
    pub line_comment: &'static str,
    pub block_comment: Option<(&'static str, &'static str)>,
    pub single_quote_strings: bool,
    pub triple_quote_strings: bool,
    pub backtick_strings: bool,
}

const PYTHON_KEYWORDS: &[&str] = &[
    "and", "as", "assert", "async", "await", "break", "class", "continue",
    "def", "del", "elif", "else", "except", "finally", "for", "from",
    "global", "if", "import", "in", "is", "lambda", "nonlocal", "not",
    "or", "pass", "raise", "return", "try", "while", "with", "yield",
];

const PYTHON_BUILTINS: &[&str] = &[
    "abs", "all", "any", "dir", "enumerate", "filter", "format", "getattr",
    "hasattr", "hash", "id", "input", "isinstance", "iter", "len", "map",
    "max", "min", "next", "open", "print", "range", "repr", "reversed",
    "round", "setattr", "sorted", "sum", "super", "type", "zip",
];

const PYTHON_CONSTANTS: &[&str] = &["True", "False", "None"];

const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn",
    "else", "enum", "extern", "fn", "for", "if", "impl", "in", "let",
    "loop", "match", "mod", "move", "mut", "pub", "ref", "return",
    "self", "Self", "static", "struct", "super", "trait", "type",
    "unsafe", "use", "where", "while", "yield",
];

const RUST_CONSTANTS: &[&str] = &["true", "false", "Some", "None", "Ok", "Err"];

const JS_KEYWORDS: &[&str] = &[
    "async", "await", "break", "case", "catch", "class", "const",
    "continue", "debugger", "default", "delete", "do", "else", "export",
    "extends", "finally", "for", "from", "function", "if", "import",
    "in", "instanceof", "let", "new", "of", "return", "static", "super",
    "switch", "this", "throw", "try", "typeof", "var", "void", "while",
    "with", "yield",
];

const JS_BUILTINS: &[&str] = &[
    "console", "Math", "JSON", "Object", "Array", "String", "Number",
    "Boolean", "Promise", "parseInt", "parseFloat", "isNaN",
];

const JS_CONSTANTS: &[&str] = &["true", "false", "null", "undefined", "NaN", "Infinity"];

static PYTHON: LangConfig = LangConfig {
    keywords: PYTHON_KEYWORDS,
    builtins: PYTHON_BUILTINS,
    constants: PYTHON_CONSTANTS,
    line_comment: "#",
    block_comment: None,
    single_quote_strings: true,
    triple_quote_strings: true,
    backtick_strings: false,
};

static RUST: LangConfig = LangConfig {
    keywords: RUST_KEYWORDS,
    builtins: &[],
    constants: RUST_CONSTANTS,
    line_comment: "//",
    block_comment: Some(("/*", "*/")),
    // single quotes are char literals and lifetimes; leaving them unlexed
    // avoids painting everything after a lifetime as a string
    single_quote_strings: false,
    triple_quote_strings: false,
    backtick_strings: false,
};

static JAVASCRIPT: LangConfig = LangConfig {
    keywords: JS_KEYWORDS,
    builtins: JS_BUILTINS,
    constants: JS_CONSTANTS,
    line_comment: "//",
    block_comment: Some(("/*", "*/")),
    single_quote_strings: true,
    triple_quote_strings: false,
    backtick_strings: true,
};

/// Returns the lexing table for a code language, if one exists.
pub(crate) fn config_for(language: &str) -> Option<&'static LangConfig> {
    match language {
        "python" => Some(&PYTHON),
        "rust" => Some(&RUST),
        "javascript" => Some(&JAVASCRIPT),
        _ => None,
    }
}
