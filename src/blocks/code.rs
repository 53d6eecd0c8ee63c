use crate::blocks::model::{Block, Code, Equation};
use crate::text::run::{Annotations, MAX_RUN_CHARS, RichText, piece_run};

/// Maximum code length kept in one code block.
pub const MAX_CODE_CHARS: usize = 50_000;

/// Appended to code that was cut at [`MAX_CODE_CHARS`].
pub const TRUNCATION_MARKER: &str = "\n... [truncated]";

const PLAIN_TEXT: &str = "plain text";

// Subset of the service's code language vocabulary that course material realistically uses.
const LANGUAGES: &[&str] = &[
    "bash", "c", "c#", "c++", "css", "dart", "diff", "docker", "elixir", "go", "graphql",
    "haskell", "html", "java", "javascript", "json", "kotlin", "latex", "lua", "makefile",
    "markdown", "php", "plain text", "powershell", "python", "r", "ruby", "rust", "scala",
    "scss", "shell", "sql", "swift", "toml", "typescript", "xml", "yaml",
];

/// Map a user-written language name onto the service vocabulary.
///
/// Common aliases are accepted; anything unknown becomes `plain text`.
pub fn normalize_language(lang: &str) -> &'static str {
    let l = lang.trim().to_ascii_lowercase();
    let alias = match l.as_str() {
        "js" | "jsx" | "node" => "javascript",
        "ts" | "tsx" => "typescript",
        "py" | "python3" => "python",
        "sh" | "zsh" => "shell",
        "rs" => "rust",
        "cpp" | "cxx" => "c++",
        "cs" | "csharp" => "c#",
        "yml" => "yaml",
        "md" => "markdown",
        "dockerfile" => "docker",
        "tex" => "latex",
        "" | "text" | "txt" | "plaintext" => PLAIN_TEXT,
        other => other,
    };
    LANGUAGES
        .iter()
        .copied()
        .find(|&known| known == alias)
        .unwrap_or(PLAIN_TEXT)
}

/// `true` when `code` would be truncated by [`code`].
pub fn exceeds_limit(code: &str) -> bool {
    code.chars().count() > MAX_CODE_CHARS
}

/// Split source text into runs of at most [`MAX_RUN_CHARS`] characters without ellipsis.
fn chunk_runs(code: &str) -> Vec<RichText> {
    let chars: Vec<char> = code.chars().collect();
    if chars.is_empty() {
        return vec![piece_run("", Annotations::default(), None)];
    }
    chars
        .chunks(MAX_RUN_CHARS)
        .map(|c| piece_run(&c.iter().collect::<String>(), Annotations::default(), None))
        .collect()
}

/// Code block. Content over [`MAX_CODE_CHARS`] is cut and marked, never rejected.
pub fn code(content: &str, language: &str) -> Block {
    let body = if exceeds_limit(content) {
        let keep = MAX_CODE_CHARS - TRUNCATION_MARKER.chars().count();
        let mut cut: String = content.chars().take(keep).collect();
        cut.push_str(TRUNCATION_MARKER);
        cut
    } else {
        content.to_owned()
    };
    Block::Code {
        code: Code {
            rich_text: chunk_runs(&body),
            language: normalize_language(language).to_owned(),
            caption: Vec::new(),
        },
    }
}

/// Code block with a caption.
pub fn code_with_caption(content: &str, language: &str, caption: &str) -> Block {
    let mut block = code(content, language);
    if let Block::Code { code } = &mut block
        && !caption.trim().is_empty()
    {
        code.caption = vec![RichText::plain(caption)];
    }
    block
}

/// Equation block, or `None` for an empty expression.
pub fn equation(expression: &str) -> Option<Block> {
    let expression = expression.trim();
    if expression.is_empty() {
        return None;
    }
    Some(Block::Equation {
        equation: Equation {
            expression: expression.to_owned(),
        },
    })
}

#[cfg(test)]
#[path = "../../tests/unit/blocks/code.rs"]
mod tests;
