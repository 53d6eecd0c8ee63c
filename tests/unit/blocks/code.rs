use super::*;

fn code_text(b: &Block) -> String {
    b.plain_text()
}

#[test]
fn short_code_is_kept_verbatim() {
    let b = code("fn main() {}\n", "rust");
    assert_eq!(code_text(&b), "fn main() {}\n");
    let Block::Code { code } = &b else {
        panic!("expected code");
    };
    assert_eq!(code.language, "rust");
}

#[test]
fn long_code_is_split_into_service_sized_runs() {
    let src = "a".repeat(4500);
    let b = code(&src, "python");
    let rt = b.rich_text().unwrap();
    assert_eq!(rt.len(), 3);
    assert!(rt.iter().all(|r| r.content().chars().count() <= MAX_RUN_CHARS));
    assert_eq!(code_text(&b), src);
}

#[test]
fn overlong_code_is_truncated_with_marker() {
    let src = "b".repeat(MAX_CODE_CHARS + 10);
    assert!(exceeds_limit(&src));
    let b = code(&src, "js");
    let text = code_text(&b);
    assert!(text.ends_with(TRUNCATION_MARKER));
    assert_eq!(text.chars().count(), MAX_CODE_CHARS);
}

#[test]
fn languages_are_normalized() {
    assert_eq!(normalize_language("JS"), "javascript");
    assert_eq!(normalize_language("py"), "python");
    assert_eq!(normalize_language(""), "plain text");
    assert_eq!(normalize_language("brainfuck"), "plain text");
    assert_eq!(normalize_language("Rust"), "rust");
}

#[test]
fn caption_is_attached_when_present() {
    let v = serde_json::to_value(code_with_caption("x", "c", "demo")).unwrap();
    assert_eq!(v["code"]["caption"][0]["text"]["content"], "demo");
}

#[test]
fn empty_equation_is_none() {
    assert!(equation("  ").is_none());
    assert_eq!(equation("e = mc^2").unwrap().plain_text(), "e = mc^2");
}

#[test]
fn indentation_only_code_is_kept() {
    assert_eq!(code_text(&code("    ", "python")), "    ");
    assert_eq!(code_text(&code("", "python")), " ");
}

#[test]
fn whitespace_chunks_of_long_code_are_kept() {
    let src = format!("{}{}", " ".repeat(MAX_RUN_CHARS), "x = 1");
    let b = code(&src, "python");
    let rt = b.rich_text().unwrap();
    assert_eq!(rt.len(), 2);
    assert_eq!(rt[0].content(), " ".repeat(MAX_RUN_CHARS));
    assert_eq!(code_text(&b), src);
}
