use crate::blocks::media::MediaKind;
use crate::course::item::ContentItem;
use crate::course::model::{CourseDef, SectionDef};
use crate::foundation::core::is_http_url;
use crate::schema::path::JsonPath;
use crate::templates::quiz::{MIN_OPTIONS, answer_index};
use crate::text::input::TextInput;
use crate::text::run::MAX_RUN_CHARS;
use serde::Serialize;
use std::fmt;

/// Consecutive top-level paragraphs in one section that trigger a warning.
pub const PARAGRAPH_RUN_WARNING: usize = 3;

/// One validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Location, e.g. `$.sections[0].content[2]`.
    pub path: String,
    /// Human-readable message.
    pub message: String,
}

impl ValidationIssue {
    fn at(path: &JsonPath, message: impl Into<String>) -> Self {
        Self {
            path: path.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Outcome of [`validate`]. `valid` is true exactly when `errors` is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// No errors were found.
    pub valid: bool,
    /// Problems that block publishing.
    pub errors: Vec<ValidationIssue>,
    /// Advisory findings.
    pub warnings: Vec<ValidationIssue>,
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}

#[derive(Default)]
struct Checker {
    errors: Vec<ValidationIssue>,
    warnings: Vec<ValidationIssue>,
}

impl Checker {
    fn error(&mut self, path: &JsonPath, message: impl Into<String>) {
        self.errors.push(ValidationIssue::at(path, message));
    }

    fn warn(&mut self, path: &JsonPath, message: impl Into<String>) {
        self.warnings.push(ValidationIssue::at(path, message));
    }

    fn section(&mut self, section: &SectionDef, path: &JsonPath) {
        if is_blank(section.title.as_deref()) {
            self.error(&path.field("title"), "Section title is required");
        }
        let content = path.field("content");
        if section.content.is_empty() {
            self.error(&content, "Section content must contain at least one item");
        }

        let mut paragraph_run = 0;
        for (i, def) in section.content.iter().enumerate() {
            let item_path = content.index(i);
            let item = ContentItem::from_def(def);
            if matches!(item, ContentItem::Paragraph { .. }) {
                paragraph_run += 1;
                if paragraph_run == PARAGRAPH_RUN_WARNING {
                    self.warn(
                        &item_path,
                        "3 or more consecutive paragraphs; break them up with headings, lists or callouts",
                    );
                }
            } else {
                paragraph_run = 0;
            }
            self.item(&item, &item_path);
        }
    }

    fn item(&mut self, item: &ContentItem, path: &JsonPath) {
        match item {
            ContentItem::Quiz {
                options,
                correct_index,
                ..
            } => {
                if options.len() < MIN_OPTIONS {
                    self.error(
                        &path.field("options"),
                        format!(
                            "Quiz needs at least {MIN_OPTIONS} options (got {})",
                            options.len()
                        ),
                    );
                } else if answer_index(*correct_index, options.len()).is_err() {
                    self.error(
                        &path.field("correctIndex"),
                        format!(
                            "correctIndex {correct_index} is out of bounds for {} options",
                            options.len()
                        ),
                    );
                }
            }
            ContentItem::Media { kind, url, .. } => {
                let url_path = path.field("url");
                if url.trim().is_empty() {
                    self.error(&url_path, format!("{} URL is required", media_label(*kind)));
                } else if !is_http_url(url) {
                    self.error(
                        &url_path,
                        format!("Invalid URL \"{url}\": only http and https are accepted"),
                    );
                }
            }
            ContentItem::Unknown { name } if name.is_empty() => {
                self.error(&path.field("type"), "Content item type is required");
            }
            ContentItem::Unknown { name } => {
                self.warn(
                    &path.field("type"),
                    format!("Unknown content type \"{name}\" is shown as a placeholder"),
                );
            }
            _ => {}
        }

        self.text_lengths(item, path);

        match item {
            ContentItem::Columns {
                columns,
                from_children: true,
            } => {
                let children = path.field("children");
                for (c, col) in columns.iter().enumerate() {
                    for child in col {
                        self.item(child, &children.index(c));
                    }
                }
            }
            ContentItem::Columns { columns, .. } => {
                let cols = path.field("columns");
                for (c, col) in columns.iter().enumerate() {
                    for (i, child) in col.iter().enumerate() {
                        self.item(child, &cols.index(c).index(i));
                    }
                }
            }
            other => {
                let children = path.field("children");
                for (i, child) in other.nested().into_iter().enumerate() {
                    self.item(child, &children.index(i));
                }
            }
        }
    }

    /// Length warnings for every author string the item turns into runs.
    fn text_lengths(&mut self, item: &ContentItem, path: &JsonPath) {
        match item {
            ContentItem::Paragraph { text }
            | ContentItem::Heading { text, .. }
            | ContentItem::Quote { text }
            | ContentItem::Callout { text, .. }
            | ContentItem::Note { text, .. }
            | ContentItem::Toggle { text, .. } => {
                self.optional_input(text.as_ref(), &path.field("text"));
            }
            ContentItem::BulletedList { items }
            | ContentItem::NumberedList { items }
            | ContentItem::TodoList { items, .. }
            | ContentItem::Objectives { items }
            | ContentItem::Prerequisites { items }
            | ContentItem::Summary { points: items, .. } => {
                self.inputs(items, &path.field("items"));
            }
            ContentItem::CodeWithExplanation { explanations, .. } => {
                self.inputs(explanations, &path.field("explanations"));
            }
            ContentItem::Definition { definition, .. } => {
                self.optional_input(definition.as_ref(), &path.field("definition"));
            }
            ContentItem::Step {
                title, description, ..
            } => {
                self.length(title.chars().count(), &path.field("title"));
                self.optional_input(description.as_ref(), &path.field("description"));
            }
            ContentItem::Exercise {
                title,
                instructions,
                ..
            } => {
                self.length(title.chars().count(), &path.field("title"));
                self.inputs(instructions, &path.field("instructions"));
            }
            ContentItem::Quiz {
                question, options, ..
            } => {
                self.length(question.chars().count(), &path.field("question"));
                let options_path = path.field("options");
                for (i, opt) in options.iter().enumerate() {
                    self.length(opt.chars().count(), &options_path.index(i));
                }
            }
            ContentItem::Comparison { left, right } => {
                self.inputs(&left.items, &path.field("left").field("items"));
                self.inputs(&right.items, &path.field("right").field("items"));
            }
            ContentItem::Table { rows, .. } => {
                let rows_path = path.field("rows");
                for (r, row) in rows.iter().enumerate() {
                    self.inputs(row, &rows_path.index(r));
                }
            }
            _ => {}
        }
    }

    fn optional_input(&mut self, text: Option<&TextInput>, path: &JsonPath) {
        if let Some(text) = text {
            self.length(text.char_len(), path);
        }
    }

    fn inputs(&mut self, texts: &[TextInput], path: &JsonPath) {
        for (i, text) in texts.iter().enumerate() {
            self.length(text.char_len(), &path.index(i));
        }
    }

    fn length(&mut self, len: usize, path: &JsonPath) {
        if len > MAX_RUN_CHARS {
            self.warn(
                path,
                format!("Text is {len} characters; runs longer than {MAX_RUN_CHARS} are truncated"),
            );
        }
    }
}

fn is_blank(s: Option<&str>) -> bool {
    s.is_none_or(|s| s.trim().is_empty())
}

fn media_label(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Image => "Image",
        MediaKind::Video => "Video",
        MediaKind::Audio => "Audio",
        MediaKind::Pdf => "PDF",
        MediaKind::File => "File",
    }
}

/// Check a course description for problems that would make publishing fail or read poorly.
///
/// Never panics, whatever the input looks like.
pub fn validate(def: &CourseDef) -> ValidationResult {
    let root = JsonPath::root();
    let mut c = Checker::default();

    if is_blank(def.title.as_deref()) {
        c.error(&root.field("title"), "Course title is required");
    }
    let sections = root.field("sections");
    if def.sections.is_empty() {
        c.error(&sections, "Course must contain at least one section");
    }
    for (i, section) in def.sections.iter().enumerate() {
        c.section(section, &sections.index(i));
    }

    tracing::debug!(
        errors = c.errors.len(),
        warnings = c.warnings.len(),
        "validated course"
    );
    ValidationResult {
        valid: c.errors.is_empty(),
        errors: c.errors,
        warnings: c.warnings,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schema/validate.rs"]
mod tests;
