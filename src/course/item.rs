use crate::blocks::media::MediaKind;
use crate::course::model::ContentItemDef;
use crate::foundation::core::Color;
use crate::templates::notes::NoteKind;
use crate::templates::outline::ComparisonSide;
use crate::text::input::TextInput;

/// A content item with its type tag resolved.
///
/// Every recognized tag (and synonym) maps to exactly one variant; anything else is
/// [`ContentItem::Unknown`], which compiles to a visible placeholder instead of failing.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq)]
pub enum ContentItem {
    Paragraph {
        text: Option<TextInput>,
    },
    Heading {
        level: u8,
        text: Option<TextInput>,
    },
    Quote {
        text: Option<TextInput>,
    },
    Callout {
        text: Option<TextInput>,
        icon: Option<String>,
        color: Option<Color>,
        children: Vec<ContentItem>,
    },
    Note {
        kind: NoteKind,
        text: Option<TextInput>,
    },
    Code {
        code: String,
        language: String,
        caption: Option<String>,
    },
    Equation {
        expression: String,
    },
    CodeWithExplanation {
        code: String,
        language: String,
        explanations: Vec<TextInput>,
    },
    BulletedList {
        items: Vec<TextInput>,
    },
    NumberedList {
        items: Vec<TextInput>,
    },
    TodoList {
        items: Vec<TextInput>,
        checked: bool,
    },
    Toggle {
        text: Option<TextInput>,
        children: Vec<ContentItem>,
    },
    Media {
        kind: MediaKind,
        url: String,
        caption: Option<String>,
    },
    Embed {
        url: String,
    },
    Bookmark {
        url: String,
        caption: Option<String>,
    },
    Divider,
    TableOfContents,
    Breadcrumb,
    Table {
        rows: Vec<Vec<TextInput>>,
        has_column_header: bool,
        has_row_header: bool,
    },
    /// `from_children` marks columns built one per `children` entry instead of from `columns`.
    Columns {
        columns: Vec<Vec<ContentItem>>,
        from_children: bool,
    },
    Comparison {
        left: ComparisonSide,
        right: ComparisonSide,
    },
    SyncedBlock {
        children: Vec<ContentItem>,
    },
    SyncedReference {
        block_id: String,
    },
    Definition {
        term: String,
        definition: Option<TextInput>,
    },
    Step {
        number: Option<i64>,
        title: String,
        description: Option<TextInput>,
        children: Vec<ContentItem>,
    },
    Exercise {
        title: String,
        instructions: Vec<TextInput>,
        solution: Option<String>,
        language: String,
    },
    Quiz {
        question: String,
        options: Vec<String>,
        correct_index: i64,
    },
    Summary {
        title: Option<String>,
        points: Vec<TextInput>,
    },
    Objectives {
        items: Vec<TextInput>,
    },
    Prerequisites {
        items: Vec<TextInput>,
    },
    EstimatedTime {
        minutes: i64,
    },
    Unknown {
        name: String,
    },
}

fn raw(t: &Option<TextInput>) -> Option<String> {
    t.as_ref().map(TextInput::raw_text)
}

fn items_or_text(def: &ContentItemDef) -> Vec<TextInput> {
    if def.items.is_empty() {
        def.text.iter().cloned().collect()
    } else {
        def.items.clone()
    }
}

fn children(def: &ContentItemDef) -> Vec<ContentItem> {
    def.children.iter().map(ContentItem::from_def).collect()
}

impl ContentItem {
    /// Resolve a raw item by its type tag. Missing optional fields default to empty or zero.
    pub fn from_def(def: &ContentItemDef) -> Self {
        let tag = def.kind.as_deref().map(str::trim).unwrap_or("");
        let text = || def.text.clone();
        let title_or_text = || {
            def.title
                .clone()
                .or_else(|| raw(&def.text))
                .unwrap_or_default()
        };
        let url = || def.url.clone().unwrap_or_default();
        let language = || def.language.clone().unwrap_or_default();

        match tag {
            "paragraph" | "text" => Self::Paragraph { text: text() },
            "heading1" | "h1" => Self::Heading {
                level: 1,
                text: text(),
            },
            "heading2" | "h2" => Self::Heading {
                level: 2,
                text: text(),
            },
            "heading3" | "h3" => Self::Heading {
                level: 3,
                text: text(),
            },
            "quote" => Self::Quote { text: text() },
            "callout" => Self::Callout {
                text: text(),
                icon: def.icon.clone(),
                color: def.color.as_deref().and_then(Color::from_name),
                children: children(def),
            },
            "info" | "warning" | "tip" | "danger" => Self::Note {
                kind: NoteKind::from_name(tag).unwrap_or(NoteKind::Info),
                text: text(),
            },
            "code" => Self::Code {
                code: def.code.clone().or_else(|| raw(&def.text)).unwrap_or_default(),
                language: language(),
                caption: def.caption.clone(),
            },
            "equation" | "math" => Self::Equation {
                expression: def
                    .expression
                    .clone()
                    .or_else(|| raw(&def.text))
                    .unwrap_or_default(),
            },
            "codeWithExplanation" => Self::CodeWithExplanation {
                code: def.code.clone().or_else(|| raw(&def.text)).unwrap_or_default(),
                language: language(),
                explanations: if def.explanations.is_empty() {
                    def.items.clone()
                } else {
                    def.explanations.clone()
                },
            },
            "bullet" | "bullets" | "bulletedListItem" | "bulletedList" | "bulletList" => {
                Self::BulletedList {
                    items: items_or_text(def),
                }
            }
            "numbered" | "numberedList" | "numberedListItem" => Self::NumberedList {
                items: items_or_text(def),
            },
            "todo" | "todoList" | "toDo" => Self::TodoList {
                items: items_or_text(def),
                checked: def.checked,
            },
            "toggle" => Self::Toggle {
                text: def
                    .text
                    .clone()
                    .or_else(|| def.title.clone().map(TextInput::Plain)),
                children: children(def),
            },
            "image" | "video" | "audio" | "pdf" | "file" => Self::Media {
                kind: match tag {
                    "image" => MediaKind::Image,
                    "video" => MediaKind::Video,
                    "audio" => MediaKind::Audio,
                    "pdf" => MediaKind::Pdf,
                    _ => MediaKind::File,
                },
                url: url(),
                caption: def.caption.clone(),
            },
            "embed" => Self::Embed { url: url() },
            "bookmark" | "linkPreview" => Self::Bookmark {
                url: url(),
                caption: def.caption.clone(),
            },
            "divider" => Self::Divider,
            "tableOfContents" | "toc" => Self::TableOfContents,
            "breadcrumb" => Self::Breadcrumb,
            "table" => Self::Table {
                rows: def.rows.clone(),
                has_column_header: def.has_column_header,
                has_row_header: def.has_row_header,
            },
            "columns" | "columnList" if def.columns.is_empty() => Self::Columns {
                columns: def
                    .children
                    .iter()
                    .map(|c| vec![Self::from_def(c)])
                    .collect(),
                from_children: true,
            },
            "columns" | "columnList" => Self::Columns {
                columns: def
                    .columns
                    .iter()
                    .map(|col| col.iter().map(Self::from_def).collect())
                    .collect(),
                from_children: false,
            },
            "comparison" => Self::Comparison {
                left: def.left.clone(),
                right: def.right.clone(),
            },
            "syncedBlock" => Self::SyncedBlock {
                children: children(def),
            },
            "syncedReference" => Self::SyncedReference {
                block_id: def.block_id.clone().unwrap_or_default(),
            },
            "definition" => Self::Definition {
                term: def.term.clone().unwrap_or_default(),
                definition: def.definition.clone().or_else(text),
            },
            "step" => Self::Step {
                number: def.step_number,
                title: title_or_text(),
                description: def.description.clone(),
                children: children(def),
            },
            "exercice" | "exercise" => Self::Exercise {
                title: title_or_text(),
                instructions: if def.instructions.is_empty() {
                    def.items.clone()
                } else {
                    def.instructions.clone()
                },
                solution: def.solution.clone(),
                language: language(),
            },
            "quiz" | "quickQuiz" => Self::Quiz {
                question: def
                    .question
                    .clone()
                    .or_else(|| raw(&def.text))
                    .unwrap_or_default(),
                options: def.options.clone(),
                correct_index: def.correct_index.unwrap_or(0),
            },
            "summary" | "chapterSummary" => Self::Summary {
                title: def.title.clone(),
                points: items_or_text(def),
            },
            "objectives" | "learningObjectives" => Self::Objectives {
                items: items_or_text(def),
            },
            "prerequisites" => Self::Prerequisites {
                items: items_or_text(def),
            },
            "estimatedTime" => Self::EstimatedTime {
                minutes: def.minutes.unwrap_or(0),
            },
            other => Self::Unknown {
                name: other.to_owned(),
            },
        }
    }

    /// Canonical type tag, used for statistics.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Paragraph { .. } => "paragraph",
            Self::Heading { level: 1, .. } => "heading1",
            Self::Heading { level: 2, .. } => "heading2",
            Self::Heading { .. } => "heading3",
            Self::Quote { .. } => "quote",
            Self::Callout { .. } => "callout",
            Self::Note { kind, .. } => match kind {
                NoteKind::Info => "info",
                NoteKind::Warning => "warning",
                NoteKind::Tip => "tip",
                NoteKind::Danger => "danger",
            },
            Self::Code { .. } => "code",
            Self::Equation { .. } => "equation",
            Self::CodeWithExplanation { .. } => "codeWithExplanation",
            Self::BulletedList { .. } => "bulletedList",
            Self::NumberedList { .. } => "numberedList",
            Self::TodoList { .. } => "todoList",
            Self::Toggle { .. } => "toggle",
            Self::Media { kind, .. } => match kind {
                MediaKind::Image => "image",
                MediaKind::Video => "video",
                MediaKind::Audio => "audio",
                MediaKind::Pdf => "pdf",
                MediaKind::File => "file",
            },
            Self::Embed { .. } => "embed",
            Self::Bookmark { .. } => "bookmark",
            Self::Divider => "divider",
            Self::TableOfContents => "tableOfContents",
            Self::Breadcrumb => "breadcrumb",
            Self::Table { .. } => "table",
            Self::Columns { .. } => "columns",
            Self::Comparison { .. } => "comparison",
            Self::SyncedBlock { .. } => "syncedBlock",
            Self::SyncedReference { .. } => "syncedReference",
            Self::Definition { .. } => "definition",
            Self::Step { .. } => "step",
            Self::Exercise { .. } => "exercise",
            Self::Quiz { .. } => "quiz",
            Self::Summary { .. } => "summary",
            Self::Objectives { .. } => "objectives",
            Self::Prerequisites { .. } => "prerequisites",
            Self::EstimatedTime { .. } => "estimatedTime",
            Self::Unknown { .. } => "unknown",
        }
    }

    /// Nested items compiled through the same dispatch.
    pub fn nested(&self) -> Vec<&ContentItem> {
        match self {
            Self::Callout { children, .. }
            | Self::Toggle { children, .. }
            | Self::SyncedBlock { children }
            | Self::Step { children, .. } => children.iter().collect(),
            Self::Columns { columns, .. } => columns.iter().flatten().collect(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/course/item.rs"]
mod tests;
