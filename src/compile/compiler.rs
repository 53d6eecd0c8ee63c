use crate::blocks::code::{MAX_CODE_CHARS, code, code_with_caption, equation, exceeds_limit};
use crate::blocks::issue::BuildIssue;
use crate::blocks::layout::{
    TableCell, breadcrumb, columns, divider, synced_original, synced_reference, table,
    table_of_contents,
};
use crate::blocks::media::{try_bookmark, try_embed, try_media};
use crate::blocks::model::Block;
use crate::blocks::text::{
    bulleted_item, callout, heading, numbered_item, paragraph, quote, to_do, toggle,
    toggle_heading,
};
use crate::compile::diagnostics::Diagnostics;
use crate::course::item::ContentItem;
use crate::course::model::{CourseDef, SectionDef};
use crate::foundation::core::Color;
use crate::schema::path::JsonPath;
use crate::templates::notes::{definition, note};
use crate::templates::outline::{
    ComparisonSide, chapter_summary, code_with_explanation, comparison, estimated_time,
    learning_objectives, prerequisites,
};
use crate::templates::quiz::{MIN_OPTIONS, answer_index, try_quick_quiz};
use crate::templates::steps::{exercise, step};
use crate::text::format::format_input;
use crate::text::input::TextInput;

const DEFAULT_CALLOUT_ICON: &str = "💡";

/// Compilation switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileOpts {
    /// Recognize inline markdown in plain strings.
    pub parse_markdown: bool,
    /// Emit the page header (breadcrumb, table of contents, description, metadata) and footer.
    pub scaffolding: bool,
}

impl Default for CompileOpts {
    fn default() -> Self {
        Self {
            parse_markdown: true,
            scaffolding: true,
        }
    }
}

/// Compile a course description into the page's top-level blocks.
///
/// Never fails: problems with single items degrade into visible placeholder blocks.
pub fn compile(def: &CourseDef, opts: &CompileOpts) -> Vec<Block> {
    compile_with_diagnostics(def, opts).0
}

/// [`compile`], also returning every degradation that happened on the way.
#[tracing::instrument(skip_all, fields(sections = def.sections.len()))]
pub fn compile_with_diagnostics(def: &CourseDef, opts: &CompileOpts) -> (Vec<Block>, Diagnostics) {
    let mut c = Compiler {
        opts,
        diagnostics: Diagnostics::new(),
    };
    let blocks = c.course(def);
    tracing::debug!(
        blocks = blocks.len(),
        issues = c.diagnostics.len(),
        "compiled course"
    );
    (blocks, c.diagnostics)
}

struct Compiler<'a> {
    opts: &'a CompileOpts,
    diagnostics: Diagnostics,
}

fn blank(t: &TextInput) -> bool {
    t.raw_text().trim().is_empty()
}

impl Compiler<'_> {
    fn course(&mut self, def: &CourseDef) -> Vec<Block> {
        let mut out = Vec::new();
        if self.opts.scaffolding {
            out.extend(self.header(def));
        }
        let sections = JsonPath::root().field("sections");
        for (i, section) in def.sections.iter().enumerate() {
            out.extend(self.section(section, &sections.index(i)));
        }
        if self.opts.scaffolding {
            out.push(divider());
            out.push(self.congratulations(def.title.as_deref()));
        }
        out
    }

    /// Plain strings are pre-resolved when markdown is off so builders see literal text.
    fn text(&self, t: &TextInput) -> TextInput {
        match t {
            TextInput::Plain(_) if !self.opts.parse_markdown => {
                TextInput::Runs(format_input(t, false))
            }
            other => other.clone(),
        }
    }

    fn opt_text(&self, t: Option<&TextInput>) -> TextInput {
        t.map_or_else(|| TextInput::Plain(String::new()), |t| self.text(t))
    }

    fn texts(&self, ts: &[TextInput]) -> Vec<TextInput> {
        ts.iter().map(|t| self.text(t)).collect()
    }

    fn header(&mut self, def: &CourseDef) -> Vec<Block> {
        let mut out = vec![breadcrumb(), table_of_contents(), divider()];
        if let Some(d) = def.description.as_ref().filter(|d| !blank(d)) {
            out.push(callout(self.text(d), "📖", Color::BlueBackground));
        }

        let mut meta = Vec::new();
        if let Some(minutes) = def.estimated_time.filter(|m| *m > 0) {
            meta.push(estimated_time(minutes));
        }
        if !def.prerequisites.is_empty() {
            meta.push(prerequisites(&self.texts(&def.prerequisites)));
        }
        if !def.objectives.is_empty() {
            meta.push(learning_objectives(&self.texts(&def.objectives)));
        }
        if meta.len() > 1 {
            out.extend(columns(meta.into_iter().map(|b| vec![b]).collect()));
        } else {
            out.extend(meta);
        }

        out.push(divider());
        out
    }

    fn congratulations(&self, title: Option<&str>) -> Block {
        let text = match title.map(str::trim).filter(|t| !t.is_empty()) {
            Some(t) => format!("Congratulations! You have completed \"{t}\"."),
            None => "Congratulations! You have completed this course.".to_owned(),
        };
        callout(self.text(&text.into()), "🎉", Color::GreenBackground)
    }

    fn section(&mut self, section: &SectionDef, path: &JsonPath) -> Vec<Block> {
        let title = self.opt_text(section.title.clone().map(TextInput::Plain).as_ref());
        let color = section.color.as_deref().and_then(Color::from_name);

        let mut body = Vec::new();
        if let Some(d) = section.description.as_ref().filter(|d| !blank(d)) {
            body.extend(paragraph(self.text(d)));
        }
        let items: Vec<ContentItem> = section.content.iter().map(ContentItem::from_def).collect();
        body.extend(self.list(&items, &path.field("content")));

        let mut out = vec![divider()];
        let head = if section.toggleable {
            toggle_heading(1, title, std::mem::take(&mut body))
        } else {
            heading(1, title)
        };
        out.push(match color {
            Some(c) => head.with_color(c),
            None => head,
        });
        out.extend(body);
        out
    }

    fn list(&mut self, items: &[ContentItem], path: &JsonPath) -> Vec<Block> {
        let mut next_step = 1;
        let mut out = Vec::new();
        for (i, item) in items.iter().enumerate() {
            out.extend(self.item(item, &path.index(i), &mut next_step));
        }
        out
    }

    fn children(&mut self, items: &[ContentItem], path: &JsonPath) -> Vec<Block> {
        self.list(items, &path.field("children"))
    }

    fn degrade(&mut self, result: Result<Block, BuildIssue>, path: &JsonPath) -> Block {
        result.unwrap_or_else(|issue| {
            let block = issue.placeholder();
            self.diagnostics.record(path, issue);
            block
        })
    }

    fn check_code(&mut self, source: &str, path: &JsonPath) {
        if exceeds_limit(source) {
            self.diagnostics.record(
                path,
                BuildIssue::CodeTruncated {
                    chars: source.chars().count(),
                    max: MAX_CODE_CHARS,
                },
            );
        }
    }

    fn item(&mut self, item: &ContentItem, path: &JsonPath, next_step: &mut i64) -> Vec<Block> {
        let markdown = self.opts.parse_markdown;
        match item {
            ContentItem::Paragraph { text } => paragraph(self.opt_text(text.as_ref()))
                .into_iter()
                .collect(),
            ContentItem::Heading { level, text } => {
                vec![heading(*level, self.opt_text(text.as_ref()))]
            }
            ContentItem::Quote { text } => vec![quote(self.opt_text(text.as_ref()))],
            ContentItem::Callout {
                text,
                icon,
                color,
                children,
            } => {
                let icon = icon
                    .as_deref()
                    .map(str::trim)
                    .filter(|i| !i.is_empty())
                    .unwrap_or(DEFAULT_CALLOUT_ICON);
                let children = self.children(children, path);
                vec![
                    callout(
                        self.opt_text(text.as_ref()),
                        icon,
                        color.unwrap_or(Color::GrayBackground),
                    )
                    .with_children(children),
                ]
            }
            ContentItem::Note { kind, text } => {
                vec![note(self.opt_text(text.as_ref()), *kind)]
            }
            ContentItem::Code {
                code: source,
                language,
                caption,
            } => {
                self.check_code(source, path);
                vec![match caption {
                    Some(c) => code_with_caption(source, language, c),
                    None => code(source, language),
                }]
            }
            ContentItem::Equation { expression } => equation(expression).into_iter().collect(),
            ContentItem::CodeWithExplanation {
                code: source,
                language,
                explanations,
            } => {
                self.check_code(source, path);
                vec![code_with_explanation(
                    source,
                    language,
                    &self.texts(explanations),
                )]
            }
            ContentItem::BulletedList { items } => {
                items.iter().map(|t| bulleted_item(self.text(t))).collect()
            }
            ContentItem::NumberedList { items } => {
                items.iter().map(|t| numbered_item(self.text(t))).collect()
            }
            ContentItem::TodoList { items, checked } => {
                items.iter().map(|t| to_do(self.text(t), *checked)).collect()
            }
            ContentItem::Toggle { text, children } => {
                let children = self.children(children, path);
                vec![toggle(self.opt_text(text.as_ref()), children)]
            }
            ContentItem::Media { kind, url, caption } => {
                let r = try_media(*kind, url, caption.as_deref());
                vec![self.degrade(r, path)]
            }
            ContentItem::Embed { url } => vec![self.degrade(try_embed(url), path)],
            ContentItem::Bookmark { url, caption } => {
                let r = try_bookmark(url, caption.as_deref());
                vec![self.degrade(r, path)]
            }
            ContentItem::Divider => vec![divider()],
            ContentItem::TableOfContents => vec![table_of_contents()],
            ContentItem::Breadcrumb => vec![breadcrumb()],
            ContentItem::Table {
                rows,
                has_column_header,
                has_row_header,
            } => {
                let rows: Vec<Vec<TableCell>> = rows
                    .iter()
                    .map(|row| row.iter().map(|c| self.cell(c)).collect())
                    .collect();
                table(rows, *has_column_header, *has_row_header)
                    .into_iter()
                    .collect()
            }
            ContentItem::Columns {
                columns: cols,
                from_children,
            } => {
                let cols = self.columns(cols, *from_children, path);
                columns(cols).into_iter().collect()
            }
            ContentItem::Comparison { left, right } => {
                vec![comparison(self.side(left), self.side(right))]
            }
            ContentItem::SyncedBlock { children } => {
                let children = self.children(children, path);
                vec![synced_original(children)]
            }
            ContentItem::SyncedReference { block_id } => {
                synced_reference(block_id).into_iter().collect()
            }
            ContentItem::Definition {
                term,
                definition: def_text,
            } => vec![definition(term, self.opt_text(def_text.as_ref()))],
            ContentItem::Step {
                number,
                title,
                description,
                children,
            } => {
                let n = number.unwrap_or(*next_step);
                *next_step = n.saturating_add(1);
                let children: Vec<Option<Block>> = self
                    .children(children, path)
                    .into_iter()
                    .map(Some)
                    .collect();
                let description = description
                    .as_ref()
                    .filter(|d| !blank(d))
                    .map(|d| self.text(d));
                vec![step(n, title, description, children, markdown)]
            }
            ContentItem::Exercise {
                title,
                instructions,
                solution,
                language,
            } => {
                if let Some(s) = solution {
                    self.check_code(s, path);
                }
                vec![exercise(
                    title,
                    &self.texts(instructions),
                    solution.as_deref(),
                    language,
                    markdown,
                )]
            }
            ContentItem::Quiz {
                question,
                options,
                correct_index,
            } => {
                if options.len() >= MIN_OPTIONS
                    && let Err(issue) = answer_index(*correct_index, options.len())
                {
                    self.diagnostics.record(path, issue);
                }
                let r = try_quick_quiz(question, options, *correct_index, markdown);
                vec![self.degrade(r, path)]
            }
            ContentItem::Summary { title, points } => {
                vec![chapter_summary(title.as_deref(), &self.texts(points))]
            }
            ContentItem::Objectives { items } => vec![learning_objectives(&self.texts(items))],
            ContentItem::Prerequisites { items } => vec![prerequisites(&self.texts(items))],
            ContentItem::EstimatedTime { minutes } => vec![estimated_time(*minutes)],
            ContentItem::Unknown { name } => {
                let issue = BuildIssue::UnknownType { name: name.clone() };
                let block = issue.placeholder();
                self.diagnostics.record(path, issue);
                vec![block]
            }
        }
    }

    /// Column contents; columns built from `children` are addressed as `children[c]`.
    fn columns(
        &mut self,
        cols: &[Vec<ContentItem>],
        from_children: bool,
        path: &JsonPath,
    ) -> Vec<Vec<Block>> {
        let mut out = Vec::with_capacity(cols.len());
        for (c, col) in cols.iter().enumerate() {
            if from_children {
                let child_path = path.field("children").index(c);
                let mut next_step = 1;
                let mut blocks = Vec::new();
                for item in col {
                    blocks.extend(self.item(item, &child_path, &mut next_step));
                }
                out.push(blocks);
            } else {
                out.push(self.list(col, &path.field("columns").index(c)));
            }
        }
        out
    }

    fn cell(&self, input: &TextInput) -> TableCell {
        match input {
            TextInput::Plain(s) if self.opts.parse_markdown => TableCell::Text(s.clone()),
            other => TableCell::Runs(format_input(other, self.opts.parse_markdown)),
        }
    }

    fn side(&self, side: &ComparisonSide) -> ComparisonSide {
        ComparisonSide {
            items: self.texts(&side.items),
            ..side.clone()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compile/compiler.rs"]
mod tests;
