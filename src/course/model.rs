use crate::foundation::lenient;
use crate::templates::outline::ComparisonSide;
use crate::text::input::{TextInput, text_list};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Course description as submitted by the caller.
///
/// Every field is read permissively: a wrong JSON type reads as absent. Structural problems are
/// reported by [`crate::schema::validate::validate`], not at parse time.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CourseDef {
    /// Parent page id on the service.
    #[serde(deserialize_with = "lenient::string")]
    pub parent_id: Option<String>,
    /// Page title.
    #[serde(deserialize_with = "lenient::string")]
    pub title: Option<String>,
    /// Page emoji icon.
    #[serde(deserialize_with = "lenient::string")]
    pub icon: Option<String>,
    /// Page cover image URL.
    #[serde(deserialize_with = "lenient::string")]
    pub cover: Option<String>,
    /// Course description shown in a callout under the header.
    pub description: Option<TextInput>,
    /// Estimated duration in minutes.
    #[serde(deserialize_with = "lenient::integer")]
    pub estimated_time: Option<i64>,
    /// Prerequisites list.
    #[serde(deserialize_with = "text_list")]
    pub prerequisites: Vec<TextInput>,
    /// Learning objectives list.
    #[serde(deserialize_with = "text_list")]
    pub objectives: Vec<TextInput>,
    /// Ordered sections.
    #[serde(deserialize_with = "lenient::list_or_default")]
    pub sections: Vec<SectionDef>,
}

/// One section of a course.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SectionDef {
    /// Section heading text.
    #[serde(deserialize_with = "lenient::string")]
    pub title: Option<String>,
    /// Paragraph under the heading.
    pub description: Option<TextInput>,
    /// Heading color name.
    #[serde(deserialize_with = "lenient::string")]
    pub color: Option<String>,
    /// Collapse the section content under a toggle heading.
    #[serde(deserialize_with = "lenient::flag")]
    pub toggleable: bool,
    /// Ordered content items.
    #[serde(deserialize_with = "lenient::list_or_default")]
    pub content: Vec<ContentItemDef>,
}

/// A raw content item: a `type` tag plus every field any item type may carry.
///
/// Resolved into [`crate::course::item::ContentItem`] before compilation. Alternate key
/// spellings (`content`, `correctAnswer`, `number`, `hasHeader`) are accepted; when both
/// spellings are present the canonical one wins.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(remote = "Self", rename_all = "camelCase", default)]
pub struct ContentItemDef {
    /// Type tag (`paragraph`, `quiz`, ...).
    #[serde(rename = "type", deserialize_with = "lenient::string")]
    pub kind: Option<String>,
    /// Main text.
    pub text: Option<TextInput>,
    /// Title (toggles, steps, exercises, summaries).
    #[serde(deserialize_with = "lenient::string")]
    pub title: Option<String>,
    /// List entries.
    #[serde(deserialize_with = "text_list")]
    pub items: Vec<TextInput>,
    /// Source code.
    #[serde(deserialize_with = "lenient::string")]
    pub code: Option<String>,
    /// Code language.
    #[serde(deserialize_with = "lenient::string")]
    pub language: Option<String>,
    /// Media or link URL.
    #[serde(deserialize_with = "lenient::string")]
    pub url: Option<String>,
    /// Media caption.
    #[serde(deserialize_with = "lenient::string")]
    pub caption: Option<String>,
    /// Quiz question.
    #[serde(deserialize_with = "lenient::string")]
    pub question: Option<String>,
    /// Quiz options.
    #[serde(deserialize_with = "lenient::string_list")]
    pub options: Vec<String>,
    /// Index of the correct quiz option.
    #[serde(deserialize_with = "lenient::integer")]
    pub correct_index: Option<i64>,
    /// Defined term.
    #[serde(deserialize_with = "lenient::string")]
    pub term: Option<String>,
    /// Definition text.
    pub definition: Option<TextInput>,
    /// Step number.
    #[serde(deserialize_with = "lenient::integer")]
    pub step_number: Option<i64>,
    /// Step description.
    pub description: Option<TextInput>,
    /// Exercise instructions.
    #[serde(deserialize_with = "text_list")]
    pub instructions: Vec<TextInput>,
    /// Exercise solution code.
    #[serde(deserialize_with = "lenient::string")]
    pub solution: Option<String>,
    /// Duration in minutes.
    #[serde(deserialize_with = "lenient::integer")]
    pub minutes: Option<i64>,
    /// Left side of a comparison.
    #[serde(deserialize_with = "lenient::or_default")]
    pub left: ComparisonSide,
    /// Right side of a comparison.
    #[serde(deserialize_with = "lenient::or_default")]
    pub right: ComparisonSide,
    /// Column layout contents, one item list per column.
    #[serde(deserialize_with = "item_columns")]
    pub columns: Vec<Vec<ContentItemDef>>,
    /// Table rows; cells are strings or run lists.
    #[serde(deserialize_with = "text_rows")]
    pub rows: Vec<Vec<TextInput>>,
    /// First table row is a header.
    #[serde(deserialize_with = "lenient::flag")]
    pub has_column_header: bool,
    /// First table column is a header.
    #[serde(deserialize_with = "lenient::flag")]
    pub has_row_header: bool,
    /// Equation expression.
    #[serde(deserialize_with = "lenient::string")]
    pub expression: Option<String>,
    /// Per-line code explanations.
    #[serde(deserialize_with = "text_list")]
    pub explanations: Vec<TextInput>,
    /// To-do state.
    #[serde(deserialize_with = "lenient::flag")]
    pub checked: bool,
    /// Callout icon.
    #[serde(deserialize_with = "lenient::string")]
    pub icon: Option<String>,
    /// Block color name.
    #[serde(deserialize_with = "lenient::string")]
    pub color: Option<String>,
    /// Synced block source id.
    #[serde(deserialize_with = "lenient::string")]
    pub block_id: Option<String>,
    /// Nested items (toggles, steps, synced blocks, column fallback).
    #[serde(deserialize_with = "lenient::list_or_default")]
    pub children: Vec<ContentItemDef>,
}

/// `(canonical, alternate)` key pairs of [`ContentItemDef`].
const KEY_ALIASES: [(&str, &str); 4] = [
    ("text", "content"),
    ("correctIndex", "correctAnswer"),
    ("stepNumber", "number"),
    ("hasColumnHeader", "hasHeader"),
];

impl<'de> Deserialize<'de> for ContentItemDef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut v = Value::deserialize(deserializer)?;
        if let Value::Object(map) = &mut v {
            for (canonical, alternate) in KEY_ALIASES {
                if let Some(alt) = map.remove(alternate) {
                    map.entry(canonical).or_insert(alt);
                }
            }
        }
        ContentItemDef::deserialize(v).map_err(serde::de::Error::custom)
    }
}

impl ContentItemDef {
    /// Item with only a type tag, for programmatic construction.
    pub fn of_type(kind: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            ..Self::default()
        }
    }

    /// Set the main text.
    pub fn with_text(mut self, text: impl Into<TextInput>) -> Self {
        self.text = Some(text.into());
        self
    }
}

fn item_columns<'de, D>(d: D) -> Result<Vec<Vec<ContentItemDef>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Array(cols) = Value::deserialize(d)? else {
        return Ok(Vec::new());
    };
    Ok(cols
        .into_iter()
        .map(|col| match col {
            Value::Array(items) => items
                .into_iter()
                .map(|v| serde_json::from_value(v).unwrap_or_default())
                .collect(),
            single @ Value::Object(_) => {
                vec![serde_json::from_value(single).unwrap_or_default()]
            }
            _ => Vec::new(),
        })
        .collect())
}

fn text_rows<'de, D>(d: D) -> Result<Vec<Vec<TextInput>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Array(rows) = Value::deserialize(d)? else {
        return Ok(Vec::new());
    };
    Ok(rows
        .iter()
        .filter_map(Value::as_array)
        .map(|cells| {
            cells
                .iter()
                .map(|c| TextInput::from_value(c).unwrap_or(TextInput::Plain(String::new())))
                .collect()
        })
        .collect())
}

#[cfg(test)]
#[path = "../../tests/unit/course/model.rs"]
mod tests;
