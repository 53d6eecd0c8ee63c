use crate::course::item::ContentItem;
use crate::course::model::CourseDef;
use serde::Serialize;
use std::collections::BTreeMap;

/// Item counts for a course description.
///
/// `total_items`, `items_per_section` and `paragraphs` count top-level section items;
/// `items_by_type` also counts items nested in toggles, columns, steps and synced blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseStats {
    /// Number of sections.
    pub sections: usize,
    /// Top-level items across all sections.
    pub total_items: usize,
    /// Top-level items per section, in order.
    pub items_per_section: Vec<usize>,
    /// Items by canonical type tag, nested items included.
    pub items_by_type: BTreeMap<String, usize>,
    /// Top-level paragraph items.
    pub paragraphs: usize,
}

impl CourseStats {
    /// Count the items of `def`.
    pub fn of(def: &CourseDef) -> Self {
        let mut stats = Self {
            sections: def.sections.len(),
            ..Self::default()
        };
        for section in &def.sections {
            stats.items_per_section.push(section.content.len());
            stats.total_items += section.content.len();
            for raw in &section.content {
                let item = ContentItem::from_def(raw);
                if matches!(item, ContentItem::Paragraph { .. }) {
                    stats.paragraphs += 1;
                }
                stats.tally(&item);
            }
        }
        stats
    }

    fn tally(&mut self, item: &ContentItem) {
        *self.items_by_type.entry(item.tag().to_owned()).or_default() += 1;
        for child in item.nested() {
            self.tally(child);
        }
    }

    /// Items with canonical `tag`, nested items included.
    pub fn count(&self, tag: &str) -> usize {
        self.items_by_type.get(tag).copied().unwrap_or(0)
    }

    /// Share of top-level items that are paragraphs, in `0.0..=1.0`.
    pub fn paragraph_ratio(&self) -> f64 {
        if self.total_items == 0 {
            return 0.0;
        }
        self.paragraphs as f64 / self.total_items as f64
    }

    /// Mean top-level items per section; zero without sections.
    pub fn average_items_per_section(&self) -> f64 {
        if self.sections == 0 {
            return 0.0;
        }
        self.total_items as f64 / self.sections as f64
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schema/stats.rs"]
mod tests;
