use crate::blocks::model::Block;
use crate::compile::compiler::{CompileOpts, compile_with_diagnostics};
use crate::compile::diagnostics::Diagnostics;
use crate::course::model::CourseDef;
use crate::publish::materialize::MAX_BATCH_SIZE;
use crate::schema::recommend::generate_recommendations;
use crate::schema::stats::CourseStats;
use crate::schema::validate::{ValidationResult, validate};
use serde::Serialize;
use std::collections::BTreeMap;

/// Everything known about a course without publishing it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    /// The course passed validation.
    pub valid: bool,
    /// Full validation report.
    pub validation: ValidationResult,
    /// Item counts.
    pub stats: CourseStats,
    /// Authoring advice.
    pub recommendations: Vec<String>,
    /// Top-level blocks that would be sent.
    pub total_blocks: usize,
    /// Blocks in the whole tree, nested ones included.
    pub tree_blocks: usize,
    /// Blocks in the whole tree by service type tag.
    pub blocks_by_type: BTreeMap<String, usize>,
    /// Requests needed to send the top-level blocks (page creation included).
    pub batches: usize,
    /// Items that were degraded during compilation.
    pub diagnostics: Diagnostics,
}

fn count_types(blocks: &[Block], into: &mut BTreeMap<String, usize>) {
    for b in blocks {
        *into.entry(b.type_name().to_owned()).or_default() += 1;
        count_types(b.children(), into);
    }
}

/// Validate, analyze and compile a course without submitting anything.
///
/// Problems are reported, never raised: an invalid course still gets compiled and counted.
#[tracing::instrument(skip_all)]
pub fn dry_run(def: &CourseDef, opts: &CompileOpts) -> Analysis {
    let validation = validate(def);
    let stats = CourseStats::of(def);
    let recommendations = generate_recommendations(&stats);
    let (blocks, diagnostics) = compile_with_diagnostics(def, opts);

    let mut blocks_by_type = BTreeMap::new();
    count_types(&blocks, &mut blocks_by_type);

    Analysis {
        valid: validation.valid,
        validation,
        stats,
        recommendations,
        total_blocks: blocks.len(),
        tree_blocks: blocks.iter().map(Block::tree_len).sum(),
        blocks_by_type,
        batches: blocks.len().div_ceil(MAX_BATCH_SIZE).max(1),
        diagnostics,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compile/analysis.rs"]
mod tests;
