use crate::config::IndexConfig;
use crate::document::parse;
use crate::ordering::{sort_with, CaseInsensitiveOrder, RotationOrder};
use crate::render::render;
use crate::rotation::rotate;
use crate::types::{IndexEntry, IndexError, IndexSummary, KwicIndex, SourceVersion};

/// Runs parse, rotate, sort and render over one input.
pub struct KwicIndexer<O = CaseInsensitiveOrder> {
	config: IndexConfig,
	order: O,
}

impl Default for KwicIndexer<CaseInsensitiveOrder> {
	fn default() -> Self {
		Self {
			config: IndexConfig::v0(),
			order: CaseInsensitiveOrder,
		}
	}
}

impl<O> KwicIndexer<O>
where
	O: RotationOrder,
{
	pub fn new(config: IndexConfig, order: O) -> Self {
		Self { config, order }
	}

	pub fn build(&self, raw: &str) -> Result<KwicIndex, IndexError> {
		// 1. Parsing Phase
		let doc = parse(raw, self.config.delimiter)?;

		// 2. Rotation Phase
		let rotations = rotate(&doc);
		let rotations_considered = doc.word_count();
		let rotations_suppressed = rotations_considered - rotations.len();

		// 3. Ordering Phase
		let sorted = sort_with(rotations, &self.order);

		// 4. Rendering Phase
		let lines = render(&sorted, &doc)?;

		let entries: Vec<IndexEntry> = sorted
			.iter()
			.zip(lines)
			.map(|(rotation, line)| IndexEntry {
				line,
				key: rotation.key(),
				title_index: rotation.title_index,
				offset: rotation.offset,
			})
			.collect();

		let summary = IndexSummary {
			source_version: SourceVersion::from_content(raw.as_bytes()),
			delimiter: self.config.delimiter,
			titles: doc.titles().len(),
			exclusions: doc.exclusions().len(),
			rotations_considered,
			rotations_suppressed,
			entries: entries.len(),
		};

		tracing::debug!(
			entries = summary.entries,
			suppressed = summary.rotations_suppressed,
			"built index"
		);

		Ok(KwicIndex { entries, summary })
	}
}
