use thiserror::Error;

/// Lookup failure. The only error a query against the registry or the
/// catalog can produce; it never leaves partial state behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotFoundError {
	#[error("Unknown sheet: {0}")]
	Sheet(String),
	#[error("Unknown grid: {0}")]
	Grid(String),
	#[error("Tag {tag:?} not found in {grid}")]
	Tag { grid: String, tag: String },
	#[error("Tag {0:?} not found in any grid")]
	AnyGrid(String),
}

/// Failure while compiling a grid description into grids.
#[derive(Debug, Error)]
pub enum DescriptionError {
	#[error("Invalid description: {0}")]
	Json(#[from] serde_json::Error),
	#[error("Grid name must not be empty")]
	EmptyGridName,
	#[error("Duplicate grid: {0}")]
	DuplicateGrid(String),
	#[error("Grid {grid} refers to unknown sheet {sheet:?}")]
	UnknownSheet { grid: String, sheet: String },
	#[error("Empty tag in {grid} at ({row}, {column})")]
	EmptyTag { grid: String, row: u32, column: u32 },
	#[error("No tags listed in {grid} at ({row}, {column})")]
	NoTags { grid: String, row: u32, column: u32 },
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn messages_name_the_missing_key() {
		let e = NotFoundError::Tag { grid: "grid_main".into(), tag: "t.l0.nothing".into() };
		let msg = e.to_string();
		assert!(msg.contains("grid_main"));
		assert!(msg.contains("t.l0.nothing"));
		assert_eq!(NotFoundError::Sheet("maps".into()).to_string(), "Unknown sheet: maps");
	}

	#[test]
	fn json_errors_convert() {
		let bad = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
		let e: DescriptionError = bad.into();
		assert!(matches!(e, DescriptionError::Json(_)));
	}
}
