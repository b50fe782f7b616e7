//! Jupyter notebook extraction.
//!
//! Only Markdown cells can hold links. Their sources are concatenated in cell
//! order and handed to the Markdown extractor unchanged; code and raw cells
//! are skipped.

use crate::markdown::extract_markdown;
use docgate_core::{Error, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Notebook {
    cells: Vec<Cell>,
}

#[derive(Debug, Deserialize)]
struct Cell {
    cell_type: String,
    #[serde(default)]
    source: CellSource,
}

/// nbformat allows a cell source as one string or as a list of lines.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CellSource {
    Text(String),
    Lines(Vec<String>),
}

impl Default for CellSource {
    fn default() -> Self {
        CellSource::Text(String::new())
    }
}

impl CellSource {
    fn push_to(&self, out: &mut String) {
        match self {
            CellSource::Text(text) => out.push_str(text),
            CellSource::Lines(lines) => lines.iter().for_each(|line| out.push_str(line)),
        }
    }
}

/// Concatenated source of every Markdown cell, in order.
pub fn markdown_from_notebook(source: &str) -> Result<String> {
    let notebook: Notebook = serde_json::from_str(source)
        .map_err(|e| Error::parse_error(format!("Invalid notebook: {}", e)))?;

    let mut markdown = String::new();
    for cell in notebook
        .cells
        .iter()
        .filter(|cell| cell.cell_type == "markdown")
    {
        cell.source.push_to(&mut markdown);
    }
    Ok(markdown)
}

/// Every link and image target in the notebook's Markdown cells.
pub fn extract_notebook(source: &str) -> Result<Vec<String>> {
    let markdown = markdown_from_notebook(source)?;
    Ok(extract_markdown(&markdown))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_markdown_cells() {
        let nb = r##"{
            "cells": [
                {"cell_type": "markdown", "source": "# Intro\n\nSee [setup](/start/setup).\n"},
                {"cell_type": "code", "source": ["print('[x](/code-link)')\n"], "outputs": []},
                {"cell_type": "raw", "source": "[raw](/raw-link)"},
                {"cell_type": "markdown", "source": ["More in ", "[the guide](../guide)."]}
            ],
            "metadata": {},
            "nbformat": 4,
            "nbformat_minor": 5
        }"##;

        assert_eq!(
            markdown_from_notebook(nb).unwrap(),
            "# Intro\n\nSee [setup](/start/setup).\nMore in [the guide](../guide)."
        );
        assert_eq!(extract_notebook(nb).unwrap(), vec!["/start/setup", "../guide"]);
    }

    #[test]
    fn test_notebook_matches_markdown() {
        let md = "Broken [link](/missing).";
        let nb = serde_json::json!({
            "cells": [{"cell_type": "markdown", "source": md}]
        })
        .to_string();

        assert_eq!(extract_notebook(&nb).unwrap(), extract_markdown(md));
    }

    #[test]
    fn test_cell_without_source() {
        let nb = r#"{"cells": [{"cell_type": "markdown"}]}"#;
        assert!(extract_notebook(nb).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let err = extract_notebook("{ not json").unwrap_err();
        assert!(matches!(err, Error::ParseError { .. }));
    }

    #[test]
    fn test_missing_cells_is_an_error() {
        assert!(extract_notebook(r#"{"metadata": {}}"#).is_err());
    }
}
