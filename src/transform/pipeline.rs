//! End-to-end catalog import pipeline.
//!
//! Load -> Parse -> Render -> Write, strictly forward, one pass per run.
//! Per-line problems become skip entries in the [`RunSummary`]; only
//! file-level conditions abort the run.

use std::fs;
use std::path::PathBuf;

use serde::Serialize;

use crate::error::PipelineResult;
use crate::loader::{load_file, LoadedFile};
use crate::models::ProductRecord;
use crate::parser::{parse_line, LineOutcome, SkipReason};
use crate::render::{render_tuple, SqlTemplate};

/// Default input catalog filename.
pub const DEFAULT_INPUT: &str = "producto.txt";

/// Default output script filename, overwritten each run.
pub const DEFAULT_OUTPUT: &str = "importar-todos-productos-completo.sql";

/// Number of tuples shown in the console sample.
pub const SAMPLE_ROWS: usize = 5;

/// Options for a generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Input catalog file.
    pub input: PathBuf,
    /// Output SQL file.
    pub output: PathBuf,
    /// Script template wrapped around the tuples.
    pub template: SqlTemplate,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            template: SqlTemplate::default(),
        }
    }
}

/// A line that produced no record.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedLine {
    /// 1-based line number in the input file.
    pub line: usize,
    /// Why the line was skipped.
    pub reason: SkipReason,
}

/// Records and skip accounting for one parsed catalog.
#[derive(Debug, Clone)]
pub struct ParsedCatalog {
    /// Accepted records, in input order.
    pub records: Vec<ProductRecord>,
    /// Lines that produced no record.
    pub skipped: Vec<SkippedLine>,
}

/// Summary of a completed generation run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// Number of tuples written.
    pub record_count: usize,
    /// Encoding that decoded the input.
    pub encoding: String,
    /// chardet's charset guess (observability).
    pub detected_charset: String,
    /// Lines that produced no record.
    pub skipped: Vec<SkippedLine>,
    /// First rendered tuples, for the console sample.
    pub sample: Vec<String>,
    /// Tuples beyond the sample.
    pub remaining: usize,
    /// Where the script was written.
    pub output: PathBuf,
}

/// Parse every line of a loaded catalog into records plus skip accounting.
pub fn parse_catalog(loaded: &LoadedFile) -> ParsedCatalog {
    let mut records = Vec::new();
    let mut skipped = Vec::new();

    for (index, raw) in loaded.lines().enumerate() {
        match parse_line(raw, index) {
            LineOutcome::Parsed(line) => match ProductRecord::from_line(&line) {
                Some(record) => records.push(record),
                None => skipped.push(SkippedLine {
                    line: index + 1,
                    reason: SkipReason::MissingNameOrSku,
                }),
            },
            LineOutcome::Skipped(reason) => skipped.push(SkippedLine {
                line: index + 1,
                reason,
            }),
        }
    }

    ParsedCatalog { records, skipped }
}

/// Run the whole pipeline: read the catalog, build records, write the script.
///
/// The output file is overwritten and written as UTF-8 regardless of the
/// input encoding. Re-running on the same input produces byte-identical
/// output.
pub fn generate(options: &GenerateOptions) -> PipelineResult<RunSummary> {
    let loaded = load_file(&options.input)?;
    let parsed = parse_catalog(&loaded);

    let tuples: Vec<String> = parsed.records.iter().map(render_tuple).collect();
    let script = options.template.render(&tuples);
    fs::write(&options.output, script)?;

    let sample: Vec<String> = tuples.iter().take(SAMPLE_ROWS).cloned().collect();
    Ok(RunSummary {
        record_count: tuples.len(),
        encoding: loaded.encoding.to_string(),
        detected_charset: loaded.detected_charset,
        skipped: parsed.skipped,
        sample,
        remaining: tuples.len().saturating_sub(SAMPLE_ROWS),
        output: options.output.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PipelineError;
    use crate::render::{DEFAULT_FOOTER, DEFAULT_HEADER};

    const HEADER_LINE: &str =
        "Codigo\tDescripcion\tPrecio Costo\tPrecio Venta\tPrecio Mayoreo\tInventario\tInv. Minimo\tDepartamento";

    fn options_for(dir: &tempfile::TempDir, content: &str) -> GenerateOptions {
        let input = dir.path().join("producto.txt");
        fs::write(&input, content).unwrap();
        GenerateOptions {
            input,
            output: dir.path().join("out.sql"),
            template: SqlTemplate::default(),
        }
    }

    #[test]
    fn test_end_to_end_counts_and_skips() {
        let dir = tempfile::tempdir().unwrap();
        let content = format!(
            "{}\nA1\tAceite 10W40\t$100\t$150\t$120\t5\t1\tLubricantes\nshort\tline\n\nB2\tBateria Moura\t$1,000\t$1,500.00\t$1,200\t3\t1\t- Sin Departamento -\n",
            HEADER_LINE
        );
        let options = options_for(&dir, &content);

        let summary = generate(&options).unwrap();
        assert_eq!(summary.record_count, 2);
        assert_eq!(summary.encoding, "utf-8");
        assert_eq!(summary.sample.len(), 2);
        assert_eq!(summary.remaining, 0);

        // header + short line + blank line
        let reasons: Vec<SkipReason> = summary.skipped.iter().map(|s| s.reason).collect();
        assert_eq!(
            reasons,
            vec![SkipReason::Header, SkipReason::TooFewFields, SkipReason::Blank]
        );

        let script = fs::read_to_string(&summary.output).unwrap();
        assert!(script.starts_with(DEFAULT_HEADER));
        assert!(script.ends_with(DEFAULT_FOOTER));
        assert_eq!(script.matches("    (").count(), 2);
        assert!(script.contains("('Bateria Moura', 'B2', 'Eléctrico', 3, 1500, 1200,"));
    }

    #[test]
    fn test_rerun_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let content = format!("{}\nA1\tAceite\t$10\t$20\t$15\t5\t1\tLubricantes\n", HEADER_LINE);
        let options = options_for(&dir, &content);

        generate(&options).unwrap();
        let first = fs::read(&options.output).unwrap();
        generate(&options).unwrap();
        let second = fs::read(&options.output).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_name_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let content = format!(
            "{}\nA1\t   \t$10\t$20\t$15\t5\t1\tDept\nB2\t\t$10\t$20\t$15\t5\t1\tDept\n",
            HEADER_LINE
        );
        let options = options_for(&dir, &content);

        let summary = generate(&options).unwrap();
        assert_eq!(summary.record_count, 0);
        assert_eq!(
            summary
                .skipped
                .iter()
                .filter(|s| s.reason == SkipReason::MissingNameOrSku)
                .count(),
            2
        );
    }

    #[test]
    fn test_empty_leading_sku_field_collapses_to_short_line() {
        // A leading empty SKU field loses its tab to the whole-line trim,
        // leaving seven fields; the line is skipped as too short.
        let dir = tempfile::tempdir().unwrap();
        let content = format!("{}\n\tNameless\t$10\t$20\t$15\t5\t1\tDept\n", HEADER_LINE);
        let options = options_for(&dir, &content);

        let summary = generate(&options).unwrap();
        assert_eq!(summary.record_count, 0);
        assert!(summary
            .skipped
            .iter()
            .any(|s| s.reason == SkipReason::TooFewFields));
    }

    #[test]
    fn test_zero_records_still_writes_template() {
        let dir = tempfile::tempdir().unwrap();
        let options = options_for(&dir, &format!("{}\n", HEADER_LINE));

        let summary = generate(&options).unwrap();
        assert_eq!(summary.record_count, 0);

        let script = fs::read_to_string(&summary.output).unwrap();
        assert!(script.starts_with(DEFAULT_HEADER));
        assert!(script.ends_with(DEFAULT_FOOTER));
        assert!(!script.contains("INSERT INTO"));
    }

    #[test]
    fn test_comment_lines_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let content = format!(
            "{}\n# comentario\nA1\tAceite\t$10\t$20\t$15\t5\t1\tLubricantes\n",
            HEADER_LINE
        );
        let options = options_for(&dir, &content);

        let summary = generate(&options).unwrap();
        assert_eq!(summary.record_count, 1);
        assert!(summary
            .skipped
            .iter()
            .any(|s| s.reason == SkipReason::Comment && s.line == 2));
    }

    #[test]
    fn test_latin1_input_decodes() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("producto.txt");
        // "Eléctrico" department with a 0xE9 byte, invalid as UTF-8
        let mut bytes = format!("{}\n", HEADER_LINE).into_bytes();
        bytes.extend_from_slice(b"E9\tFoco H4\t$10\t$20\t$15\t5\t1\tEl\xe9ctrico\n");
        fs::write(&input, bytes).unwrap();

        let options = GenerateOptions {
            input,
            output: dir.path().join("out.sql"),
            template: SqlTemplate::default(),
        };
        let summary = generate(&options).unwrap();
        assert_eq!(summary.encoding, "iso-8859-15");
        assert_eq!(summary.record_count, 1);

        let script = fs::read_to_string(&summary.output).unwrap();
        assert!(script.contains("'Eléctrico'"));
    }

    #[test]
    fn test_missing_input_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let options = GenerateOptions {
            input: dir.path().join("absent.txt"),
            output: dir.path().join("out.sql"),
            template: SqlTemplate::default(),
        };

        let err = generate(&options).unwrap_err();
        assert!(matches!(err, PipelineError::Load(_)));
        assert!(!options.output.exists());
    }

    #[test]
    fn test_sample_capped_at_five() {
        let dir = tempfile::tempdir().unwrap();
        let mut content = format!("{}\n", HEADER_LINE);
        for i in 0..7 {
            content.push_str(&format!("S{}\tRepuesto {}\t$1\t$2\t$1\t1\t1\tRepuestos\n", i, i));
        }
        let options = options_for(&dir, &content);

        let summary = generate(&options).unwrap();
        assert_eq!(summary.record_count, 7);
        assert_eq!(summary.sample.len(), SAMPLE_ROWS);
        assert_eq!(summary.remaining, 2);
    }
}
