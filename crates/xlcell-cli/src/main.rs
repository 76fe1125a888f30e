//! xlcell CLI - inspect and export XLSX cell values

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use xlcell_core::{CellType, CellValue};
use xlcell_xlsx::{ReadOptions, SheetData, XlsxReader};

#[derive(Parser)]
#[command(name = "xlcell")]
#[command(author, version, about = "Decode and export cell values from XLSX workbooks")]
struct Cli {
    /// Log more (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all sheets in a workbook
    Sheets {
        /// Input workbook
        input: PathBuf,
    },

    /// Print every cell of a sheet with its type and value
    Cells {
        /// Input workbook
        input: PathBuf,

        #[command(flatten)]
        sheet: SheetArgs,

        /// Print one JSON object per line
        #[arg(long)]
        json: bool,
    },

    /// Convert a sheet to CSV and output to stdout or file
    #[command(alias = "csv")]
    ToCsv {
        /// Input workbook
        input: PathBuf,

        #[command(flatten)]
        sheet: SheetArgs,

        /// Output CSV file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(clap::Args)]
struct SheetArgs {
    /// Sheet name or 0-based index (default: first sheet)
    #[arg(short, long)]
    sheet: Option<String>,

    /// Cell text to treat as missing
    #[arg(long, default_value = "")]
    na: String,
}

impl SheetArgs {
    fn read(&self, input: &Path) -> Result<SheetData> {
        let mut reader = XlsxReader::open(input)
            .with_context(|| format!("Failed to open '{}'", input.display()))?;
        let options = ReadOptions::with_missing(self.na.as_str());

        // A sheet literally named "2" wins over the third sheet
        let index = match self.sheet.as_deref() {
            None => Some(0),
            Some(name) if reader.sheet_names().contains(&name) => None,
            Some(name) => name.parse::<usize>().ok(),
        };
        let sheet = match (index, self.sheet.as_deref()) {
            (Some(index), _) => reader.read_sheet(index, &options),
            (None, Some(name)) => reader.read_sheet_by_name(name, &options),
            (None, None) => reader.read_sheet(0, &options),
        }
        .with_context(|| format!("Failed to read sheet from '{}'", input.display()))?;

        // Each diagnostic was already logged at warn level when it was recorded
        if !sheet.diagnostics.is_empty() {
            log::info!(
                "sheet '{}': {} cells, {} warnings",
                sheet.name,
                sheet.cells.len(),
                sheet.diagnostics.len()
            );
        }
        Ok(sheet)
    }
}

/// One line of `cells --json` output
#[derive(Serialize)]
struct CellRecord<'a> {
    reference: String,
    #[serde(rename = "type")]
    cell_type: CellType,
    value: &'a CellValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Commands::Sheets { input } => list_sheets(&input),
        Commands::Cells { input, sheet, json } => print_cells(&sheet.read(&input)?, json),
        Commands::ToCsv {
            input,
            sheet,
            output,
        } => to_csv(&sheet.read(&input)?, output.as_deref()),
    }
}

fn list_sheets(input: &Path) -> Result<()> {
    let reader = XlsxReader::open(input)
        .with_context(|| format!("Failed to open '{}'", input.display()))?;

    for (i, name) in reader.sheet_names().into_iter().enumerate() {
        println!("{}\t{}", i, name);
    }

    Ok(())
}

fn print_cells(sheet: &SheetData, json: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for cell in &sheet.cells {
        let reference = cell.coordinate.to_reference();
        if json {
            let record = CellRecord {
                reference,
                cell_type: cell.cell_type,
                value: &cell.value,
                date: cell.value.as_date_seconds().and_then(format_date),
            };
            serde_json::to_writer(&mut out, &record).context("Failed to write JSON")?;
            writeln!(out)?;
        } else {
            writeln!(
                out,
                "{}\t{}\t{}",
                reference,
                cell.cell_type,
                render_value(&cell.value)
            )?;
        }
    }

    Ok(())
}

fn to_csv(sheet: &SheetData, output: Option<&Path>) -> Result<()> {
    let rows = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create '{}'", path.display()))?;
            let rows = write_csv(sheet, file)?;
            log::info!("wrote {} rows to '{}'", rows, path.display());
            rows
        }
        None => write_csv(sheet, io::stdout().lock())?,
    };

    if rows == 0 {
        log::warn!("sheet '{}' appears to be empty", sheet.name);
    }
    Ok(())
}

/// Write the sheet's grid one row at a time, returning the number of rows
fn write_csv<W: Write>(sheet: &SheetData, sink: W) -> Result<usize> {
    let mut writer = csv::WriterBuilder::new().flexible(false).from_writer(sink);
    let mut rows = 0;
    for row in sheet.grid_rows() {
        writer
            .write_record(row.iter().map(render_value))
            .context("Failed to write CSV record")?;
        rows += 1;
    }
    writer.flush().context("Failed to flush CSV output")?;
    Ok(rows)
}

/// Render a value for text output
fn render_value(value: &CellValue) -> String {
    match value {
        CellValue::Blank => String::new(),
        CellValue::Number(n) => {
            if n.fract() == 0.0 && n.abs() < 1e15 {
                format!("{}", *n as i64)
            } else {
                format!("{}", n)
            }
        }
        CellValue::Date(secs) => format_date(*secs).unwrap_or_else(|| secs.to_string()),
        CellValue::Text(s) => s.clone(),
    }
}

/// Seconds since the Unix epoch as RFC 3339, if representable
fn format_date(secs: f64) -> Option<String> {
    if !secs.is_finite() {
        return None;
    }
    let whole = secs.floor();
    let nanos = ((secs - whole) * 1e9).round().min(999_999_999.0) as u32;
    chrono::DateTime::from_timestamp(whole as i64, nanos).map(|dt| dt.to_rfc3339())
}
