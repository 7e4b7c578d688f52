use std::fs;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;

use azscript::api::{self, ConvertRequest, Script};
use azscript::translit::{explain, format_text, GlyphTable};

#[derive(Parser)]
#[command(name = "aztool", about = "Azerbaijani script conversion diagnostics")]
struct Cli {
    /// Path to a custom glyph-table TOML (default: embedded table)
    #[arg(long, global = true)]
    table: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a text between scripts
    Convert {
        /// Text to convert
        text: String,
        /// Source script
        #[arg(long, default_value = "latin")]
        source: String,
        /// Target script
        #[arg(long, default_value = "arabic")]
        target: String,
        /// Output the JSON response envelope instead of the bare result
        #[arg(long)]
        json: bool,
    },

    /// Show the per-character transliteration trace for one word
    Inspect {
        /// Word to trace
        word: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Convert texts from a file (one per line) and record results as JSONL
    Batch {
        /// Path to the input file (one text per line)
        input_file: String,
        /// Path to the output JSONL file
        output_file: String,
    },
}

/// A single batch entry (one per input line).
#[derive(Debug, Serialize)]
struct BatchEntry<'a> {
    text: &'a str,
    result: String,
}

fn parse_script(value: &str) -> Script {
    value.parse().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    })
}

fn read_texts(input_file: &str) -> Vec<String> {
    let file = fs::File::open(input_file).unwrap_or_else(|e| {
        eprintln!("Failed to open input file {}: {}", input_file, e);
        process::exit(1);
    });
    BufReader::new(file)
        .lines()
        .map(|l| {
            l.unwrap_or_else(|e| {
                eprintln!("Failed to read line: {}", e);
                process::exit(1);
            })
        })
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .collect()
}

fn main() {
    let cli = Cli::parse();

    azscript::trace_init::init_tracing(Path::new("."));

    if let Some(ref path) = cli.table {
        let toml_content = fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Failed to read table file {}: {}", path, e);
            process::exit(1);
        });
        GlyphTable::init_custom(toml_content).unwrap_or_else(|e| {
            eprintln!("Invalid glyph table {}: {}", path, e);
            process::exit(1);
        });
    }

    match cli.command {
        Command::Convert {
            text,
            source,
            target,
            json,
        } => {
            let request = ConvertRequest {
                text,
                source: parse_script(&source),
                target: parse_script(&target),
            };
            let response = api::convert(&request).unwrap_or_else(|e| {
                eprintln!("Error: {}", e);
                process::exit(1);
            });

            if json {
                println!(
                    "{}",
                    serde_json::to_string(&response).expect("JSON serialization failed")
                );
            } else {
                println!("{}", response.result);
            }
        }

        Command::Inspect { word, json } => {
            let steps = explain(&word);
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&steps).expect("JSON serialization failed")
                );
            } else {
                print!("{}", format_text(&word, &steps));
            }
        }

        Command::Batch {
            input_file,
            output_file,
        } => {
            let texts = read_texts(&input_file);

            let file = fs::File::create(&output_file).unwrap_or_else(|e| {
                eprintln!("Failed to create output file {}: {}", output_file, e);
                process::exit(1);
            });
            let mut writer = BufWriter::new(file);

            for text in &texts {
                let entry = BatchEntry {
                    text,
                    result: azscript::translit::transliterate_text(text),
                };
                let line = serde_json::to_string(&entry).expect("JSON serialization failed");
                writeln!(writer, "{}", line).unwrap_or_else(|e| {
                    eprintln!("Failed to write: {}", e);
                    process::exit(1);
                });
            }

            eprintln!("Batch written: {} texts -> {}", texts.len(), output_file);
        }
    }
}
