// crates/cli/src/presentation.rs
use crate::config::Config;
use crate::error::Result;
use crate::options::OutputFormat;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use file_stats_engine::FileStatsResult;
use std::io::Write;

const LONGEST_WORD_MAX_CHARS: usize = 12;

pub fn print_results<W: Write>(stats: &[FileStatsResult], config: &Config, out: &mut W) -> Result<()> {
    match config.format {
        OutputFormat::Table => print_table(stats, config, out),
        OutputFormat::Json => print_json(stats, out),
        OutputFormat::Jsonl => print_jsonl(stats, out),
        OutputFormat::Yaml => print_yaml(stats, out),
        OutputFormat::Md => print_markdown(stats, config, out),
    }
}

/// Label/value pairs in display order.
pub fn stat_cards(s: &FileStatsResult, config: &Config) -> Vec<(&'static str, String)> {
    let mut cards = vec![
        ("File Size", s.size_display().to_string()),
        ("Words", group_thousands(s.word_count())),
        ("Characters", group_thousands(s.char_count())),
        ("Avg Word Length", format!("{:.1}", s.avg_word_length())),
        ("Lines", group_thousands(s.line_count())),
    ];
    if config.longest_word {
        cards.push(("Longest Word", abbreviate_word(s.longest_word())));
    }
    cards
}

fn print_table<W: Write>(stats: &[FileStatsResult], config: &Config, out: &mut W) -> Result<()> {
    for (i, s) in stats.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}", s.name())?;

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["Stat", "Value"]);
        for (label, value) in stat_cards(s, config) {
            table.add_row(vec![
                Cell::new(label),
                Cell::new(value).set_alignment(CellAlignment::Right),
            ]);
        }
        writeln!(out, "{table}")?;
    }
    Ok(())
}

fn print_json<W: Write>(stats: &[FileStatsResult], out: &mut W) -> Result<()> {
    let json = serde_json::to_string_pretty(stats)?;
    writeln!(out, "{json}")?;
    Ok(())
}

fn print_yaml<W: Write>(stats: &[FileStatsResult], out: &mut W) -> Result<()> {
    let yaml = serde_yaml::to_string(stats)?;
    write!(out, "{yaml}")?;
    Ok(())
}

fn print_jsonl<W: Write>(stats: &[FileStatsResult], out: &mut W) -> Result<()> {
    for s in stats {
        let mut v = serde_json::to_value(s)?;
        if let Some(obj) = v.as_object_mut() {
            obj.insert("type".to_string(), "file".into());
        }
        writeln!(out, "{}", serde_json::to_string(&v)?)?;
    }
    Ok(())
}

fn print_markdown<W: Write>(stats: &[FileStatsResult], config: &Config, out: &mut W) -> Result<()> {
    if stats.is_empty() {
        return Ok(());
    }

    writeln!(out, "### File Statistics")?;
    writeln!(out)?;

    let mut header = String::from("| File |");
    let mut separator = String::from("|:---|");
    for (label, _) in stat_cards(&stats[0], config) {
        header.push_str(&format!(" {label} |"));
        separator.push_str("---:|");
    }
    writeln!(out, "{header}")?;
    writeln!(out, "{separator}")?;

    for s in stats {
        let path_str = s.path().display().to_string().replace('|', "\\|");
        let mut row = format!("| {path_str} |");
        for (_, value) in stat_cards(s, config) {
            row.push_str(&format!(" {} |", value.replace('|', "\\|")));
        }
        writeln!(out, "{row}")?;
    }
    Ok(())
}

/// `1234567` -> `1,234,567`
pub fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

fn abbreviate_word(word: &str) -> String {
    if word.is_empty() {
        return "N/A".to_string();
    }
    if word.chars().count() > LONGEST_WORD_MAX_CHARS {
        let head: String = word.chars().take(LONGEST_WORD_MAX_CHARS).collect();
        format!("{head}...")
    } else {
        word.to_string()
    }
}
