//! Renders sampling results as the single stdout line (or lines, for rankings).

use serde::Serialize;

use crate::analyze::{BorderSample, RankedColor, color_hex};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    /// `('#rrggbb', occurrences, total)`
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub format: ReportFormat,
    /// How many of the most frequent colors to list.
    pub top: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            format: ReportFormat::Text,
            top: 1,
        }
    }
}

#[derive(Debug, Serialize)]
struct DominantJson {
    color: String,
    occurrences: usize,
    total: usize,
}

#[derive(Debug, Serialize)]
struct RankedEntryJson {
    color: String,
    occurrences: usize,
}

#[derive(Debug, Serialize)]
struct RankingJson {
    total: usize,
    colors: Vec<RankedEntryJson>,
}

pub fn render(sample: &BorderSample, options: &ReportOptions) -> Result<String, serde_json::Error> {
    let top = sample.top(options.top.max(1));
    match options.format {
        ReportFormat::Text => Ok(render_text(top, sample.total())),
        ReportFormat::Json if options.top <= 1 => {
            let stats = sample.dominant();
            serde_json::to_string(&DominantJson {
                color: stats.hex(),
                occurrences: stats.occurrences,
                total: stats.total,
            })
        }
        ReportFormat::Json => serde_json::to_string(&RankingJson {
            total: sample.total(),
            colors: top
                .iter()
                .map(|entry| RankedEntryJson {
                    color: color_hex(entry.color),
                    occurrences: entry.occurrences,
                })
                .collect(),
        }),
    }
}

fn render_text(entries: &[RankedColor], total: usize) -> String {
    entries
        .iter()
        .map(|entry| format!("('{}', {}, {})", color_hex(entry.color), entry.occurrences, total))
        .collect::<Vec<String>>()
        .join("\n")
}
