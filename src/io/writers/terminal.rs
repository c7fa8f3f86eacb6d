use crate::aggregate::AggregateReport;
use crate::io::output::{OutputWriter, Report};
use crate::sart::{Priority, SaLevel, SartAnalytics, SartReport};
use crate::stats::Summary;
use crate::tam::{AcceptanceLevel, TamAggregate, TamAnalysis};
use crate::tlx::{TlxScore, TlxSubscale, WorkloadLevel};
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use std::io::Write;

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        let w = &mut self.writer;
        match report {
            Report::Sart(reports) => write_sart_reports(w, reports)?,
            Report::Tam(analyses) => write_tam_analyses(w, analyses)?,
            Report::Tlx(scores) => write_tlx_scores(w, scores)?,
            Report::SartAggregate(analytics) => write_sart_aggregate(w, analytics)?,
            Report::TamAggregate(aggregate) => write_tam_aggregate(w, aggregate)?,
            Report::TlxAggregate(report) => write_tlx_aggregate(w, report)?,
        }
        w.flush()?;
        Ok(())
    }
}

fn new_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header.to_vec());
    table
}

fn fmt_opt(value: Option<f64>, decimals: usize) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.decimals$}"))
}

fn write_header(w: &mut impl Write, title: &str) -> std::io::Result<()> {
    writeln!(w, "{}", title.bold().blue())?;
    writeln!(w, "{}", "=".repeat(title.len()).as_str().blue())?;
    writeln!(w)
}

fn sa_level_colored(level: SaLevel) -> ColoredString {
    let label = level.label();
    match level {
        SaLevel::Excellent => label.green().bold(),
        SaLevel::Good => label.green(),
        SaLevel::Moderate => label.yellow(),
        SaLevel::Poor => label.red(),
        SaLevel::Critical => label.red().bold(),
    }
}

fn acceptance_colored(level: Option<AcceptanceLevel>) -> ColoredString {
    match level {
        None => "No score calculated".dimmed(),
        Some(level) => {
            let text = level.description();
            match level {
                AcceptanceLevel::VeryHigh | AcceptanceLevel::High => text.green(),
                AcceptanceLevel::Moderate => text.yellow(),
                AcceptanceLevel::Low | AcceptanceLevel::VeryLow => text.red(),
            }
        }
    }
}

fn workload_colored(level: Option<WorkloadLevel>) -> ColoredString {
    match level {
        None => "-".dimmed(),
        Some(level @ (WorkloadLevel::Low | WorkloadLevel::Medium)) => level.label().green(),
        Some(level @ WorkloadLevel::SomewhatHigh) => level.label().yellow(),
        Some(level) => level.label().red(),
    }
}

fn write_summary(w: &mut impl Write, name: &str, summary: &Summary) -> std::io::Result<()> {
    writeln!(w, "{} ({} scored):", name.bold(), summary.count)?;
    writeln!(w, "  Mean: {}", fmt_opt(summary.mean, 1))?;
    writeln!(w, "  Std dev: {}", fmt_opt(summary.std_dev, 2))?;
    writeln!(
        w,
        "  Range: {} to {}",
        fmt_opt(summary.min, 1),
        fmt_opt(summary.max, 1)
    )
}

fn aggregate_table<K: Ord>(report: &AggregateReport<K>, label: impl Fn(&K) -> &str) -> Table {
    let mut table = new_table(&["Dimension", "Respondents", "Mean", "Std Dev"]);
    for (key, stats) in &report.dimensions {
        table.add_row(vec![
            label(key).to_string(),
            stats.respondents.to_string(),
            fmt_opt(stats.mean, 1),
            fmt_opt(stats.std_dev, 2),
        ]);
    }
    table
}

fn write_sart_reports(w: &mut impl Write, reports: &[SartReport]) -> std::io::Result<()> {
    write_header(w, "SART Analysis Report")?;

    for (i, report) in reports.iter().enumerate() {
        let summary = &report.summary;
        writeln!(w, "{} {}", "Response".bold(), i + 1)?;
        writeln!(
            w,
            "  SA score: {} ({})",
            summary.sa_score.to_string().as_str().bold(),
            sa_level_colored(summary.sa_interpretation.level)
        )?;
        writeln!(
            w,
            "  Demand: {}  Supply: {}  Understanding: {}",
            summary.demand_score, summary.supply_score, summary.understanding_score
        )?;
        let quality = report.quality.as_str();
        writeln!(
            w,
            "  Quality: {}",
            if report.quality.is_suspicious() {
                quality.red()
            } else {
                quality.normal()
            }
        )?;

        let mut table = new_table(&["Dimension", "Category", "Score", "Level"]);
        for dim in &report.dimensions {
            table.add_row(vec![
                dim.dimension.to_string(),
                dim.category.label().to_string(),
                dim.score.to_string(),
                dim.level.label().to_string(),
            ]);
        }
        writeln!(w, "{table}")?;

        if !report.recommendations.is_empty() {
            writeln!(w, "  {}:", "Recommendations".bold())?;
            for rec in &report.recommendations {
                let tag = match rec.priority {
                    Priority::High => "HIGH".red().bold(),
                    Priority::Medium => "MEDIUM".yellow(),
                    Priority::Low => "LOW".normal(),
                };
                writeln!(w, "    [{}] {}", tag, rec.message)?;
            }
        }
        writeln!(w)?;
    }
    Ok(())
}

fn write_tam_analyses(w: &mut impl Write, analyses: &[TamAnalysis]) -> std::io::Result<()> {
    write_header(w, "TAM Analysis Report")?;

    for (i, analysis) in analyses.iter().enumerate() {
        writeln!(w, "{} {} ({})", "Response".bold(), i + 1, analysis.version)?;
        writeln!(
            w,
            "  Overall: {} ({})",
            fmt_opt(analysis.overall_score, 1).as_str().bold(),
            acceptance_colored(analysis.acceptance_level())
        )?;
        let completion = &analysis.completion;
        writeln!(
            w,
            "  Completion: {}/{} items ({}%)",
            completion.completed_items, completion.total_items, completion.percentage
        )?;

        let mut table = new_table(&["Construct", "Answers", "Score"]);
        for result in analysis.dimensions.values() {
            table.add_row(vec![
                result.name().to_string(),
                result.count().to_string(),
                fmt_opt(result.score(), 1),
            ]);
        }
        writeln!(w, "{table}")?;
        writeln!(w)?;
    }
    Ok(())
}

fn write_tlx_scores(w: &mut impl Write, scores: &[TlxScore]) -> std::io::Result<()> {
    write_header(w, "NASA-TLX Report")?;

    let mut header = vec!["#"];
    header.extend(TlxSubscale::ALL.iter().map(|s| s.label()));
    header.extend(["Raw TLX", "Workload"]);
    let mut table = new_table(&header);

    for (i, score) in scores.iter().enumerate() {
        let r = &score.ratings;
        let mut row = vec![(i + 1).to_string()];
        row.extend(
            [
                r.mental_demand,
                r.physical_demand,
                r.temporal_demand,
                r.performance,
                r.effort,
                r.frustration,
            ]
            .map(|v| fmt_opt(v, 0)),
        );
        row.push(fmt_opt(score.raw_tlx, 1));
        row.push(score.workload_level.map_or("-", WorkloadLevel::label).to_string());
        table.add_row(row);
    }
    writeln!(w, "{table}")?;

    if let [single] = scores {
        writeln!(w, "Workload: {}", workload_colored(single.workload_level))?;
    }
    Ok(())
}

fn write_sart_aggregate(w: &mut impl Write, analytics: &SartAnalytics) -> std::io::Result<()> {
    write_header(w, "SART Population Report")?;

    writeln!(w, "Respondents: {}", analytics.total_respondents)?;
    writeln!(w, "Average SA score: {}", fmt_opt(analytics.average_sa_score, 1))?;
    writeln!(
        w,
        "Average demand / supply / understanding: {} / {} / {}",
        fmt_opt(analytics.average_demand, 1),
        fmt_opt(analytics.average_supply, 1),
        fmt_opt(analytics.average_understanding, 1)
    )?;
    if let (Some(high), Some(low)) = (analytics.highest_sa_dimension, analytics.lowest_sa_dimension) {
        writeln!(
            w,
            "Highest dimension: {}  Lowest dimension: {}",
            high.label().green(),
            low.label().red()
        )?;
    }
    writeln!(w)?;
    write_summary(w, "SA score", &analytics.report.overall)?;
    writeln!(w, "{}", aggregate_table(&analytics.report, |d| d.label()))
}

fn write_tam_aggregate(w: &mut impl Write, aggregate: &TamAggregate) -> std::io::Result<()> {
    write_header(w, "TAM Population Report")?;

    writeln!(w, "Version: {}", aggregate.version)?;
    writeln!(w, "Respondents: {}", aggregate.report.respondents)?;
    writeln!(
        w,
        "Acceptance: {}",
        acceptance_colored(aggregate.average_overall_score().map(AcceptanceLevel::from_score))
    )?;
    writeln!(w)?;
    write_summary(w, "Overall score", &aggregate.report.overall)?;
    writeln!(w, "{}", aggregate_table(&aggregate.report, |d| d.name()))
}

fn write_tlx_aggregate(w: &mut impl Write, report: &AggregateReport<TlxSubscale>) -> std::io::Result<()> {
    write_header(w, "NASA-TLX Population Report")?;

    writeln!(w, "Respondents: {}", report.respondents)?;
    writeln!(w)?;
    write_summary(w, "Raw TLX", &report.overall)?;
    writeln!(w, "{}", aggregate_table(report, |s| s.label()))
}
