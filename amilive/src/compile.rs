use anyhow::{Context, Result};
use clap::Parser;

use liveness::{ExtenderConfig, LiveIntervals, Segment, SlotIndex, SlotIndexes, ValueNumber};
use parser::ParsedFunction;
use util::Span;

use std::fmt::Write;

#[derive(Debug, Parser)]
pub struct Args {
    /// Classify and check only; leave the intervals untouched
    #[clap(long)]
    pub disable_add_segment: bool,
    /// Log every instruction with its slot index
    #[clap(long)]
    pub print_slots: bool,
    #[clap(short, long)]
    pub verbose: bool,
    #[clap(short, long)]
    pub output: Option<String>,
    pub source: String,
}

impl Args {
    pub fn config(&self) -> ExtenderConfig {
        ExtenderConfig {
            add_segments: !self.disable_add_segment,
            dump_slots: self.print_slots,
        }
    }
}

fn report_error(path: &str, src: &str, loc: Span, msg: String) -> Result<()> {
    use ariadne::{ColorGenerator, Fmt, Label, Report, ReportKind, Source};

    let mut colors = ColorGenerator::new();

    // Generate & choose some colours for each of our elements
    let a = colors.next();

    Report::build(ReportKind::Error, path, loc.0)
        .with_code(3)
        .with_message(msg)
        .with_label(
            Label::new((path, loc.0..loc.1))
                .with_message(format!("error found {}", "here".fg(a)))
                .with_color(a),
        )
        .finish()
        .print((path, Source::from(src)))?;

    Ok(())
}

fn parse_file(path: &str, src: &str) -> Result<Vec<ParsedFunction>> {
    match parser::parse(src) {
        Ok(funcs) => Ok(funcs),
        Err(err) => {
            report_error(path, src, err.loc, err.item.to_string())?;
            Err(anyhow::Error::msg("aborting due to the error above"))
        }
    }
}

// every virtual register defined in the function gets an interval, even an
// empty one, before the declared segments are added
fn seed_intervals(parsed: &ParsedFunction, path: &str, src: &str) -> Result<LiveIntervals> {
    let mut intervals = LiveIntervals::new();
    for (_, inst) in parsed.func.all_insts() {
        if let Some(reg) = inst.def().filter(|r| r.is_virtual()) {
            intervals.define(reg);
        }
    }

    for decl in &parsed.live {
        intervals.define(decl.item.reg);
        for (start, end, value) in &decl.item.segments {
            let seg = Segment::new(SlotIndex(*start), SlotIndex(*end), ValueNumber(*value));
            if let Err(err) = intervals.add_segment(decl.item.reg, seg) {
                report_error(path, src, decl.loc, err.to_string())?;
                return Err(anyhow::Error::msg("aborting due to the error above"));
            }
        }
    }

    Ok(intervals)
}

/// Runs the extension on every function of `args.source` and renders the
/// functions with their resulting intervals.
pub fn compile(args: &Args) -> Result<String> {
    let path = args.source.as_str();
    let src = std::fs::read_to_string(path).context(format!("failed to open file: {}", path))?;
    let config = args.config();

    let mut out = String::new();
    for parsed in parse_file(path, &src)? {
        let func = &parsed.func;
        let slots = SlotIndexes::compute(func);
        let mut intervals = seed_intervals(&parsed, path, &src)?;

        let report = liveness::extend(func, &slots, &mut intervals, &config)
            .with_context(|| format!("failed to extend liveness of function `{}`", func.name))?;

        for w in &report.warnings {
            log::warn!(
                "{}: `{}` survives past disconnected block {}",
                func.name,
                func.insts[w.inst],
                func.blocks[w.block].name
            );
        }

        if args.verbose {
            log::info!("[[{}]] {:?}", func.name, report);
        }

        write!(out, "{}", func)?;
        for li in intervals.iter().filter(|li| !li.is_empty()) {
            writeln!(out, "live {}", li)?;
        }
        writeln!(out)?;
    }

    Ok(out)
}
