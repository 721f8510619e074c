// src/report.rs

//! Human-facing console output.
//!
//! This is the only thing written to stdout. Colors are plain ANSI escapes
//! and are switched off when stdout is not a terminal or `NO_COLOR` is set.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

use crate::config::RunConfig;
use crate::engine::BatchSummary;
use crate::exec::PipelineCommand;
use crate::types::Verdict;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

pub struct Console<W> {
    out: W,
    color: bool,
}

impl Console<io::Stdout> {
    pub fn stdout() -> Self {
        let color = io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, style: &str, text: &str) -> String {
        if self.color {
            format!("{style}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    pub fn banner(&mut self, cfg: &RunConfig) -> io::Result<()> {
        let title = self.paint(BOLD, "qc-batch");
        writeln!(self.out, "{title}")?;
        writeln!(self.out, "  list file : {}", cfg.list_file.display())?;
        writeln!(self.out, "  log dir   : {}", cfg.log_dir.display())?;
        writeln!(self.out, "  qc config : {}", cfg.qc_config)?;
        self.out.flush()
    }

    pub fn item_started(&mut self, label: &str) -> io::Result<()> {
        let line = self.paint(YELLOW, &format!(">> processing run {label}"));
        writeln!(self.out, "{line}")?;
        self.out.flush()
    }

    pub fn item_finished(
        &mut self,
        label: &str,
        verdict: Verdict,
        log_path: &Path,
    ) -> io::Result<()> {
        let log = log_path.display();
        let (style, text) = match verdict {
            Verdict::Ok => (GREEN, format!("OK    run {label}")),
            Verdict::Failed => (RED, format!("FAIL  run {label} (see {log})")),
        };
        let line = self.paint(style, &text);
        writeln!(self.out, "{line}")?;
        self.out.flush()
    }

    pub fn dry_run_item(
        &mut self,
        label: &str,
        pipeline: &PipelineCommand,
        log_path: &Path,
    ) -> io::Result<()> {
        let head = self.paint(CYAN, &format!("run {label}"));
        writeln!(self.out, "{head}")?;
        writeln!(self.out, "    cmd: {pipeline}")?;
        writeln!(self.out, "    log: {}", log_path.display())?;
        self.out.flush()
    }

    pub fn summary(&mut self, summary: &BatchSummary, log_dir: &Path) -> io::Result<()> {
        let ok = self.paint(GREEN, &format!("ok: {}", summary.ok_count()));
        let failed = self.paint(RED, &format!("failed: {}", summary.failed_count()));
        let done = self.paint(BOLD, "done");
        writeln!(self.out, "{done}  {ok}  {failed}")?;
        writeln!(self.out, "  logs in {}", log_dir.display())?;
        self.out.flush()
    }
}
