//! Output formatting for gateway-cli
//!
//! Response bodies are always printed raw and unconditionally; only the
//! surrounding labels and section headers are decorated, and `--quiet`
//! drops them so scripts get bodies alone.

use colored::Colorize;
use gateway_client::runner::ProbeSink;
use gateway_client::{GatewayResponse, Probe};

/// Context for output rendering
#[allow(dead_code)]
pub struct OutputContext {
    pub no_color: bool,
    pub quiet: bool,
}

impl OutputContext {
    pub fn new(no_color: bool, quiet: bool) -> Self {
        if no_color {
            colored::control::set_override(false);
        }
        Self { no_color, quiet }
    }

    /// Print an informational line (unless in quiet mode)
    pub fn info(&self, msg: &str) {
        if !self.quiet {
            println!("{}", msg);
        }
    }

    /// Print an endpoint label (unless in quiet mode)
    pub fn label(&self, msg: &str) {
        if !self.quiet {
            println!("{}", msg.bold());
        }
    }

    /// Print a response body, whatever the status was
    pub fn body(&self, body: &str) {
        println!("{}", body);
    }

    /// Print an error message
    #[allow(dead_code)]
    pub fn error(&self, msg: &str) {
        eprintln!("{}", msg.red());
    }
}

/// Sink that renders a probe run to stdout, demo-script style: a header
/// per section, the endpoint label, then the raw body.
pub struct StdoutSink<'a> {
    ctx: &'a OutputContext,
    first_section: bool,
}

impl<'a> StdoutSink<'a> {
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self {
            ctx,
            first_section: true,
        }
    }
}

impl ProbeSink for StdoutSink<'_> {
    fn section(&mut self, title: &str) {
        if self.ctx.quiet {
            return;
        }
        if !self.first_section {
            println!();
        }
        self.first_section = false;
        println!("{}", format!("{}:", title).bold());
    }

    fn response(&mut self, probe: &Probe, response: &GatewayResponse) {
        self.ctx.label(&probe.label);
        self.ctx.body(&response.body);
    }
}
