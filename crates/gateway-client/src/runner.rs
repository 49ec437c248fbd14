//! Sequential probe runner
//!
//! Walks an ordered list of probe sections against one gateway, strictly
//! one request at a time, and reports every answer through a [`ProbeSink`].
//! A transport failure ends the run at once; a non-2xx answer does not.

use tracing::debug;

use crate::client::{GatewayClient, GatewayResponse};
use crate::error::Result;
use crate::probe::{Probe, ProbeSection};

/// Receives runner output as it happens.
///
/// The CLI prints to stdout through this; tests record into a `Vec`.
pub trait ProbeSink {
    /// A new section is starting
    fn section(&mut self, title: &str);

    /// A probe was answered (any status, 2xx or not)
    fn response(&mut self, probe: &Probe, response: &GatewayResponse);
}

/// Counts of what a completed run covered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub sections: usize,
    pub probes: usize,
}

/// Execute `sections` in declaration order against `client`.
///
/// Each probe issues exactly one GET. Responses are handed to `sink`
/// unconditionally, whatever their status code. The first transport
/// failure propagates immediately and the remaining probes are skipped;
/// the sink keeps whatever it was given up to that point.
pub async fn run(
    client: &GatewayClient,
    sections: &[ProbeSection],
    sink: &mut dyn ProbeSink,
) -> Result<RunSummary> {
    let mut summary = RunSummary {
        sections: 0,
        probes: 0,
    };

    for section in sections {
        sink.section(&section.title);
        summary.sections += 1;

        for probe in &section.probes {
            let response = client.probe(probe).await?;
            debug!(path = %probe.path, status = %response.status, "probe completed");
            sink.response(probe, &response);
            summary.probes += 1;
        }
    }

    Ok(summary)
}

/// Sink that keeps everything it is given, for tests and programmatic runs.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub sections: Vec<String>,
    pub responses: Vec<(String, u16, String)>,
}

impl ProbeSink for RecordingSink {
    fn section(&mut self, title: &str) {
        self.sections.push(title.to_string());
    }

    fn response(&mut self, probe: &Probe, response: &GatewayResponse) {
        self.responses
            .push((probe.path.clone(), response.status.as_u16(), response.body.clone()));
    }
}
