//! Run command - execute the full smoke suite

use anyhow::{Context, Result};
use gateway_client::{runner, smoke_suite, GatewayClient};

use crate::output::{OutputContext, StdoutSink};

/// Execute the canonical probe sequence against the gateway, or with
/// `list` just print what would be probed.
pub async fn run(client: &GatewayClient, list: bool, ctx: &OutputContext) -> Result<()> {
    let suite = smoke_suite(client.websocket());

    if list {
        for section in &suite {
            ctx.info(&format!("{}:", section.title));
            for probe in &section.probes {
                let params: Vec<String> = probe
                    .params
                    .iter()
                    .map(|(key, value)| format!("{}={}", key, value))
                    .collect();
                if params.is_empty() {
                    ctx.info(&format!("  {}", probe.path));
                } else {
                    ctx.info(&format!("  {}?{}", probe.path, params.join("&")));
                }
            }
        }
        return Ok(());
    }

    let mut sink = StdoutSink::new(ctx);
    let summary = runner::run(client, &suite, &mut sink)
        .await
        .context("Probe run aborted")?;

    ctx.info(&format!(
        "\n{} probes across {} sections answered",
        summary.probes, summary.sections
    ));
    Ok(())
}
