//! Sequential drivers: the fixed debug suite, a single probe, and template batches.

use crate::dispatch::{Dispatch, Reply, RequestState};
use crate::error::{DispatchError, Result};
use crate::formatting::{
    format_number_with_commas, format_success_rate, rule, short_hash, thin_rule,
};
use crate::generator::{UsageTemplate, generate};
use crate::types::{Identity, Scale, UsageEvent};
use colored::*;
use std::io::Write;
use std::time::Duration;
use tracing::info;

const RULE_WIDTH: usize = 50;
const THIN_RULE_WIDTH: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebugCase {
    pub username: &'static str,
    pub scale: Scale,
    pub description: &'static str,
}

pub const DEBUG_CASES: [DebugCase; 3] = [
    DebugCase {
        username: "debug_light",
        scale: Scale::Light,
        description: "Light usage (simple query)",
    },
    DebugCase {
        username: "debug_medium",
        scale: Scale::Medium,
        description: "Medium usage (coding task)",
    },
    DebugCase {
        username: "debug_heavy",
        scale: Scale::Heavy,
        description: "Heavy usage (complex project)",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunPlan {
    pub runs: u32,
    /// Pause between consecutive requests, not after the last one
    pub delay: Duration,
}

/// Running totals for one invocation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub successes: u32,
    pub failures: u32,
}

impl RunSummary {
    pub fn record<T>(&mut self, result: &std::result::Result<T, DispatchError>) {
        match RequestState::of(result) {
            RequestState::Succeeded => self.successes += 1,
            _ => self.failures += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.successes + self.failures
    }

    pub fn success_rate(&self) -> String {
        format_success_rate(self.successes, self.total())
    }

    pub fn write_report<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "\n{}", rule(RULE_WIDTH))?;
        writeln!(out, "📊 Summary:")?;
        writeln!(out, "{} Succeeded: {}", "✅".green(), self.successes)?;
        writeln!(out, "{} Failed: {}", "❌".red(), self.failures)?;
        writeln!(out, "📈 Success rate: {}", self.success_rate())?;
        Ok(())
    }
}

/// One generated event per debug case, pausing `pause` after each
pub async fn run_suite<D, W>(dispatcher: &D, pause: Duration, out: &mut W) -> Result<RunSummary>
where
    D: Dispatch + ?Sized,
    W: Write,
{
    let mut summary = RunSummary::default();

    writeln!(out, "🧪 Usage hook debug run")?;
    writeln!(out, "{}", rule(RULE_WIDTH))?;

    for case in DEBUG_CASES {
        writeln!(out, "\n📊 Testing: {}", case.description)?;
        writeln!(out, "{}", thin_rule(THIN_RULE_WIDTH))?;

        let event = generate(&Identity::from_username(case.username), case.scale);
        writeln!(out, "📤 Sending payload:")?;
        writeln!(out, "{}\n", serde_json::to_string_pretty(&event)?)?;

        let result = dispatcher.dispatch(&event).await;
        write_outcome(out, &result)?;
        summary.record(&result);

        writeln!(out, "\n{}", rule(RULE_WIDTH))?;
        tokio::time::sleep(pause).await;
    }

    Ok(summary)
}

/// Exactly one generated event
pub async fn run_single<D, W>(
    dispatcher: &D,
    identity: &Identity,
    scale: Scale,
    out: &mut W,
) -> Result<RunSummary>
where
    D: Dispatch + ?Sized,
    W: Write,
{
    let mut summary = RunSummary::default();

    let event = generate(identity, scale);
    writeln!(out, "Generated mock data:")?;
    writeln!(out, "{}", serde_json::to_string_pretty(&event)?)?;

    let result = dispatcher.dispatch(&event).await;
    write_outcome(out, &result)?;
    summary.record(&result);

    Ok(summary)
}

/// `plan.runs` sequential sends of `template`, each freshly stamped
pub async fn run_batch<D, W>(
    dispatcher: &D,
    template: &UsageTemplate,
    plan: &RunPlan,
    out: &mut W,
) -> Result<RunSummary>
where
    D: Dispatch + ?Sized,
    W: Write,
{
    run_sequence(dispatcher, plan, || template.stamp(), out).await
}

pub async fn run_sequence<D, F, W>(
    dispatcher: &D,
    plan: &RunPlan,
    mut next_event: F,
    out: &mut W,
) -> Result<RunSummary>
where
    D: Dispatch + ?Sized,
    F: FnMut() -> UsageEvent,
    W: Write,
{
    let mut summary = RunSummary::default();

    writeln!(out, "{}", rule(RULE_WIDTH))?;
    writeln!(out, "🎯 Runs: {}", plan.runs)?;
    writeln!(out, "⏱️ Delay: {}s", plan.delay.as_secs_f64())?;
    writeln!(out, "{}", rule(RULE_WIDTH))?;

    for i in 1..=plan.runs {
        writeln!(out, "\n🚀 Request {}:", i)?;
        writeln!(out, "{}", thin_rule(THIN_RULE_WIDTH))?;

        let event = next_event();
        writeln!(out, "📤 Timestamp: {}", event.timestamp)?;
        writeln!(out, "🔗 Interaction id: {}", event.interaction_id)?;
        writeln!(
            out,
            "🔒 Interaction hash: {}",
            short_hash(event.interaction_hash.as_str())
        )?;
        writeln!(
            out,
            "🔢 Tokens: {}",
            format_number_with_commas(event.tokens.total())
        )?;

        let result = dispatcher.dispatch(&event).await;
        write_outcome(out, &result)?;
        summary.record(&result);
        info!(
            run = i,
            successes = summary.successes,
            failures = summary.failures,
            "Run finished"
        );

        if i < plan.runs {
            writeln!(out, "⏳ Waiting {}s...", plan.delay.as_secs_f64())?;
            tokio::time::sleep(plan.delay).await;
        }
    }

    summary.write_report(out)?;
    Ok(summary)
}

fn write_outcome<W: Write>(
    out: &mut W,
    result: &std::result::Result<Reply, DispatchError>,
) -> Result<()> {
    match result {
        Ok(reply) => writeln!(out, "{} Success: {}", "✅".green(), reply)?,
        Err(e) => writeln!(out, "{} Error: {}", "❌".red(), e.to_string().red())?,
    }
    Ok(())
}
