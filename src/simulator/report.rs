//! Simulation report generation.

use super::stats::RunStats;
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub runs_stalled: u32,
    pub runs_timed_out: u32,

    pub avg_final_balance: f64,
    pub min_final_balance: f64,
    pub max_final_balance: f64,
    pub avg_final_income: f64,
    pub avg_final_expenses: f64,
    pub avg_cash_flow: f64,
    pub avg_final_level: f64,

    pub avg_purchases: f64,
    pub avg_financed_purchases: f64,
    pub avg_sales: f64,
    pub avg_skips: f64,
    pub avg_rejections: f64,
    pub avg_waiting_ticks: f64,

    pub level_distribution: BTreeMap<u32, u32>,

    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

fn average(runs: &[RunStats], field: impl Fn(&RunStats) -> f64) -> f64 {
    if runs.is_empty() {
        return 0.0;
    }
    runs.iter().map(field).sum::<f64>() / runs.len() as f64
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>, max_ticks: u64) -> Self {
        let num_runs = runs.len() as u32;
        let runs_stalled = runs.iter().filter(|r| r.stalled).count() as u32;
        let runs_timed_out = runs.iter().filter(|r| r.total_ticks >= max_ticks).count() as u32;

        let min_final_balance = runs
            .iter()
            .map(|r| r.final_balance)
            .fold(f64::INFINITY, f64::min);
        let max_final_balance = runs
            .iter()
            .map(|r| r.final_balance)
            .fold(f64::NEG_INFINITY, f64::max);

        let mut level_distribution = BTreeMap::new();
        for run in &runs {
            *level_distribution.entry(run.final_level).or_insert(0) += 1;
        }

        Self {
            num_runs,
            runs_stalled,
            runs_timed_out,
            avg_final_balance: average(&runs, |r| r.final_balance),
            min_final_balance: if runs.is_empty() { 0.0 } else { min_final_balance },
            max_final_balance: if runs.is_empty() { 0.0 } else { max_final_balance },
            avg_final_income: average(&runs, |r| r.final_income),
            avg_final_expenses: average(&runs, |r| r.final_expenses),
            avg_cash_flow: average(&runs, RunStats::cash_flow),
            avg_final_level: average(&runs, |r| r.final_level as f64),
            avg_purchases: average(&runs, |r| r.purchases as f64),
            avg_financed_purchases: average(&runs, |r| r.financed_purchases as f64),
            avg_sales: average(&runs, |r| r.sales as f64),
            avg_skips: average(&runs, |r| r.skips as f64),
            avg_rejections: average(&runs, |r| r.rejections as f64),
            avg_waiting_ticks: average(&runs, |r| r.waiting_ticks as f64),
            level_distribution,
            run_stats: runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} stalled, {} ran to the tick limit\n\n",
            self.num_runs, self.runs_stalled, self.runs_timed_out
        ));

        report.push_str("── FINANCES ─────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Final Balance:   ${:.2}\n",
            self.avg_final_balance
        ));
        report.push_str(&format!(
            "  Final Balance Range: ${:.2} .. ${:.2}\n",
            self.min_final_balance, self.max_final_balance
        ));
        report.push_str(&format!(
            "  Avg Monthly Income:  ${:.2}\n",
            self.avg_final_income
        ));
        report.push_str(&format!(
            "  Avg Monthly Expenses: ${:.2}\n",
            self.avg_final_expenses
        ));
        report.push_str(&format!(
            "  Avg Cash Flow:       {:+.2}/mo\n\n",
            self.avg_cash_flow
        ));

        report.push_str("── ACTIVITY ─────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Purchases:       {:.1}\n", self.avg_purchases));
        report.push_str(&format!(
            "  Avg On Credit:       {:.1}\n",
            self.avg_financed_purchases
        ));
        report.push_str(&format!("  Avg Sales:           {:.1}\n", self.avg_sales));
        report.push_str(&format!("  Avg Skips:           {:.1}\n", self.avg_skips));
        report.push_str(&format!("  Avg Rejections:      {:.1}\n", self.avg_rejections));
        report.push_str(&format!(
            "  Avg Ticks Waiting:   {:.0}\n\n",
            self.avg_waiting_ticks
        ));

        report.push_str("── LEVELS ───────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Final Level:     {:.1}\n", self.avg_final_level));
        for (level, count) in &self.level_distribution {
            let pct = (*count as f64 / self.num_runs.max(1) as f64) * 100.0;
            let bar: String = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!("  Level {:3}: {:>5.1}% {}\n", level, pct, bar));
        }
        report.push('\n');

        report.push_str("── BALANCE ASSESSMENT ───────────────────────────────────────────\n");
        let stall_rate = (self.runs_stalled as f64 / self.num_runs.max(1) as f64) * 100.0;
        report.push_str(&format!("  Stall Rate:      {:.1}%\n", stall_rate));
        if self.avg_cash_flow < 0.0 {
            report.push_str("  ⚠️  Average cash flow is negative - expenses outpace income\n");
        }
        if stall_rate > 25.0 {
            report.push_str("  ⚠️  Many runs stalled on a mandatory expense\n");
        }
        if self.avg_financed_purchases > self.avg_purchases / 2.0 && self.avg_purchases > 0.0 {
            report.push_str("  ⚠️  Most purchases were financed\n");
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
