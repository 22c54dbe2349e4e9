//! Simulation report generation.

use serde::Serialize;
use std::collections::HashMap;

/// Statistics for one simulated run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunStats {
    pub reached_target: bool,
    pub final_stage: i32,
    pub stages_cleared: u32,
    pub final_score: u64,
    pub final_coins: u64,
    pub final_debt: u64,
    pub bosses_defeated: u32,
    pub lives_lost: u32,
    pub powerups_collected: u32,
    pub items_bought: u32,
    pub loans_taken: u32,
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub target_stage: i32,
    pub runs_completed: u32,

    pub avg_final_stage: f64,
    pub avg_final_score: f64,
    pub avg_final_coins: f64,
    pub avg_final_debt: f64,
    pub avg_bosses_defeated: f64,
    pub avg_lives_lost: f64,
    pub avg_items_bought: f64,
    pub avg_loans_taken: f64,

    /// How many runs ended on each stage.
    pub stage_distribution: HashMap<i32, u32>,

    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>, target_stage: i32) -> Self {
        let num_runs = runs.len() as u32;
        let denom = num_runs.max(1) as f64;
        let runs_completed = runs.iter().filter(|r| r.reached_target).count() as u32;

        let avg = |f: &dyn Fn(&RunStats) -> f64| runs.iter().map(|r| f(r)).sum::<f64>() / denom;

        let mut stage_distribution = HashMap::new();
        for run in &runs {
            *stage_distribution.entry(run.final_stage).or_insert(0) += 1;
        }

        Self {
            num_runs,
            target_stage,
            runs_completed,
            avg_final_stage: avg(&|r| r.final_stage as f64),
            avg_final_score: avg(&|r| r.final_score as f64),
            avg_final_coins: avg(&|r| r.final_coins as f64),
            avg_final_debt: avg(&|r| r.final_debt as f64),
            avg_bosses_defeated: avg(&|r| r.bosses_defeated as f64),
            avg_lives_lost: avg(&|r| r.lives_lost as f64),
            avg_items_bought: avg(&|r| r.items_bought as f64),
            avg_loans_taken: avg(&|r| r.loans_taken as f64),
            stage_distribution,
            run_stats: runs,
        }
    }

    /// Human-readable summary for the CLI.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str("=== Simulation Report ===\n");
        out.push_str(&format!("Runs:              {}\n", self.num_runs));
        out.push_str(&format!(
            "Reached stage {}:  {} ({:.1}%)\n",
            self.target_stage,
            self.runs_completed,
            100.0 * self.runs_completed as f64 / self.num_runs.max(1) as f64
        ));
        out.push_str(&format!("Avg final stage:   {:.2}\n", self.avg_final_stage));
        out.push_str(&format!("Avg score:         {:.0}\n", self.avg_final_score));
        out.push_str(&format!("Avg coins:         {:.0}\n", self.avg_final_coins));
        out.push_str(&format!("Avg debt:          {:.0}\n", self.avg_final_debt));
        out.push_str(&format!(
            "Avg bosses slain:  {:.2}\n",
            self.avg_bosses_defeated
        ));
        out.push_str(&format!("Avg lives lost:    {:.2}\n", self.avg_lives_lost));
        out.push_str(&format!("Avg items bought:  {:.2}\n", self.avg_items_bought));
        out.push_str(&format!("Avg loans taken:   {:.2}\n", self.avg_loans_taken));

        out.push_str("\nFinal stage distribution:\n");
        let mut stages: Vec<_> = self.stage_distribution.iter().collect();
        stages.sort();
        for (stage, count) in stages {
            out.push_str(&format!("  stage {:>3}: {}\n", stage, count));
        }
        out
    }

    /// JSON export for external analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(final_stage: i32, reached: bool) -> RunStats {
        RunStats {
            reached_target: reached,
            final_stage,
            final_score: 100,
            ..RunStats::default()
        }
    }

    #[test]
    fn test_aggregation() {
        let report = SimReport::from_runs(vec![stats(16, true), stats(4, false)], 15);
        assert_eq!(report.num_runs, 2);
        assert_eq!(report.runs_completed, 1);
        assert_eq!(report.avg_final_stage, 10.0);
        assert_eq!(report.stage_distribution[&16], 1);
        assert_eq!(report.stage_distribution[&4], 1);
    }

    #[test]
    fn test_empty_runs_do_not_divide_by_zero() {
        let report = SimReport::from_runs(vec![], 15);
        assert_eq!(report.num_runs, 0);
        assert_eq!(report.avg_final_stage, 0.0);
    }

    #[test]
    fn test_text_and_json_render() {
        let report = SimReport::from_runs(vec![stats(16, true)], 15);
        let text = report.to_text();
        assert!(text.contains("Simulation Report"));

        let json = report.to_json();
        assert!(json.contains("\"num_runs\": 1"));
    }
}
