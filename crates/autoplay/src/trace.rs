use crate::{AutoAction, AutoplayError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RunStatus {
    Victory,
    Defeat,
    MaxSteps,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StepRecord {
    pub step: u32,
    pub action: AutoAction,
    #[serde(default)]
    pub card: Option<String>,
    pub hp_before: i32,
    pub hp_after: i32,
    pub score_after: u32,
    pub deck_after: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AutoplayResult {
    pub seed: u32,
    pub status: RunStatus,
    pub final_hp: i32,
    pub final_score: u32,
    pub steps: Vec<StepRecord>,
}

impl AutoplayResult {
    pub fn to_json(&self) -> Result<String, AutoplayError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_text_report(&self) -> String {
        let mut lines = vec![
            format!("seed: {}", self.seed),
            format!("status: {}", run_status_label(self.status)),
            format!("final: hp={} score={}", self.final_hp, self.final_score),
            String::new(),
            "steps:".to_string(),
        ];
        for step in &self.steps {
            let card = step.card.as_deref().unwrap_or("-");
            lines.push(format!(
                "  {:>3} | {:<7} | {:<16} | hp {:>2} -> {:>2} | score {:>2} | deck {:>2}",
                step.step,
                step.action.short_label(),
                card,
                step.hp_before,
                step.hp_after,
                step.score_after,
                step.deck_after
            ));
        }
        lines.join("\n")
    }
}

fn run_status_label(status: RunStatus) -> &'static str {
    match status {
        RunStatus::Victory => "Victory",
        RunStatus::Defeat => "Defeat",
        RunStatus::MaxSteps => "MaxSteps",
    }
}

pub fn write_json(path: &Path, result: &AutoplayResult) -> Result<(), AutoplayError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, result.to_json()?)?;
    Ok(())
}
