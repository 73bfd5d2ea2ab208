#[derive(Debug, Clone)]
pub struct AutoplayConfig {
    /// `None` lets the engine draw a seed; the result still records it.
    pub seed: Option<u32>,
    pub max_steps: u32,
    /// Skip a fresh room when the cheapest way through it costs at least this
    /// much HP. `None` never skips.
    pub skip_when_damage_at_least: Option<i32>,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_steps: 200,
            skip_when_damage_at_least: Some(15),
        }
    }
}
