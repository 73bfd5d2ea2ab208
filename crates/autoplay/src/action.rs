use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AutoAction {
    Play { index: usize },
    Skip,
}

impl AutoAction {
    pub fn short_label(&self) -> String {
        match self {
            Self::Play { index } => format!("play {index}"),
            Self::Skip => "skip".to_string(),
        }
    }
}
