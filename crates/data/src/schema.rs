pub use cursed_core::{ConfigError, RulesConfig, SkipReturn, DEFAULT_MAX_HP, DEFAULT_ROOM_SIZE};
