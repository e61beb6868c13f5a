use clap::ValueEnum;

use crate::model::LoopInputs;

#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub inputs: LoopInputs,
    /// Applied as an inverse edit once the session has started.
    pub seconds_per_beat: Option<f64>,
    pub show_intermediate: bool,
    pub format: OutputFormat,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            inputs: LoopInputs::default(),
            seconds_per_beat: None,
            show_intermediate: false,
            format: OutputFormat::Text,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
