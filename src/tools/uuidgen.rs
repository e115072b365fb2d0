use crate::tools::{ArgumentVector, Tool, ToolRequest};
use serde::Deserialize;

/// Both modes may be set at once; `uuidgen` decides which one wins.
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(default)]
pub struct UuidgenRequest {
    pub random: bool,
    pub time: bool,
}

impl ToolRequest for UuidgenRequest {
    const TOOL: Tool = Tool::Uuidgen;

    fn args(&self) -> ArgumentVector {
        let mut args = ArgumentVector::new();
        args.extend_enabled([(self.random, "--random"), (self.time, "--time")]);
        args
    }
}
