use crate::config::CpackConfig;
use canvas_pack::io::ext_repr::{ExtInstance, ExtSolution};
use serde::{Deserialize, Serialize};

/// Everything written to the solution file: the instance as it was read, the solution and the config used
#[derive(Serialize, Deserialize, Clone)]
pub struct CpackOutput {
    #[serde(flatten)]
    pub instance: ExtInstance,
    pub solution: ExtSolution,
    pub config: CpackConfig,
}
