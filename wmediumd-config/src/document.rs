use serde::{Deserialize, Serialize};

/// The `ifaces`/`prob` configuration document shape (spec.md §6).
#[derive(Debug, Deserialize, Serialize)]
pub struct ConfigDocument {
    pub ifaces: Ifaces,
    pub prob: Prob,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Ifaces {
    pub count: usize,
    pub ids: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Prob {
    pub rates: usize,
    /// `matrix_list[r]` is rate `r`'s `count * count` row-major loss
    /// matrix, flattened as `Topology::from_config` expects.
    pub matrix_list: Vec<Vec<f64>>,
}
