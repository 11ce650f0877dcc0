use std::collections::HashMap;

use wmediumd_util::{Address, Error, Result};

/// Plain data describing a topology, in the shape the config loader (or a
/// test) hands to [`Topology::from_config`].
///
/// `loss` is indexed `[r][i * addresses.len() + j]`, row-major: the value
/// at `loss[r][i * N + j]` is the probability that a frame sent by radio
/// `i` at rate `r` is lost before reaching radio `j`. This is the direct,
/// unambiguous row-major flattening spec.md's open question asks for —
/// deliberately not the original C loader's inverted loop condition, which
/// that document calls out as a bug.
#[derive(Debug, Clone)]
pub struct TopologyConfig {
    pub addresses: Vec<Address>,
    pub rates: usize,
    pub loss: Vec<Vec<f64>>,
}

/// Immutable table of radios, their addresses, and the per-rate loss
/// tensor between every ordered pair.
///
/// Once built, a `Topology` never changes: lookups are plain reads, so
/// concurrent access from multiple threads would be safe, though this
/// daemon only ever reads it from its single event-loop thread.
#[derive(Debug)]
pub struct Topology {
    addresses: Vec<Address>,
    by_address: HashMap<Address, usize>,
    rates: usize,
    /// `loss[r][i * n + j]`.
    loss: Vec<Vec<f64>>,
}

impl Topology {
    /// Validates `cfg` and builds an immutable `Topology`.
    ///
    /// Rejects: fewer than one radio, duplicate addresses, a rate matrix
    /// whose length isn't `rates`, any matrix whose length isn't `N*N`, or
    /// any probability outside `[0.0, 1.0]`.
    pub fn from_config(cfg: TopologyConfig) -> Result<Topology> {
        let n = cfg.addresses.len();
        if n == 0 {
            return Err(Error::Config("topology must have at least one radio".into()));
        }

        let mut by_address = HashMap::with_capacity(n);
        for (idx, addr) in cfg.addresses.iter().enumerate() {
            if by_address.insert(*addr, idx).is_some() {
                return Err(Error::Config(format!("duplicate radio address {addr}")));
            }
        }

        if cfg.loss.len() != cfg.rates {
            return Err(Error::Config(format!(
                "expected {} rate matrices, got {}",
                cfg.rates,
                cfg.loss.len()
            )));
        }
        for (r, matrix) in cfg.loss.iter().enumerate() {
            if matrix.len() != n * n {
                return Err(Error::Config(format!(
                    "rate {r} matrix has {} entries, expected {}",
                    matrix.len(),
                    n * n
                )));
            }
            for (idx, p) in matrix.iter().enumerate() {
                if !(0.0..=1.0).contains(p) {
                    return Err(Error::Config(format!(
                        "rate {r} entry {idx} is {p}, not within [0.0, 1.0]"
                    )));
                }
            }
        }

        Ok(Topology {
            addresses: cfg.addresses,
            by_address,
            rates: cfg.rates,
            loss: cfg.loss,
        })
    }

    pub fn radio_count(&self) -> usize {
        self.addresses.len()
    }

    pub fn rate_count(&self) -> usize {
        self.rates
    }

    pub fn lookup(&self, addr: Address) -> Option<usize> {
        self.by_address.get(&addr).copied()
    }

    pub fn address_of(&self, index: usize) -> Address {
        self.addresses[index]
    }

    /// Probability that a frame sent by radio `i` at rate `r` is lost
    /// before reaching radio `j`. The diagonal (`i == j`) is never read by
    /// the pipeline; its stored value is whatever the config supplied.
    pub fn loss(&self, r: usize, i: usize, j: usize) -> f64 {
        let n = self.addresses.len();
        self.loss[r][i * n + j]
    }
}
