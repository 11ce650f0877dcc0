//! Reads and writes the topology configuration file (spec.md §6).
//!
//! This crate owns the two pieces spec.md explicitly carves out of the
//! core: parsing `"42:00:00:00:01:00"`-style MAC strings, and the
//! `ifaces`/`prob` TOML document shape. `wmediumd-core` only ever sees
//! the already-validated [`wmediumd_core::TopologyConfig`] this crate
//! produces.

mod document;
mod mac;

use std::{fs, path::Path};

use wmediumd_core::TopologyConfig;
use wmediumd_util::Error;

pub use document::ConfigDocument;
pub use mac::parse_mac;

/// Loads and cross-checks a topology configuration file, producing the
/// plain data [`wmediumd_core::Topology::from_config`] expects.
///
/// Performs the same sanity checks the original loader did before ever
/// touching a socket: `ifaces.count` must agree with the length of
/// `ifaces.ids`, and `prob.rates` must agree with the length of
/// `prob.matrix_list` (spec.md §6, §9).
pub fn load(path: &Path) -> wmediumd_util::Result<TopologyConfig> {
    let text = fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("cannot read {}: {e}", path.display())))?;
    let doc: ConfigDocument = toml::from_str(&text)
        .map_err(|e| Error::Config(format!("cannot parse {}: {e}", path.display())))?;

    if doc.ifaces.count != doc.ifaces.ids.len() {
        return Err(Error::Config(format!(
            "ifaces.count ({}) does not match ifaces.ids length ({})",
            doc.ifaces.count,
            doc.ifaces.ids.len()
        )));
    }
    if doc.prob.rates != doc.prob.matrix_list.len() {
        return Err(Error::Config(format!(
            "prob.rates ({}) does not match prob.matrix_list length ({})",
            doc.prob.rates,
            doc.prob.matrix_list.len()
        )));
    }

    let addresses = doc
        .ifaces
        .ids
        .iter()
        .map(|s| parse_mac(s).ok_or_else(|| Error::Config(format!("bad MAC address {s:?}"))))
        .collect::<wmediumd_util::Result<Vec<_>>>()?;

    Ok(TopologyConfig {
        addresses,
        rates: doc.prob.rates,
        loss: doc.prob.matrix_list,
    })
}

/// Writes an `ifaces`-count-sized, zero-filled sample configuration to
/// `path`, then exits the process with status `0` — matching the
/// original `-o FILE` mode's behavior exactly (spec.md §6, §9).
pub fn write_sample(path: &Path, ifaces: usize) -> wmediumd_util::Result<()> {
    const DEFAULT_RATES: usize = 12;

    let doc = ConfigDocument {
        ifaces: document::Ifaces {
            count: ifaces,
            ids: (0..ifaces)
                .map(|i| format!("42:00:00:00:{i:02}:00"))
                .collect(),
        },
        prob: document::Prob {
            rates: DEFAULT_RATES,
            matrix_list: vec![vec![0.0; ifaces * ifaces]; DEFAULT_RATES],
        },
    };

    let text = toml::to_string_pretty(&doc)
        .map_err(|e| Error::Config(format!("cannot serialize sample config: {e}")))?;
    fs::write(path, text).map_err(|e| Error::Config(format!("cannot write {}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_a_written_sample() {
        let dir = std::env::temp_dir().join(format!("wmediumd-config-test-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("sample.toml");

        write_sample(&path, 3).unwrap();
        let cfg = load(&path).unwrap();

        assert_eq!(cfg.addresses.len(), 3);
        assert_eq!(cfg.rates, 12);
        assert!(cfg.loss.iter().all(|m| m.iter().all(|p| *p == 0.0)));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn rejects_count_mismatch() {
        let dir = std::env::temp_dir().join(format!("wmediumd-config-test-mismatch-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.toml");
        fs::write(
            &path,
            r#"
            [ifaces]
            count = 2
            ids = ["42:00:00:00:00:00"]

            [prob]
            rates = 1
            matrix_list = [[0.0]]
            "#,
        )
        .unwrap();

        assert!(load(&path).is_err());
        fs::remove_dir_all(&dir).ok();
    }
}
