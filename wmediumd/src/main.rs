mod cli;

use std::{
    io::{IsTerminal, Write},
    path::Path,
    process::ExitCode,
};

use clap::Parser;

use cli::Cli;
use wmediumd_core::{Medium, OsRandomSource, Topology};
use wmediumd_netlink::DriverLink;
use wmediumd_util::{Error, Metrics};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if let Some(path) = &cli.write_sample {
        return match run_write_sample(path) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                log::error!("{e}");
                ExitCode::FAILURE
            }
        };
    }

    let Some(config_path) = &cli.config else {
        eprintln!("wmediumd: no configuration file given (use -c FILE or -o FILE)");
        return ExitCode::FAILURE;
    };

    match run_daemon(config_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run_write_sample(path: &Path) -> anyhow::Result<()> {
    println!("Output configuration file: {}", path.display());
    println!("How many interfaces are active?");

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    let ifaces: usize = line.trim().parse()?;

    wmediumd_config::write_sample(path, ifaces)?;
    println!("New configuration successfully written to: {}", path.display());
    Ok(())
}

fn run_daemon(config_path: &Path) -> anyhow::Result<()> {
    log::info!("loading topology from {}", config_path.display());
    let topo_cfg = wmediumd_config::load(config_path)?;
    let topology = Topology::from_config(topo_cfg)?;
    log::info!(
        "topology: {} radios, {} rates",
        topology.radio_count(),
        topology.rate_count()
    );

    let mut link = DriverLink::open()?;
    link.register()?;
    log::info!("registered with the driver");

    let mut rng = OsRandomSource::new();
    let mut metrics = Metrics::new();
    let interactive = std::io::stdout().is_terminal();

    loop {
        let req = match link.recv() {
            Ok(req) => req,
            Err(Error::Codec(reason)) => {
                metrics.dropped_requests += 1;
                log::warn!("dropping malformed TX_FRAME: {reason}");
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        Medium::process_tx(&req, &topology, &mut rng, &mut link, &mut metrics);

        if interactive {
            print!("\r{metrics}");
            let _ = std::io::stdout().flush();
        }
    }
}
