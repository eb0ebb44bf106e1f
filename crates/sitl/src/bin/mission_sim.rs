//! Interactive mission scheduler simulation.
//!
//! Runs the scheduler at a fixed rate against a simulated vehicle. Each line
//! read from stdin is submitted as a command (e.g. `home`, `land,270`,
//! `circle,-93.15,45.22`); task transitions and command results are logged.
//!
//! Usage:
//!   cargo run -p pico_mission_sitl --bin mission_sim -- [OPTIONS]
//!
//! Options:
//!   -c, --config <PATH>  Mission config (default: crates/sitl/config/mission.json)
//!   --rate <HZ>          Tick rate (default: 50)
//!   --lon <DEG>          Initial longitude (default: -93.1523)
//!   --lat <DEG>          Initial latitude (default: 45.2184)
//!   --wind <DEG>         Wind direction (default: 290)

use std::env;
use std::process;
use std::str::FromStr;

use pico_mission_core::GeoPoint;
use pico_mission_sitl::{load_config, MissionRunner, SimVehicle};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

struct Args {
    config: String,
    rate_hz: f32,
    lon_deg: f64,
    lat_deg: f64,
    wind_deg: f32,
}

fn parse_args() -> Args {
    let mut args = Args {
        config: "crates/sitl/config/mission.json".to_string(),
        rate_hz: 50.0,
        lon_deg: -93.1523,
        lat_deg: 45.2184,
        wind_deg: 290.0,
    };

    let raw: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < raw.len() {
        match raw[i].as_str() {
            "-c" | "--config" => {
                i += 1;
                args.config = arg_value(&raw, i, "config").to_string();
            }
            "--rate" => {
                i += 1;
                args.rate_hz = parse_arg(&raw, i, "rate");
            }
            "--lon" => {
                i += 1;
                args.lon_deg = parse_arg(&raw, i, "lon");
            }
            "--lat" => {
                i += 1;
                args.lat_deg = parse_arg(&raw, i, "lat");
            }
            "--wind" => {
                i += 1;
                args.wind_deg = parse_arg(&raw, i, "wind");
            }
            "-h" | "--help" => {
                print_usage();
                process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {other}");
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    if !(args.rate_hz > 0.0 && args.rate_hz <= 1000.0) {
        eprintln!("Error: rate must be in (0, 1000] Hz");
        process::exit(1);
    }

    args
}

fn arg_value<'a>(raw: &'a [String], i: usize, name: &str) -> &'a str {
    raw.get(i).map(String::as_str).unwrap_or_else(|| {
        eprintln!("Error: --{name} requires a value");
        process::exit(1);
    })
}

fn parse_arg<T: FromStr>(raw: &[String], i: usize, name: &str) -> T {
    arg_value(raw, i, name).parse().unwrap_or_else(|_| {
        eprintln!("Error: invalid value for --{name}");
        process::exit(1);
    })
}

fn print_usage() {
    eprintln!(
        "Usage: mission_sim [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 -c, --config <PATH>  Mission config (default: crates/sitl/config/mission.json)\n\
         \x20 --rate <HZ>          Tick rate (default: 50)\n\
         \x20 --lon <DEG>          Initial longitude (default: -93.1523)\n\
         \x20 --lat <DEG>          Initial latitude (default: 45.2184)\n\
         \x20 --wind <DEG>         Wind direction (default: 290)\n\
         \x20 -h, --help           Show this help"
    );
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = parse_args();

    let config = match load_config(&args.config) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            process::exit(1);
        }
    };

    let vehicle = SimVehicle::new(GeoPoint::new(args.lon_deg, args.lat_deg), args.wind_deg);
    let mut runner = MissionRunner::new(&config, vehicle);

    tracing::info!(
        config = %args.config,
        rate_hz = args.rate_hz,
        "mission running, enter commands on stdin, Ctrl+C to stop"
    );

    let dt = 1.0 / args.rate_hz;
    let mut interval = tokio::time::interval(tokio::time::Duration::from_secs_f32(dt));
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;

    let mut last_task = String::new();
    let mut last_result = String::new();

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = &mut ctrl_c => {
                tracing::info!("shutdown requested");
                break;
            }
            line = lines.next_line(), if stdin_open => {
                match line {
                    Ok(Some(line)) if line.trim().is_empty() => {}
                    Ok(Some(line)) => {
                        if let Err(e) = runner.submit(&line) {
                            tracing::warn!("{e}");
                        }
                    }
                    Ok(None) => {
                        tracing::debug!("stdin closed");
                        stdin_open = false;
                    }
                    Err(e) => {
                        tracing::warn!("stdin: {e}");
                        stdin_open = false;
                    }
                }
            }
            _ = interval.tick() => {
                runner.step(dt);

                let board = runner.board();
                if board.current_task != last_task {
                    last_task.clone_from(&board.current_task);
                    tracing::info!(
                        task = %last_task,
                        stack = ?runner.stack_names(),
                        "current task"
                    );
                }
                if board.command_result != last_result {
                    last_result.clone_from(&board.command_result);
                    tracing::info!(result = %last_result, "command");
                }
            }
        }
    }

    tracing::info!(ticks = runner.tick_count(), "stopped");
}
