//! Dice3D Inspector - validates the dice meshes
//!
//! Builds every die, prints a defect report and optionally exports STL files.
//! Run with `--help` for options.
use dice3d_inspect::{run, InspectConfig, InspectError, USAGE};
use std::env;
use std::io::{stdout, Write};
use std::process;

fn main() -> Result<(), InspectError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match InspectConfig::from_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}\n\n{}", e, USAGE);
            process::exit(2);
        }
    };

    if config.help {
        println!("{}", USAGE);
        return Ok(());
    }

    let mut stdout = stdout();
    let defects = run(&config, &mut stdout)?;
    stdout.flush()?;

    if defects > 0 {
        log::warn!("{} solid(s) have geometric defects and need review", defects);
    }

    Ok(())
}
