use crate::cli::ConvertArgs;
use crate::config::builder::build_config;
use crate::error::Result;
use poscar2data::workflows::{batch::output_path_for, convert::convert_file};
use tracing::info;

pub fn run(args: ConvertArgs) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let config = build_config(&args.conversion, false)?;

    let output = args.output.clone().unwrap_or_else(|| {
        output_path_for(
            &args.input,
            &config.discovery.suffix,
            &config.discovery.extension,
        )
    });

    info!("Converting {:?} -> {:?}", &args.input, &output);
    let summary = convert_file(&args.input, &output, &config)?;

    let cell = summary.cell;
    println!(
        "✓ {} atom(s) of {} type(s) written to: {}",
        summary.atoms,
        summary.types,
        output.display()
    );
    println!(
        "  box lx={:.6} ly={:.6} lz={:.6}  tilt xy={:.6} xz={:.6} yz={:.6}",
        cell.lx, cell.ly, cell.lz, cell.xy, cell.xz, cell.yz
    );
    Ok(())
}
