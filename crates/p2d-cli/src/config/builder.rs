use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use crate::cli::ConversionArgs;
use crate::error::{CliError, Result};
use crate::utils::parser;
use poscar2data::engine::config::{ConversionConfig, ConversionConfigBuilder};
use poscar2data::engine::project::ProjectionFrame;
use tracing::debug;

/// Merges command-line flags, `--set` overrides, the optional TOML file and
/// the built-in defaults, in that order of precedence.
///
/// `parallel_flag` is the `--parallel` switch; it can only turn parallelism
/// on, so `false` defers to the lower layers.
pub fn build_config(args: &ConversionArgs, parallel_flag: bool) -> Result<ConversionConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;
    debug!("Effective file configuration: {:?}", file_config);

    let discovery = file_config.discovery.take().unwrap_or_default();
    let output = file_config.output.take().unwrap_or_default();
    let projection = file_config.projection.take().unwrap_or_default();
    let batch = file_config.batch.take().unwrap_or_default();

    let suffix = args
        .suffix
        .clone()
        .or(discovery.suffix)
        .unwrap_or(defaults.suffix);
    let extension = args
        .extension
        .clone()
        .or(discovery.extension)
        .unwrap_or(defaults.extension);
    let header = args
        .header
        .clone()
        .or(output.header)
        .unwrap_or(defaults.header);
    let precision = args
        .precision
        .or(output.precision)
        .unwrap_or(defaults.precision);
    let frame = args
        .frame
        .map(ProjectionFrame::from)
        .or(projection.frame)
        .unwrap_or(defaults.frame);
    let parallel = parallel_flag || batch.parallel.unwrap_or(defaults.parallel);

    ConversionConfigBuilder::new()
        .suffix(suffix)
        .extension(extension)
        .header(header)
        .precision(precision)
        .frame(frame)
        .parallel(parallel)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    let to_config_error = |e: parser::ParseError| CliError::Config(e.to_string());

    for kv_pair in set_values {
        let (key, value) = parser::split_key_value(kv_pair).map_err(to_config_error)?;

        match key {
            "discovery.suffix" => {
                config
                    .discovery
                    .get_or_insert_with(Default::default)
                    .suffix = Some(value.to_string());
            }
            "discovery.extension" => {
                config
                    .discovery
                    .get_or_insert_with(Default::default)
                    .extension = Some(value.to_string());
            }
            "output.header" => {
                config.output.get_or_insert_with(Default::default).header = Some(value.to_string());
            }
            "output.precision" => {
                config.output.get_or_insert_with(Default::default).precision =
                    Some(parser::parse_usize(key, value).map_err(to_config_error)?);
            }
            "projection.frame" => {
                config.projection.get_or_insert_with(Default::default).frame =
                    Some(parser::parse_frame(key, value).map_err(to_config_error)?);
            }
            "batch.parallel" => {
                config.batch.get_or_insert_with(Default::default).parallel =
                    Some(parser::parse_bool(key, value).map_err(to_config_error)?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
