use color_eyre::{
    eyre::{eyre, Context},
    Result,
};
use env_logger::{Builder, Target};
use log::LevelFilter;

/// [`config_logger`] The configuration for `env_logger`
///
/// The report of the measurements is written to stdout, so the diagnostics
/// should be routed elsewhere (usually [`Target::Stderr`])
pub fn config_logger(verbose_level: u8, target: Target) -> Result<()> {
    let mut builder = Builder::from_default_env();

    builder
        .target(target)
        .format_indent(Some(4))
        .format_module_path(false)
        .format_timestamp_millis();

    builder.filter(None, level_for(verbose_level)?);

    builder
        .try_init()
        .with_context(|| "toolclock wasn't able to set up the logger")
}

fn level_for(verbose_level: u8) -> Result<LevelFilter> {
    match verbose_level {
        0 => Ok(LevelFilter::Warn),
        1 => Ok(LevelFilter::Info),
        2 => Ok(LevelFilter::Debug),
        _ => Err(eyre!("toolclock maximum allowed verbosity level is: '-vv'")),
    }
}
