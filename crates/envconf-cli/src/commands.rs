use std::io::{self, Write};

use envconf::{Duration, EnvConf, EnvValue};
use envconf_std::env::{ListEnv, ReadEnv};
use thiserror::Error;

use crate::config::{Command, ValueKind};

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Required(#[from] envconf::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Printed,
    /// An optional lookup found nothing usable; nothing was printed.
    Missing,
}

pub fn run<E, W>(conf: &EnvConf<E>, command: &Command, out: &mut W) -> Result<Outcome, CommandError>
where
    E: ReadEnv + ListEnv,
    W: Write,
{
    match command {
        Command::Key { raw } => {
            writeln!(out, "{}", conf.key(raw))?;
            Ok(Outcome::Printed)
        }
        Command::Get {
            key,
            kind,
            required,
        } => {
            let value = match kind {
                ValueKind::String => lookup::<String, E>(conf, key, *required)?,
                ValueKind::Bool => lookup::<bool, E>(conf, key, *required)?,
                ValueKind::Duration => lookup::<Duration, E>(conf, key, *required)?,
                ValueKind::Float64 => lookup::<f64, E>(conf, key, *required)?,
                ValueKind::Int => lookup::<i32, E>(conf, key, *required)?,
                ValueKind::Int64 => lookup::<i64, E>(conf, key, *required)?,
                ValueKind::Uint => lookup::<u32, E>(conf, key, *required)?,
                ValueKind::Uint64 => lookup::<u64, E>(conf, key, *required)?,
            };
            match value {
                Some(text) => {
                    writeln!(out, "{text}")?;
                    Ok(Outcome::Printed)
                }
                None => Ok(Outcome::Missing),
            }
        }
        Command::List => {
            for (name, value) in conf.prefixed_vars() {
                writeln!(out, "{name}={value}")?;
            }
            Ok(Outcome::Printed)
        }
    }
}

fn lookup<T: EnvValue, E: ReadEnv>(
    conf: &EnvConf<E>,
    key: &str,
    required: bool,
) -> Result<Option<String>, envconf::Error> {
    if required {
        conf.must_get::<T>(key).map(|v| Some(v.to_env()))
    } else {
        Ok(conf.get::<T>(key).map(|v| v.to_env()))
    }
}
