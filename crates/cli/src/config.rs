use std::collections::HashMap;
use std::ffi::OsString;
use std::path::PathBuf;
use std::str::FromStr;

/// Environment variables read by [`CliCfg::from_env`] share this prefix.
pub const ENV_PREFIX: &str = "EVENTVIBE_";

/// How enriched profiles are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One compact JSON object per line.
    #[default]
    Json,
    /// Indented JSON.
    Pretty,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

/// CLI parameters. Built from `EVENTVIBE_*` environment variables; unset or
/// unparsable values keep their defaults.
#[derive(Debug, Clone)]
pub struct CliCfg {
    pub output: OutputFormat,
    /// JSON log destination when `RUST_LOG` is set.
    pub log_file: PathBuf,
    pub prompt: String,
    /// Keys whose values failed to parse.
    pub rejected: Vec<String>,
}

impl Default for CliCfg {
    fn default() -> Self {
        Self {
            output: OutputFormat::Json,
            log_file: PathBuf::from("/tmp/eventvibe.log"),
            prompt: "event> ".into(),
            rejected: Vec::new(),
        }
    }
}

impl CliCfg {
    pub fn from_env() -> Self {
        Self::from_vars(std::env::vars_os())
    }

    /// Build from raw environment pairs. Keys outside [`ENV_PREFIX`] are
    /// ignored whatever their encoding; prefixed keys with non-UTF-8 values
    /// are rejected and keep their defaults.
    fn from_vars(vars: impl IntoIterator<Item = (OsString, OsString)>) -> Self {
        let mut map = HashMap::new();
        let mut unreadable = Vec::new();
        for (key, value) in vars {
            let Some(key) = key.to_str().and_then(|k| k.strip_prefix(ENV_PREFIX)) else {
                continue;
            };
            let key = key.to_lowercase();
            match value.into_string() {
                Ok(value) => {
                    map.insert(key, value);
                }
                Err(_) => unreadable.push(key),
            }
        }

        let mut cfg = Self::from_map(&map);
        cfg.rejected.extend(unreadable);
        cfg
    }

    fn from_map(m: &HashMap<String, String>) -> Self {
        let d = Self::default();
        let mut rejected = Vec::new();
        Self {
            output: get_or(m, "output", d.output, &mut rejected),
            log_file: get_or(m, "log_file", d.log_file, &mut rejected),
            prompt: get_or(m, "prompt", d.prompt, &mut rejected),
            rejected,
        }
    }
}

fn get_or<T: FromStr>(
    map: &HashMap<String, String>,
    key: &str,
    default: T,
    rejected: &mut Vec<String>,
) -> T {
    match map.get(key) {
        Some(v) => v.parse().unwrap_or_else(|_| {
            rejected.push(key.to_string());
            default
        }),
        None => default,
    }
}
