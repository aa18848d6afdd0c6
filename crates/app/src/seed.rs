use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedChoice {
    Cli(u64),
    Generated(u64),
}

impl SeedChoice {
    pub fn value(self) -> u64 {
        match self {
            Self::Cli(seed) | Self::Generated(seed) => seed,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LaunchOptions {
    pub seed: SeedChoice,
    /// Hotel config TOML; the built-in hotel is used when absent.
    pub config_path: Option<PathBuf>,
}

/// Parses `--seed <n>`, `--seed=<n>`, `--config <path>` and `--config=<path>`.
/// Unknown arguments are ignored.
pub fn parse_launch_args(args: &[String], generated_seed: u64) -> Result<LaunchOptions, String> {
    let mut selected_seed = None;
    let mut config_path = None;
    let mut index = 1usize;

    while index < args.len() {
        let argument = args[index].as_str();

        if argument == "--seed" || argument == "--config" {
            let Some(value) = args.get(index + 1) else {
                return Err(format!("missing value for {argument}"));
            };
            if argument == "--seed" {
                set_once(&mut selected_seed, parse_seed_value(value)?, "seed")?;
            } else {
                set_once(&mut config_path, PathBuf::from(value), "config")?;
            }
            index += 2;
            continue;
        }

        if let Some(value) = argument.strip_prefix("--seed=") {
            set_once(&mut selected_seed, parse_seed_value(value)?, "seed")?;
        } else if let Some(value) = argument.strip_prefix("--config=") {
            set_once(&mut config_path, PathBuf::from(value), "config")?;
        }
        index += 1;
    }

    let seed = match selected_seed {
        Some(seed) => SeedChoice::Cli(seed),
        None => SeedChoice::Generated(generated_seed),
    };
    Ok(LaunchOptions { seed, config_path })
}

fn set_once<T>(slot: &mut Option<T>, value: T, name: &str) -> Result<(), String> {
    if slot.is_some() {
        return Err(format!("{name} provided more than once"));
    }
    *slot = Some(value);
    Ok(())
}

/// Zero is reserved for "pick a seed for me", so it is rejected on the command line.
fn parse_seed_value(raw_value: &str) -> Result<u64, String> {
    match raw_value.parse::<u64>() {
        Ok(0) => Err("seed value must be non-zero".to_string()),
        Ok(seed) => Ok(seed),
        Err(_) => Err(format!("seed value '{raw_value}' must be a number")),
    }
}
