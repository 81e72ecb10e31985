use std::fs;
use std::path::Path;
use serde::Serialize;
use super::config::Config;
use super::error::Error;


pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, Error> {
    let text = fs::read_to_string(path)?;
    let config: Config = serde_yaml::from_str(&text)?;
    config.parameters.validate()?;
    Ok(config)
}

pub fn save_yaml<P: AsRef<Path>, T: Serialize>(path: P, value: &T) -> Result<(), Error> {
    let text = serde_yaml::to_string(value)?;
    fs::write(path, text)?;
    Ok(())
}
