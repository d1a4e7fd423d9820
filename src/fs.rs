use std::error::Error;
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

use crate::state::GameState;
use crate::LoadLevel;

pub(crate) fn read_file<P: AsRef<Path>>(path: P) -> Result<String, Box<dyn Error>> {
    let mut file = File::open(path)?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

impl LoadLevel for str {
    fn load_level(&self) -> Result<GameState, Box<dyn Error>> {
        let level = read_file(self)?;
        Ok(level.parse()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading() {
        let state = "levels/custom/01-simplest.txt".load_level().unwrap();
        assert_eq!(state.to_string(), "#####\n#@$.#\n#####\n");
    }

    #[test]
    fn missing_file() {
        assert!("levels/does-not-exist.txt".load_level().is_err());
    }
}
