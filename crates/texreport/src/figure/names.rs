//! Names for figures the caller did not name

use crate::constants::GENERATED_NAME_LEN;
use crate::types::*;

/// Source of fresh figure names
pub trait NameSource {
    fn fresh_name(&mut self) -> Result<String>;
}

/// Random names of ASCII letters drawn from the OS entropy source
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomNames;

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

impl NameSource for RandomNames {
    fn fresh_name(&mut self) -> Result<String> {
        let mut bytes = [0u8; GENERATED_NAME_LEN];
        getrandom::fill(&mut bytes)
            .map_err(|e| std::io::Error::other(format!("no entropy for figure name: {e}")))?;
        Ok(bytes
            .iter()
            .map(|b| LETTERS[*b as usize % LETTERS.len()] as char)
            .collect())
    }
}

impl<F> NameSource for F
where
    F: FnMut() -> String,
{
    fn fresh_name(&mut self) -> Result<String> {
        Ok(self())
    }
}
