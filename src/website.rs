use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::{DummyError, Result};
use crate::types::Website;

/// Picks the website new customers are attached to.
pub struct WebsiteResolver<'a> {
    websites: &'a [Website],
}

impl<'a> WebsiteResolver<'a> {
    pub fn new(websites: &'a [Website]) -> Self {
        Self { websites }
    }

    /// Find a website by numeric id or by code.
    pub fn find(&self, key: &str) -> Option<&'a Website> {
        let key = key.trim();
        let by_id = key.parse::<u32>().ok();
        self.websites
            .iter()
            .find(|w| Some(w.id) == by_id || w.code == key)
    }

    /// Resolve an explicit argument, or fall back to the only website, or
    /// ask on `prompt` and read the choice from `input`.
    pub fn resolve<R: BufRead, W: Write>(
        &self,
        arg: Option<&str>,
        mut input: R,
        mut prompt: W,
    ) -> Result<Website> {
        if self.websites.is_empty() {
            return Err(DummyError::NoWebsites);
        }

        if let Some(key) = arg {
            return self
                .find(key)
                .cloned()
                .ok_or_else(|| DummyError::UnknownWebsite(key.to_string()));
        }

        if let [only] = self.websites {
            debug!(website = %only.code, "using the only configured website");
            return Ok(only.clone());
        }

        writeln!(prompt, "Please select a website:")?;
        for (i, w) in self.websites.iter().enumerate() {
            writeln!(prompt, "[{}] {} - {}", i + 1, w.code, w.name)?;
        }
        write!(prompt, "Website: ")?;
        prompt.flush()?;

        let mut answer = String::new();
        input.read_line(&mut answer)?;
        let answer = answer.trim();

        if let Some(w) = answer
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|idx| self.websites.get(idx))
        {
            return Ok(w.clone());
        }
        self.websites
            .iter()
            .find(|w| w.code == answer)
            .cloned()
            .ok_or_else(|| DummyError::InvalidWebsiteChoice(answer.to_string()))
    }
}
