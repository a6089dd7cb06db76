// Output assembly: preamble plus per-declaration units, in file order

use std::fmt;

/// Generated node type and parse procedure for one expression declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    pub name: String,
    pub text: String,
}

/// The full generated parser, kept in pieces until it is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedModule {
    pub preamble: String,
    pub units: Vec<GeneratedUnit>,
}

impl GeneratedModule {
    pub fn new(preamble: impl Into<String>) -> Self {
        GeneratedModule {
            preamble: preamble.into(),
            units: Vec::new(),
        }
    }

    pub fn push(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.units.push(GeneratedUnit {
            name: name.into(),
            text: text.into(),
        });
    }

    /// Generated text for the declaration called `name`.
    pub fn unit(&self, name: &str) -> Option<&str> {
        self.units
            .iter()
            .find(|unit| unit.name == name)
            .map(|unit| unit.text.as_str())
    }

    /// Concatenate preamble and units into the final source text.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for GeneratedModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.preamble)?;
        for unit in &self.units {
            f.write_str(&unit.text)?;
        }
        Ok(())
    }
}
