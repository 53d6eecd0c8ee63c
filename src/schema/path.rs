use std::fmt;

/// One step of a [`JsonPath`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathElem {
    /// Object field.
    Field(&'static str),
    /// Array index.
    Index(usize),
}

/// Location in the course description, rendered as `$.sections[0].content[2]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonPath(Vec<PathElem>);

impl JsonPath {
    /// The document root, `$`.
    pub fn root() -> Self {
        Self::default()
    }

    /// Child path through an object field.
    pub fn field(&self, name: &'static str) -> Self {
        let mut p = self.0.clone();
        p.push(PathElem::Field(name));
        Self(p)
    }

    /// Child path through an array index.
    pub fn index(&self, i: usize) -> Self {
        let mut p = self.0.clone();
        p.push(PathElem::Index(i));
        Self(p)
    }

    /// Path elements from the root.
    pub fn elems(&self) -> &[PathElem] {
        &self.0
    }
}

impl fmt::Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for p in &self.0 {
            match p {
                PathElem::Field(name) => write!(f, ".{name}")?,
                PathElem::Index(i) => write!(f, "[{i}]")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schema/path.rs"]
mod tests;
