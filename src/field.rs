use std::{
    borrow::Cow,
    ops::Add,
};

/// A field name to request from the api.
///
/// Names are not validated.
/// The api reports unknown fields through its own error response.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field(Cow<'static, str>);

impl Field {
    /// Make a [`Field`] from a static str.
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Make a new [`Field`].
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// Get the field name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for Field {
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}

impl From<String> for Field {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

impl Add for Field {
    type Output = FieldList;

    fn add(self, rhs: Field) -> FieldList {
        FieldList(vec![self, rhs])
    }
}

/// An ordered list of fields.
///
/// Duplicates are kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldList(Vec<Field>);

impl FieldList {
    /// Make an empty [`FieldList`].
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Make a [`FieldList`] from anything that yields fields.
    pub fn of<I, F>(fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Field>,
    {
        fields.into_iter().map(Into::into).collect()
    }

    /// Parse a comma-separated list of field names.
    ///
    /// Whitespace around names is trimmed and empty segments are skipped.
    /// Commas inside `{}` expansions, like `children{id,media_url}`, do not split.
    pub fn parse(fields: &str) -> Self {
        let mut list = Self::new();
        let mut depth = 0_usize;
        let mut start = 0;
        for (i, c) in fields.char_indices() {
            match c {
                '{' => depth += 1,
                '}' => depth = depth.saturating_sub(1),
                ',' if depth == 0 => {
                    list.push_trimmed(&fields[start..i]);
                    start = i + 1;
                }
                _ => {}
            }
        }
        list.push_trimmed(&fields[start..]);

        list
    }

    fn push_trimmed(&mut self, name: &str) {
        let name = name.trim();
        if !name.is_empty() {
            self.push(name.to_string());
        }
    }

    /// Append a field.
    pub fn push(&mut self, field: impl Into<Field>) {
        self.0.push(field.into());
    }

    /// Append a field, returning self.
    pub fn with(mut self, field: impl Into<Field>) -> Self {
        self.push(field);
        self
    }

    /// Check if this list contains a field with the given name.
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|field| field.name() == name)
    }

    /// The number of fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the fields.
    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.0.iter()
    }
}

impl std::fmt::Display for FieldList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, field) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(",")?;
            }
            f.write_str(field.name())?;
        }

        Ok(())
    }
}

impl From<Field> for FieldList {
    fn from(field: Field) -> Self {
        Self(vec![field])
    }
}

impl From<&'static str> for FieldList {
    fn from(fields: &'static str) -> Self {
        Self::parse(fields)
    }
}

impl From<&[&'static str]> for FieldList {
    fn from(fields: &[&'static str]) -> Self {
        Self::of(fields.iter().copied())
    }
}

impl From<Vec<Field>> for FieldList {
    fn from(fields: Vec<Field>) -> Self {
        Self(fields)
    }
}

impl<F> FromIterator<F> for FieldList
where
    F: Into<Field>,
{
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<F> Extend<F> for FieldList
where
    F: Into<Field>,
{
    fn extend<I: IntoIterator<Item = F>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

impl IntoIterator for FieldList {
    type Item = Field;
    type IntoIter = std::vec::IntoIter<Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a FieldList {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Add<Field> for FieldList {
    type Output = FieldList;

    fn add(mut self, rhs: Field) -> FieldList {
        self.0.push(rhs);
        self
    }
}

impl Add for FieldList {
    type Output = FieldList;

    fn add(mut self, rhs: FieldList) -> FieldList {
        self.0.extend(rhs.0);
        self
    }
}
