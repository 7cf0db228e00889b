//! AttributeTable: ordered keyed rows with dynamic attribute columns
//!
//! Each row has a fixed identity plus a handful of reserved fields owned by
//! the row type, and any number of extra columns. The table keeps rows in
//! insertion order and a registry of every extra column ever defined, so a
//! column that exists but holds no value for a row reads back as unset
//! rather than unknown.

use super::error::{GraphError, GraphResult};
use super::value::{AttrInput, AttrValue, Attrs};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// A row type that can live in an [`AttributeTable`]
pub trait Record: Clone + fmt::Debug {
    type Key: Copy + Eq + Hash + Ord + fmt::Display + fmt::Debug;

    /// Column names backed by struct fields; always defined
    const RESERVED: &'static [&'static str];

    /// Reserved columns that cannot be written through `set_attr`
    const READ_ONLY: &'static [&'static str];

    fn key(&self) -> Self::Key;

    fn attrs(&self) -> &Attrs;

    fn attrs_mut(&mut self) -> &mut Attrs;

    /// Read a reserved column. Only called with names from `RESERVED`.
    fn reserved(&self, name: &str) -> Option<AttrValue>;

    /// Write a writable reserved column. Only called with names from
    /// `RESERVED` that are not in `READ_ONLY`.
    fn set_reserved(&mut self, name: &str, value: &AttrValue);

    fn not_found(key: Self::Key) -> GraphError;

    /// Read any column, reserved or extra
    fn value(&self, name: &str) -> Option<AttrValue> {
        if Self::RESERVED.contains(&name) {
            self.reserved(name)
        } else {
            self.attrs().get(name).cloned()
        }
    }
}

/// First key of `attrs` that names a reserved column of `R`
pub(crate) fn reserved_name<R: Record>(attrs: &Attrs) -> Option<&str> {
    attrs
        .keys()
        .map(String::as_str)
        .find(|name| R::RESERVED.contains(name))
}

/// Rows addressed by a set-attribute call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target<K> {
    /// Every row, in insertion order
    All,
    One(K),
    /// An explicit list, typically a selection's IDs
    Ids(Vec<K>),
}

#[derive(Debug, Clone)]
pub struct AttributeTable<R: Record> {
    rows: Vec<R>,
    index: HashMap<R::Key, usize>,
    columns: Vec<String>,
}

impl<R: Record> Default for AttributeTable<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> AttributeTable<R> {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            index: HashMap::new(),
            columns: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn contains(&self, key: R::Key) -> bool {
        self.index.contains_key(&key)
    }

    pub fn get(&self, key: R::Key) -> Option<&R> {
        self.index.get(&key).map(|&i| &self.rows[i])
    }

    /// Rows in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.rows.iter()
    }

    pub fn keys(&self) -> Vec<R::Key> {
        self.rows.iter().map(Record::key).collect()
    }

    /// Extra columns in definition order (reserved columns excluded)
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn has_column(&self, name: &str) -> bool {
        R::RESERVED.contains(&name) || self.columns.iter().any(|c| c == name)
    }

    /// Append a row. Returns `false` and leaves the table untouched when the
    /// key is already present.
    pub(crate) fn insert(&mut self, row: R) -> bool {
        let key = row.key();
        if self.index.contains_key(&key) {
            return false;
        }
        let names: Vec<String> = row.attrs().keys().cloned().collect();
        for name in names {
            self.define_column(&name);
        }
        self.index.insert(key, self.rows.len());
        self.rows.push(row);
        true
    }

    pub(crate) fn define_column(&mut self, name: &str) {
        if !self.has_column(name) {
            self.columns.push(name.to_string());
        }
    }

    pub(crate) fn remove(&mut self, key: R::Key) -> Option<R> {
        let pos = self.index.remove(&key)?;
        let row = self.rows.remove(pos);
        self.reindex();
        Some(row)
    }

    /// Remove every row matching `pred`, returning them in insertion order
    pub(crate) fn remove_where<F>(&mut self, mut pred: F) -> Vec<R>
    where
        F: FnMut(&R) -> bool,
    {
        let (removed, kept): (Vec<R>, Vec<R>) = self.rows.drain(..).partition(|r| pred(r));
        self.rows = kept;
        self.reindex();
        removed
    }

    fn reindex(&mut self) {
        self.index = self
            .rows
            .iter()
            .enumerate()
            .map(|(i, r)| (r.key(), i))
            .collect();
    }

    /// Read one cell
    ///
    /// `Ok(None)` means the column exists but this row has no value.
    pub fn get_attr(&self, key: R::Key, name: &str) -> GraphResult<Option<AttrValue>> {
        let row = self.get(key).ok_or_else(|| R::not_found(key))?;
        if !self.has_column(name) {
            return Err(GraphError::UnknownAttribute(name.to_string()));
        }
        Ok(row.value(name))
    }

    /// Read a column for the given keys, or for every row when `keys` is `None`
    pub fn column_values(
        &self,
        name: &str,
        keys: Option<&[R::Key]>,
    ) -> GraphResult<Vec<(R::Key, Option<AttrValue>)>> {
        if !self.has_column(name) {
            return Err(GraphError::UnknownAttribute(name.to_string()));
        }
        match keys {
            None => Ok(self.rows.iter().map(|r| (r.key(), r.value(name))).collect()),
            Some(keys) => keys
                .iter()
                .map(|&k| {
                    let row = self.get(k).ok_or_else(|| R::not_found(k))?;
                    Ok((k, row.value(name)))
                })
                .collect(),
        }
    }

    /// Row positions addressed by `target`, failing on the first unknown key
    pub(crate) fn resolve_target(&self, target: &Target<R::Key>) -> GraphResult<Vec<usize>> {
        match target {
            Target::All => Ok((0..self.rows.len()).collect()),
            Target::One(key) => Ok(vec![self.position(*key)?]),
            Target::Ids(keys) => keys.iter().map(|&k| self.position(k)).collect(),
        }
    }

    fn position(&self, key: R::Key) -> GraphResult<usize> {
        self.index.get(&key).copied().ok_or_else(|| R::not_found(key))
    }

    /// Write one column on the targeted rows
    ///
    /// Everything is validated before the first write, so on error the
    /// table is unchanged. Returns the keys written, in target order.
    pub(crate) fn set_attr(
        &mut self,
        target: &Target<R::Key>,
        name: &str,
        input: &AttrInput,
    ) -> GraphResult<Vec<R::Key>> {
        if name.is_empty() {
            return Err(GraphError::InvalidArgument(
                "attribute name must not be empty".to_string(),
            ));
        }
        if R::READ_ONLY.contains(&name) {
            return Err(GraphError::InvalidArgument(format!(
                "attribute '{}' is read-only",
                name
            )));
        }
        let positions = self.resolve_target(target)?;
        if let Some(actual) = input.len() {
            if actual != positions.len() {
                return Err(GraphError::LengthMismatch {
                    expected: positions.len(),
                    actual,
                });
            }
        }

        let reserved = R::RESERVED.contains(&name);
        if !reserved {
            self.define_column(name);
        }
        let mut written = Vec::with_capacity(positions.len());
        for (i, &pos) in positions.iter().enumerate() {
            let value = input.value_at(i);
            let row = &mut self.rows[pos];
            if reserved {
                row.set_reserved(name, value);
            } else {
                row.attrs_mut().insert(name.to_string(), value.clone());
            }
            written.push(row.key());
        }
        Ok(written)
    }

    fn check_extra_column(&self, name: &str) -> GraphResult<()> {
        if R::RESERVED.contains(&name) {
            return Err(GraphError::InvalidArgument(format!(
                "'{}' is a reserved attribute",
                name
            )));
        }
        if !self.has_column(name) {
            return Err(GraphError::UnknownAttribute(name.to_string()));
        }
        Ok(())
    }

    /// Rename an extra column, keeping its position among the columns
    pub(crate) fn rename_column(&mut self, from: &str, to: &str) -> GraphResult<()> {
        self.check_extra_column(from)?;
        if to.is_empty() || R::RESERVED.contains(&to) || self.has_column(to) {
            return Err(GraphError::InvalidArgument(format!(
                "cannot rename '{}' to '{}'",
                from, to
            )));
        }
        for column in self.columns.iter_mut() {
            if column == from {
                *column = to.to_string();
            }
        }
        for row in self.rows.iter_mut() {
            if let Some(value) = row.attrs_mut().remove(from) {
                row.attrs_mut().insert(to.to_string(), value);
            }
        }
        Ok(())
    }

    /// Remove an extra column and every value in it
    pub(crate) fn drop_column(&mut self, name: &str) -> GraphResult<()> {
        self.check_extra_column(name)?;
        self.columns.retain(|c| c != name);
        for row in self.rows.iter_mut() {
            row.attrs_mut().remove(name);
        }
        Ok(())
    }
}
