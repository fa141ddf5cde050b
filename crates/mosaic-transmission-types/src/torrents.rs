//! Ordered torrent collections and their sort helpers.

use std::{
    cmp::Ordering,
    ops::{Deref, DerefMut},
};

use serde::{Deserialize, Serialize};

use crate::Torrent;

/// An ordered collection of torrents.
///
/// The order is the daemon's response order until one of the `sort_by_*`
/// methods is applied, which reorders the collection in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Torrents(Vec<Torrent>);

impl Torrents {
    /// Sort by daemon-assigned ID, descending when `reverse` is set.
    pub fn sort_by_id(&mut self, reverse: bool) {
        self.sort_with(reverse, |a, b| a.id.cmp(&b.id));
    }

    /// Sort lexicographically by name, descending when `reverse` is set.
    pub fn sort_by_name(&mut self, reverse: bool) {
        self.sort_with(reverse, |a, b| a.name.cmp(&b.name));
    }

    /// Sort by the date the torrent was added, newest first when `reverse` is set.
    pub fn sort_by_added_date(&mut self, reverse: bool) {
        self.sort_with(reverse, |a, b| a.added_date.cmp(&b.added_date));
    }

    /// Consumes the collection and returns the underlying vector.
    pub fn into_inner(self) -> Vec<Torrent> {
        self.0
    }

    fn sort_with<F>(&mut self, reverse: bool, compare: F)
    where
        F: Fn(&Torrent, &Torrent) -> Ordering,
    {
        if reverse {
            self.0.sort_by(|a, b| compare(b, a));
        } else {
            self.0.sort_by(compare);
        }
    }
}

impl From<Vec<Torrent>> for Torrents {
    fn from(torrents: Vec<Torrent>) -> Self {
        Self(torrents)
    }
}

impl FromIterator<Torrent> for Torrents {
    fn from_iter<I: IntoIterator<Item = Torrent>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Torrents {
    type Item = Torrent;
    type IntoIter = std::vec::IntoIter<Torrent>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Torrents {
    type Item = &'a Torrent;
    type IntoIter = std::slice::Iter<'a, Torrent>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Deref for Torrents {
    type Target = [Torrent];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Torrents {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
