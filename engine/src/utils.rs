// Copyright (C) 2020 Kevin Del Castillo Ramírez
//
// This file is part of movie-recommender.
//
// movie-recommender is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// movie-recommender is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with movie-recommender.  If not, see <http://www.gnu.org/licenses/>.

use std::collections::{hash_map::Iter as MapIter, HashMap};
use std::hash::Hash;

// Creating a common key iterator is kinda interesting since it'll
// decide which map is going to be iterated based on it's length.
// Basically if one of them is empty, it'll choose it as the main
// iterator, therefore ending the iteration early. Values are always
// yielded as (value in a, value in b).
pub fn common_keys_iter<'a, K, V>(
    a: &'a HashMap<K, V>,
    b: &'a HashMap<K, V>,
) -> CommonKeyIterator<'a, K, V>
where
    K: Hash + Eq,
{
    let swapped = a.len() > b.len();
    let (shortest, longest) = if swapped { (b, a) } else { (a, b) };

    CommonKeyIterator {
        shortest: shortest.iter(),
        longest,
        swapped,
    }
}

#[derive(Debug)]
pub struct CommonKeyIterator<'a, K, V>
where
    K: Hash + Eq,
{
    shortest: MapIter<'a, K, V>,
    longest: &'a HashMap<K, V>,
    swapped: bool,
}

impl<'a, K, V> Iterator for CommonKeyIterator<'a, K, V>
where
    K: Hash + Eq,
{
    type Item = (&'a K, (&'a V, &'a V));

    fn next(&mut self) -> Option<Self::Item> {
        let mut s_val = self.shortest.next()?;

        loop {
            if let Some(l_val) = self.longest.get(s_val.0) {
                let pair = if self.swapped {
                    (l_val, s_val.1)
                } else {
                    (s_val.1, l_val)
                };

                break Some((s_val.0, pair));
            } else {
                s_val = self.shortest.next()?;
            }
        }
    }
}

/// Pairs of values present in both maps, ordered by key. The ordering makes
/// any reduction over the pairs independent of hashing and of argument order.
pub fn aligned_values<K, V>(a: &HashMap<K, V>, b: &HashMap<K, V>) -> Vec<(V, V)>
where
    K: Hash + Eq + Ord,
    V: Copy,
{
    let mut pairs: Vec<_> = common_keys_iter(a, b).collect();
    pairs.sort_by(|(k1, _), (k2, _)| k1.cmp(k2));

    pairs.into_iter().map(|(_, (x, y))| (*x, *y)).collect()
}
