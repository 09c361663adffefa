// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use prettytable::{cell, format::consts::FORMAT_NO_LINESEP, row, table, Table};
use std::collections::{BTreeMap, HashMap};

pub trait Entity {
    type Id;

    fn get_id(&self) -> Self::Id;
    fn get_data(&self) -> HashMap<String, String> {
        Default::default()
    }
}

pub trait ToTable {
    fn to_table(&self) -> Table;
}

impl<I: ToString, E: Entity<Id = I>> ToTable for E {
    fn to_table(&self) -> Table {
        let mut table = table![["id", self.get_id()]];

        // Sorted so that the same entity always renders the same way
        let data: BTreeMap<_, _> = self.get_data().into_iter().collect();
        for (key, val) in data {
            table.add_row(row![key, val]);
        }

        table.set_format(*FORMAT_NO_LINESEP);
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common_macros::hash_map;

    struct Dummy;

    impl Entity for Dummy {
        type Id = u64;

        fn get_id(&self) -> u64 {
            7
        }

        fn get_data(&self) -> HashMap<String, String> {
            hash_map! {
                "title".into() => "Heat".into(),
                "language".into() => "en".into(),
            }
        }
    }

    #[test]
    fn entity_table_has_id_and_data_rows() {
        let table = Dummy.to_table();

        assert_eq!(table.len(), 3);

        let cell = |row: usize, col: usize| {
            table
                .get_row(row)
                .and_then(|r| r.get_cell(col))
                .map(|c| c.get_content())
        };

        assert_eq!(cell(0, 1), Some("7".to_string()));
        assert_eq!(cell(1, 0), Some("language".to_string()));
        assert_eq!(cell(2, 1), Some("Heat".to_string()));
    }
}
