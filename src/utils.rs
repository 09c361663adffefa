// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use engine::ScoredCandidate;
use prettytable::{cell, format::consts::FORMAT_NO_LINESEP_WITH_TITLE, row, Table};

pub(crate) fn recommendations_table(candidates: &[ScoredCandidate]) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["Title", "Correlation", "Genre"]);

    for candidate in candidates {
        table.add_row(row![
            candidate.title,
            candidate.display_score(),
            candidate.genres
        ]);
    }

    table.set_format(*FORMAT_NO_LINESEP_WITH_TITLE);
    table
}
