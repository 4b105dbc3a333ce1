use maud::{Markup, html};

use crate::model::{DistanceBucket, PuttStat, StatsSnapshot};
use crate::view::dashboard::utils::make_pct_cell;

#[derive(Debug, Clone, PartialEq)]
pub struct PuttingRow {
    pub bucket: DistanceBucket,
    pub first: PuttStat,
    pub second: PuttStat,
}

impl PuttingRow {
    #[must_use]
    pub fn first_cell(&self) -> String {
        make_pct_cell(self.first.pct, self.first.attempts)
    }

    #[must_use]
    pub fn second_cell(&self) -> String {
        make_pct_cell(self.second.pct, self.second.attempts)
    }
}

/// One row per distance bucket, in published order, whether or not the payload has it.
#[must_use]
pub fn putting_rows(snapshot: &StatsSnapshot) -> Vec<PuttingRow> {
    DistanceBucket::ALL
        .iter()
        .map(|&bucket| PuttingRow {
            bucket,
            first: snapshot.first_putt(bucket),
            second: snapshot.second_putt(bucket),
        })
        .collect()
}

/// Rows only; the surrounding `table`/`tbody` belong to the page.
#[must_use]
pub fn render_putting_rows(snapshot: &StatsSnapshot) -> Markup {
    html! {
        @for row in putting_rows(snapshot) {
            tr {
                td { (row.bucket.label()) }
                td { (row.first_cell()) }
                td { (row.second_cell()) }
            }
        }
    }
}
