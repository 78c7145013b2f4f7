//! # Column layout
//!
//! The columns of a freshly built tableau are organized in consecutive groups:
//!
//! ```text
//! [W] Z | x0 .. xn [x-] | s0 .. sk | a0 .. al | RHS
//! ```
//!
//! The `W` column only exists when there are artificial variables, the `x-` column only when the
//! decision variables are not restricted to be non negative.
use cumsum::cumsum_array_owned;
use enum_map::{Enum, EnumMap, enum_map};
use itertools::chain;

use crate::algorithm::two_phase::tableau::label::ColumnLabel;

/// A group of consecutive columns.
#[allow(missing_docs)]
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum ColumnGroup {
    Objective,
    Decision,
    NegativeOffset,
    Slack,
    Artificial,
    RightHandSide,
}

/// Positions of the column groups of a tableau before any column is removed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ColumnLayout {
    /// Index one past the last column of each group.
    group_end: EnumMap<ColumnGroup, usize>,
}

impl ColumnLayout {
    /// Compute the layout from the size of each group.
    ///
    /// # Arguments
    ///
    /// * `nr_objective_rows`: Either 1 or 2, each objective row gets a column.
    /// * `nr_decision_variables`: Number of decision variables of the problem, without the offset.
    /// * `has_negative_offset`: Whether a shared offset column is needed.
    /// * `nr_slack_variables`, `nr_artificial_variables`: Sizes of those groups.
    pub fn new(
        nr_objective_rows: usize,
        nr_decision_variables: usize,
        has_negative_offset: bool,
        nr_slack_variables: usize,
        nr_artificial_variables: usize,
    ) -> Self {
        debug_assert!(nr_objective_rows == 1 || nr_objective_rows == 2);
        debug_assert_eq!(nr_objective_rows == 2, nr_artificial_variables > 0);

        let cumulative = cumsum_array_owned([
            nr_objective_rows,
            nr_decision_variables,
            usize::from(has_negative_offset),
            nr_slack_variables,
            nr_artificial_variables,
            1,
        ]);
        let group_end = enum_map!{
            ColumnGroup::Objective      => cumulative[0],
            ColumnGroup::Decision       => cumulative[1],
            ColumnGroup::NegativeOffset => cumulative[2],
            ColumnGroup::Slack          => cumulative[3],
            ColumnGroup::Artificial     => cumulative[4],
            ColumnGroup::RightHandSide  => cumulative[5],
        };

        Self { group_end }
    }

    /// Index of the first column of a group.
    ///
    /// For empty groups, this is the start of the next group.
    pub fn start(&self, group: ColumnGroup) -> usize {
        match group {
            ColumnGroup::Objective => 0,
            ColumnGroup::Decision => self.group_end[ColumnGroup::Objective],
            ColumnGroup::NegativeOffset => self.group_end[ColumnGroup::Decision],
            ColumnGroup::Slack => self.group_end[ColumnGroup::NegativeOffset],
            ColumnGroup::Artificial => self.group_end[ColumnGroup::Slack],
            ColumnGroup::RightHandSide => self.group_end[ColumnGroup::Artificial],
        }
    }

    /// Index one past the last column of a group.
    pub fn end(&self, group: ColumnGroup) -> usize {
        self.group_end[group]
    }

    /// Number of columns in a group.
    pub fn len(&self, group: ColumnGroup) -> usize {
        self.end(group) - self.start(group)
    }

    /// Total number of columns.
    pub fn width(&self) -> usize {
        self.group_end[ColumnGroup::RightHandSide]
    }

    /// A label for every column, in column order.
    pub fn labels(&self) -> Vec<ColumnLabel> {
        let objective = if self.len(ColumnGroup::Objective) == 2 {
            vec![ColumnLabel::ArtificialObjective, ColumnLabel::Objective]
        } else {
            vec![ColumnLabel::Objective]
        };
        let offset = (self.len(ColumnGroup::NegativeOffset) > 0)
            .then_some(ColumnLabel::NegativeOffset);

        chain!(
            objective,
            (0..self.len(ColumnGroup::Decision)).map(ColumnLabel::Decision),
            offset,
            (0..self.len(ColumnGroup::Slack)).map(ColumnLabel::Slack),
            (0..self.len(ColumnGroup::Artificial)).map(ColumnLabel::Artificial),
            [ColumnLabel::RightHandSide],
        ).collect()
    }
}
