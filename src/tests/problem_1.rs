//! Small textbook linear program with a lower bound.
//!
//! Minimize `-2x + y - 5` subject to `x + 2y <= 6`, `3x + 2y <= 12` and `y >= 0`. The optimum is
//! `x = 4, y = 0` with value `-13`.
use approx::assert_abs_diff_eq;

use crate::algorithm::two_phase::{IterationCounter, phase_one, phase_two};
use crate::algorithm::two_phase::strategy::pivot_rule::SteepestDescentAlongVariable;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::algorithm::two_phase::tableau::label::ColumnLabel;
use crate::data::linear_algebra::matrix::Dense;
use crate::data::linear_program::constraint::LinearConstraint;
use crate::data::linear_program::elements::{ConstraintType, Objective};
use crate::data::linear_program::objective::LinearObjectiveFunction;

#[test]
fn conversion_pipeline() {
    let mut tableau = tableau_form();
    assert_eq!(tableau.column_labels(), column_labels().as_slice());
    let mut counter = IterationCounter::new(10);

    // Phase one: y enters in the row of the lower bound
    let result = phase_one::primal::<_, SteepestDescentAlongVariable>(&mut tableau, &mut counter);
    assert!(result.is_ok());
    assert_eq!(counter.count(), 1);
    assert_eq!(tableau.basic_row(3), Some(4));

    // Only the artificial column has a positive cost
    tableau.drop_phase_one_objective();
    assert_eq!(tableau.column_labels(), &[
        ColumnLabel::Objective,
        ColumnLabel::Decision(0),
        ColumnLabel::Decision(1),
        ColumnLabel::NegativeOffset,
        ColumnLabel::Slack(0),
        ColumnLabel::Slack(1),
        ColumnLabel::Slack(2),
        ColumnLabel::RightHandSide,
    ]);
    assert_eq!(tableau.matrix(), &Dense::from_data(vec![
        vec![-1f64, -2f64, 0f64, 2f64, 0f64, 0f64, 1f64, 5f64],
        vec![0f64, 1f64, 0f64, -1f64, 1f64, 0f64, 2f64, 6f64],
        vec![0f64, 3f64, 0f64, -3f64, 0f64, 1f64, 2f64, 12f64],
        vec![0f64, 0f64, 1f64, -1f64, 0f64, 0f64, -1f64, 0f64],
    ]));

    // Phase two: x enters in the row of the second constraint
    let result = phase_two::primal::<_, SteepestDescentAlongVariable>(&mut tableau, &mut counter);
    assert!(result.is_ok());
    assert_eq!(counter.count(), 2);
    assert_eq!(tableau.basic_row(1), Some(2));
    assert_eq!(tableau.basic_row(3), None);

    let solution = tableau.solution(&objective());
    assert_abs_diff_eq!(solution.point()[0], 4f64);
    assert_abs_diff_eq!(solution.point()[1], 0f64);
    assert_abs_diff_eq!(solution.value(), -13f64);
}

pub fn objective() -> LinearObjectiveFunction<f64> {
    LinearObjectiveFunction::new(vec![-2f64, 1f64], -5f64)
}

pub fn constraints() -> Vec<LinearConstraint<f64>> {
    vec![
        LinearConstraint::new(vec![1f64, 2f64], ConstraintType::Less, 6f64),
        LinearConstraint::new(vec![3f64, 2f64], ConstraintType::Less, 12f64),
        LinearConstraint::new(vec![0f64, 1f64], ConstraintType::Greater, 0f64),
    ]
}

/// Minimizing, variables not restricted to be non negative.
pub fn tableau_form() -> Tableau<f64> {
    Tableau::new(&objective(), &constraints(), Objective::Minimize, false, 1e-6)
}

/// Maximizing the same objective without the lower bound, with non negative variables.
pub fn tableau_form_without_lower_bound() -> Tableau<f64> {
    Tableau::new(&objective(), &constraints()[..2], Objective::Maximize, true, 1e-6)
}

pub fn column_labels() -> Vec<ColumnLabel> {
    vec![
        ColumnLabel::ArtificialObjective,
        ColumnLabel::Objective,
        ColumnLabel::Decision(0),
        ColumnLabel::Decision(1),
        ColumnLabel::NegativeOffset,
        ColumnLabel::Slack(0),
        ColumnLabel::Slack(1),
        ColumnLabel::Slack(2),
        ColumnLabel::Artificial(0),
        ColumnLabel::RightHandSide,
    ]
}

pub fn matrix_form() -> Dense<f64> {
    Dense::from_data(vec![
        vec![-1f64, 0f64, 0f64, -1f64, 1f64, 0f64, 0f64, 1f64, 0f64, 0f64],
        vec![0f64, -1f64, -2f64, 1f64, 1f64, 0f64, 0f64, 0f64, 0f64, 5f64],
        vec![0f64, 0f64, 1f64, 2f64, -3f64, 1f64, 0f64, 0f64, 0f64, 6f64],
        vec![0f64, 0f64, 3f64, 2f64, -5f64, 0f64, 1f64, 0f64, 0f64, 12f64],
        vec![0f64, 0f64, 0f64, 1f64, -1f64, 0f64, 0f64, -1f64, 1f64, 0f64],
    ])
}
