//! Derivative-free scalar minimisation.
//!
//! Wraps `argmin`'s Nelder–Mead solver for one-dimensional problems.
//! The caller supplies a closure; non-finite costs are replaced by a
//! large penalty so the simplex steps back into the feasible region.

use argmin::core::{
    CostFunction, Error as ArgminError, Executor, State, TerminationReason, TerminationStatus,
};
use argmin::solver::neldermead::NelderMead;
use serde::{Deserialize, Serialize};

use railcontact_types::{ContactError, ContactResult};

/// Cost returned in place of NaN/Inf.
const PENALTY: f64 = 1.0e30;

/// Outcome of a scalar minimisation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Minimum {
    /// Best argument found.
    pub argument: f64,
    /// Cost at `argument`.
    pub cost: f64,
    /// Iterations performed.
    pub iterations: u64,
    /// Whether the simplex collapsed below the tolerance before the
    /// iteration cap was reached.
    pub converged: bool,
}

/// One-dimensional Nelder–Mead minimiser.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalarMinimizer {
    /// Maximum number of simplex iterations.
    pub max_iterations: u64,
    /// Standard deviation of the simplex costs at which to stop.
    pub sd_tolerance: f64,
    /// Relative offset of the second simplex vertex from the seed.
    pub initial_step: f64,
}

impl Default for ScalarMinimizer {
    fn default() -> Self {
        Self {
            max_iterations: 500,
            sd_tolerance: 1.0e-16,
            initial_step: 0.05,
        }
    }
}

struct ClosureCost<F>(F);

impl<F: Fn(f64) -> f64> CostFunction for ClosureCost<F> {
    type Param = Vec<f64>;
    type Output = f64;

    fn cost(&self, param: &Self::Param) -> Result<Self::Output, ArgminError> {
        let value = (self.0)(param[0]);
        Ok(if value.is_finite() { value } else { PENALTY })
    }
}

impl ScalarMinimizer {
    /// Creates a minimiser with the given iteration cap and default tolerances.
    pub fn with_max_iterations(max_iterations: u64) -> Self {
        Self {
            max_iterations,
            ..Default::default()
        }
    }

    /// Minimises `cost` starting from `seed`.
    ///
    /// Returns an error only if the solver cannot be constructed or
    /// aborts; an unconverged run is reported through
    /// [`Minimum::converged`].
    pub fn minimize<F>(&self, cost: F, seed: f64) -> ContactResult<Minimum>
    where
        F: Fn(f64) -> f64,
    {
        let step = if seed.abs() > 0.0 {
            seed.abs() * self.initial_step
        } else {
            self.initial_step
        };
        let simplex = vec![vec![seed], vec![seed + step]];

        let solver = NelderMead::new(simplex)
            .with_sd_tolerance(self.sd_tolerance)
            .map_err(|e| ContactError::Optimizer(e.to_string()))?;

        let result = Executor::new(ClosureCost(cost), solver)
            .configure(|state| state.max_iters(self.max_iterations))
            .run()
            .map_err(|e| ContactError::Optimizer(e.to_string()))?;

        let state = result.state();
        let argument = state
            .get_best_param()
            .and_then(|p| p.first().copied())
            .unwrap_or(seed);
        let converged = matches!(
            state.get_termination_status(),
            TerminationStatus::Terminated(TerminationReason::SolverConverged)
        );

        Ok(Minimum {
            argument,
            cost: state.get_best_cost(),
            iterations: state.get_iter(),
            converged,
        })
    }
}
