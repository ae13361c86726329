use super::round2;
use crate::config::{Rate, Rates};
use crate::model::EstimateSystem;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SystemCost {
    pub system: EstimateSystem,
    pub work: f64,
    pub material: f64,
}

impl SystemCost {
    fn new(system: EstimateSystem, area: f64, rate: Rate) -> Self {
        Self {
            system,
            work: round2(area * rate.work),
            material: round2(area * rate.material),
        }
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        round2(self.work + self.material)
    }
}

/// Cost of the underground (basement) distribution, priced per square metre.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UndergroundCost {
    pub area: f64,
    pub cold: SystemCost,
    pub hot: SystemCost,
    pub total: f64,
}

/// `None` when there is no underground area to price.
#[must_use]
pub fn underground_cost(area: f64, rates: &Rates) -> Option<UndergroundCost> {
    if !area.is_finite() || area <= 0.0 {
        return None;
    }
    let cold = SystemCost::new(EstimateSystem::Cold, area, rates.cold);
    let hot = SystemCost::new(EstimateSystem::Hot, area, rates.hot);
    Some(UndergroundCost {
        area,
        cold,
        hot,
        total: round2(cold.total() + hot.total()),
    })
}
