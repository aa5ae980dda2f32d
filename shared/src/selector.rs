use rand::Rng;

use crate::catalog::RewardItem;
use crate::error::SpinError;

/// Checks that `items` can be drawn from and returns the total weight.
pub fn total_weight(items: &[RewardItem]) -> Result<f64, SpinError> {
    if items.is_empty() {
        return Err(SpinError::EmptyWheel);
    }
    let mut total = 0.0;
    for item in items {
        if !(item.weight.is_finite() && item.weight > 0.0) {
            return Err(SpinError::InvalidWeight {
                id: item.id.clone(),
                weight: item.weight,
            });
        }
        total += item.weight;
    }
    Ok(total)
}

/// Maps a unit draw in `[0, 1)` onto a slot index, proportionally to the weights.
pub fn select_slot(items: &[RewardItem], unit: f64) -> Result<usize, SpinError> {
    let total = total_weight(items)?;
    let mut remaining = unit.clamp(0.0, 1.0) * total;
    for (index, item) in items.iter().enumerate() {
        remaining -= item.weight;
        if remaining < 0.0 {
            return Ok(index);
        }
    }
    // r == total after rounding
    Ok(items.len() - 1)
}

pub fn pick_slot<R: Rng + ?Sized>(items: &[RewardItem], rng: &mut R) -> Result<usize, SpinError> {
    total_weight(items)?;
    select_slot(items, rng.gen::<f64>())
}

pub fn pick<'a, R: Rng + ?Sized>(
    items: &'a [RewardItem],
    rng: &mut R,
) -> Result<&'a RewardItem, SpinError> {
    pick_slot(items, rng).map(|index| &items[index])
}
