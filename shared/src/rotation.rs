//! Turns a chosen slot into the cumulative rotation the wheel animates to.
//!
//! Slices are laid out clockwise from 0° (3 o'clock): slice `i` covers
//! `[i, i + 1) * slice` degrees. Rotating the wheel by `v` moves a point at
//! angle `a` to `a + v`, so the slice under the pointer after a rotation `v`
//! is the one containing `POINTER - v`.

use rand::Rng;

use crate::constants::{FULL_TURN_DEGREES, JITTER_FRACTION, MIN_SPIN_TURNS, POINTER_ANGLE_DEGREES};
use crate::error::SpinError;

pub fn slice_angle(slot_count: usize) -> f64 {
    FULL_TURN_DEGREES / slot_count as f64
}

/// Wraps an angle into `[0, 360)`.
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(FULL_TURN_DEGREES);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= FULL_TURN_DEGREES {
        0.0
    } else {
        wrapped
    }
}

/// Slot currently under the pointer for a given cumulative rotation.
pub fn slot_at_pointer(rotation: f64, slot_count: usize) -> usize {
    if slot_count == 0 {
        return 0;
    }
    let offset = normalize_degrees(POINTER_ANGLE_DEGREES - rotation);
    ((offset / slice_angle(slot_count)).floor() as usize).min(slot_count - 1)
}

/// Plans the next cumulative rotation so that `slot_index` stops under the pointer.
pub fn plan_rotation<R: Rng + ?Sized>(
    slot_index: usize,
    slot_count: usize,
    prior_rotation: f64,
    rng: &mut R,
) -> Result<f64, SpinError> {
    check_slot(slot_index, slot_count)?;
    plan_rotation_with_jitter(slot_index, slot_count, prior_rotation, rng.gen::<f64>())
}

/// Deterministic form of [`plan_rotation`]; `unit` is the jitter draw in `[0, 1)`.
pub fn plan_rotation_with_jitter(
    slot_index: usize,
    slot_count: usize,
    prior_rotation: f64,
    unit: f64,
) -> Result<f64, SpinError> {
    check_slot(slot_index, slot_count)?;

    let slice = slice_angle(slot_count);
    let max_jitter = JITTER_FRACTION * slice;
    let target = normalize_degrees(POINTER_ANGLE_DEGREES - (slot_index as f64 + 0.5) * slice);

    // The floor includes the jitter band so the result stays past it after jitter.
    let floor = prior_rotation + MIN_SPIN_TURNS * FULL_TURN_DEGREES + max_jitter;
    let turns = ((floor - target) / FULL_TURN_DEGREES).ceil().max(0.0);
    let mut base = target + turns * FULL_TURN_DEGREES;
    if base <= floor {
        base += FULL_TURN_DEGREES;
    }

    let jitter = ((unit - 0.5) * 2.0 * max_jitter).clamp(-max_jitter, max_jitter);
    Ok(base + jitter)
}

fn check_slot(slot_index: usize, slot_count: usize) -> Result<(), SpinError> {
    if slot_count == 0 || slot_index >= slot_count {
        return Err(SpinError::InvalidSlot {
            index: slot_index,
            count: slot_count,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const MIN_ADVANCE: f64 = MIN_SPIN_TURNS * FULL_TURN_DEGREES;

    #[test]
    fn test_four_slots_lands_on_slot_two() {
        let rotation = plan_rotation_with_jitter(2, 4, 0.0, 0.5).unwrap();
        assert!(rotation >= 1800.0);
        assert_eq!(slot_at_pointer(rotation, 4), 2);
        // centered: 270 - 2.5 * 90 = 45, plus five turns
        assert_eq!(rotation, 1845.0);
    }

    #[test]
    fn test_every_slot_is_reachable_with_extreme_jitter() {
        for slot_count in 1..=12 {
            for slot_index in 0..slot_count {
                for unit in [0.0, 0.25, 0.5, 0.75, 0.999_999, 1.0] {
                    for prior in [0.0, 17.5, 1845.0, 123_456.7] {
                        let rotation =
                            plan_rotation_with_jitter(slot_index, slot_count, prior, unit).unwrap();
                        assert_eq!(
                            slot_at_pointer(rotation, slot_count),
                            slot_index,
                            "count {} index {} unit {} prior {}",
                            slot_count,
                            slot_index,
                            unit,
                            prior
                        );
                        assert!(rotation > prior + MIN_ADVANCE);
                    }
                }
            }
        }
    }

    #[test]
    fn test_chained_plans_strictly_increase() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut rotation = 0.0;
        for round in 0..200 {
            let slot_count = 1 + round % 7;
            let slot_index = rng.gen_range(0..slot_count);
            let next = plan_rotation(slot_index, slot_count, rotation, &mut rng).unwrap();
            assert!(next > rotation + MIN_ADVANCE);
            assert!(next - rotation >= 1440.0);
            assert_eq!(slot_at_pointer(next, slot_count), slot_index);
            rotation = next;
        }
    }

    #[test]
    fn test_invalid_slots_are_rejected() {
        assert_eq!(
            plan_rotation_with_jitter(0, 0, 0.0, 0.5),
            Err(SpinError::InvalidSlot { index: 0, count: 0 })
        );
        assert_eq!(
            plan_rotation_with_jitter(4, 4, 0.0, 0.5),
            Err(SpinError::InvalidSlot { index: 4, count: 4 })
        );
    }

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(720.0), 0.0);
        assert_eq!(normalize_degrees(-1e-20), 0.0);
    }
}
