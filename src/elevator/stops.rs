use crate::shared::{Direction, Floor};

/**
 * Orders a stop list so the elevator finishes its current sweep before reversing.
 *
 * Stops at or above `pivot` are sorted ascending and stops below it descending,
 * duplicates removed. Going up, the upper half is served first. Going down, the
 * lower half is served first, and a stop exactly at `pivot` is treated as the
 * start of the downward sweep.
 */
pub fn order_stops(stops: &[Floor], pivot: Floor, direction: Direction) -> Vec<Floor> {
    let (mut greater, mut less): (Vec<Floor>, Vec<Floor>) =
        stops.iter().partition(|&&stop| stop >= pivot);

    greater.sort_unstable();
    greater.dedup();
    less.sort_unstable_by(|a, b| b.cmp(a));
    less.dedup();

    match direction {
        Direction::Up => {
            greater.extend(less);
            greater
        }
        Direction::Down => {
            if greater.first() == Some(&pivot) {
                greater.remove(0);
                less.insert(0, pivot);
            }
            less.extend(greater);
            less
        }
    }
}

/// Smallest and largest value of a non-empty stop list.
pub fn min_max(stops: &[Floor]) -> Option<(Floor, Floor)> {
    let smallest = stops.iter().copied().min()?;
    let biggest = stops.iter().copied().max()?;
    Some((smallest, biggest))
}
