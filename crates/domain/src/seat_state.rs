use std::collections::HashSet;

/// Seat occupancy extracted from one seating page load.
///
/// Downstream logic consults the derived available set, never occupancy
/// alone, so a seat label that was not observed on the page is treated as
/// unavailable rather than available by omission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeatState {
    pub all: HashSet<String>,
    pub occupied: HashSet<String>,
}

impl SeatState {
    pub fn new(all: HashSet<String>, occupied: HashSet<String>) -> Self {
        Self { all, occupied }
    }

    pub fn available(&self) -> HashSet<String> {
        self.all.difference(&self.occupied).cloned().collect()
    }

    pub fn is_available(&self, seat_number: &str) -> bool {
        self.all.contains(seat_number) && !self.occupied.contains(seat_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(labels: &[&str]) -> HashSet<String> {
        labels.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn available_is_all_minus_occupied() {
        let state = SeatState::new(labels(&["A1", "A2", "B1"]), labels(&["A1"]));
        assert_eq!(state.available(), labels(&["A2", "B1"]));
        assert!(!state.is_available("A1"));
        assert!(state.is_available("A2"));
    }

    #[test]
    fn unobserved_seat_is_not_available() {
        let state = SeatState::new(labels(&["A1"]), labels(&[]));
        assert!(!state.is_available("Z9"));
        assert!(!state.available().contains("Z9"));
    }
}
