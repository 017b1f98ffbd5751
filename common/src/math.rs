/// A visit count as a divisor. Zero counts as one so unvisited nodes never produce NaN or infinity.
pub fn visits_or_one(visits: usize) -> f32 {
    visits.max(1) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visits_or_one() {
        assert_eq!(visits_or_one(0), 1.0);
        assert_eq!(visits_or_one(1), 1.0);
        assert_eq!(visits_or_one(9), 9.0);
    }
}
