use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};

/// Diagnostic view of a node: its visits and every child with the breakdown of its selection score,
/// best child first.
pub struct NodeDetails<A> {
    pub visits: usize,
    pub children: Vec<(A, ScoreDetails)>,
}

impl<A: Display> Display for NodeDetails<A> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "N: {}, Actions: [", self.visits)?;

        for (action, details) in &self.children {
            write!(f, "\n\t(A: {}, {}),", action, details)?;
        }

        write!(f, "]")
    }
}

impl<A: Display> Debug for NodeDetails<A> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        Display::fmt(self, f)
    }
}

/// The terms of a child's selection score.
///
/// `Qsa` is the mean value from the perspective of the player choosing, `Usa` the exploration bonus.
#[derive(Clone, Copy)]
#[allow(non_snake_case)]
pub struct ScoreDetails {
    pub Nsa: usize,
    pub Qsa: f32,
    pub Psa: f32,
    pub Usa: f32,
    pub cpuct: f32,
    pub score: f32,
}

impl Display for ScoreDetails {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(
            f,
            "Nsa: {}, Qsa: {:.3}, Psa: {:.3}, Usa: {:.3}, cpuct: {:.2}, score: {:.3}",
            self.Nsa, self.Qsa, self.Psa, self.Usa, self.cpuct, self.score
        )
    }
}

impl Debug for ScoreDetails {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Orders by visits, then by mean value, then prior, then exploration bonus.
impl Ord for ScoreDetails {
    fn cmp(&self, other: &Self) -> Ordering {
        self.Nsa
            .cmp(&other.Nsa)
            .then_with(|| self.Qsa.total_cmp(&other.Qsa))
            .then_with(|| self.Psa.total_cmp(&other.Psa))
            .then_with(|| self.Usa.total_cmp(&other.Usa))
    }
}

impl PartialOrd for ScoreDetails {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ScoreDetails {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ScoreDetails {}
