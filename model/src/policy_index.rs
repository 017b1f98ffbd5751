use std::collections::HashMap;
use std::fmt::Display;
use std::marker::PhantomData;

use engine::Player;

const FILES: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];
const RANKS: [char; 8] = ['1', '2', '3', '4', '5', '6', '7', '8'];
const PROMOTIONS: [char; 4] = ['q', 'r', 'b', 'n'];
const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-1, -2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, 2),
    (2, 1),
    (1, 2),
];

pub const UCI_POLICY_SIZE: usize = 1968;

/// Maps an action to its slot in the model's flat policy output.
pub trait PolicyIndex {
    type Action;

    fn policy_index(&self, action: &Self::Action, player: Player) -> Option<usize>;
    fn policy_size(&self) -> usize;
}

/// The chess move labels in policy order: every queen-line and knight move from every square,
/// followed by the pawn promotions.
pub fn create_uci_labels() -> Vec<String> {
    let mut labels = Vec::with_capacity(UCI_POLICY_SIZE);

    for f1 in 0..8i32 {
        for r1 in 0..8i32 {
            let destinations = (0..8)
                .map(|t| (t, r1))
                .chain((0..8).map(|t| (f1, t)))
                .chain((-7..8).map(|t| (f1 + t, r1 + t)))
                .chain((-7..8).map(|t| (f1 + t, r1 - t)))
                .chain(KNIGHT_OFFSETS.iter().map(|(a, b)| (f1 + a, r1 + b)));

            for (f2, r2) in destinations {
                if (f1, r1) != (f2, r2) && (0..8).contains(&f2) && (0..8).contains(&r2) {
                    labels.push(square_pair(f1, r1, f2, r2));
                }
            }
        }
    }

    for f1 in 0..8i32 {
        for promotion in PROMOTIONS {
            let mut targets = vec![f1];
            if f1 > 0 {
                targets.push(f1 - 1);
            }
            if f1 < 7 {
                targets.push(f1 + 1);
            }

            for f2 in targets {
                labels.push(format!("{}{}", square_pair(f1, 1, f2, 0), promotion));
                labels.push(format!("{}{}", square_pair(f1, 6, f2, 7), promotion));
            }
        }
    }

    labels
}

/// The labels mirrored across the board's horizontal axis, so index `i` names the second player's
/// equivalent of `create_uci_labels()[i]`.
pub fn flipped_uci_labels() -> Vec<String> {
    create_uci_labels()
        .into_iter()
        .map(|label| {
            label
                .chars()
                .map(|c| match c.to_digit(10) {
                    Some(d) => char::from_digit(9 - d, 10).unwrap_or(c),
                    None => c,
                })
                .collect()
        })
        .collect()
}

fn square_pair(f1: i32, r1: i32, f2: i32, r2: i32) -> String {
    [
        FILES[f1 as usize],
        RANKS[r1 as usize],
        FILES[f2 as usize],
        RANKS[r2 as usize],
    ]
    .iter()
    .collect()
}

/// Looks actions up by their UCI text. The first player reads the labels as-is and the second player
/// reads the mirrored labels, matching a model that always sees the side to move at the bottom.
pub struct UciPolicyIndex<A> {
    first: HashMap<String, usize>,
    second: HashMap<String, usize>,
    _action: PhantomData<A>,
}

impl<A> UciPolicyIndex<A> {
    pub fn new() -> Self {
        let index = |labels: Vec<String>| {
            labels
                .into_iter()
                .enumerate()
                .map(|(i, label)| (label, i))
                .collect::<HashMap<_, _>>()
        };

        Self {
            first: index(create_uci_labels()),
            second: index(flipped_uci_labels()),
            _action: PhantomData,
        }
    }
}

impl<A> Default for UciPolicyIndex<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Display> PolicyIndex for UciPolicyIndex<A> {
    type Action = A;

    fn policy_index(&self, action: &A, player: Player) -> Option<usize> {
        let table = match player {
            Player::First => &self.first,
            Player::Second => &self.second,
        };

        table.get(&action.to_string()).copied()
    }

    fn policy_size(&self) -> usize {
        UCI_POLICY_SIZE
    }
}
