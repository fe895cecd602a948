// Proptest generators for legal bowling games.
// Every generated sequence is legal by construction: no frame knocks down
// more pins than are standing.

use proptest::prelude::*;

/// Rolls for one of frames 1..=9: a strike, or two balls totalling at most ten.
pub fn frame_rolls() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        1 => Just(vec![10u8]),
        3 => (0u8..10).prop_flat_map(|a| (Just(a), 0..=10 - a)).prop_map(|(a, b)| vec![a, b]),
    ]
}

/// Two balls that leave at least one pin standing.
pub fn open_frame_rolls() -> impl Strategy<Value = Vec<u8>> {
    (0u8..10)
        .prop_flat_map(|a| (Just(a), 0..10 - a))
        .prop_map(|(a, b)| vec![a, b])
}

/// Tenth-frame rolls, with the bonus ball when a strike or spare earns it.
pub fn tenth_frame_rolls() -> impl Strategy<Value = Vec<u8>> {
    (0u8..=10).prop_flat_map(|a| {
        if a == 10 {
            (0u8..=10)
                .prop_flat_map(|b| {
                    let third_max = if b == 10 { 10 } else { 10 - b };
                    (Just(b), 0..=third_max)
                })
                .prop_map(|(b, c)| vec![10, b, c])
                .boxed()
        } else {
            (0..=10 - a)
                .prop_flat_map(move |b| {
                    if a + b == 10 {
                        (0u8..=10).prop_map(move |c| vec![a, b, c]).boxed()
                    } else {
                        Just(vec![a, b]).boxed()
                    }
                })
                .boxed()
        }
    })
}

/// A complete legal game for one player, flattened into rolls.
pub fn game_rolls() -> impl Strategy<Value = Vec<u8>> {
    (prop::collection::vec(frame_rolls(), 9), tenth_frame_rolls()).prop_map(|(frames, tenth)| {
        frames.into_iter().flatten().chain(tenth).collect()
    })
}

/// A complete game with no strikes and no spares.
pub fn open_game_rolls() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(open_frame_rolls(), 10)
        .prop_map(|frames| frames.into_iter().flatten().collect())
}

/// A legal game cut off after some prefix of its rolls.
pub fn partial_game_rolls() -> impl Strategy<Value = Vec<u8>> {
    game_rolls().prop_flat_map(|rolls| {
        let len = rolls.len();
        (Just(rolls), 0..len).prop_map(|(rolls, cut)| rolls[..cut].to_vec())
    })
}
