//! Randomized tests over seeds and playouts.

use proptest::prelude::*;
use rustc_hash::FxHashSet;

use klondike_core::{build_ordered_deck, shuffle, CardId, GameRng, Klondike};

proptest! {
    #[test]
    fn shuffle_is_a_permutation(seed in any::<u64>()) {
        let deck = build_ordered_deck();
        let shuffled = shuffle(&deck, &mut GameRng::new(seed));

        prop_assert_eq!(shuffled.len(), deck.len());
        let ids: FxHashSet<CardId> = shuffled.iter().map(|c| c.id()).collect();
        prop_assert_eq!(ids.len(), 52);
        prop_assert!(shuffled.iter().all(|c| !c.face_up));
    }

    #[test]
    fn every_deal_has_the_standard_layout(seed in any::<u64>()) {
        let state = Klondike::default().initialize_game(&mut GameRng::new(seed));

        for (i, pile) in state.tableau().iter().enumerate() {
            prop_assert_eq!(pile.len(), i + 1);
            for (j, card) in pile.iter().enumerate() {
                prop_assert_eq!(card.face_up, j == i);
            }
        }
        prop_assert_eq!(state.deck().len(), 24);
        prop_assert!(state.waste().is_empty());
        prop_assert_eq!(state.validate(), Ok(()));
    }

    /// Play random legal actions and check the state invariants after each.
    #[test]
    fn random_playouts_keep_invariants(
        seed in any::<u64>(),
        choices in prop::collection::vec(any::<usize>(), 0..200),
    ) {
        let rules = Klondike::default();
        let mut state = rules.initialize_game(&mut GameRng::new(seed));

        for choice in choices {
            let actions = rules.legal_actions(&state);
            if actions.is_empty() {
                break;
            }
            let action = actions[choice % actions.len()];
            let (moves, score) = (state.moves(), state.score());

            let applied = rules.apply(&mut state, &action);
            prop_assert!(applied.is_ok(), "{:?} rejected: {:?}", action, applied);

            prop_assert_eq!(state.validate(), Ok(()));
            prop_assert!(state.moves() >= moves);
            prop_assert!(state.score() >= score);
            let on_foundations = state.foundations().card_count() as u32;
            prop_assert_eq!(state.score(), 10 * on_foundations);
            prop_assert_eq!(state.game_won(), state.foundations().is_complete());
        }
    }
}
