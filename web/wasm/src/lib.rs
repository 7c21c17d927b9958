use bjtable::{BlackjackRule, Card, Hand, Round, RoundOptions, RoundState};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmRound {
    round: Round,
}

#[wasm_bindgen]
impl WasmRound {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32, natural_blackjack: bool) -> Self {
        let rule = if natural_blackjack {
            BlackjackRule::Natural
        } else {
            BlackjackRule::AnyTwentyOne
        };
        let options = RoundOptions::default().with_blackjack(rule);

        Self {
            round: Round::new(options, u64::from(seed)),
        }
    }

    pub fn deal(&mut self) -> Result<(), JsValue> {
        self.round.deal().map_err(js_err)
    }

    pub fn hit_player(&mut self) -> bool {
        self.round.hit_player().is_some()
    }

    pub fn hit_dealer(&mut self) -> bool {
        self.round.hit_dealer().is_some()
    }

    pub fn reset(&mut self) {
        self.round.reset();
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let derived = self.round.snapshot();

        let snapshot = Snapshot {
            state: state_to_str(derived.state),
            player: JsHand::from_hand(
                self.round.player_hand(),
                derived.player_bust,
                derived.player_blackjack,
            ),
            dealer: JsHand::from_hand(
                self.round.dealer_hand(),
                derived.dealer_bust,
                derived.dealer_blackjack,
            ),
            cards_remaining: derived.remaining_cards as u32,
            can_hit_player: derived.can_hit_player,
            can_hit_dealer: derived.can_hit_dealer,
        };

        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct Snapshot {
    state: &'static str,
    player: JsHand,
    dealer: JsHand,
    cards_remaining: u32,
    can_hit_player: bool,
    can_hit_dealer: bool,
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: &'static str,
    id: String,
}

#[derive(Serialize)]
struct JsHand {
    cards: Vec<JsCard>,
    value: u16,
    is_soft: bool,
    is_bust: bool,
    is_blackjack: bool,
}

impl JsHand {
    fn from_hand(hand: &Hand, is_bust: bool, is_blackjack: bool) -> Self {
        Self {
            cards: hand.cards().iter().copied().map(card_to_js).collect(),
            value: hand.value(),
            is_soft: hand.is_soft(),
            is_bust,
            is_blackjack,
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: card.suit.name(),
        rank: card.rank.name(),
        id: card.asset_id(),
    }
}

fn state_to_str(state: RoundState) -> &'static str {
    match state {
        RoundState::Idle => "Idle",
        RoundState::Active => "Active",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
