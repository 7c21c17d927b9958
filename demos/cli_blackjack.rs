//! CLI blackjack example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjtable::{Card, Hand, Round, RoundOptions, RoundState, Seat, Suit};

fn main() {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    println!("Blackjack CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut round = Round::new(RoundOptions::default(), seed);

    loop {
        print_table(&round);
        println!("{}", format_actions(&round));

        let action = prompt_line("Action: ");
        match action.as_str() {
            "d" | "deal" if round.state() == RoundState::Idle => {
                if let Err(err) = round.deal() {
                    println!("Deal error: {err}");
                }
            }
            "h" | "hit" => {
                if let Err(err) = round.try_hit_player() {
                    println!("Cannot hit: {err}");
                }
            }
            "x" | "dealer" => {
                if let Err(err) = round.try_hit_dealer() {
                    println!("Cannot hit dealer: {err}");
                }
            }
            "n" | "new" => round.reset(),
            "q" | "quit" => {
                println!("Goodbye.");
                return;
            }
            _ => println!("Unknown action."),
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_table(round: &Round) {
    let snapshot = round.snapshot();

    println!(
        "\nDealer: {} {}",
        format_hand(round.dealer_hand()),
        format_status(
            round.dealer_hand(),
            snapshot.dealer_bust,
            snapshot.dealer_blackjack
        )
    );
    println!(
        "You:    {} {}",
        format_hand(round.player_hand()),
        format_status(
            round.player_hand(),
            snapshot.player_bust,
            snapshot.player_blackjack
        )
    );

    if snapshot.state == RoundState::Active {
        println!("Cards remaining in deck: {}", snapshot.remaining_cards);
    }
    println!();
}

fn format_status(hand: &Hand, bust: bool, blackjack: bool) -> String {
    if hand.is_empty() {
        return "(no cards dealt)".to_string();
    }

    let mut status = format!("| value {}", hand.value());
    if bust {
        status.push_str(&colorize(" BUST!", "31"));
    } else if blackjack {
        status.push_str(&colorize(" BLACKJACK!", "33"));
    }
    status
}

fn format_actions(round: &Round) -> String {
    let parts = if round.state() == RoundState::Idle {
        vec![format_action("deal", "d", true)]
    } else {
        vec![
            format_action("hit me", "h", round.can_hit(Seat::Player)),
            format_action("hit dealer", "x", round.can_hit(Seat::Dealer)),
            format_action("new game", "n", true),
        ]
    };
    format!("Actions: {} [q]uit", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "-".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs | Suit::Spades => "37",
    };
    colorize(&card.to_string(), color_code)
}
