//! Console blackjack: the token-tracking session loop and card rendering
//! around the round engine.

use std::io::{self, Write};

use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use twentyone::{Card, DealerHand, Deck, Hand, MIN_BET, Outcome, Round, RoundState, Suit};

/// Console blackjack against a scripted dealer.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Seed for the shuffle; drawn from entropy when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Starting token balance.
    #[arg(long, default_value_t = 500)]
    tokens: usize,
}

fn main() {
    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut tokens = args.tokens;

    loop {
        println!("Total Tokens: {tokens}");
        println!("   1) Play Round");
        println!("   2) Quit");
        let choice = prompt_choice("Enter Choice: ", 1, 2);
        println!();

        if choice == 2 {
            println!("Total tokens: {tokens}");
            break;
        }

        let bet = bet_menu(tokens);
        let deck = Deck::shuffled(&mut rng);
        let mut round = match Round::deal(deck, tokens, bet) {
            Ok(round) => round,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        play_round(&mut round);

        match round.resolve() {
            Ok(result) => {
                match result.outcome {
                    Outcome::PlayerWin => println!("Player won"),
                    Outcome::Push => println!("Push"),
                    Outcome::DealerWin => println!("Dealer won"),
                    Outcome::Continues => {}
                }
                println!(
                    "Dealer: {} ({})",
                    format_dealer(&result.dealer_hand),
                    result.dealer_hand.value()
                );
                println!(
                    "Player: {} ({})",
                    format_hand(&result.player_hand),
                    result.player_hand.value()
                );
                println!();
                tokens = tokens.saturating_add_signed(result.delta);
            }
            Err(err) => println!("{err}"),
        }

        if tokens < MIN_BET {
            println!("Out of tokens - game over!");
            break;
        }
    }
}

/// Drives the player's turn and the dealer's hand for one round.
fn play_round(round: &mut Round) {
    while round.state() == RoundState::PlayerTurn {
        print_table(round);
        println!("   1) Hit");
        println!("   2) Double Down");
        println!("   3) Stand");
        let choice = prompt_choice("Enter Choice: ", 1, 3);
        println!();

        let result = match choice {
            1 => round.hit().map(|_| ()),
            2 => round.double_down().map(|_| ()),
            3 => {
                if round.insurance_available() && insurance_menu() {
                    if let Err(err) = round.take_insurance() {
                        println!("{err}");
                    }
                }
                round.stand()
            }
            _ => Ok(()),
        };

        if let Err(err) = result {
            println!("{err}");
            println!();
        }
    }

    if round.state() == RoundState::DealerTurn {
        match round.dealer_play() {
            Ok(drawn) if !drawn.is_empty() => {
                println!("Dealer draws {} card(s).", drawn.len());
            }
            Ok(_) => {}
            Err(err) => println!("{err}"),
        }
    }
}

/// Prompts until the bet passes the engine's validation rules.
fn bet_menu(tokens: usize) -> usize {
    loop {
        println!("Total tokens: {tokens}");
        let bet = prompt_number("Your bet: ");

        match Round::validate_bet(tokens, bet) {
            Ok(()) => {
                println!();
                return bet;
            }
            Err(err) => println!("{err}"),
        }
    }
}

/// Offers insurance; returns whether the player accepted.
fn insurance_menu() -> bool {
    println!("Would you like to purchase insurance?");
    println!("   1) Yes");
    println!("   2) No");
    let choice = prompt_choice("Enter Choice: ", 1, 2);
    println!();
    choice == 1
}

fn print_table(round: &Round) {
    println!("Dealer: {}", format_dealer(round.dealer_hand()));
    println!(
        "Player: {} ({})",
        format_hand(round.player_hand()),
        round.player_hand().value()
    );
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        // Closed stdin: there is no player left to prompt.
        Ok(0) | Err(_) => std::process::exit(0),
        Ok(_) => input.trim().to_string(),
    }
}

fn prompt_number(prompt: &str) -> usize {
    loop {
        match prompt_line(prompt).parse() {
            Ok(value) => return value,
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn prompt_choice(prompt: &str, low: usize, high: usize) -> usize {
    loop {
        let choice = prompt_number(prompt);
        if (low..=high).contains(&choice) {
            return choice;
        }
        println!("Incorrect option. Please specify a number {low}-{high}.");
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = match card.rank {
        1 => "A".to_string(),
        11 => "J".to_string(),
        12 => "Q".to_string(),
        13 => "K".to_string(),
        _ => card.rank.to_string(),
    };

    format!("{rank}{}", colorize(suit, color_code))
}

fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(no cards)".to_string();
    }
    format_cards(hand.cards())
}

fn format_dealer(dealer: &DealerHand) -> String {
    if dealer.is_empty() {
        return "(no cards)".to_string();
    }

    if dealer.is_hole_revealed() {
        return format_cards(dealer.cards());
    }

    let mut parts = Vec::new();
    if let Some(card) = dealer.up_card() {
        parts.push(format_card(card));
    }
    if dealer.len() > 1 {
        parts.push("??".to_string());
    }
    parts.join(" ")
}
