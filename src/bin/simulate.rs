use std::error::Error;
use std::process;

use clap::{ArgAction, Parser};
use rand::SeedableRng;
use rand::rngs::StdRng;

use unbot::{
    Bot, DescribeOptions, Game, HumanBot, PromptColor, ScriptedBot, describe_event, render_state,
};

const DEFAULT_SEED: u64 = 0xDEC0_1DED_5EED_F00D;

#[derive(Parser, Debug)]
#[command(name = "simulate", about = "Play a game of UN against three scripted opponents.")]
struct Args {
    /// Seed for shuffling and the scripted opponents
    #[arg(short = 's', long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Let a scripted player take seat 1 too
    #[arg(long = "auto", action = ArgAction::SetTrue)]
    auto: bool,

    /// Show the table before every scripted turn
    #[arg(long = "visualize", action = ArgAction::SetTrue)]
    visualize: bool,

    /// Stop after this many turns
    #[arg(long = "max-turns", default_value_t = 2000)]
    max_turns: u64,

    /// Only print the final result
    #[arg(short = 'q', long = "quiet", action = ArgAction::SetTrue)]
    quiet: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let human = if args.auto { None } else { Some(1) };
    let builder = Game::builder().with_seed(args.seed).with_human(human);
    let mut game = if args.auto {
        builder.build_with_chooser(&mut unbot::MajorityColor)?
    } else {
        builder.build_with_chooser(&mut PromptColor)?
    };

    let mut bots: Vec<Box<dyn Bot>> = Vec::with_capacity(4);
    for seat in 1..=4u64 {
        if seat == 1 && !args.auto {
            bots.push(Box::new(HumanBot::default()));
        } else {
            bots.push(Box::new(ScriptedBot::seeded(args.seed ^ (seat * 0x9E37_79B9))));
        }
    }

    let names = game.config().names.to_vec();
    let mut transcript_rng = StdRng::seed_from_u64(args.seed);
    let describe = DescribeOptions {
        reveal_draws_for: human,
    };
    let mut print_events = |game: &mut Game| {
        for event in game.take_events() {
            if !args.quiet {
                println!("{}", describe_event(&names, &event, describe, &mut transcript_rng));
            }
        }
    };

    print_events(&mut game);
    while !game.is_finished() {
        let ticket = game.ticket();
        if ticket.turn >= args.max_turns {
            println!("Max turn limit {} reached. Stopping.", args.max_turns);
            break;
        }
        let seat = usize::from(ticket.player) - 1;
        if args.visualize && Some(ticket.player) != human {
            println!("{}", render_state(&game.state_view(ticket.player)?));
        }
        game.run_bot_turn(ticket, bots[seat].as_mut())?;
        print_events(&mut game);
    }

    match game.winner() {
        Some(winner) => println!("Game finished. Winner: {} (player {winner}).", names[usize::from(winner) - 1]),
        None => println!("Game stopped before completion."),
    }
    Ok(())
}
