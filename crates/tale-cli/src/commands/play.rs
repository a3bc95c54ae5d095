use std::io::{self, BufRead};
use std::path::Path;

use colored::Colorize;
use tale_core::Outcome;
use tale_engine::{Advance, Playthrough};
use tale_story::save_bookmark;

use crate::display;
use crate::prompt::{self, PromptAction};

pub fn run(path: &Path, seed: u64) -> Result<(), String> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    run_with_input(path, seed, &mut input)
}

/// The play-again loop. The story is reloaded (and the RNG reseeded) for
/// every run, so replays of a weighted story take the same path under the
/// same seed.
fn run_with_input(path: &Path, seed: u64, input: &mut impl BufRead) -> Result<(), String> {
    println!("Welcome to this choose your own adventure system!");

    loop {
        let loaded = super::load_reported(path)?;
        let story_path = loaded.story_path.clone();
        let mut play = Playthrough::new(loaded.graph, loaded.current, seed);

        match play_story(&mut play, &story_path, input)? {
            Some(Outcome::Success) => println!(
                "{}",
                "Congratulations! You successfully completed the adventure!".green()
            ),
            Some(Outcome::Failure) => println!(
                "{}",
                "You failed to complete the adventure. Better luck next time!".red()
            ),
            None => {}
        }

        let again = prompt::prompt_char(input, "Do you want to try again? ")
            .map_err(|e| e.to_string())?;
        match again {
            Some('n') | None => break,
            _ => {}
        }
    }

    println!("Thank you for playing!");
    Ok(())
}

/// Walk one playthrough to its end. Returns the outcome, or `None` when the
/// player bookmarked or the input ran out.
fn play_story(
    play: &mut Playthrough,
    story_path: &Path,
    input: &mut impl BufRead,
) -> Result<Option<Outcome>, String> {
    loop {
        let room_id = {
            let room = play.current_room().map_err(|e| e.to_string())?;
            display::print_room(room);
            room.id.clone()
        };

        match play.advance().map_err(|e| e.to_string())? {
            Advance::Finished(outcome) => return Ok(Some(outcome)),
            Advance::Moved(_) => {}
            Advance::AwaitChoice => {
                let labels: Vec<String> = play
                    .choices()
                    .map_err(|e| e.to_string())?
                    .iter()
                    .filter_map(|t| t.description().map(str::to_string))
                    .collect();
                for (index, label) in labels.iter().enumerate() {
                    println!("{index}) {label}");
                }

                let action = prompt::prompt_choice(input, "Choose: ", labels.len())
                    .map_err(|e| e.to_string())?;
                match action {
                    None => return Ok(None),
                    Some(PromptAction::Choice(index)) => {
                        play.choose(index).map_err(|e| e.to_string())?;
                    }
                    Some(PromptAction::Quit) => {
                        let confirmed = prompt::prompt_char(
                            input,
                            "Are you sure you want to quit the adventure? ",
                        )
                        .map_err(|e| e.to_string())?;
                        if matches!(confirmed, Some('y') | None) {
                            return Ok(Some(Outcome::Failure));
                        }
                    }
                    Some(PromptAction::Bookmark) => {
                        let ask = format!(
                            "Bookmarking current location: {room_id}. Enter bookmark filename: "
                        );
                        let Some(name) =
                            prompt::prompt_string(input, &ask).map_err(|e| e.to_string())?
                        else {
                            return Ok(None);
                        };
                        match save_bookmark(&name, story_path, &room_id) {
                            Ok(()) => println!("Bookmark saved in {name}"),
                            Err(_) => println!("Error saving bookmark in {name}"),
                        }
                        return Ok(None);
                    }
                }
            }
        }
    }
}
