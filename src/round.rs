//! Console round driver
//!
//! Connects a [`GameSession`] to its collaborators: the prompter supplies
//! answers, the scoreboard hears about questions, victories and losses, and
//! the enrichment source describes a correctly guessed animal.

use std::io::Write;

use tracing::{debug, warn};

use crate::{
    Error, Result,
    ports::{AnimalInfo, AnimalInfoSource, Prompter, Scoreboard},
    session::{GameSession, Prompt},
    tree::{Lesson, render_path},
};

/// How a round ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The guess was right
    Won { animal: String },
    /// The guess was wrong and the tree learned `animal`
    Learned { animal: String, wrong_guess: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummary {
    pub questions_asked: usize,
    pub outcome: RoundOutcome,
}

/// Play one round from the root of the session's tree.
///
/// A question without a child on the chosen side restarts the round from
/// the root. A loss is recorded only once the lesson has been saved.
/// Scoreboard failures are logged and do not end the round.
///
/// # Errors
///
/// - any prompter error (e.g. input closed)
/// - a persistence error after learning; a warning is written to `out` first
pub fn play_round<P, S, I, W>(
    session: &mut GameSession,
    prompter: &mut P,
    scoreboard: &mut S,
    info: &I,
    out: &mut W,
) -> Result<RoundSummary>
where
    P: Prompter + ?Sized,
    S: Scoreboard + ?Sized,
    I: AnimalInfoSource + ?Sized,
    W: Write + ?Sized,
{
    session.reset();
    let mut questions_asked = 0;

    loop {
        match session.prompt()? {
            Prompt::Question(question) => {
                let question = question.to_string();
                let yes = prompter.ask_bool(&question)?;
                match session.answer(yes) {
                    Ok(_) => {
                        scoreboard.record_question_asked();
                        questions_asked += 1;
                    }
                    Err(Error::DeadBranch { question, branch }) => {
                        debug!(at = %render_path(session.steps()), %branch, "dead branch");
                        writeln!(
                            out,
                            "I don't know what comes after '{branch}' to \"{question}\". Let's start over."
                        )?;
                        session.reset();
                    }
                    Err(error) => return Err(error),
                }
            }
            Prompt::Guess(animal) => {
                let animal = animal.to_string();
                let correct = prompter.ask_bool(&format!("Is it a {animal}?"))?;
                session.confirm(correct)?;

                if correct {
                    writeln!(out, "Yay! I guessed it right!")?;
                    write_info(out, &info.describe(&animal))?;
                    if let Err(error) = scoreboard.record_victory() {
                        warn!(%error, "victory not recorded");
                    }
                    return Ok(RoundSummary {
                        questions_asked,
                        outcome: RoundOutcome::Won { animal },
                    });
                }
            }
            Prompt::Lesson { wrong_guess } => {
                let wrong_guess = wrong_guess.to_string();
                let animal = prompter.ask_text("Oh no! What was your animal?")?;
                let question = prompter.ask_text(&format!(
                    "Give me a question that distinguishes a {animal} from a {wrong_guess}:"
                ))?;
                let answer = prompter.ask_bool(&format!(
                    "For a {animal}, what is the answer to your question?"
                ))?;

                let lesson = Lesson::new(animal, question, answer)?;
                let animal = lesson.animal.clone();

                if let Err(error) = session.learn(lesson) {
                    writeln!(
                        out,
                        "Warning: I learned that, but could not save it to {}: {error}",
                        session.store().location().display()
                    )?;
                    return Err(error);
                }
                writeln!(out, "Got it! I'll remember that for next time.")?;

                if let Err(error) = scoreboard.record_loss() {
                    warn!(%error, "loss not recorded");
                }

                return Ok(RoundSummary {
                    questions_asked,
                    outcome: RoundOutcome::Learned {
                        animal,
                        wrong_guess,
                    },
                });
            }
            Prompt::Won { animal } => {
                return Ok(RoundSummary {
                    questions_asked,
                    outcome: RoundOutcome::Won {
                        animal: animal.to_string(),
                    },
                });
            }
        }
    }
}

fn write_info<W: Write + ?Sized>(out: &mut W, info: &AnimalInfo) -> Result<()> {
    if info.is_empty() {
        writeln!(out, "No info available for {}.", info.name)?;
        return Ok(());
    }

    writeln!(out, "Here is some info about this animal from Wikipedia:")?;
    if let Some(summary) = &info.summary {
        writeln!(out, "  Summary: {summary}")?;
    }
    if let Some(thumbnail) = &info.thumbnail {
        writeln!(out, "  Picture: {thumbnail}")?;
    }
    if !info.images.is_empty() {
        writeln!(out, "  More pictures: {}", info.images.len())?;
    }
    Ok(())
}
