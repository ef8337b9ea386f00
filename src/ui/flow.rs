use anyhow::Result;
use dialoguer::Confirm;

use crate::intake::{IntakePatch, Stage};
use crate::wizard::{GenerateOutcome, WizardSession};

use super::prompts::{self, FailureChoice, PreviewChoice};
use super::view;

/// Drive the six-stage wizard until the user saves or quits.
pub async fn run(session: &WizardSession) -> Result<()> {
    view::print_welcome_banner();

    loop {
        match session.stage() {
            stage @ (Stage::Business | Stage::Audience | Stage::Story | Stage::Voice) => {
                collect_stage(session, stage)?;
            }
            Stage::Generating => {
                view::print_stage_header(Stage::Generating);
                view::print_note("Calling the model. This can take a moment...");
                if session.generate().await == GenerateOutcome::Failed
                    && !resolve_failure(session)?
                {
                    return Ok(());
                }
            }
            Stage::Preview => {
                view::print_stage_header(Stage::Preview);
                if let Some(strategy) = session.strategy() {
                    view::print_strategy(&strategy);
                }
                match prompts::preview_menu()? {
                    PreviewChoice::Save => {
                        if session.save().await {
                            view::print_saved();
                            return Ok(());
                        }
                        let reason = session
                            .save_error()
                            .unwrap_or_else(|| "unknown error".to_string());
                        view::print_error(&format!("Save failed: {reason}"));
                    }
                    PreviewChoice::Regenerate => {
                        view::print_note("Calling the model again...");
                        if session.regenerate().await == GenerateOutcome::Failed
                            && !resolve_failure(session)?
                        {
                            return Ok(());
                        }
                    }
                    PreviewChoice::Edit(stage) => {
                        session.jump_to(stage);
                    }
                    PreviewChoice::StartOver => {
                        let confirmed = Confirm::new()
                            .with_prompt("  Clear every answer and start over?")
                            .default(false)
                            .interact()?;
                        if confirmed {
                            session.reset();
                        }
                    }
                    PreviewChoice::Quit => return Ok(()),
                }
            }
        }
    }
}

fn collect_stage(session: &WizardSession, stage: Stage) -> Result<()> {
    view::print_stage_header(stage);
    let record = session.record();
    let patch = match stage {
        Stage::Business => IntakePatch::Business(prompts::business_step(&record.business)?),
        Stage::Audience => IntakePatch::Audience(prompts::audience_step(&record.audience)?),
        Stage::Story => IntakePatch::Story(prompts::story_step(&record.story)?),
        Stage::Voice => IntakePatch::Voice(prompts::voice_step(&record.voice)?),
        Stage::Generating | Stage::Preview => return Ok(()),
    };
    session.patch(patch);
    if !session.advance() {
        view::print_error("Something required is still blank.");
    }
    Ok(())
}

/// Show the failure menu; true means keep looping, false means the user
/// chose to quit.
fn resolve_failure(session: &WizardSession) -> Result<bool> {
    let reason = session
        .generation_error()
        .unwrap_or_else(|| "unknown error".to_string());
    match prompts::generation_failure_menu(&reason)? {
        FailureChoice::Retry => Ok(true),
        FailureChoice::EditAnswers => {
            session.retreat();
            Ok(true)
        }
        FailureChoice::Quit => Ok(false),
    }
}
