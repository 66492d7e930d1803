//! Onboarding wizard orchestration
//!
//! Walks the couple through the six onboarding steps, either interactively
//! or from a draft filled in by command-line flags, and then stores the
//! wedding.

use std::io::{BufRead, Write};
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

use crate::config::{paths::WedplanPaths, settings::Settings};
use crate::error::WedplanResult;
use crate::models::WeddingStyle;
use crate::services::{OnboardingOutcome, WeddingService};
use crate::storage::Storage;

use super::steps::{BudgetRange, GuestRange, OnboardingDraft, OnboardingStep};

/// Line-oriented prompts over any reader and writer
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` and read one trimmed line; `None` once input is exhausted
    pub fn ask(&mut self, prompt: &str) -> WedplanResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    pub fn say(&mut self, line: &str) -> WedplanResult<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Yes/no question where a blank answer means yes
    pub fn confirm(&mut self, prompt: &str) -> WedplanResult<bool> {
        Ok(match self.ask(prompt)? {
            None => false,
            Some(answer) => {
                let answer = answer.to_lowercase();
                answer.is_empty() || answer == "y" || answer == "yes"
            }
        })
    }
}

/// Pick from a numbered menu by position or by name
fn choose<T: Copy + FromStr>(answer: &str, options: &[T]) -> Option<T> {
    match answer.parse::<usize>() {
        Ok(n) if (1..=options.len()).contains(&n) => Some(options[n - 1]),
        _ => answer.parse().ok(),
    }
}

/// The onboarding wizard
pub struct OnboardingWizard {
    paths: WedplanPaths,
}

impl OnboardingWizard {
    pub fn new(paths: WedplanPaths) -> Self {
        Self { paths }
    }

    /// Whether onboarding still has to run
    pub fn needs_onboarding(&self, storage: &Storage, settings: &Settings) -> WedplanResult<bool> {
        Ok(!settings.setup_completed || storage.wedding.get()?.is_none())
    }

    /// Ask every step in turn. Returns `None` when the user cancels or input
    /// runs out before the last gate opens.
    pub fn run<R: BufRead, W: Write>(
        &self,
        storage: &Storage,
        settings: &mut Settings,
        prompter: &mut Prompter<R, W>,
        now: NaiveDateTime,
    ) -> WedplanResult<Option<OnboardingOutcome>> {
        prompter.say("")?;
        prompter.say("===========================================")?;
        prompter.say("  Welcome to wedplan!")?;
        prompter.say("===========================================")?;
        prompter.say("")?;
        prompter.say("Let's set up your wedding plan. Press Ctrl+C at any time to cancel.")?;

        let mut draft = OnboardingDraft::default();
        for step in OnboardingStep::ALL {
            prompter.say("")?;
            let heading = step.to_string();
            prompter.say(&heading)?;
            prompter.say(&"=".repeat(heading.len()))?;

            while !draft.can_proceed(step) {
                if !self.ask_step(step, &mut draft, prompter)? {
                    prompter.say("Onboarding cancelled.")?;
                    return Ok(None);
                }
            }
            debug!(step = step.index(), "Onboarding step complete");
        }

        prompter.say("")?;
        prompter.say("===========================================")?;
        prompter.say("  Summary")?;
        prompter.say("===========================================")?;
        prompter.say(&format!(
            "Couple:   {} & {}",
            draft.partner1_name.trim(),
            draft.partner2_name.trim()
        ))?;
        prompter.say(&format!(
            "Date:     {}",
            draft
                .wedding_date
                .filter(|_| !draft.date_undecided)
                .map(|d| d.to_string())
                .unwrap_or_else(|| "Not sure yet".to_string())
        ))?;
        prompter.say(&format!("Location: {}", draft.location.trim()))?;
        if let Some(range) = draft.guest_range {
            prompter.say(&format!("Guests:   {}", range.label()))?;
        }
        if let Some(style) = draft.style {
            prompter.say(&format!("Style:    {}", style))?;
        }
        if let Some(range) = draft.budget_range {
            prompter.say(&format!("Budget:   {}", range.label()))?;
        }
        prompter.say("")?;

        if !prompter.confirm("Create your wedding plan? (yes/no) [yes]: ")? {
            prompter.say("Onboarding cancelled.")?;
            return Ok(None);
        }

        let outcome = self.complete(storage, settings, &draft, now)?;
        prompter.say("")?;
        prompter.say("You're all set!")?;
        prompter.say(&format!(
            "  {} budget categories and {} timeline tasks created.",
            outcome.budget_categories_created, outcome.tasks_generated
        ))?;
        prompter.say("  Run 'wedplan status' to see your dashboard.")?;
        Ok(Some(outcome))
    }

    /// Ask the questions of one step. Returns false when input ran out.
    fn ask_step<R: BufRead, W: Write>(
        &self,
        step: OnboardingStep,
        draft: &mut OnboardingDraft,
        prompter: &mut Prompter<R, W>,
    ) -> WedplanResult<bool> {
        match step {
            OnboardingStep::Names => {
                let Some(first) = prompter.ask("Partner 1 name: ")? else {
                    return Ok(false);
                };
                let Some(second) = prompter.ask("Partner 2 name: ")? else {
                    return Ok(false);
                };
                draft.partner1_name = first;
                draft.partner2_name = second;
                if !draft.can_proceed(step) {
                    prompter.say("  Both names are needed.")?;
                }
            }
            OnboardingStep::Date => {
                let Some(answer) =
                    prompter.ask("Wedding date (YYYY-MM-DD, blank if not sure yet): ")?
                else {
                    return Ok(false);
                };
                if answer.is_empty() {
                    draft.date_undecided = true;
                } else {
                    match NaiveDate::parse_from_str(&answer, "%Y-%m-%d") {
                        Ok(date) => draft.wedding_date = Some(date),
                        Err(_) => prompter.say("  Use the format YYYY-MM-DD.")?,
                    }
                }
            }
            OnboardingStep::Location => {
                let Some(answer) = prompter.ask("City or region: ")? else {
                    return Ok(false);
                };
                draft.location = answer;
            }
            OnboardingStep::GuestCount => {
                for (i, range) in GuestRange::ALL.iter().enumerate() {
                    prompter.say(&format!("  {}. {}", i + 1, range.label()))?;
                }
                let Some(answer) = prompter.ask("Select guest count: ")? else {
                    return Ok(false);
                };
                draft.guest_range = choose(&answer, &GuestRange::ALL);
            }
            OnboardingStep::Style => {
                for (i, style) in WeddingStyle::all().iter().enumerate() {
                    prompter.say(&format!("  {:>2}. {}", i + 1, style))?;
                }
                let Some(answer) = prompter.ask("Select style: ")? else {
                    return Ok(false);
                };
                draft.style = choose(&answer, WeddingStyle::all());
            }
            OnboardingStep::Budget => {
                for (i, range) in BudgetRange::ALL.iter().enumerate() {
                    prompter.say(&format!("  {}. {}", i + 1, range.label()))?;
                }
                let Some(answer) = prompter.ask("Select budget: ")? else {
                    return Ok(false);
                };
                draft.budget_range = choose(&answer, &BudgetRange::ALL);
            }
        }
        Ok(true)
    }

    /// Store the wedding described by `draft` and mark setup as done
    pub fn complete(
        &self,
        storage: &Storage,
        settings: &mut Settings,
        draft: &OnboardingDraft,
        now: NaiveDateTime,
    ) -> WedplanResult<OnboardingOutcome> {
        let wedding = draft.to_wedding()?;
        let outcome = WeddingService::new(storage).complete_onboarding(wedding, now)?;

        settings.setup_completed = true;
        settings.save(&self.paths)?;
        Ok(outcome)
    }
}
