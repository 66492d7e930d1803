//! Init command
//!
//! Runs onboarding either as an interactive wizard or, when any flag is
//! given or stdin is not a terminal, straight from command-line flags.

use std::io::{self, IsTerminal};

use clap::Args;

use crate::config::settings::Settings;
use crate::error::WedplanResult;
use crate::models::WeddingStyle;
use crate::onboarding::{BudgetRange, GuestRange, OnboardingDraft, OnboardingWizard, Prompter};
use crate::services::OnboardingOutcome;
use crate::storage::Storage;

use super::{now, parse_date};

/// Onboarding answers given as flags
#[derive(Args, Debug, Default)]
pub struct InitArgs {
    /// First partner's name
    #[arg(long)]
    pub partner1: Option<String>,

    /// Second partner's name
    #[arg(long)]
    pub partner2: Option<String>,

    /// Wedding date (YYYY-MM-DD)
    #[arg(long, conflicts_with = "date_undecided")]
    pub date: Option<String>,

    /// The date is not decided yet
    #[arg(long)]
    pub date_undecided: bool,

    /// City or region
    #[arg(long)]
    pub location: Option<String>,

    /// Guest count: intimate, small, medium, large, grand (or 50-300)
    #[arg(long)]
    pub guests: Option<GuestRange>,

    /// Wedding style (e.g. rustic, modern, garden)
    #[arg(long)]
    pub style: Option<WeddingStyle>,

    /// Budget: 10k, 25k, 50k, 75k, 100k or 150k
    #[arg(long)]
    pub budget: Option<BudgetRange>,
}

impl InitArgs {
    fn any_given(&self) -> bool {
        self.partner1.is_some()
            || self.partner2.is_some()
            || self.date.is_some()
            || self.date_undecided
            || self.location.is_some()
            || self.guests.is_some()
            || self.style.is_some()
            || self.budget.is_some()
    }

    fn into_draft(self) -> WedplanResult<OnboardingDraft> {
        Ok(OnboardingDraft {
            partner1_name: self.partner1.unwrap_or_default(),
            partner2_name: self.partner2.unwrap_or_default(),
            wedding_date: self.date.as_deref().map(parse_date).transpose()?,
            date_undecided: self.date_undecided,
            location: self.location.unwrap_or_default(),
            guest_range: self.guests,
            style: self.style,
            budget_range: self.budget,
        })
    }
}

/// Handle the init command
pub fn handle_init_command(
    storage: &Storage,
    settings: &mut Settings,
    args: InitArgs,
) -> WedplanResult<()> {
    let wizard = OnboardingWizard::new(storage.paths().clone());

    if let Some(wedding) = storage.wedding.get()? {
        if !settings.setup_completed {
            settings.setup_completed = true;
            settings.save(storage.paths())?;
        }
        println!("wedplan is already set up for {}.", wedding.couple());
        println!("Use 'wedplan wedding edit' to change the details.");
        return Ok(());
    }

    if args.any_given() || !io::stdin().is_terminal() {
        let draft = args.into_draft()?;
        let outcome = wizard.complete(storage, settings, &draft, now())?;
        print_outcome(&outcome);
        return Ok(());
    }

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    wizard.run(storage, settings, &mut prompter, now())?;
    Ok(())
}

fn print_outcome(outcome: &OnboardingOutcome) {
    println!("Created wedding plan for {}", outcome.wedding.couple());
    println!(
        "  {} budget categories and {} timeline tasks created.",
        outcome.budget_categories_created, outcome.tasks_generated
    );
    println!("Run 'wedplan status' to see your dashboard.");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::WedplanPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = WedplanPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn full_args() -> InitArgs {
        InitArgs {
            partner1: Some("Ava".into()),
            partner2: Some("Ben".into()),
            date: Some("2027-06-14".into()),
            location: Some("Napa, CA".into()),
            guests: Some(GuestRange::Medium),
            style: Some(WeddingStyle::Rustic),
            budget: Some(BudgetRange::Upto50k),
            ..Default::default()
        }
    }

    #[test]
    fn test_init_from_flags() {
        let (_temp, storage) = create_test_storage();
        let mut settings = Settings::default();

        handle_init_command(&storage, &mut settings, full_args()).unwrap();

        let wedding = storage.wedding.require().unwrap();
        assert_eq!(wedding.couple(), "Ava & Ben");
        assert_eq!(wedding.estimated_guests, Some(150));
        assert!(settings.setup_completed);
        assert!(!storage.budget_categories.get_all().unwrap().is_empty());
    }

    #[test]
    fn test_missing_flag_fails_its_gate() {
        let (_temp, storage) = create_test_storage();
        let mut settings = Settings::default();
        let args = InitArgs {
            location: None,
            ..full_args()
        };

        let err = handle_init_command(&storage, &mut settings, args).unwrap_err();
        assert!(err.to_string().contains("Step 3"));
        assert!(storage.wedding.get().unwrap().is_none());
        assert!(!settings.setup_completed);
    }

    #[test]
    fn test_second_init_is_a_no_op() {
        let (_temp, storage) = create_test_storage();
        let mut settings = Settings::default();
        handle_init_command(&storage, &mut settings, full_args()).unwrap();

        let args = InitArgs {
            partner1: Some("Cara".into()),
            ..full_args()
        };
        handle_init_command(&storage, &mut settings, args).unwrap();
        assert_eq!(storage.wedding.require().unwrap().partner1_name, "Ava");
    }
}
