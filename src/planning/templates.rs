//! Built-in catalogue of wedding planning task templates
//!
//! Each template says how many months before the wedding the task should be
//! done. The catalogue is ordered from the earliest lead time to the latest.

use crate::models::{Category, Priority};

/// A generic planning to-do with a default lead time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskTemplate {
    pub title: &'static str,
    pub description: &'static str,
    pub category: Category,
    /// Whole months before the wedding date the task is due
    pub months_before: u32,
    pub priority: Priority,
    pub sub_tasks: &'static [&'static str],
}

const fn template(
    title: &'static str,
    description: &'static str,
    category: Category,
    months_before: u32,
    priority: Priority,
    sub_tasks: &'static [&'static str],
) -> TaskTemplate {
    TaskTemplate {
        title,
        description,
        category,
        months_before,
        priority,
        sub_tasks,
    }
}

use Category as C;
use Priority as P;

static CATALOGUE: [TaskTemplate; 31] = [
    // 12+ months
    template(
        "Set your budget",
        "Determine your total wedding budget and how it will be split",
        C::Other,
        12,
        P::High,
        &[
            "Discuss budget with both families",
            "Research average costs in your area",
            "Create budget spreadsheet",
            "Allocate amounts to each category",
        ],
    ),
    template(
        "Create your guest list",
        "Draft your initial guest list with both sides of the family",
        C::Other,
        12,
        P::High,
        &[
            "List immediate family",
            "List extended family",
            "List close friends",
            "List work colleagues",
            "Discuss plus-ones",
        ],
    ),
    template(
        "Research and book venue",
        "Find and secure your ceremony and reception venues",
        C::Venue,
        12,
        P::High,
        &[
            "Research venue options",
            "Schedule venue tours",
            "Compare pricing and packages",
            "Ask about availability",
            "Review contract and book",
            "Pay deposit",
        ],
    ),
    template(
        "Start vendor research",
        "Begin researching key vendors like photographers and caterers",
        C::Other,
        11,
        P::Medium,
        &[],
    ),
    // 10-11 months
    template(
        "Book photographer",
        "Research and hire your wedding photographer",
        C::Photography,
        10,
        P::High,
        &[
            "Browse portfolios online",
            "Schedule consultations",
            "Compare packages and pricing",
            "Check reviews and references",
            "Book and sign contract",
        ],
    ),
    template(
        "Book videographer",
        "Hire a videographer to capture your day",
        C::Videography,
        10,
        P::Medium,
        &[],
    ),
    template(
        "Choose wedding party",
        "Ask your bridesmaids, groomsmen, and other attendants",
        C::Other,
        10,
        P::Medium,
        &[],
    ),
    // 8-9 months
    template(
        "Book caterer",
        "Select and book your catering service",
        C::Catering,
        9,
        P::High,
        &[
            "Research catering options",
            "Schedule tastings",
            "Discuss dietary restrictions",
            "Review menu options",
            "Book and sign contract",
        ],
    ),
    template(
        "Book entertainment/DJ",
        "Hire your DJ, band, or other entertainment",
        C::Music,
        9,
        P::Medium,
        &[],
    ),
    template(
        "Start dress shopping",
        "Begin looking for your wedding dress",
        C::Attire,
        9,
        P::Medium,
        &[
            "Research dress styles",
            "Book bridal salon appointments",
            "Try on dresses",
            "Order dress (allow 4-6 months)",
        ],
    ),
    template(
        "Book florist",
        "Find and book your wedding florist",
        C::Flowers,
        8,
        P::Medium,
        &[],
    ),
    template(
        "Book officiant",
        "Find and book your wedding officiant",
        C::Officiant,
        8,
        P::High,
        &[],
    ),
    // 6-7 months
    template(
        "Order invitations",
        "Design and order your wedding invitations",
        C::Stationery,
        6,
        P::Medium,
        &[
            "Choose invitation style",
            "Finalize wording",
            "Order invitations",
            "Order thank you cards",
        ],
    ),
    template(
        "Book hair and makeup",
        "Find and book your beauty team",
        C::Beauty,
        6,
        P::Medium,
        &[],
    ),
    template(
        "Plan honeymoon",
        "Research and book your honeymoon trip",
        C::Honeymoon,
        6,
        P::Medium,
        &[],
    ),
    template(
        "Register for gifts",
        "Create your wedding registry",
        C::Gifts,
        6,
        P::Low,
        &[],
    ),
    // 4-5 months
    template(
        "Book transportation",
        "Arrange transportation for the wedding day",
        C::Transportation,
        5,
        P::Low,
        &[],
    ),
    template(
        "Order wedding cake",
        "Choose and order your wedding cake",
        C::Catering,
        4,
        P::Medium,
        &[
            "Research bakeries",
            "Schedule cake tastings",
            "Choose design and flavors",
            "Place order",
        ],
    ),
    template(
        "Book rentals",
        "Reserve any additional rentals (tables, chairs, linens)",
        C::Rentals,
        4,
        P::Medium,
        &[],
    ),
    template(
        "Plan rehearsal dinner",
        "Organize the rehearsal dinner details",
        C::Other,
        4,
        P::Medium,
        &[],
    ),
    // 2-3 months
    template(
        "Send invitations",
        "Mail out your wedding invitations",
        C::Stationery,
        3,
        P::High,
        &[],
    ),
    template(
        "Finalize menu",
        "Confirm your catering menu selections",
        C::Catering,
        3,
        P::Medium,
        &[],
    ),
    template(
        "Schedule dress fittings",
        "Book your dress alteration appointments",
        C::Attire,
        3,
        P::Medium,
        &[],
    ),
    template(
        "Get marriage license",
        "Apply for your marriage license",
        C::Legal,
        2,
        P::High,
        &[],
    ),
    template(
        "Create seating chart",
        "Plan your reception seating arrangement",
        C::Other,
        2,
        P::Medium,
        &[],
    ),
    template(
        "Write vows",
        "Write your personal wedding vows",
        C::Other,
        2,
        P::Medium,
        &[],
    ),
    // Final month
    template(
        "Confirm all vendors",
        "Contact all vendors to confirm details",
        C::Other,
        1,
        P::High,
        &[
            "Confirm venue details",
            "Confirm catering final count",
            "Confirm photographer timeline",
            "Confirm florist delivery",
            "Confirm transportation pickup",
        ],
    ),
    template(
        "Final dress fitting",
        "Complete your final dress fitting",
        C::Attire,
        1,
        P::Medium,
        &[],
    ),
    template(
        "Hair and makeup trial",
        "Do a trial run of your wedding day look",
        C::Beauty,
        1,
        P::Medium,
        &[],
    ),
    template(
        "Create day-of timeline",
        "Plan out the schedule for your wedding day",
        C::Other,
        1,
        P::High,
        &[],
    ),
    template(
        "Prepare toasts",
        "Write or review speeches and toasts",
        C::Other,
        1,
        P::Low,
        &[],
    ),
];

/// The built-in template catalogue
pub fn catalogue() -> &'static [TaskTemplate] {
    &CATALOGUE
}

/// Look up a template by title, ignoring case
pub fn find(title: &str) -> Option<&'static TaskTemplate> {
    let title = title.trim();
    CATALOGUE.iter().find(|t| t.title.eq_ignore_ascii_case(title))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_size_and_order() {
        let templates = catalogue();
        assert_eq!(templates.len(), 31);
        assert!(templates
            .windows(2)
            .all(|w| w[0].months_before >= w[1].months_before));
        assert_eq!(templates[0].title, "Set your budget");
        assert_eq!(templates[30].title, "Prepare toasts");
    }

    #[test]
    fn test_titles_are_unique() {
        let templates = catalogue();
        for (i, t) in templates.iter().enumerate() {
            assert!(
                templates[i + 1..].iter().all(|o| o.title != t.title),
                "duplicate template {}",
                t.title
            );
        }
    }

    #[test]
    fn test_find() {
        let venue = find("research and book venue").unwrap();
        assert_eq!(venue.category, Category::Venue);
        assert_eq!(venue.months_before, 12);
        assert_eq!(venue.sub_tasks.len(), 6);
        assert!(find("Hire a llama").is_none());
    }
}
