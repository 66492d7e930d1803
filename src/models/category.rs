//! Planning category shared by tasks, budget categories and vendors

labeled_enum! {
    /// What part of the wedding something belongs to
    pub enum Category {
        Venue => ("venue", "Venue"),
        Catering => ("catering", "Catering"),
        Photography => ("photography", "Photography"),
        Videography => ("videography", "Videography"),
        Music => ("music", "Music"),
        Flowers => ("flowers", "Flowers"),
        Attire => ("attire", "Attire"),
        Beauty => ("beauty", "Beauty"),
        Stationery => ("stationery", "Stationery"),
        Transportation => ("transportation", "Transportation"),
        Accommodation => ("accommodation", "Accommodation"),
        Decor => ("decor", "Decor"),
        Rentals => ("rentals", "Rentals"),
        Officiant => ("officiant", "Officiant"),
        Legal => ("legal", "Legal"),
        Honeymoon => ("honeymoon", "Honeymoon"),
        Gifts => ("gifts", "Gifts"),
        Other => ("other", "Other"),
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::Other
    }
}
