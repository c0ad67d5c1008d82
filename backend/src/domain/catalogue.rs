//! The fixed destination catalogue and its categories.
//!
//! Catalogue order is significant: search results and category listings
//! preserve it.

/// A destination page offered by the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Destination {
    display_name: &'static str,
    route_key: &'static str,
}

/// Every destination, in catalogue order.
pub const CATALOGUE: [Destination; 6] = [
    Destination::new("Inca Trail to Machu Picchu", "inca"),
    Destination::new("Annapurna Circuit", "annapurna"),
    Destination::new("Paris", "paris"),
    Destination::new("Rome", "rome"),
    Destination::new("Bali Island", "bali"),
    Destination::new("Santorini Island", "santorini"),
];

impl Destination {
    const fn new(display_name: &'static str, route_key: &'static str) -> Self {
        Self {
            display_name,
            route_key,
        }
    }

    /// Name shown on pages and stored in want-to-go lists.
    pub fn display_name(&self) -> &'static str {
        self.display_name
    }

    /// URL path segment identifying the destination page.
    pub fn route_key(&self) -> &'static str {
        self.route_key
    }

    /// Page path, e.g. `/paris`.
    pub fn path(&self) -> String {
        format!("/{}", self.route_key)
    }

    /// Look up a destination by route key.
    ///
    /// # Examples
    /// ```
    /// use wanderlist::domain::Destination;
    ///
    /// let bali = Destination::find("bali").unwrap();
    /// assert_eq!(bali.display_name(), "Bali Island");
    /// assert!(Destination::find("atlantis").is_none());
    /// ```
    pub fn find(route_key: &str) -> Option<Self> {
        CATALOGUE
            .iter()
            .copied()
            .find(|destination| destination.route_key == route_key)
    }

    /// Look up a destination by display name.
    pub fn find_by_name(display_name: &str) -> Option<Self> {
        CATALOGUE
            .iter()
            .copied()
            .find(|destination| destination.display_name == display_name)
    }
}

/// A themed grouping of destinations with its own page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Trekking routes.
    Hiking,
    /// City breaks.
    Cities,
    /// Island escapes.
    Islands,
}

impl Category {
    /// Every category, in navigation order.
    pub const ALL: [Self; 3] = [Self::Hiking, Self::Cities, Self::Islands];

    /// URL path segment for the category page.
    pub fn route_key(self) -> &'static str {
        match self {
            Self::Hiking => "hiking",
            Self::Cities => "cities",
            Self::Islands => "islands",
        }
    }

    /// Page heading.
    pub fn title(self) -> &'static str {
        match self {
            Self::Hiking => "Hiking",
            Self::Cities => "Cities",
            Self::Islands => "Islands",
        }
    }

    /// Destinations belonging to the category, in catalogue order.
    pub fn destinations(self) -> Vec<Destination> {
        let keys: &[&str] = match self {
            Self::Hiking => &["inca", "annapurna"],
            Self::Cities => &["paris", "rome"],
            Self::Islands => &["bali", "santorini"],
        };
        CATALOGUE
            .iter()
            .copied()
            .filter(|destination| keys.contains(&destination.route_key))
            .collect()
    }

    /// Look up a category by route key.
    pub fn find(route_key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.route_key() == route_key)
    }
}
