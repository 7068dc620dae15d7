/// Bottom navigation destinations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Home,
    Explore,
    Cart,
    User,
}

impl Destination {
    pub fn all() -> [Destination; 4] {
        [
            Destination::Home,
            Destination::Explore,
            Destination::Cart,
            Destination::User,
        ]
    }

    /// Get the display title for this destination.
    pub fn title(&self) -> &'static str {
        match self {
            Destination::Home => "Home",
            Destination::Explore => "Explore",
            Destination::Cart => "Cart",
            Destination::User => "User",
        }
    }

    /// Shortcut key shown in the navigation bar
    pub fn key(&self) -> char {
        match self {
            Destination::Home => 'h',
            Destination::Explore => 's',
            Destination::Cart => 'c',
            Destination::User => 'u',
        }
    }

    pub fn from_key(key: char) -> Option<Self> {
        let key = key.to_ascii_lowercase();
        Self::all().into_iter().find(|d| d.key() == key)
    }

    /// Get the next destination (wrapping around)
    pub fn next(&self) -> Self {
        match self {
            Destination::Home => Destination::Explore,
            Destination::Explore => Destination::Cart,
            Destination::Cart => Destination::User,
            Destination::User => Destination::Home,
        }
    }

    /// Get the previous destination (wrapping around)
    pub fn prev(&self) -> Self {
        match self {
            Destination::Home => Destination::User,
            Destination::Explore => Destination::Home,
            Destination::Cart => Destination::Explore,
            Destination::User => Destination::Cart,
        }
    }
}

/// Which destination is showing. Starts at `Home`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    current: Destination,
}

impl Default for Navigator {
    fn default() -> Self {
        Self {
            current: Destination::Home,
        }
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Destination {
        self.current
    }

    /// Returns false when `dest` was already selected
    pub fn select(&mut self, dest: Destination) -> bool {
        if self.current == dest {
            return false;
        }
        self.current = dest;
        true
    }
}
