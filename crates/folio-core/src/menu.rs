//! Mobile navigation menu.
//!
//! States: `Closed` ⇄ `Open`. While open the page body must not scroll.
//! Any nav-link activation forces `Closed`.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    /// Inline `overflow` value for `<body>` in this state.
    pub fn body_overflow(self) -> &'static str {
        match self {
            MenuState::Open => "hidden",
            MenuState::Closed => "",
        }
    }
}

#[derive(Debug, Default)]
pub struct MenuController {
    state: MenuState,
}

impl MenuController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn open(&mut self) -> MenuState {
        self.set(MenuState::Open)
    }

    pub fn close(&mut self) -> MenuState {
        self.set(MenuState::Closed)
    }

    pub fn toggle(&mut self) -> MenuState {
        match self.state {
            MenuState::Open => self.close(),
            MenuState::Closed => self.open(),
        }
    }

    fn set(&mut self, state: MenuState) -> MenuState {
        if self.state != state {
            tracing::debug!(from = ?self.state, to = ?state, "menu transition");
        }
        self.state = state;
        state
    }
}
