#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionPhase {
    Expanded,
    Collapsed,
}

impl SectionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Expanded => "expanded",
            Self::Collapsed => "collapsed",
        }
    }
}

/// Open/closed state owned by a single collapsible section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionState {
    is_open: bool,
}

impl SectionState {
    pub const fn new(is_open: bool) -> Self {
        Self { is_open }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn phase(&self) -> SectionPhase {
        if self.is_open {
            SectionPhase::Expanded
        } else {
            SectionPhase::Collapsed
        }
    }

    /// Chevron rotation in degrees: pointing down while expanded, right while collapsed.
    pub fn indicator_rotation(&self) -> u16 {
        if self.is_open {
            90
        } else {
            0
        }
    }
}

impl Default for SectionState {
    fn default() -> Self {
        Self::new(true)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    About,
    Experience,
    Projects,
    Skills,
}

impl SectionKind {
    pub const ALL: [SectionKind; 4] = [
        SectionKind::About,
        SectionKind::Experience,
        SectionKind::Projects,
        SectionKind::Skills,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::About => "About Me",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
            Self::Skills => "Skills",
        }
    }

    pub fn anchor(&self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Skills => "skills",
        }
    }
}
