//! Clickable screen regions recorded during render.
//!
//! The TUI rebuilds the map every frame; mouse clicks are resolved against
//! the map from the most recent frame.

/// Rectangle in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Region {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Region {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.x
            && row >= self.y
            && u32::from(column) < u32::from(self.x) + u32::from(self.width)
            && u32::from(row) < u32::from(self.y) + u32::from(self.height)
    }
}

/// Toolbar and pane controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromeControl {
    Back,
    Forward,
    Refresh,
    AddressBar,
    ToggleView,
    ToggleConsole,
    ToggleFullscreen,
    CopySource,
    ClearConsole,
    TryAgain,
}

/// What a region activates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Chrome(ChromeControl),
    /// Index into the current document's click targets
    Content(usize),
    /// Scrollable console pane
    ConsolePane,
    /// Scrollable preview or code pane
    ContentPane,
}

#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<(Region, HitTarget)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn push(&mut self, region: Region, target: HitTarget) {
        if region.width > 0 && region.height > 0 {
            self.regions.push((region, target));
        }
    }

    /// Topmost target under a cell. Later regions are drawn over earlier ones.
    pub fn target_at(&self, column: u16, row: u16) -> Option<HitTarget> {
        self.regions
            .iter()
            .rev()
            .find(|(region, _)| region.contains(column, row))
            .map(|(_, target)| *target)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
