use crate::domain::Category;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TabError {
    #[error("no tab panel named {0:?}")]
    UnknownPanel(String),
    #[error("no tabs to activate")]
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub name: String,
    pub visible: bool,
}

/// Navigation control that opens the panel with the same name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trigger {
    pub target: String,
    pub label: String,
    pub active: bool,
}

/// Panel visibility and active-trigger marking. Nothing here survives a restart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabController {
    panels: Vec<Panel>,
    triggers: Vec<Trigger>,
}

impl TabController {
    /// Tabs in the given order, all hidden and none active.
    pub fn new<'a, I>(tabs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let (panels, triggers) = tabs
            .into_iter()
            .map(|(name, label)| {
                (
                    Panel {
                        name: name.to_string(),
                        visible: false,
                    },
                    Trigger {
                        target: name.to_string(),
                        label: label.to_string(),
                        active: false,
                    },
                )
            })
            .unzip();

        Self { panels, triggers }
    }

    pub fn for_categories() -> Self {
        Self::new(Category::ALL.iter().map(|c| (c.as_str(), c.label())))
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn triggers(&self) -> &[Trigger] {
        &self.triggers
    }

    /// Hide every panel, clear every trigger, then show `name` and mark its trigger.
    ///
    /// An unknown name leaves the current state untouched.
    pub fn open(&mut self, name: &str) -> Result<(), TabError> {
        if !self.panels.iter().any(|p| p.name == name) {
            return Err(TabError::UnknownPanel(name.to_string()));
        }

        for panel in &mut self.panels {
            panel.visible = false;
        }
        for trigger in &mut self.triggers {
            trigger.active = false;
        }

        for panel in self.panels.iter_mut().filter(|p| p.name == name) {
            panel.visible = true;
        }
        for trigger in self.triggers.iter_mut().filter(|t| t.target == name) {
            trigger.active = true;
        }

        Ok(())
    }

    /// Same as pressing the first trigger.
    pub fn activate_first(&mut self) -> Result<(), TabError> {
        let first = self.triggers.first().ok_or(TabError::Empty)?.target.clone();
        self.open(&first)
    }

    pub fn active(&self) -> Option<&str> {
        self.triggers
            .iter()
            .find(|t| t.active)
            .map(|t| t.target.as_str())
    }

    pub fn active_index(&self) -> Option<usize> {
        self.triggers.iter().position(|t| t.active)
    }

    pub fn next(&mut self) -> Result<(), TabError> {
        let len = self.triggers.len();
        if len == 0 {
            return Err(TabError::Empty);
        }
        let index = self.active_index().map_or(0, |i| (i + 1) % len);
        let target = self.triggers[index].target.clone();
        self.open(&target)
    }

    pub fn previous(&mut self) -> Result<(), TabError> {
        let len = self.triggers.len();
        if len == 0 {
            return Err(TabError::Empty);
        }
        let index = self
            .active_index()
            .map_or(len - 1, |i| if i == 0 { len - 1 } else { i - 1 });
        let target = self.triggers[index].target.clone();
        self.open(&target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible(tabs: &TabController) -> Vec<&str> {
        tabs.panels()
            .iter()
            .filter(|p| p.visible)
            .map(|p| p.name.as_str())
            .collect()
    }

    fn active(tabs: &TabController) -> Vec<&str> {
        tabs.triggers()
            .iter()
            .filter(|t| t.active)
            .map(|t| t.target.as_str())
            .collect()
    }

    #[test]
    fn opening_a_tab_leaves_exactly_one_visible_and_active() -> Result<(), TabError> {
        let mut tabs = TabController::for_categories();
        assert!(visible(&tabs).is_empty());

        for name in ["episodes", "characters", "characters", "locations"] {
            tabs.open(name)?;
            assert_eq!(visible(&tabs), vec![name]);
            assert_eq!(active(&tabs), vec![name]);
        }
        Ok(())
    }

    #[test]
    fn unknown_tab_keeps_state() -> Result<(), TabError> {
        let mut tabs = TabController::for_categories();
        tabs.open("locations")?;

        assert_eq!(
            tabs.open("settings"),
            Err(TabError::UnknownPanel("settings".to_string()))
        );
        assert_eq!(tabs.active(), Some("locations"));
        assert!(tabs
            .panels()
            .iter()
            .any(|p| p.name == "locations" && p.visible));
        Ok(())
    }

    #[test]
    fn activate_first_and_cycle() -> Result<(), TabError> {
        let mut tabs = TabController::for_categories();
        tabs.activate_first()?;
        assert_eq!(tabs.active(), Some("characters"));

        tabs.previous()?;
        assert_eq!(tabs.active(), Some("episodes"));
        tabs.next()?;
        assert_eq!(tabs.active(), Some("characters"));
        tabs.next()?;
        assert_eq!(tabs.active_index(), Some(1));
        Ok(())
    }

    #[test]
    fn empty_controller_has_nothing_to_activate() {
        let mut tabs = TabController::default();
        assert_eq!(tabs.activate_first(), Err(TabError::Empty));
        assert_eq!(tabs.next(), Err(TabError::Empty));
    }
}
