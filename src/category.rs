use std::fmt;
use std::rc::Rc;

use yew::Reducible;

/// Audience segment selecting which content bundle the statistics panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    Clinical,
    General,
    Athlete,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Clinical, Category::General, Category::Athlete];

    pub fn slug(self) -> &'static str {
        match self {
            Category::Clinical => "clinical",
            Category::General => "general",
            Category::Athlete => "athlete",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Clinical => "Clinical Population",
            Category::General => "Healthy Population",
            Category::Athlete => "Elite Performance",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Category::Clinical => "+",
            Category::General => "\u{25CE}",
            Category::Athlete => "\u{2581}\u{2583}\u{2586}",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Holds the selected category for the lifetime of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategorySelector {
    current: Category,
}

impl CategorySelector {
    pub fn new(initial: Category) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> Category {
        self.current
    }

    /// Overwrites the selection. Returns false when `category` was already selected.
    pub fn select(&mut self, category: Category) -> bool {
        if self.current == category {
            return false;
        }
        self.current = category;
        true
    }
}

pub struct Select(pub Category);

impl Reducible for CategorySelector {
    type Action = Select;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        if next.select(action.0) {
            log::debug!("Selected category {}", action.0);
            Rc::new(next)
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_clinical() {
        assert_eq!(CategorySelector::default().current(), Category::Clinical);
    }

    #[test]
    fn select_overwrites_and_reports_change() {
        let mut selector = CategorySelector::default();
        assert!(selector.select(Category::Athlete));
        assert_eq!(selector.current(), Category::Athlete);
        assert!(selector.select(Category::General));
        assert_eq!(selector.current(), Category::General);
    }

    #[test]
    fn reselecting_current_category_is_a_no_op() {
        let mut selector = CategorySelector::new(Category::General);
        assert!(!selector.select(Category::General));
        assert_eq!(selector.current(), Category::General);
    }

    #[test]
    fn reducer_keeps_the_same_state_on_reselect() {
        let state = Rc::new(CategorySelector::default());
        let next = state.clone().reduce(Select(Category::Clinical));
        assert!(Rc::ptr_eq(&state, &next));

        let switched = next.reduce(Select(Category::Athlete));
        assert_eq!(switched.current(), Category::Athlete);
    }
}
